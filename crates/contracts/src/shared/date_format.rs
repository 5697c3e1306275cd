/// Utilities for the date strings the picking backend sends
///
/// The backend encodes dates as `YYYYMMDD`; `"00000000"` means "not set".
use chrono::NaiveDate;

/// Marker displayed for dates the backend has not filled in
pub const UNSET_DATE_LABEL: &str = "Não definida";

const UNSET_DATE: &str = "00000000";

/// `true` when the backend value means "no date"
pub fn is_unset(raw: &str) -> bool {
    let raw = raw.trim();
    raw.is_empty() || raw == UNSET_DATE
}

/// Parse a `YYYYMMDD` backend date
pub fn parse_backend_date(raw: &str) -> Option<NaiveDate> {
    if is_unset(raw) {
        return None;
    }
    NaiveDate::parse_from_str(raw.trim(), "%Y%m%d").ok()
}

/// Format `YYYYMMDD` to DD/MM/YYYY
/// Example: "20250115" -> "15/01/2025", "00000000" -> "Não definida"
pub fn format_backend_date(raw: &str) -> String {
    if is_unset(raw) {
        return UNSET_DATE_LABEL.to_string();
    }
    match parse_backend_date(raw) {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => raw.to_string(),
    }
}
