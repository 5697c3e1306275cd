use serde::{Deserialize, Serialize};

/// Code the backend expects for a sector name it does not know
pub const UNKNOWN_SECTOR_CODE: &str = "9999";

/// Производственные участки (setores)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sector {
    Aramado,
    Tubo,
    Chapa,
    Laser,
    Solda,
    Pintura,
    Montagem,
    Usinagem,
    Dobra,
    Estamparia,
    Serralheria,
    Marcenaria,
    Embalagem,
    Expedicao,
}

impl Sector {
    /// Fixed 4-digit code used in backend filters
    pub fn code(&self) -> &'static str {
        match self {
            Sector::Aramado => "0001",
            Sector::Tubo => "0002",
            Sector::Chapa => "0003",
            Sector::Laser => "0004",
            Sector::Solda => "0005",
            Sector::Pintura => "0006",
            Sector::Montagem => "0007",
            Sector::Usinagem => "0008",
            Sector::Dobra => "0009",
            Sector::Estamparia => "0010",
            Sector::Serralheria => "0011",
            Sector::Marcenaria => "0012",
            Sector::Embalagem => "0013",
            Sector::Expedicao => "0014",
        }
    }

    /// Human-readable name shown on the sector screen
    pub fn display_name(&self) -> &'static str {
        match self {
            Sector::Aramado => "Aramado",
            Sector::Tubo => "Tubo",
            Sector::Chapa => "Chapa",
            Sector::Laser => "Laser",
            Sector::Solda => "Solda",
            Sector::Pintura => "Pintura",
            Sector::Montagem => "Montagem",
            Sector::Usinagem => "Usinagem",
            Sector::Dobra => "Dobra",
            Sector::Estamparia => "Estamparia",
            Sector::Serralheria => "Serralheria",
            Sector::Marcenaria => "Marcenaria",
            Sector::Embalagem => "Embalagem",
            Sector::Expedicao => "Expedição",
        }
    }

    /// All sectors in the order the backend lists them
    pub fn all() -> Vec<Sector> {
        vec![
            Sector::Aramado,
            Sector::Tubo,
            Sector::Chapa,
            Sector::Laser,
            Sector::Solda,
            Sector::Pintura,
            Sector::Montagem,
            Sector::Usinagem,
            Sector::Dobra,
            Sector::Estamparia,
            Sector::Serralheria,
            Sector::Marcenaria,
            Sector::Embalagem,
            Sector::Expedicao,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }

    /// Lookup by display name, ignoring case, surrounding spaces and the
    /// accents the keyboard on the device may or may not produce
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = fold_name(name);
        Self::all()
            .into_iter()
            .find(|s| fold_name(s.display_name()) == wanted)
    }
}

impl std::fmt::Display for Sector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

fn fold_name(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' => 'a',
            'é' | 'ê' => 'e',
            'í' => 'i',
            'ó' | 'ô' | 'õ' => 'o',
            'ú' | 'ü' => 'u',
            'ç' => 'c',
            other => other,
        })
        .collect()
}

fn is_four_digit_code(value: &str) -> bool {
    value.len() == 4 && value.chars().all(|c| c.is_ascii_digit())
}

/// Resolve a sector name to the code sent to the backend.
///
/// - known name -> its code
/// - any 4-digit string -> returned as is (already a code)
/// - anything else -> [`UNKNOWN_SECTOR_CODE`]
pub fn code_for(name: &str) -> String {
    if let Some(sector) = Sector::from_name(name) {
        return sector.code().to_string();
    }
    if is_four_digit_code(name) {
        return name.to_string();
    }
    UNKNOWN_SECTOR_CODE.to_string()
}

/// Format sector names as the `setores` filter: `'0001','0004'`.
/// Codes keep the iteration order of the input.
pub fn format_sectors<I, S>(names: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .map(|name| format!("'{}'", code_for(name.as_ref())))
        .collect::<Vec<_>>()
        .join(",")
}
