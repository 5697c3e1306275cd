use contracts::domain::a001_order::SectorAvailability;
use contracts::enums::Sector;
use std::collections::BTreeSet;

/// Выбор участков для заказа
#[derive(Debug, Clone)]
pub struct SectorSelectionScreen {
    pub order_number: String,
    pub customer_name: String,
    sectors: Vec<SectorAvailability>,
    selected: BTreeSet<Sector>,
    pub error: Option<String>,
}

impl SectorSelectionScreen {
    pub fn new(order_number: &str, customer_name: &str, sectors: Vec<SectorAvailability>) -> Self {
        Self {
            order_number: order_number.to_string(),
            customer_name: customer_name.to_string(),
            sectors,
            selected: BTreeSet::new(),
            error: None,
        }
    }

    pub fn sectors(&self) -> &[SectorAvailability] {
        &self.sectors
    }

    pub fn is_enabled(&self, sector: Sector) -> bool {
        self.sectors
            .iter()
            .any(|s| s.sector == sector && s.available)
    }

    pub fn is_selected(&self, sector: Sector) -> bool {
        self.selected.contains(&sector)
    }

    /// Sectors the backend did not flag for this order cannot be selected
    pub fn toggle(&mut self, sector: Sector) -> bool {
        if !self.is_enabled(sector) {
            return false;
        }
        if !self.selected.remove(&sector) {
            self.selected.insert(sector);
        }
        self.error = None;
        true
    }

    pub fn select_all_enabled(&mut self) {
        let enabled: Vec<Sector> = self
            .sectors
            .iter()
            .filter(|s| s.available)
            .map(|s| s.sector)
            .collect();
        self.selected.extend(enabled);
    }

    /// Selected sectors in table order, `None` when nothing is selected
    pub fn confirm(&mut self) -> Option<Vec<Sector>> {
        if self.selected.is_empty() {
            self.error = Some("Selecione ao menos um setor".to_string());
            return None;
        }
        Some(self.selected.iter().copied().collect())
    }
}
