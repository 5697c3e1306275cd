use crate::enums::Sector;
use serde::{Deserialize, Serialize};

/// Value the backend uses to mark a sector as applicable to an order
pub const SECTOR_APPLICABLE: &str = "Sim";

/// Запрос поиска заказа (POST /pedido/consultar)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLookupRequest {
    #[serde(rename = "numeroPedido")]
    pub order_number: String,
}

/// Ответ поиска заказа
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLookupResponse {
    pub success: bool,

    #[serde(rename = "nomeCliente", default)]
    pub customer_name: String,

    /// One string flag per sector, sent inline with the other fields
    #[serde(flatten)]
    pub sectors: SectorFlags,
}

/// Per-sector "Sim"/"Não" flags exactly as the backend sends them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectorFlags {
    pub aramado: String,
    pub tubo: String,
    pub chapa: String,
    pub laser: String,
    pub solda: String,
    pub pintura: String,
    pub montagem: String,
    pub usinagem: String,
    pub dobra: String,
    pub estamparia: String,
    pub serralheria: String,
    pub marcenaria: String,
    pub embalagem: String,
    pub expedicao: String,
}

impl SectorFlags {
    fn raw(&self, sector: Sector) -> &str {
        match sector {
            Sector::Aramado => &self.aramado,
            Sector::Tubo => &self.tubo,
            Sector::Chapa => &self.chapa,
            Sector::Laser => &self.laser,
            Sector::Solda => &self.solda,
            Sector::Pintura => &self.pintura,
            Sector::Montagem => &self.montagem,
            Sector::Usinagem => &self.usinagem,
            Sector::Dobra => &self.dobra,
            Sector::Estamparia => &self.estamparia,
            Sector::Serralheria => &self.serralheria,
            Sector::Marcenaria => &self.marcenaria,
            Sector::Embalagem => &self.embalagem,
            Sector::Expedicao => &self.expedicao,
        }
    }

    fn raw_mut(&mut self, sector: Sector) -> &mut String {
        match sector {
            Sector::Aramado => &mut self.aramado,
            Sector::Tubo => &mut self.tubo,
            Sector::Chapa => &mut self.chapa,
            Sector::Laser => &mut self.laser,
            Sector::Solda => &mut self.solda,
            Sector::Pintura => &mut self.pintura,
            Sector::Montagem => &mut self.montagem,
            Sector::Usinagem => &mut self.usinagem,
            Sector::Dobra => &mut self.dobra,
            Sector::Estamparia => &mut self.estamparia,
            Sector::Serralheria => &mut self.serralheria,
            Sector::Marcenaria => &mut self.marcenaria,
            Sector::Embalagem => &mut self.embalagem,
            Sector::Expedicao => &mut self.expedicao,
        }
    }

    /// Only the exact "Sim" counts, anything else (empty, "Nao", "sim ") does not
    pub fn is_applicable(&self, sector: Sector) -> bool {
        self.raw(sector) == SECTOR_APPLICABLE
    }

    /// Build flags from the sectors that should read "Sim"
    pub fn from_applicable(sectors: &[Sector]) -> Self {
        let mut flags = Self::default();
        for sector in Sector::all() {
            *flags.raw_mut(sector) = if sectors.contains(&sector) {
                SECTOR_APPLICABLE.to_string()
            } else {
                "Não".to_string()
            };
        }
        flags
    }

    pub fn availability(&self) -> Vec<SectorAvailability> {
        Sector::all()
            .into_iter()
            .map(|sector| SectorAvailability {
                sector,
                available: self.is_applicable(sector),
            })
            .collect()
    }
}

/// Whether a sector can be picked for the current order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorAvailability {
    pub sector: Sector,
    pub available: bool,
}

/// Заказ, найденный на сервере
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub number: String,
    pub customer_name: String,
    /// All 14 sectors, in table order, with their availability
    pub sectors: Vec<SectorAvailability>,
}

impl Order {
    /// `None` when the backend reports the order as not found
    pub fn from_lookup(number: &str, response: &OrderLookupResponse) -> Option<Self> {
        if !response.success {
            return None;
        }
        Some(Self {
            number: number.to_string(),
            customer_name: response.customer_name.trim().to_string(),
            sectors: response.sectors.availability(),
        })
    }

    pub fn available_sectors(&self) -> Vec<Sector> {
        self.sectors
            .iter()
            .filter(|s| s.available)
            .map(|s| s.sector)
            .collect()
    }
}
