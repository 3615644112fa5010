//! Fixed lookup tables keyed by the selector enums.
//!
//! Each table row is `(key, value)` and rows are stored in enum declaration
//! order, so a lookup is a direct index by discriminant. Adding a category means
//! adding a variant and a row; no calculator changes.

use serde::{Deserialize, Serialize};

/// Digester / capture technology installed at the facility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DigesterType {
    #[default]
    #[serde(rename = "Covered Lagoon")]
    CoveredLagoon,
    #[serde(rename = "Enclosed Vessel")]
    EnclosedVessel,
}

/// Livestock category supplying the manure feedstock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LivestockCategory {
    #[default]
    Dairy,
    Swine,
}

/// Manure handling in the no-project baseline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ManureSystem {
    #[default]
    #[serde(rename = "Open Lagoon")]
    OpenLagoon,
    #[serde(rename = "Storage Pit/Basin")]
    StoragePitBasin,
    #[serde(rename = "Daily Spread/Dry Lot")]
    DailySpreadDryLot,
}

/// Per-category manure characteristics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LivestockConstants {
    /// Volatile-solids excretion rate
    /// unit: kg VS / head / day
    pub excretion_rate: f64,

    /// Maximum methane-producing potential of the volatile solids
    /// unit: m³ CH4 / kg VS
    pub bo: f64,
}

/// Methane collection efficiency by digester type (fraction).
pub const DIGESTER_TABLE: [(DigesterType, f64); 2] = [
    (DigesterType::CoveredLagoon, 0.95),
    (DigesterType::EnclosedVessel, 0.98),
];

pub const LIVESTOCK_TABLE: [(LivestockCategory, LivestockConstants); 2] = [
    (
        LivestockCategory::Dairy,
        LivestockConstants {
            excretion_rate: 8.4,
            bo: 0.24,
        },
    ),
    (
        LivestockCategory::Swine,
        LivestockConstants {
            excretion_rate: 0.5,
            bo: 0.48,
        },
    ),
];

/// Methane conversion factor by baseline manure system, in [0, 1].
pub const MANURE_SYSTEM_TABLE: [(ManureSystem, f64); 3] = [
    (ManureSystem::OpenLagoon, 0.75),
    (ManureSystem::StoragePitBasin, 0.35),
    (ManureSystem::DailySpreadDryLot, 0.01),
];

impl DigesterType {
    pub const fn collection_efficiency(self) -> f64 {
        DIGESTER_TABLE[self as usize].1
    }
}

impl LivestockCategory {
    pub const fn constants(self) -> LivestockConstants {
        LIVESTOCK_TABLE[self as usize].1
    }
}

impl ManureSystem {
    pub const fn methane_conversion_factor(self) -> f64 {
        MANURE_SYSTEM_TABLE[self as usize].1
    }
}
