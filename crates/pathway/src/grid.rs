//! Regional electricity grid mixes.

use serde::Serialize;

use rngci_core::{DomainError, DomainResult};

/// A regional grid-mix entry (eGRID-style subregion).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridRegion {
    pub code: &'static str,
    pub name: &'static str,
    /// unit: g CO2e/kWh
    pub ef_elec: f64,
}

pub const GRID_REGIONS: &[GridRegion] = &[
    GridRegion {
        code: "CAMX",
        name: "WECC California",
        ef_elec: 241.2,
    },
    GridRegion {
        code: "ERCT",
        name: "ERCOT All",
        ef_elec: 369.0,
    },
    GridRegion {
        code: "MROW",
        name: "MRO West",
        ef_elec: 424.6,
    },
    GridRegion {
        code: "NEWE",
        name: "NPCC New England",
        ef_elec: 243.1,
    },
    GridRegion {
        code: "NWPP",
        name: "WECC Northwest",
        ef_elec: 288.6,
    },
    GridRegion {
        code: "NYUP",
        name: "NPCC Upstate NY",
        ef_elec: 106.1,
    },
    GridRegion {
        code: "RFCE",
        name: "RFC East",
        ef_elec: 272.2,
    },
    GridRegion {
        code: "RFCW",
        name: "RFC West",
        ef_elec: 453.6,
    },
    GridRegion {
        code: "SRMW",
        name: "SERC Midwest",
        ef_elec: 671.3,
    },
    GridRegion {
        code: "US",
        name: "U.S. Average",
        ef_elec: 373.3,
    },
];

/// Look up a grid region by code (ASCII case-insensitive).
pub fn grid_region(code: &str) -> DomainResult<&'static GridRegion> {
    let code = code.trim();
    GRID_REGIONS
        .iter()
        .find(|r| r.code.eq_ignore_ascii_case(code))
        .ok_or_else(|| DomainError::unknown_grid_region(code))
}
