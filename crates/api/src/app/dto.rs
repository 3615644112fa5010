use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use rngci_credits::{TaxCreditPolicy, TaxCreditResult};
use rngci_emissions::CalculationResults;
use rngci_pathway::{GridRegion, PathwayInputs};

// -------------------------
// Request DTOs
// -------------------------

/// `POST /calculate` body: the six pathway records plus optional credit policy.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateRequest {
    #[serde(flatten)]
    pub inputs: PathwayInputs,
    pub tax_credit: Option<TaxCreditRequest>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxCreditRequest {
    #[serde(flatten)]
    pub policy: TaxCreditPolicy,
    /// MMBtu; defaults to `fuelProduced.biomethaneInjected`.
    pub biomethane_produced: Option<f64>,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateResponse {
    pub calculation_id: Uuid,
    pub calculated_at: DateTime<Utc>,
    pub results: CalculationResults,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_credit: Option<TaxCreditResult>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GridRegionList {
    pub items: &'static [GridRegion],
}
