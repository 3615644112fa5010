//! Request evaluation: validate, run the engine, derive the tax credit.
//!
//! Each call is independent; nothing is shared between requests.

use chrono::Utc;
use uuid::Uuid;

use rngci_core::ValidationError;
use rngci_credits::calculate_tax_credit;
use rngci_pathway::validation::FieldChecker;

use crate::app::dto::{CalculateRequest, CalculateResponse};

pub fn validate_request(request: &CalculateRequest) -> Result<(), ValidationError> {
    let mut errors = match rngci_pathway::validate(&request.inputs) {
        Ok(()) => ValidationError::new(),
        Err(e) => e,
    };

    if let Some(produced) = request.tax_credit.as_ref().and_then(|t| t.biomethane_produced) {
        FieldChecker::new("taxCredit", &mut errors).non_negative("biomethaneProduced", produced);
    }

    errors.into_result()
}

pub fn evaluate(request: &CalculateRequest) -> Result<CalculateResponse, ValidationError> {
    validate_request(request)?;

    let results = rngci_emissions::calculate(&request.inputs);

    let tax_credit = request.tax_credit.as_ref().map(|t| {
        let produced = t
            .biomethane_produced
            .unwrap_or(request.inputs.fuel_produced.biomethane_injected);
        calculate_tax_credit(&results, produced, t.policy)
    });

    Ok(CalculateResponse {
        calculation_id: Uuid::now_v7(),
        calculated_at: Utc::now(),
        results,
        tax_credit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::dto::TaxCreditRequest;
    use rngci_credits::{FuelType, TaxCreditPolicy};

    fn request() -> CalculateRequest {
        let mut request = CalculateRequest::default();
        request.inputs.livestock_data.number_of_animals = 1000.0;
        request.inputs.livestock_data.reporting_days = 31.0;
        request.inputs.livestock_data.fraction_vs = 0.9;
        request.inputs.fuel_produced.biomethane_injected = 800.0;
        request
    }

    #[test]
    fn tax_credit_is_omitted_unless_requested() {
        let response = evaluate(&request()).unwrap();
        assert!(response.tax_credit.is_none());
    }

    #[test]
    fn biomethane_produced_defaults_to_injected() {
        let mut req = request();
        req.tax_credit = Some(TaxCreditRequest {
            policy: TaxCreditPolicy {
                fuel_type: FuelType::Standard,
                meets_wage_requirements: true,
            },
            biomethane_produced: None,
        });
        let response = evaluate(&req).unwrap();
        let credit = response.tax_credit.unwrap();
        assert!((credit.total_credit - credit.credit_per_unit * 800.0).abs() < 1e-9);
    }

    #[test]
    fn negative_biomethane_produced_is_rejected() {
        let mut req = request();
        req.tax_credit = Some(TaxCreditRequest {
            policy: TaxCreditPolicy::default(),
            biomethane_produced: Some(-1.0),
        });
        let err = evaluate(&req).unwrap_err();
        assert_eq!(err.fields().collect::<Vec<_>>(), vec!["taxCredit.biomethaneProduced"]);
    }

    #[test]
    fn degenerate_magnitudes_are_rejected_before_calculation() {
        let mut req = request();
        req.inputs.livestock_data.number_of_animals = 2500.0;
        req.inputs.fuel_produced.biomethane_injected = 1e-320;
        let err = evaluate(&req).unwrap_err();
        assert_eq!(err.fields().collect::<Vec<_>>(), vec!["fuelProduced.biomethaneInjected"]);

        let mut req = request();
        req.inputs.livestock_data.number_of_animals = 1e308;
        let err = evaluate(&req).unwrap_err();
        assert_eq!(err.fields().collect::<Vec<_>>(), vec!["livestockData.numberOfAnimals"]);
    }

    #[test]
    fn pathway_and_credit_issues_are_reported_together() {
        let mut req = request();
        req.inputs.livestock_data.reporting_days = 0.0;
        req.tax_credit = Some(TaxCreditRequest {
            policy: TaxCreditPolicy::default(),
            biomethane_produced: Some(f64::INFINITY),
        });
        let err = evaluate(&req).unwrap_err();
        assert_eq!(
            err.fields().collect::<Vec<_>>(),
            vec!["livestockData.reportingDays", "taxCredit.biomethaneProduced"]
        );
    }
}
