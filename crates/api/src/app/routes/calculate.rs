use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::app::{dto, errors, services};

pub async fn calculate(payload: Result<Json<dto::CalculateRequest>, JsonRejection>) -> Response {
    let Json(request) = match payload {
        Ok(p) => p,
        Err(rejection) => {
            tracing::warn!(reason = %rejection.body_text(), "rejected malformed calculation request");
            return errors::json_rejection_to_response(rejection);
        }
    };

    match services::evaluate(&request) {
        Ok(response) => {
            tracing::info!(
                calculation_id = %response.calculation_id,
                facility = %request.inputs.facility_info.facility_name,
                total_ci = response.results.total_carbon_intensity,
                "calculation completed"
            );
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => {
            tracing::warn!(fields = %err, "calculation request failed validation");
            errors::validation_error_to_response(err)
        }
    }
}
