use crate::handlers::extract::JsonBody;
use crate::handlers::ServiceError;
use crate::state::AppState;
use axum::{extract::State, Json};
use shared::dto::CODE_TOO_SHORT;
use shared::{CodeInput, RiskResponse};

pub async fn predict(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CodeInput>,
) -> Result<Json<RiskResponse>, ServiceError> {
    // Decoding failures are rejected by the extractor, outside the catch-all below.
    evaluate(&state, &input)
        .map(Json)
        .map_err(ServiceError::into_client_error)
}

fn evaluate(state: &AppState, input: &CodeInput) -> Result<RiskResponse, ServiceError> {
    if !input.is_long_enough() {
        tracing::info!(
            code_len = input.code_len(),
            contract_name = input.contract_name.as_deref().unwrap_or("-"),
            "Rejected prediction request: code too short"
        );
        return Err(ServiceError::Validation(CODE_TOO_SHORT.to_string()));
    }

    let risk_score = state.scorer.score(&input.code).map_err(|e| {
        tracing::warn!("Risk scorer failed: {:#}", e);
        ServiceError::from(e)
    })?;

    tracing::debug!(
        risk_score,
        contract_name = input.contract_name.as_deref().unwrap_or("-"),
        "Scored contract"
    );

    Ok(RiskResponse::sample(risk_score))
}
