use axum::Json;
use shared::HealthResponse;

pub async fn home() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}
