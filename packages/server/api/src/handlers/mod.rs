use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use shared::ErrorBody;

pub mod extract;
pub mod health;
pub mod predict;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health::home))
        .route("/predict", post(predict::predict))
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unprocessable(String),
    /// Body could not be read at all; keeps the status of the rejection (413
    /// when over the body limit).
    #[error("{1}")]
    Rejected(StatusCode, String),
}

impl ServiceError {
    /// Flattens any processing failure into a plain 400, keeping the message.
    /// A `Validation` error loses its 422 here.
    pub fn into_client_error(self) -> Self {
        match self {
            ServiceError::BadRequest(_) => self,
            other => ServiceError::BadRequest(other.to_string()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServiceError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::Rejected(status, _) => *status,
        }
    }
}

impl From<anyhow::Error> for ServiceError {
    fn from(e: anyhow::Error) -> Self {
        ServiceError::BadRequest(e.to_string())
    }
}

impl From<BytesRejection> for ServiceError {
    fn from(rejection: BytesRejection) -> Self {
        ServiceError::Rejected(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            detail: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_downgraded_to_bad_request() {
        let err = ServiceError::Validation("Code too short (min 20 chars)".into());
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let err = err.into_client_error();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Code too short (min 20 chars)");
    }

    #[test]
    fn test_anyhow_maps_to_bad_request() {
        let err: ServiceError = anyhow::anyhow!("predictor offline").into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "predictor offline");
    }

    #[test]
    fn test_rejected_keeps_status() {
        let err = ServiceError::Rejected(StatusCode::PAYLOAD_TOO_LARGE, "too big".into());
        assert_eq!(err.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(err.to_string(), "too big");
    }
}
