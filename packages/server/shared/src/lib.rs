pub mod dto;

pub use dto::{CodeInput, ErrorBody, HealthResponse, RiskResponse};
