use serde::{Deserialize, Serialize};

pub const MIN_CODE_CHARS: usize = 20;

pub const CODE_TOO_SHORT: &str = "Code too short (min 20 chars)";
pub const SAMPLE_INTERPRETATION: &str = "Sample response";
pub const HEALTH_MESSAGE: &str = "Smart Contract Risk Prediction API is running";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeInput {
    pub code: String,
    #[serde(default)]
    pub contract_name: Option<String>,
}

impl CodeInput {
    /// Length in characters, not bytes.
    pub fn code_len(&self) -> usize {
        self.code.chars().count()
    }

    pub fn is_long_enough(&self) -> bool {
        self.code_len() >= MIN_CODE_CHARS
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskResponse {
    pub risk_score: f64,
    pub interpretation: String,
}

impl RiskResponse {
    pub fn sample(risk_score: f64) -> Self {
        Self {
            risk_score,
            interpretation: SAMPLE_INTERPRETATION.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub message: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            message: HEALTH_MESSAGE.to_string(),
        }
    }
}

/// Body of every error response: `{"detail": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}
