use crate::application::AverageResult;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Response for `GET /numbers/{number_id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumbersResponse {
    pub window_prev_state: Vec<i64>,
    pub window_curr_state: Vec<i64>,
    pub numbers: Vec<i64>,
    #[serde(with = "rust_decimal::serde::float")]
    pub avg: Decimal,
}

impl From<AverageResult> for NumbersResponse {
    fn from(result: AverageResult) -> Self {
        NumbersResponse {
            window_prev_state: result.previous,
            window_curr_state: result.current,
            numbers: result.numbers,
            avg: result.average,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn up() -> Self {
        HealthResponse {
            status: "UP".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        ErrorResponse {
            error: error.into(),
        }
    }
}
