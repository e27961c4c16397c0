//! Response envelope for the optimizer endpoint.
//!
//! Field names are part of the wire contract:
//! `{ "result": [..] | null, "status": "Success" | "Error", "error": ".." | null }`.

use serde::{Deserialize, Serialize};

/// Outcome marker carried in every envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseStatus {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizerResponse {
    pub result: Option<Vec<String>>,
    pub status: ResponseStatus,
    pub error: Option<String>,
}

impl OptimizerResponse {
    pub fn success(result: Vec<String>) -> Self {
        Self {
            result: Some(result),
            status: ResponseStatus::Success,
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            result: None,
            status: ResponseStatus::Error,
            error: Some(message.into()),
        }
    }
}
