#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("Threshold variable {key} is not set")]
    MissingThreshold { key: String },

    #[error("Threshold variable {key}={value:?} is not a valid integer: {reason}")]
    InvalidThreshold {
        key: String,
        value: String,
        reason: String,
    },

    #[error("Invalid inventory seed: {0}")]
    InvalidSeed(String),
}

impl CoreError {
    /// True for errors caused by threshold configuration, as opposed to
    /// startup failures.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::MissingThreshold { .. } | Self::InvalidThreshold { .. }
        )
    }
}
