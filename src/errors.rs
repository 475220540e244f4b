use thiserror::Error;

/// Error type shared by the validation, configuration, and service layers.
///
/// The financial calculator itself never fails; see [`crate::finance`].
#[derive(Debug, Error)]
pub enum ProfitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Storage error: {0}")]
    Storage(String),
}
