use thiserror::Error;

/// Failures of the store adapter and the collection repository.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("store error: {0}")]
    Store(String),
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for ServiceError {
    fn from(e: serde_json::Error) -> Self { Self::Serialization(e.to_string()) }
}
