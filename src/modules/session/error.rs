use crate::config::ConfigError;
use crate::modules::generation::GenerationError;
use crate::modules::memory::MemoryStoreError;
use crate::modules::prompt::ComposeError;
use crate::modules::retrieval::IngestionError;
use thiserror::Error;

pub const NOT_READY_MESSAGE: &str = "Please upload and index a document first";

/// Every failure ends the current turn; nothing is retried automatically.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Ingestion error: {0}")]
    Ingestion(#[from] IngestionError),

    #[error("{}", NOT_READY_MESSAGE)]
    NotReady,

    #[error("Generation failed: {0}")]
    Generation(#[from] GenerationError),

    #[error("Failed to load conversation record: {0}")]
    Load(MemoryStoreError),

    #[error("Failed to persist conversation: {0}")]
    Persistence(#[from] MemoryStoreError),

    #[error("Input is empty")]
    EmptyInput,
}

impl From<ConfigError> for SessionError {
    fn from(error: ConfigError) -> Self {
        SessionError::Configuration(error.to_string())
    }
}

impl From<ComposeError> for SessionError {
    fn from(error: ComposeError) -> Self {
        SessionError::Configuration(error.0)
    }
}
