use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The completion provider could not be reached, answered with a non-2xx
    /// status, or returned no choices.
    #[error("Generation failed: {0}")]
    GenerationFailed(String),

    /// The provider's reply was not a JSON object.
    #[error("Interpretation failed: {0}")]
    InterpretationFailed(String),

    #[error("Empty content in completion envelope")]
    EmptyContent,

    /// A data-classified statement failed the read-only check.
    #[error("Unsafe statement rejected: {0}")]
    UnsafeStatement(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::StorageError(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn generation(msg: impl Into<String>) -> Self {
        Self::GenerationFailed(msg.into())
    }

    pub fn interpretation(msg: impl Into<String>) -> Self {
        Self::InterpretationFailed(msg.into())
    }

    pub fn unsafe_statement(msg: impl Into<String>) -> Self {
        Self::UnsafeStatement(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
