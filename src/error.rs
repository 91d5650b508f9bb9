use thiserror::Error;

/// Configuration errors using thiserror for structured error handling.
///
/// Runtime wizard operations never fail; only an invalid form declaration
/// can be rejected, and only when the caller asks for validation.

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Duplicate step identifier: {0}")]
    DuplicateStep(String),

    #[error("Initial step not present in step order: {0}")]
    UnknownInitialStep(String),
}
