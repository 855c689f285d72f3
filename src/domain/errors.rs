//! Domain errors. Used by ports, adapters and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Filesystem create/read/write failure, including non-UTF-8 content.
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("JSON error: {0}")]
    Json(String),

    /// No async runtime available to schedule I/O on.
    #[error("Runtime error: {0}")]
    Runtime(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Media upload failed: {0}")]
    Media(String),
}

/// An error kind was asked for a constructor it does not declare.
///
/// This is a programming defect, not a runtime condition. `throws` never
/// returns it; it panics with it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationFault {
    #[error("error kind `{kind}` declares no message-accepting constructor")]
    MissingMessageConstructor { kind: &'static str },
}
