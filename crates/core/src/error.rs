//! Centralized error types for the strictkit workspace.

use thiserror::Error;

/// Top-level error enum. The [`Outcome`](crate::Outcome) factories are total
/// and never produce one; these cover the runner and the CLI.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StrictkitError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Timed out after {0} ms")]
    Timeout(u64),

    #[error("Operation failed: {0}")]
    Operation(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StrictkitResult<T> = Result<T, StrictkitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_display_includes_millis() {
        let e = StrictkitError::Timeout(250);
        assert_eq!(e.to_string(), "Timed out after 250 ms");
    }

    #[test]
    fn operation_display_includes_message() {
        let e = StrictkitError::Operation("connection reset".into());
        assert!(e.to_string().contains("connection reset"));
    }

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let e: StrictkitError = io_err.into();
        assert!(e.to_string().starts_with("I/O error"));
        assert!(e.to_string().contains("pipe closed"));
    }
}
