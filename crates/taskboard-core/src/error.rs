//! Error types for Taskboard

use thiserror::Error;

/// Result type alias using Taskboard's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Taskboard error types with helpful messages
///
/// Form validation never produces an `Error`: the validator returns a
/// boolean and the intake layer returns an `Option`, so rejection is a
/// normal outcome rather than a fault. These variants cover the outer
/// surfaces (config loading, batch input files).
#[derive(Error, Debug)]
pub enum Error {
    // Input errors (E001-E099)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Config errors (E100-E199)
    #[error("Configuration error: {0}")]
    Config(String),

    // Generic errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Get error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "E001",
            Self::Config(_) => "E100",
            Self::Io(_) => "E900",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(Error::InvalidInput("people".into()).code(), "E001");
        assert_eq!(Error::Config("bad toml".into()).code(), "E100");
        let io = Error::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.code(), "E900");
    }

    #[test]
    fn test_error_display_includes_detail() {
        let err = Error::Config("missing field `form`".to_string());
        assert!(err.to_string().contains("missing field `form`"));
    }
}
