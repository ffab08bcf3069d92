//! CLI-specific error types
//!
//! Every CLI error is fatal: it is logged, printed and the process exits 1.

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be resolved
    #[error("Configuration error: {0}")]
    Config(String),

    /// Runtime could not be created or the server could not start
    #[error("Startup failed: {0}")]
    Startup(String),
}

impl CliError {
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Config(_) => "CLI_CONFIG_ERROR",
            CliError::Startup(_) => "CLI_STARTUP_FAILED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_code() {
        let err = CliError::Config("PORT is not a number".to_string());
        assert_eq!(err.to_string(), "Configuration error: PORT is not a number");
        assert_eq!(err.code(), "CLI_CONFIG_ERROR");
        assert_eq!(CliError::Startup("x".into()).code(), "CLI_STARTUP_FAILED");
    }
}
