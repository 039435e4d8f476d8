//! Error handling for the tutor CLI

use thiserror::Error;

use crate::config::ConfigError;

/// CLI-specific error types
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Tutor core error: {0}")]
    Core(#[from] tutor_core::TutorError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid input: {0}")]
    Input(String),

    #[error("Unexpected end of input")]
    EndOfInput,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sources_convert_into_cli_error() {
        let core: CliError = tutor_core::TutorError::invalid_range(10, 1).into();
        assert!(matches!(core, CliError::Core(_)));

        let config: CliError = ConfigError::Serialization("bad".to_string()).into();
        assert_eq!(
            config.to_string(),
            "Configuration error: Serialization error: bad"
        );

        let io: CliError = std::io::Error::from(std::io::ErrorKind::UnexpectedEof).into();
        assert!(matches!(io, CliError::Io(_)));
    }
}
