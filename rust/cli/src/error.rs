//! Error type shared by the command handlers.

use std::fmt;

use holdem_ai::AiError;
use holdem_engine::errors::GameError;

use crate::config::ConfigError;

#[derive(Debug)]
pub enum CliError {
    /// Writing to stdout/stderr or reading a file failed
    Io(std::io::Error),

    /// Bad command-line input (cards, counts)
    InvalidInput(String),

    Config(ConfigError),

    /// The engine refused an operation
    Engine(GameError),

    Ai(AiError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(e) => write!(f, "Invalid configuration: {}", e),
            CliError::Engine(e) => write!(f, "Engine error: {}", e),
            CliError::Ai(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            CliError::Config(e) => Some(e),
            CliError::Engine(e) => Some(e),
            CliError::Ai(e) => Some(e),
            CliError::InvalidInput(_) => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        CliError::Engine(error)
    }
}

impl From<AiError> for CliError {
    fn from(error: AiError) -> Self {
        CliError::Ai(error)
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config(error)
    }
}
