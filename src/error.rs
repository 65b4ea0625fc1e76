use miette::Diagnostic;
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Trigger guard error: {0}")]
    #[diagnostic(code(eventhook::auth_guard))]
    AuthGuard(String),

    #[error("Network error: {0}")]
    #[diagnostic(code(eventhook::network))]
    Network(String),

    #[error("Parse error: {0}")]
    #[diagnostic(code(eventhook::parse))]
    Parse(String),

    #[error("Environment error: {0}")]
    #[diagnostic(code(eventhook::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(eventhook::config))]
    Config(String),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(eventhook::serialization))]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    #[diagnostic(code(eventhook::io))]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    #[diagnostic(code(eventhook::other))]
    Other(String),
}

// Split reqwest failures into transport and decode errors
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::Parse(err.to_string())
        } else {
            Error::Network(err.to_string())
        }
    }
}

// Implement From for TOML deserialization errors
impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type BotResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Missing environment variable: {}", var))
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create trigger guard errors
pub fn auth_guard_error(message: &str) -> Error {
    Error::AuthGuard(message.to_string())
}

/// Helper to create network errors
pub fn network_error(message: &str) -> Error {
    Error::Network(message.to_string())
}

/// Helper to create parse errors
pub fn parse_error(message: &str) -> Error {
    Error::Parse(message.to_string())
}
