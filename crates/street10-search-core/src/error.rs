//! Error types for Street10 search

use thiserror::Error;

/// Result type alias using the search Error
pub type Result<T> = std::result::Result<T, Error>;

/// Search error types with helpful messages
#[derive(Error, Debug)]
pub enum Error {
    // Network errors (E100-E199)
    #[error("Network error: {0}. Check your connection to the Street10 API.")]
    Network(#[from] reqwest::Error),

    /// A live provider answered with a non-2xx status or could not be
    /// reached. The aggregator treats this as "zero results from that
    /// provider" rather than failing the whole query.
    #[error("Provider '{provider}' unavailable: {message}")]
    ProviderUnavailable { provider: String, message: String },

    #[error("Provider '{provider}' returned an unreadable response: {message}")]
    ResponseParse { provider: String, message: String },

    // Config errors (E600-E699)
    #[error("Configuration error: {0}")]
    Config(String),

    // Input errors (E800-E899)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Generic errors
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Get error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            Self::Network(_) => "E100",
            Self::ProviderUnavailable { .. } => "E101",
            Self::ResponseParse { .. } => "E102",
            Self::Config(_) => "E600",
            Self::InvalidInput(_) => "E800",
            Self::Other(_) | Self::Io(_) => "E9999",
        }
    }

    /// Whether the aggregator may swallow this error and keep serving
    /// results from the remaining providers.
    pub fn is_provider_failure(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::ProviderUnavailable { .. } | Self::ResponseParse { .. }
        )
    }

    /// Shorthand for a provider-unavailable error
    pub fn provider_unavailable(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ProviderUnavailable {
            provider: provider.into(),
            message: message.into(),
        }
    }
}
