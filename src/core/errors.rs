//! Shared error types for the application

use thiserror::Error;

/// Main error type for powermap operations
#[derive(Debug, Error)]
pub enum Error {
    /// A relation references an entity that is not part of the graph
    #[error("Malformed graph: relation {source_id} -> {target_id} references unknown entity '{missing}'")]
    MalformedGraph {
        source_id: String,
        target_id: String,
        missing: String,
    },

    /// The entity set is empty
    #[error("Empty graph: at least one entity is required")]
    EmptyGraph,

    /// A numeric observation has no defined leading digit
    #[error("Invalid observation at position {index}: {value} (must be positive and finite)")]
    InvalidObservation { index: usize, value: f64 },

    /// No valid observations to audit
    #[error("Empty series: no valid observations")]
    EmptySeries,

    /// Algorithm parameter out of range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Dataset parsing errors
    #[error("Parse error in {origin}:{line}: {message}")]
    Parse {
        origin: String,
        line: usize,
        message: String,
    },

    /// Generic errors with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create a malformed graph error for a relation with an unknown endpoint
    pub fn malformed_graph(
        source_id: impl Into<String>,
        target_id: impl Into<String>,
        missing: impl Into<String>,
    ) -> Self {
        Self::MalformedGraph {
            source_id: source_id.into(),
            target_id: target_id.into(),
            missing: missing.into(),
        }
    }

    /// Create a parse error with location
    pub fn parse(origin: impl Into<String>, line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            origin: origin.into(),
            line,
            message: message.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter(message.into())
    }

    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            message: self.to_string(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}
