//! Error types for agent-core

use thiserror::Error;

/// Result type alias for agent-core
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed cause attached to infrastructure failures
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error type for agent operations
#[derive(Error, Debug)]
pub enum Error {
    /// Agent initialization failed
    #[error("Agent initialization failed: {0}")]
    InitializationFailed(String),

    /// Agent processing failed
    #[error("Agent processing failed: {0}")]
    ProcessingFailed(String),

    /// A tool name was dispatched that the agent does not hold
    #[error("Unknown tool: {0}")]
    ToolNotFound(String),

    /// Tool arguments could not be decoded
    #[error("Invalid tool arguments: {0}")]
    InvalidArguments(String),

    /// Value-domain failure raised by a tool (bad operation, division by zero, ...)
    #[error("{0}")]
    InvalidValue(String),

    /// An external dependency (the LLM service) could not be used
    ///
    /// `message` is meant for humans and says how to fix the situation;
    /// the original failure is kept as the error source.
    #[error("{message}")]
    Unavailable {
        message: String,
        #[source]
        source: BoxError,
    },
}

impl Error {
    /// Build an [`Error::Unavailable`] carrying `cause` for diagnostics
    pub fn unavailable(
        message: impl Into<String>,
        cause: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Unavailable {
            message: message.into(),
            source: Box::new(cause),
        }
    }

    /// Whether this error signals an infrastructure outage rather than bad input
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}
