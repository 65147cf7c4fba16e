//! Error types for research operations

use thiserror::Error;

/// Research specific errors
#[derive(Debug, Error)]
pub enum ResearchError {
    /// A price series was required but empty
    #[error("No price data provided")]
    NoPriceData,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type alias for research operations
pub type Result<T> = std::result::Result<T, ResearchError>;

/// Convert ResearchError to agent_core::Error
impl From<ResearchError> for agent_core::Error {
    fn from(err: ResearchError) -> Self {
        match err {
            ResearchError::NoPriceData => agent_core::Error::InvalidValue(err.to_string()),
            ResearchError::Config(_) => agent_core::Error::InitializationFailed(err.to_string()),
            ResearchError::Other(_) => agent_core::Error::ProcessingFailed(err.to_string()),
        }
    }
}

/// Convert agent_core::Error to ResearchError
impl From<agent_core::Error> for ResearchError {
    fn from(err: agent_core::Error) -> Self {
        ResearchError::Other(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(ResearchError::NoPriceData.to_string(), "No price data provided");

        let err = ResearchError::Config("model must not be empty".to_string());
        assert_eq!(err.to_string(), "Configuration error: model must not be empty");
    }

    #[test]
    fn test_error_conversion() {
        let agent_err: agent_core::Error = ResearchError::NoPriceData.into();
        match agent_err {
            agent_core::Error::InvalidValue(msg) => assert_eq!(msg, "No price data provided"),
            other => panic!("Expected InvalidValue variant, got {other:?}"),
        }

        let agent_err: agent_core::Error = ResearchError::Config("bad url".to_string()).into();
        assert!(matches!(agent_err, agent_core::Error::InitializationFailed(_)));
    }

    #[test]
    fn test_from_agent_error() {
        let err: ResearchError = agent_core::Error::ToolNotFound("x".to_string()).into();
        assert_eq!(err.to_string(), "Unknown tool: x");
    }
}
