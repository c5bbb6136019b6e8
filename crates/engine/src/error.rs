use deckname_domain::errors::{DomainError, ErrorSeverity};
use deckname_domain::impl_error_classification;
use thiserror::Error;

/// Error types for the anonymization engine
#[derive(Debug, Error)]
pub enum EngineError {
    // Domain errors (Configuration, InvalidInput, NotFound, Internal)
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Engine-specific errors
    #[error("Pattern compilation error: {0}")]
    PatternCompilation(String),

    #[error("Detection error: {0}")]
    Detection(String),

    #[error("Redaction error: {0}")]
    Redaction(String),

    #[error("Span out of bounds on page {page_number}: {start_position}..{end_position} exceeds text length {text_length}")]
    SpanOutOfBounds {
        page_number: usize,
        start_position: usize,
        end_position: usize,
        text_length: usize,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Regex error: {0}")]
    RegexError(#[from] regex::Error),
}

pub type EngineResult<T> = Result<T, EngineError>;

// Implement ErrorClassification for EngineError
impl_error_classification!(EngineError, Domain,
    Self::PatternCompilation(_) => {
        retryable: false,  // Compilation errors are permanent
        severity: ErrorSeverity::Error,
        critical: false,
    },
    Self::Detection(_) => {
        retryable: false,  // Matcher failures degrade to zero matches, never transient
        severity: ErrorSeverity::Warning,
        critical: false,
    },
    Self::Redaction(_) => {
        retryable: false,  // Redaction failures are serious
        severity: ErrorSeverity::Error,
        critical: false,
    },
    Self::SpanOutOfBounds { .. } => {
        retryable: false,  // Indicates a broken matcher, needs investigation
        severity: ErrorSeverity::Error,
        critical: false,
    },
    Self::Config(_) => {
        retryable: false,  // Configuration errors are permanent
        severity: ErrorSeverity::Error,
        critical: false,
    },
    Self::Serialization(_) => {
        retryable: false,
        severity: ErrorSeverity::Error,
        critical: false,
    },
    Self::RegexError(_) => {
        retryable: false,  // Regex compilation errors are permanent
        severity: ErrorSeverity::Error,
        critical: false,
    }
);

// Manual implementation of From<EngineError> for DomainError
impl From<EngineError> for DomainError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Domain(e) => e,
            EngineError::PatternCompilation(msg) => {
                DomainError::Config(format!("Pattern compilation: {}", msg))
            }
            EngineError::Detection(msg) => DomainError::Internal(format!("Detection: {}", msg)),
            EngineError::Redaction(msg) => DomainError::Internal(format!("Redaction: {}", msg)),
            EngineError::SpanOutOfBounds { page_number, start_position, end_position, text_length } => {
                DomainError::Internal(format!(
                    "Span {}..{} out of bounds on page {} (text length {})",
                    start_position, end_position, page_number, text_length
                ))
            }
            EngineError::Config(msg) => DomainError::Config(msg),
            EngineError::Serialization(e) => {
                DomainError::Internal(format!("Serialization: {}", e))
            }
            EngineError::RegexError(e) => DomainError::Config(format!("Regex error: {}", e)),
        }
    }
}
