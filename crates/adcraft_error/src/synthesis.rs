//! Media synthesis error types.

/// Failure conditions of producing media assets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SynthesisErrorKind {
    /// A required provider call failed; no partial output is returned
    #[display("Synthesis provider '{}' failed: {}", provider, cause)]
    SynthesisFailed {
        /// Provider name
        provider: String,
        /// Underlying cause
        cause: String,
    },
    /// The generation options violate their invariants
    #[display("Invalid media options: {}", _0)]
    InvalidOptions(String),
}

/// Media synthesis error with location tracking.
///
/// # Examples
///
/// ```
/// use adcraft_error::{SynthesisError, SynthesisErrorKind};
///
/// let err = SynthesisError::new(SynthesisErrorKind::SynthesisFailed {
///     provider: "stock".to_string(),
///     cause: "pool empty".to_string(),
/// });
/// assert!(format!("{}", err).contains("stock"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Synthesis Error: {} at line {} in {}", kind, line, file)]
pub struct SynthesisError {
    /// The specific error condition
    pub kind: SynthesisErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl SynthesisError {
    /// Create a new SynthesisError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SynthesisErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for a failed provider call.
    #[track_caller]
    pub fn failed(provider: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        Self::new(SynthesisErrorKind::SynthesisFailed {
            provider: provider.into(),
            cause: cause.to_string(),
        })
    }

    /// Get the error kind.
    pub fn kind(&self) -> &SynthesisErrorKind {
        &self.kind
    }
}
