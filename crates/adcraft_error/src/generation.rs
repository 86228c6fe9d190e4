//! Content generation error types.

/// Failure conditions of turning a prompt into ad content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GenerationErrorKind {
    /// No LLM credential is configured
    #[display("LLM provider is not initialized: no API key configured")]
    UninitializedProvider,
    /// The prompt was empty or whitespace only
    #[display("Prompt cannot be empty")]
    EmptyPrompt,
    /// The LLM call itself failed
    #[display("LLM provider call failed: {}", _0)]
    Upstream(String),
    /// The LLM answered with text this engine cannot trust
    #[display("Malformed LLM response: {}", _0)]
    MalformedResponse(String),
}

/// Content generation error with location tracking.
///
/// # Examples
///
/// ```
/// use adcraft_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::UninitializedProvider);
/// assert!(format!("{}", err).contains("not initialized"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The specific error condition
    pub kind: GenerationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GenerationErrorKind {
        &self.kind
    }
}
