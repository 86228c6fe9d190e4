//! Top-level error wrapper types.

use crate::{
    ConfigError, ErrorCategory, GenerationError, GenerationErrorKind, ProviderError,
    ProviderErrorKind, StoreError, SynthesisError, SynthesisErrorKind,
};

/// Every error an Adcraft operation can surface.
///
/// # Examples
///
/// ```
/// use adcraft_error::{AdcraftError, ProviderError, ProviderErrorKind};
///
/// let err: AdcraftError = ProviderError::new(ProviderErrorKind::Timeout).into();
/// assert!(format!("{}", err).contains("Provider Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum AdcraftErrorKind {
    /// External provider round trip failed
    #[from(ProviderError)]
    Provider(ProviderError),
    /// Content generation failed
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Media synthesis failed
    #[from(SynthesisError)]
    Synthesis(SynthesisError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Storage error
    #[from(StoreError)]
    Store(StoreError),
}

/// Adcraft error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Adcraft Error: {}", _0)]
pub struct AdcraftError(Box<AdcraftErrorKind>);

impl AdcraftError {
    /// Create a new error from a kind.
    pub fn new(kind: AdcraftErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &AdcraftErrorKind {
        &self.0
    }

    /// Classify this error for the caller.
    pub fn category(&self) -> ErrorCategory {
        match self.kind() {
            AdcraftErrorKind::Provider(e) => match e.kind() {
                ProviderErrorKind::Status { .. } => ErrorCategory::UpstreamProtocol,
                ProviderErrorKind::Decode(_) => ErrorCategory::MalformedResponse,
                _ => ErrorCategory::Transport,
            },
            AdcraftErrorKind::Generation(e) => match e.kind() {
                GenerationErrorKind::UninitializedProvider => ErrorCategory::Configuration,
                GenerationErrorKind::EmptyPrompt => ErrorCategory::Validation,
                GenerationErrorKind::Upstream(_) => ErrorCategory::UpstreamProtocol,
                GenerationErrorKind::MalformedResponse(_) => ErrorCategory::MalformedResponse,
            },
            AdcraftErrorKind::Synthesis(e) => match e.kind() {
                SynthesisErrorKind::SynthesisFailed { .. } => ErrorCategory::UpstreamProtocol,
                SynthesisErrorKind::InvalidOptions(_) => ErrorCategory::Validation,
            },
            AdcraftErrorKind::Config(_) => ErrorCategory::Configuration,
            AdcraftErrorKind::Store(_) => ErrorCategory::Storage,
        }
    }
}

// Generic From implementation for any type that converts to AdcraftErrorKind
impl<T> From<T> for AdcraftError
where
    T: Into<AdcraftErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Adcraft operations.
pub type AdcraftResult<T> = std::result::Result<T, AdcraftError>;
