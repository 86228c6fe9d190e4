//! Errors raised by provider clients talking to external HTTP APIs.

/// Specific failure conditions of a single provider round trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ProviderErrorKind {
    /// The request did not complete within the configured timeout.
    #[display("Request timed out")]
    Timeout,
    /// The connection could not be established or was dropped.
    #[display("Connection failed: {}", _0)]
    Connection(String),
    /// The request could not be built or sent.
    #[display("Request failed: {}", _0)]
    Request(String),
    /// Non-success status with a body that is not JSON.
    #[display("HTTP {} error: {}", status, body)]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },
    /// The response body could not be decoded as JSON.
    #[display("Failed to decode response: {}", _0)]
    Decode(String),
}

impl ProviderErrorKind {
    /// True for failures that happened below the protocol layer.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ProviderErrorKind::Timeout
                | ProviderErrorKind::Connection(_)
                | ProviderErrorKind::Request(_)
        )
    }
}

/// Provider error with source location tracking.
///
/// # Examples
///
/// ```
/// use adcraft_error::{ProviderError, ProviderErrorKind};
///
/// let err = ProviderError::new(ProviderErrorKind::Timeout);
/// assert!(err.is_transport());
/// assert!(format!("{}", err).contains("timed out"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Provider Error: {} at line {} in {}", kind, line, file)]
pub struct ProviderError {
    /// The kind of error that occurred
    pub kind: ProviderErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ProviderError {
    /// Create a new ProviderError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ProviderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ProviderErrorKind {
        &self.kind
    }

    /// True for timeouts and connection failures.
    pub fn is_transport(&self) -> bool {
        self.kind.is_transport()
    }
}
