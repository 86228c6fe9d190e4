//! Coarse error classification shared by all pipeline stages.

/// The class of failure, independent of which component raised it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ErrorCategory {
    /// A required credential or setting is missing. Never attempted over the network.
    #[display("configuration")]
    Configuration,
    /// The remote answered with a well-formed error payload.
    #[display("upstream_protocol")]
    UpstreamProtocol,
    /// The remote answered with data that cannot be parsed or trusted.
    #[display("malformed_response")]
    MalformedResponse,
    /// Network, timeout or connection failure.
    #[display("transport")]
    Transport,
    /// Caller supplied invalid input.
    #[display("validation")]
    Validation,
    /// Persistence collaborator failure.
    #[display("storage")]
    Storage,
}
