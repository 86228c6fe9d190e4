//! Opaque credentials and caller identity.

use serde::{Deserialize, Serialize};

/// Access credentials for the publishing platform.
///
/// Values are opaque strings handed in by the caller; secret storage lives
/// outside this crate. `Debug` never prints the token.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformCredentials {
    /// Platform access token.
    pub token: Option<String>,
    /// Target account identifier.
    pub account_id: Option<String>,
}

impl PlatformCredentials {
    /// Create credentials with both values present.
    pub fn new(token: impl Into<String>, account_id: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            account_id: Some(account_id.into()),
        }
    }

    /// Token, if present and not blank.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.trim().is_empty())
    }

    /// Account id, if present and not blank.
    pub fn account_id(&self) -> Option<&str> {
        self.account_id.as_deref().filter(|a| !a.trim().is_empty())
    }

    /// True when both token and account id are usable.
    pub fn is_complete(&self) -> bool {
        self.token().is_some() && self.account_id().is_some()
    }
}

impl std::fmt::Debug for PlatformCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlatformCredentials")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("account_id", &self.account_id)
            .finish()
    }
}

/// The signed-in user, as resolved by the identity collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{}", id)]
pub struct CurrentUser {
    /// User identifier
    pub id: String,
}

impl CurrentUser {
    /// Create a user handle.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_values_are_absent() {
        let creds = PlatformCredentials {
            token: Some("   ".to_string()),
            account_id: Some("1784".to_string()),
        };
        assert!(creds.token().is_none());
        assert!(!creds.is_complete());
        assert!(PlatformCredentials::new("t", "a").is_complete());
    }

    #[test]
    fn test_debug_redacts_token() {
        let creds = PlatformCredentials::new("EAAG-secret", "1784");
        let printed = format!("{:?}", creds);
        assert!(!printed.contains("EAAG-secret"));
        assert!(printed.contains("1784"));
    }
}
