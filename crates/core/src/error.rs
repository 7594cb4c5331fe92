//! User-facing error taxonomy
//!
//! Every failure reaching a form is one of these. `Display` is exactly the
//! text rendered above the form, so no wrapping prefix is added.

use crate::session::StorageError;
use portal_http::ClientError;
use thiserror::Error;

/// Shown when a login/register failure carries no server message
pub const AUTH_FALLBACK: &str = "Authentication failed";

/// Shown when a workspace failure carries no server message
pub const WORKSPACE_FALLBACK: &str = "Failed to create workspace";

/// Shown for transport failures and undecodable responses
pub const GENERIC_FALLBACK: &str = "An error occurred";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PortalError {
    /// A required field is missing or malformed; nothing was sent
    #[error("{0}")]
    Validation(String),

    /// Login or registration was rejected
    #[error("{0}")]
    Auth(String),

    /// Workspace creation was rejected
    #[error("{0}")]
    Workspace(String),

    /// The request never produced a usable response
    #[error("{0}")]
    Network(String),
}

impl PortalError {
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(message)
            | Self::Auth(message)
            | Self::Workspace(message)
            | Self::Network(message) => message,
        }
    }

    /// Map a failed login/register call
    pub fn auth(error: &ClientError) -> Self {
        Self::classify(error, Self::Auth, AUTH_FALLBACK)
    }

    /// Map a failed create-workspace call
    pub fn workspace(error: &ClientError) -> Self {
        Self::classify(error, Self::Workspace, WORKSPACE_FALLBACK)
    }

    /// Map a session write that failed after the server accepted the login
    pub fn session(_error: &StorageError) -> Self {
        Self::Auth(AUTH_FALLBACK.to_string())
    }

    fn classify(error: &ClientError, rejected: fn(String) -> Self, fallback: &str) -> Self {
        match error {
            ClientError::Status { detail, .. } => {
                rejected(detail.clone().unwrap_or_else(|| fallback.to_string()))
            }
            ClientError::Configuration(message) => rejected(message.clone()),
            ClientError::Request(_) | ClientError::Serialization(_) => {
                Self::Network(GENERIC_FALLBACK.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_failure_reads_as_auth_failure() {
        let error = PortalError::session(&StorageError::Unavailable);
        assert_eq!(error, PortalError::Auth("Authentication failed".to_string()));
    }

    fn status(code: u16, detail: Option<&str>) -> ClientError {
        ClientError::Status {
            status: code,
            detail: detail.map(str::to_string),
        }
    }

    #[test]
    fn server_detail_is_shown_verbatim() {
        let error = PortalError::auth(&status(401, Some("Invalid credentials")));
        assert_eq!(error, PortalError::Auth("Invalid credentials".to_string()));
        assert_eq!(error.to_string(), "Invalid credentials");
    }

    #[test]
    fn missing_detail_uses_operation_fallback() {
        assert_eq!(
            PortalError::auth(&status(500, None)).to_string(),
            AUTH_FALLBACK
        );
        assert_eq!(
            PortalError::workspace(&status(500, None)).to_string(),
            WORKSPACE_FALLBACK
        );
    }

    #[test]
    fn decode_failure_is_generic() {
        let decode = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let error = PortalError::workspace(&ClientError::Serialization(decode));
        assert_eq!(error, PortalError::Network(GENERIC_FALLBACK.to_string()));
    }

    #[test]
    fn configuration_message_is_kept() {
        let error =
            PortalError::workspace(&ClientError::Configuration("Not authenticated".to_string()));
        assert_eq!(error, PortalError::Workspace("Not authenticated".to_string()));
        assert_eq!(error.message(), "Not authenticated");
    }
}
