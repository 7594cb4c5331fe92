//! Wire types shared by the clients and their callers

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Login request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Workspace creation request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceCreate {
    pub name: String,
    pub description: String,
}

/// A complete access/refresh token pair.
///
/// Both values are opaque bearer strings and are never inspected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

impl TokenPair {
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        }
    }
}

/// Body returned by `/user/login` and `/user/register`.
///
/// Either field may be missing; callers decide what an incomplete pair means.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

impl TokenResponse {
    /// Returns the pair only when both tokens are present and non-empty.
    pub fn into_pair(self) -> Option<TokenPair> {
        match (self.access_token, self.refresh_token) {
            (Some(access), Some(refresh)) if !access.is_empty() && !refresh.is_empty() => {
                Some(TokenPair::new(access, refresh))
            }
            _ => None,
        }
    }
}

/// Error payload returned on non-success statuses
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<JsonValue>,
}

impl ErrorBody {
    /// Human-readable message carried by `detail`.
    ///
    /// A plain string is returned as-is. A list of validation entries is
    /// flattened to their `msg` fields. Anything else counts as absent.
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            JsonValue::String(detail) if !detail.is_empty() => Some(detail.clone()),
            JsonValue::Array(entries) => {
                let messages: Vec<&str> = entries
                    .iter()
                    .filter_map(|entry| entry.get("msg").and_then(JsonValue::as_str))
                    .filter(|msg| !msg.is_empty())
                    .collect();
                if messages.is_empty() {
                    None
                } else {
                    Some(messages.join("; "))
                }
            }
            _ => None,
        }
    }
}
