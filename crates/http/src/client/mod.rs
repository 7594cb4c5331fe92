//! Portal HTTP client

pub mod auth;
pub mod error;
pub mod typed;
pub mod workspace;

pub use auth::{LOGIN_PATH, REGISTER_PATH};
pub use typed::{AuthenticatedPortalClient, PublicPortalClient, TypedClientBuilder};
pub use workspace::CREATE_WORKSPACE_PATH;

use error::ClientError;
use serde::de::DeserializeOwned;

/// Send a request and decode the response.
///
/// Success bodies are decoded as `T`; anything else becomes
/// [`ClientError::Status`] with the server's `detail` extracted.
pub(crate) async fn execute<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, ClientError> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;

    if status.is_success() {
        Ok(serde_json::from_str(&body)?)
    } else {
        tracing::warn!("Server returned error status {}", status);
        Err(ClientError::from_status(status, &body))
    }
}
