//! Workspace endpoints

use super::{error::ClientError, execute, typed::AuthenticatedPortalClient};
use crate::types::WorkspaceCreate;
use serde_json::Value as JsonValue;

pub const CREATE_WORKSPACE_PATH: &str = "/workspace/create_protected";

impl AuthenticatedPortalClient {
    /// Create a workspace owned by the token's user.
    ///
    /// The response shape belongs to the server, so it is returned as raw JSON.
    pub async fn create_workspace(
        &self,
        request: &WorkspaceCreate,
    ) -> Result<JsonValue, ClientError> {
        let req = self
            .request(reqwest::Method::POST, CREATE_WORKSPACE_PATH)
            .json(request);
        execute(req).await
    }
}
