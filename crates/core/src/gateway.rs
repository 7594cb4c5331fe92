//! Outbound calls to the remote user and workspace API
//!
//! Each operation is one request/response exchange with no retries. Failures
//! come back as a single [`PortalError`] whose text is ready for display.

use crate::config::PortalConfig;
use crate::error::PortalError;
use crate::forms::AuthRequest;
use portal_http::{
    ClientError, LoginRequest, PublicPortalClient, TokenPair, TypedClientBuilder, UserCreate,
    WorkspaceCreate,
};
use tracing::{info, warn};

/// Whatever the server returns for a created workspace. Not read back.
pub type WorkspaceRecord = serde_json::Value;

#[derive(Debug, Clone)]
pub struct AuthGateway {
    client: PublicPortalClient,
}

impl AuthGateway {
    pub fn new(config: &PortalConfig) -> Result<Self, ClientError> {
        let client = TypedClientBuilder::new()
            .base_url(config.api_url())
            .build_public()?;
        Ok(Self { client })
    }

    /// Log in.
    ///
    /// `Ok(None)` means the server answered with success but without both
    /// tokens; no session can be established from that.
    pub async fn login(
        &self,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Option<TokenPair>, PortalError> {
        let request = LoginRequest {
            email: email.into(),
            password: password.into(),
        };
        self.authenticate(&AuthRequest::Login(request)).await
    }

    /// Register a new account. Same result contract as [`Self::login`].
    pub async fn register(
        &self,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Option<TokenPair>, PortalError> {
        let request = UserCreate {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        };
        self.authenticate(&AuthRequest::Register(request)).await
    }

    async fn authenticate(
        &self,
        request: &AuthRequest,
    ) -> Result<Option<TokenPair>, PortalError> {
        let (operation, email, result) = match request {
            AuthRequest::Login(req) => ("login", &req.email, self.client.login(req).await),
            AuthRequest::Register(req) => {
                ("register", &req.email, self.client.register(req).await)
            }
        };

        match result {
            Ok(response) => {
                let pair = response.into_pair();
                if pair.is_some() {
                    info!("{} succeeded for {}", operation, email);
                } else {
                    warn!("{} for {} returned an incomplete token pair", operation, email);
                }
                Ok(pair)
            }
            Err(e) => {
                warn!("{} failed for {}: {}", operation, email, e);
                Err(PortalError::auth(&e))
            }
        }
    }

    /// Create a workspace on behalf of the bearer token's owner
    pub async fn create_workspace(
        &self,
        request: &WorkspaceCreate,
        bearer_token: &str,
    ) -> Result<WorkspaceRecord, PortalError> {
        let client = self.client.authenticate(bearer_token);
        match client.create_workspace(request).await {
            Ok(record) => {
                info!("Workspace '{}' created", request.name);
                Ok(record)
            }
            Err(e) => {
                warn!("Failed to create workspace '{}': {}", request.name, e);
                Err(PortalError::workspace(&e))
            }
        }
    }
}
