//! User authentication endpoints

use super::{error::ClientError, execute, typed::PublicPortalClient};
use crate::types::{LoginRequest, TokenResponse, UserCreate};

pub const LOGIN_PATH: &str = "/user/login";
pub const REGISTER_PATH: &str = "/user/register";

/// Authentication endpoints for the public client
impl PublicPortalClient {
    /// Exchange credentials for a token pair
    pub async fn login(&self, request: &LoginRequest) -> Result<TokenResponse, ClientError> {
        let req = self
            .request(reqwest::Method::POST, LOGIN_PATH)
            .json(request);
        execute(req).await
    }

    /// Create an account and receive a token pair
    pub async fn register(&self, request: &UserCreate) -> Result<TokenResponse, ClientError> {
        let req = self
            .request(reqwest::Method::POST, REGISTER_PATH)
            .json(request);
        execute(req).await
    }
}
