//! Portal HTTP client
//!
//! Typed clients for the remote user and workspace API. The public client
//! covers the unauthenticated `/user/*` endpoints; the authenticated client
//! attaches a bearer token and covers `/workspace/*`.

pub mod client;
pub mod types;

pub use client::error::ClientError;
pub use client::{AuthenticatedPortalClient, PublicPortalClient, TypedClientBuilder};
pub use types::{LoginRequest, TokenPair, TokenResponse, UserCreate, WorkspaceCreate};
