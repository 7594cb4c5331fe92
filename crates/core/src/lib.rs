//! Portal core: session lifecycle and view routing
//!
//! Everything here is UI-agnostic. The browser frontend plugs in its own
//! [`SessionStorage`] and [`Navigator`]; tests use [`MemoryStorage`] and a
//! recording navigator.

pub mod config;
pub mod controller;
pub mod error;
pub mod forms;
pub mod gateway;
pub mod loading;
pub mod router;
pub mod session;

pub use config::{ConfigError, PortalConfig};
pub use controller::{AuthOutcome, SessionController};
pub use error::PortalError;
pub use forms::{AuthForm, AuthMode, AuthRequest, WorkspaceForm};
pub use gateway::{AuthGateway, WorkspaceRecord};
pub use loading::LoadingGuard;
pub use router::{Navigator, Route, RouterAction, View, ViewState};
pub use session::{MemoryStorage, SessionStorage, SessionStore, StorageError, TokenPair};
