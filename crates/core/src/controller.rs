//! Session controller
//!
//! Owns the gateway, the session store and the navigator, and drives the
//! three form submissions plus logout. The store is only ever written here.

use crate::error::PortalError;
use crate::forms::{AuthForm, AuthRequest, WorkspaceForm};
use crate::gateway::{AuthGateway, WorkspaceRecord};
use crate::loading::LoadingGuard;
use crate::router::{Navigator, Route, ViewState};
use crate::session::{SessionStorage, SessionStore};
use portal_http::{LoginRequest, UserCreate};
use tracing::{info, warn};

/// Result of a login/register submission that the server accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Both tokens stored and a redirect to the dashboard issued
    SignedIn,
    /// Success status but a token was missing: nothing stored, no redirect,
    /// nothing shown to the user
    Incomplete,
}

#[derive(Debug)]
pub struct SessionController<S, N> {
    gateway: AuthGateway,
    store: SessionStore<S>,
    navigator: N,
}

impl<S: SessionStorage, N: Navigator> SessionController<S, N> {
    pub const fn new(gateway: AuthGateway, store: SessionStore<S>, navigator: N) -> Self {
        Self {
            gateway,
            store,
            navigator,
        }
    }

    /// Mount-time view, computed from the store
    pub fn initial_view(&self) -> ViewState {
        ViewState::initial(&self.store)
    }

    /// Submit the auth overlay.
    ///
    /// Validation failures return before `set_loading` is touched. Otherwise
    /// the flag is raised for the duration of the request and always lowered.
    pub async fn submit_auth<F: Fn(bool)>(
        &self,
        form: &AuthForm,
        set_loading: F,
    ) -> Result<AuthOutcome, PortalError> {
        form.validate()?;
        let _loading = LoadingGuard::acquire(set_loading);

        let pair = match form.request() {
            AuthRequest::Login(LoginRequest { email, password }) => {
                self.gateway.login(email, password).await?
            }
            AuthRequest::Register(UserCreate {
                name,
                email,
                password,
            }) => self.gateway.register(name, email, password).await?,
        };

        match pair {
            Some(pair) => {
                self.store.set(&pair).map_err(|e| {
                    warn!("Could not persist session: {}", e);
                    PortalError::session(&e)
                })?;
                info!("Session established, redirecting to dashboard");
                self.navigator.redirect(Route::Dashboard);
                Ok(AuthOutcome::SignedIn)
            }
            None => Ok(AuthOutcome::Incomplete),
        }
    }

    /// Submit the dashboard form; on success the form is emptied.
    ///
    /// A rejected token leaves the session in place.
    pub async fn submit_workspace<F: Fn(bool)>(
        &self,
        form: &mut WorkspaceForm,
        set_loading: F,
    ) -> Result<WorkspaceRecord, PortalError> {
        form.validate()?;
        let _loading = LoadingGuard::acquire(set_loading);

        let token = self
            .store
            .access_token()
            .ok_or_else(|| PortalError::Workspace("Not authenticated".to_string()))?;

        let record = self
            .gateway
            .create_workspace(&form.request(), &token)
            .await?;
        form.reset();
        Ok(record)
    }

    /// Clear the session and return to the landing page. Idempotent.
    pub fn logout(&self) {
        self.store.clear();
        info!("Session cleared, redirecting to root");
        self.navigator.redirect(Route::Root);
    }

    pub const fn store(&self) -> &SessionStore<S> {
        &self.store
    }

    pub const fn gateway(&self) -> &AuthGateway {
        &self.gateway
    }

    pub const fn navigator(&self) -> &N {
        &self.navigator
    }
}
