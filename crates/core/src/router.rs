//! Root view state machine
//!
//! The authenticated/unauthenticated decision is made once, from the session
//! store, when the view tree mounts. Afterwards only overlay toggles and the
//! explicit sign-in/sign-out transitions move the state.

use crate::session::{SessionStorage, SessionStore};
use std::rc::Rc;

/// Navigable routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Root,
    Dashboard,
}

impl Route {
    pub const fn path(self) -> &'static str {
        match self {
            Self::Root => "/",
            Self::Dashboard => "/dashboard",
        }
    }
}

/// Performs hard redirects.
///
/// In the browser a redirect reloads the document, which remounts the view
/// tree and recomputes [`ViewState::initial`].
pub trait Navigator {
    fn redirect(&self, route: Route);
}

impl<T: Navigator + ?Sized> Navigator for Rc<T> {
    fn redirect(&self, route: Route) {
        (**self).redirect(route);
    }
}

/// Base view rendered under any overlays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Landing,
    Dashboard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Unauthenticated {
        show_security_overlay: bool,
        show_auth_overlay: bool,
    },
    Authenticated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouterAction {
    ShowAuth,
    CloseAuth,
    ShowSecurity,
    CloseSecurity,
    SignedIn,
    SignedOut,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::Unauthenticated {
            show_security_overlay: false,
            show_auth_overlay: false,
        }
    }
}

impl ViewState {
    /// Mount-time state: authenticated iff an access token is stored
    pub fn initial<S: SessionStorage>(store: &SessionStore<S>) -> Self {
        if store.is_authenticated() {
            Self::Authenticated
        } else {
            Self::default()
        }
    }

    pub const fn view(&self) -> View {
        match self {
            Self::Unauthenticated { .. } => View::Landing,
            Self::Authenticated => View::Dashboard,
        }
    }

    pub const fn shows_auth_overlay(&self) -> bool {
        matches!(
            self,
            Self::Unauthenticated {
                show_auth_overlay: true,
                ..
            }
        )
    }

    pub const fn shows_security_overlay(&self) -> bool {
        matches!(
            self,
            Self::Unauthenticated {
                show_security_overlay: true,
                ..
            }
        )
    }

    #[must_use]
    pub const fn reduce(self, action: RouterAction) -> Self {
        match (self, action) {
            (_, RouterAction::SignedIn) => Self::Authenticated,
            (_, RouterAction::SignedOut) => Self::Unauthenticated {
                show_security_overlay: false,
                show_auth_overlay: false,
            },
            // Overlays only exist on the landing view
            (Self::Authenticated, _) => Self::Authenticated,
            (
                Self::Unauthenticated {
                    show_security_overlay,
                    ..
                },
                RouterAction::ShowAuth | RouterAction::CloseAuth,
            ) => Self::Unauthenticated {
                show_security_overlay,
                show_auth_overlay: matches!(action, RouterAction::ShowAuth),
            },
            (
                Self::Unauthenticated {
                    show_auth_overlay, ..
                },
                RouterAction::ShowSecurity | RouterAction::CloseSecurity,
            ) => Self::Unauthenticated {
                show_security_overlay: matches!(action, RouterAction::ShowSecurity),
                show_auth_overlay,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{MemoryStorage, TokenPair};

    #[test]
    fn initial_state_follows_session() {
        let store = SessionStore::new(MemoryStorage::new());
        assert_eq!(ViewState::initial(&store), ViewState::default());
        assert_eq!(ViewState::initial(&store).view(), View::Landing);

        store.set(&TokenPair::new("A", "B")).unwrap();
        assert_eq!(ViewState::initial(&store), ViewState::Authenticated);
        assert_eq!(ViewState::initial(&store).view(), View::Dashboard);
    }

    #[test]
    fn landing_starts_with_overlays_closed() {
        let state = ViewState::default();
        assert!(!state.shows_auth_overlay());
        assert!(!state.shows_security_overlay());
    }

    #[test]
    fn show_auth_opens_overlay() {
        let state = ViewState::default().reduce(RouterAction::ShowAuth);
        assert!(state.shows_auth_overlay());
        assert_eq!(state.view(), View::Landing);

        let closed = state.reduce(RouterAction::CloseAuth);
        assert_eq!(closed, ViewState::default());
    }

    #[test]
    fn overlays_toggle_independently() {
        let state = ViewState::default()
            .reduce(RouterAction::ShowSecurity)
            .reduce(RouterAction::ShowAuth);
        assert!(state.shows_security_overlay());
        assert!(state.shows_auth_overlay());

        let state = state.reduce(RouterAction::CloseSecurity);
        assert!(!state.shows_security_overlay());
        assert!(state.shows_auth_overlay());
    }

    #[test]
    fn authenticated_ignores_overlay_actions() {
        for action in [
            RouterAction::ShowAuth,
            RouterAction::CloseAuth,
            RouterAction::ShowSecurity,
            RouterAction::CloseSecurity,
        ] {
            assert_eq!(
                ViewState::Authenticated.reduce(action),
                ViewState::Authenticated
            );
        }
    }

    #[test]
    fn sign_in_and_out_transitions() {
        let signed_in = ViewState::default()
            .reduce(RouterAction::ShowAuth)
            .reduce(RouterAction::SignedIn);
        assert_eq!(signed_in, ViewState::Authenticated);

        let signed_out = signed_in.reduce(RouterAction::SignedOut);
        assert_eq!(signed_out, ViewState::default());
    }

    #[test]
    fn route_paths() {
        assert_eq!(Route::Root.path(), "/");
        assert_eq!(Route::Dashboard.path(), "/dashboard");
    }
}
