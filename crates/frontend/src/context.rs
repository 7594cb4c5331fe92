//! Session controller and view state contexts

use crate::navigation::BrowserNavigator;
use crate::storage::BrowserSessionStorage;
use portal_core::{
    AuthGateway, PortalConfig, RouterAction, SessionController, SessionStore, ViewState,
};
use std::rc::Rc;
use yew::prelude::*;

/// Build-time API origin override, e.g. `PORTAL_API_URL=http://localhost:8000 trunk serve`
const API_URL_OVERRIDE: Option<&str> = option_env!("PORTAL_API_URL");

pub type AppController = SessionController<BrowserSessionStorage, BrowserNavigator>;

/// Shared handle to the one controller of this page load
#[derive(Clone, Debug)]
pub struct PortalContext {
    controller: Rc<AppController>,
}

impl PortalContext {
    pub fn new(controller: AppController) -> Self {
        Self {
            controller: Rc::new(controller),
        }
    }

    /// Controller wired to `sessionStorage`, `window.location` and the
    /// configured API origin
    pub fn from_browser() -> Result<Self, String> {
        let config = PortalConfig::from_override(API_URL_OVERRIDE);
        tracing::debug!("Using API at {}", config.api_url());

        let gateway =
            AuthGateway::new(&config).map_err(|e| format!("Failed to create API client: {e}"))?;
        Ok(Self::new(SessionController::new(
            gateway,
            SessionStore::new(BrowserSessionStorage),
            BrowserNavigator,
        )))
    }

    pub fn controller(&self) -> &AppController {
        &self.controller
    }
}

impl PartialEq for PortalContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.controller, &other.controller)
    }
}

/// View state held by the root reducer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewContextData {
    pub state: ViewState,
}

impl Reducible for ViewContextData {
    type Action = RouterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let state = self.state.reduce(action);
        if state == self.state {
            self
        } else {
            Rc::new(Self { state })
        }
    }
}

pub type ViewContext = UseReducerHandle<ViewContextData>;

#[derive(Properties, PartialEq)]
pub struct PortalProviderProps {
    pub portal: PortalContext,
    pub children: Children,
}

/// Provides the controller and the view reducer.
///
/// The initial view is computed from the session store exactly once, when
/// the provider mounts.
#[function_component(PortalProvider)]
pub fn portal_provider(props: &PortalProviderProps) -> Html {
    let view = {
        let portal = props.portal.clone();
        use_reducer(move || ViewContextData {
            state: portal.controller().initial_view(),
        })
    };

    html! {
        <ContextProvider<PortalContext> context={props.portal.clone()}>
            <ContextProvider<ViewContext> context={view}>
                {props.children.clone()}
            </ContextProvider<ViewContext>>
        </ContextProvider<PortalContext>>
    }
}

/// Hook to use the session controller
#[hook]
pub fn use_portal() -> PortalContext {
    use_context::<PortalContext>()
        .expect("PortalContext not found. Make sure to wrap your component with PortalProvider")
}

/// Hook to use the view reducer
#[hook]
pub fn use_view() -> ViewContext {
    use_context::<ViewContext>()
        .expect("ViewContext not found. Make sure to wrap your component with PortalProvider")
}
