use crate::components::{AuthModal, Dashboard, Landing, SecurityModal};
use crate::context::{PortalContext, PortalProvider, use_view};
use portal_core::{RouterAction, ViewState};
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let portal = use_memo((), |_| PortalContext::from_browser());

    match &*portal {
        Ok(portal) => html! {
            <PortalProvider portal={portal.clone()}>
                <ViewRouter />
            </PortalProvider>
        },
        Err(message) => {
            tracing::error!("{}", message);
            html! {
                <div class="min-h-screen flex items-center justify-center bg-gray-50">
                    <p class="p-4 bg-red-100 text-red-700 rounded-lg">{message}</p>
                </div>
            }
        }
    }
}

/// Root view: dashboard when a session existed at mount, landing otherwise
#[function_component(ViewRouter)]
fn view_router() -> Html {
    let view = use_view();

    let dispatch = |action: RouterAction| {
        let view = view.clone();
        Callback::from(move |()| view.dispatch(action))
    };

    match view.state {
        ViewState::Authenticated => html! { <Dashboard /> },
        ViewState::Unauthenticated {
            show_security_overlay,
            show_auth_overlay,
        } => html! {
            <div class="min-h-screen bg-white">
                if show_security_overlay {
                    <SecurityModal on_close={dispatch(RouterAction::CloseSecurity)} />
                }
                if show_auth_overlay {
                    <AuthModal on_close={dispatch(RouterAction::CloseAuth)} />
                }
                <Landing
                    on_show_auth={dispatch(RouterAction::ShowAuth)}
                    on_show_security={dispatch(RouterAction::ShowSecurity)}
                />
            </div>
        },
    }
}
