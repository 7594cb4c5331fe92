//! Hard redirects through `window.location`

use portal_core::{Navigator, Route};

/// Navigates by assigning `location.href`, which reloads the document and
/// remounts the app from scratch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn redirect(&self, route: Route) {
        let Some(window) = web_sys::window() else {
            tracing::warn!("No window, cannot redirect to {}", route.path());
            return;
        };
        if let Err(e) = window.location().set_href(route.path()) {
            tracing::warn!("Redirect to {} failed: {:?}", route.path(), e);
        }
    }
}
