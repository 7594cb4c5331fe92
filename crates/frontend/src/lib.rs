pub mod app;
pub mod components;
pub mod context;
pub mod logging;
pub mod navigation;
pub mod storage;

pub use app::App;
pub use context::{PortalContext, PortalProvider, use_portal, use_view};
pub use navigation::BrowserNavigator;
pub use storage::BrowserSessionStorage;
