mod auth_modal;
mod dashboard;
mod landing;
mod security_modal;
mod spinner;

pub use auth_modal::AuthModal;
pub use dashboard::Dashboard;
pub use landing::Landing;
pub use security_modal::SecurityModal;
pub use spinner::Spinner;
