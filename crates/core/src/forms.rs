//! Form records behind the auth overlay and the dashboard

use crate::error::PortalError;
use portal_http::{LoginRequest, UserCreate, WorkspaceCreate};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }
}

/// Request built from the auth form for the current mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthRequest {
    Login(LoginRequest),
    Register(UserCreate),
}

/// Auth overlay fields. Switching mode keeps whatever was typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthForm {
    mode: AuthMode,
    name: String,
    email: String,
    password: String,
}

impl AuthForm {
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub const fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    pub const fn toggle_mode(&mut self) {
        self.mode = self.mode.toggle();
    }

    /// Required-field checks for the current mode.
    ///
    /// Name and email must hold something besides whitespace. The password
    /// is taken as typed, so only an empty one is rejected.
    pub fn validate(&self) -> Result<(), PortalError> {
        if self.mode == AuthMode::Register {
            require("Name", &self.name)?;
        }
        require("Email", &self.email)?;
        validate_email(&self.email)?;
        if self.password.is_empty() {
            return Err(PortalError::Validation("Password is required".to_string()));
        }
        Ok(())
    }

    /// Login sends only credentials; registration sends all three fields
    pub fn request(&self) -> AuthRequest {
        match self.mode {
            AuthMode::Login => AuthRequest::Login(LoginRequest {
                email: self.email.clone(),
                password: self.password.clone(),
            }),
            AuthMode::Register => AuthRequest::Register(UserCreate {
                name: self.name.clone(),
                email: self.email.clone(),
                password: self.password.clone(),
            }),
        }
    }
}

/// Dashboard workspace fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkspaceForm {
    name: String,
    description: String,
}

impl WorkspaceForm {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn reset(&mut self) {
        self.name.clear();
        self.description.clear();
    }

    pub fn validate(&self) -> Result<(), PortalError> {
        require("Workspace name", &self.name)?;
        require("Description", &self.description)
    }

    pub fn request(&self) -> WorkspaceCreate {
        WorkspaceCreate {
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }
}

fn require(field: &str, value: &str) -> Result<(), PortalError> {
    if value.trim().is_empty() {
        Err(PortalError::Validation(format!("{field} is required")))
    } else {
        Ok(())
    }
}

fn validate_email(email: &str) -> Result<(), PortalError> {
    match email.trim().split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(PortalError::Validation(
            "Please enter a valid email address".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(mode: AuthMode) -> AuthForm {
        let mut form = AuthForm::new(mode);
        form.set_name("Ada");
        form.set_email("ada@example.com");
        form.set_password("hunter2");
        form
    }

    #[test]
    fn login_request_omits_name() {
        let form = filled(AuthMode::Login);
        assert_eq!(
            form.request(),
            AuthRequest::Login(LoginRequest {
                email: "ada@example.com".to_string(),
                password: "hunter2".to_string(),
            })
        );
    }

    #[test]
    fn register_request_includes_name() {
        let form = filled(AuthMode::Register);
        assert!(matches!(
            form.request(),
            AuthRequest::Register(UserCreate { ref name, .. }) if name == "Ada"
        ));
    }

    #[test]
    fn toggling_mode_keeps_fields() {
        let mut form = filled(AuthMode::Login);
        form.toggle_mode();
        assert_eq!(form.mode(), AuthMode::Register);
        assert_eq!(form.email(), "ada@example.com");
        assert_eq!(form.password(), "hunter2");
        form.toggle_mode();
        assert_eq!(form.mode(), AuthMode::Login);
    }

    #[test]
    fn name_required_only_when_registering() {
        let mut form = filled(AuthMode::Login);
        form.set_name("");
        assert!(form.validate().is_ok());

        form.toggle_mode();
        assert_eq!(
            form.validate(),
            Err(PortalError::Validation("Name is required".to_string()))
        );
    }

    #[test]
    fn email_and_password_required() {
        let mut form = filled(AuthMode::Login);
        form.set_password("");
        assert_eq!(
            form.validate(),
            Err(PortalError::Validation("Password is required".to_string()))
        );

        let mut form = filled(AuthMode::Login);
        form.set_email("");
        assert_eq!(
            form.validate(),
            Err(PortalError::Validation("Email is required".to_string()))
        );
    }

    #[test]
    fn whitespace_password_accepted_as_typed() {
        let mut form = filled(AuthMode::Login);
        form.set_password("   ");
        assert_eq!(form.validate(), Ok(()));
        assert!(matches!(
            form.request(),
            AuthRequest::Login(LoginRequest { ref password, .. }) if password == "   "
        ));
    }

    #[test]
    fn whitespace_name_still_rejected() {
        let mut form = filled(AuthMode::Register);
        form.set_name("  ");
        assert_eq!(
            form.validate(),
            Err(PortalError::Validation("Name is required".to_string()))
        );
    }

    #[test]
    fn malformed_email_rejected() {
        for email in ["ada", "@example.com", "ada@"] {
            let mut form = filled(AuthMode::Login);
            form.set_email(email);
            assert!(
                matches!(form.validate(), Err(PortalError::Validation(_))),
                "{email} should be rejected"
            );
        }
    }

    #[test]
    fn workspace_form_validate_and_reset() {
        let mut form = WorkspaceForm::default();
        assert!(form.validate().is_err());

        form.set_name("Research");
        assert_eq!(
            form.validate(),
            Err(PortalError::Validation("Description is required".to_string()))
        );

        form.set_description("Lab notes");
        assert!(form.validate().is_ok());
        assert_eq!(form.request().name, "Research");

        form.reset();
        assert_eq!(form, WorkspaceForm::default());
    }
}
