use serde::{Deserialize, Serialize};
use shared::UserType;

use super::validation::FieldErrors;

/// Which form the auth modal is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    pub fn toggled(&self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        }
    }

    /// Message shown when the credentials are refused
    pub fn rejection_message(&self) -> &'static str {
        match self {
            AuthMode::Login => "Invalid email or password",
            AuthMode::Signup => "Failed to create account. Please try again.",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            AuthMode::Login => "Welcome Back",
            AuthMode::Signup => "Create Account",
        }
    }

    pub fn subheading(&self, user_type: UserType) -> String {
        match self {
            AuthMode::Login => format!("Sign in to your {} account", user_type),
            AuthMode::Signup => format!("Create your {} account", user_type),
        }
    }

    pub fn submit_label(&self, user_type: UserType) -> String {
        match self {
            AuthMode::Login => format!("Sign In as {}", user_type.display_name()),
            AuthMode::Signup => format!("Create {} Account", user_type.display_name()),
        }
    }

    pub fn pending_label(&self) -> &'static str {
        match self {
            AuthMode::Login => "Signing In...",
            AuthMode::Signup => "Creating Account...",
        }
    }
}

/// Raw contents of the auth modal form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Why an auth form submission did not sign anybody in
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AuthSubmitError {
    /// Inline field problems; nothing was sent
    #[error("{0}")]
    Invalid(FieldErrors),
    /// The auth predicate refused the credentials
    #[error("{}", .0.rejection_message())]
    Rejected(AuthMode),
    /// The call itself failed (storage, gateway)
    #[error("Something went wrong. Please try again.")]
    Failed(String),
}

impl AuthSubmitError {
    /// Banner text under the form, if this error has one
    pub fn submit_message(&self) -> Option<&'static str> {
        match self {
            AuthSubmitError::Invalid(_) => None,
            AuthSubmitError::Rejected(mode) => Some(mode.rejection_message()),
            AuthSubmitError::Failed(_) => Some(GENERIC_FAILURE_MESSAGE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_labels() {
        assert_eq!(AuthMode::Login.toggled(), AuthMode::Signup);
        assert_eq!(AuthMode::Login.submit_label(UserType::User), "Sign In as Practitioner");
        assert_eq!(AuthMode::Signup.submit_label(UserType::Trainer), "Create Trainer Account");
        assert_eq!(AuthMode::Signup.subheading(UserType::Trainer), "Create your trainer account");
    }

    #[test]
    fn test_submit_messages() {
        assert_eq!(
            AuthSubmitError::Rejected(AuthMode::Login).submit_message(),
            Some("Invalid email or password")
        );
        assert_eq!(
            AuthSubmitError::Failed("disk full".to_string()).to_string(),
            GENERIC_FAILURE_MESSAGE
        );
        assert_eq!(AuthSubmitError::Invalid(FieldErrors::new()).submit_message(), None);
    }
}
