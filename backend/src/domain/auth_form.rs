//! Inline validation for the sign-in / sign-up form.

use regex::Regex;
use std::sync::LazyLock;

use crate::domain::models::{AuthForm, AuthMode, FieldErrors};

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

/// Check the form before anything is sent to the auth service.
///
/// Email must look like `something@something.something`; password must reach
/// `min_password_length`. Signup additionally needs a name and a matching confirmation.
pub fn validate_auth_form(mode: AuthMode, form: &AuthForm, min_password_length: usize) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if mode == AuthMode::Signup && form.name.is_empty() {
        errors.add("name", "Name is required");
    }

    if form.email.is_empty() {
        errors.add("email", "Email is required");
    } else if !looks_like_email(&form.email) {
        errors.add("email", "Please enter a valid email");
    }

    if form.password.is_empty() {
        errors.add("password", "Password is required");
    } else if form.password.chars().count() < min_password_length {
        errors.add(
            "password",
            format!("Password must be at least {} characters", min_password_length),
        );
    }

    if mode == AuthMode::Signup && form.password != form.confirm_password {
        errors.add("confirm_password", "Passwords do not match");
    }

    errors
}

/// Loose shape check: some non-space text, an `@`, more text, a `.`, more text.
pub fn looks_like_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, password: &str, confirm: &str) -> AuthForm {
        AuthForm {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn test_email_shape() {
        assert!(looks_like_email("a@b.com"));
        assert!(looks_like_email("first.last@sub.example.in"));
        assert!(looks_like_email("  padded@mail.org "));
        assert!(!looks_like_email("plainaddress"));
        assert!(!looks_like_email("@b.com"));
        assert!(!looks_like_email("a@.com"));
        assert!(!looks_like_email("a@b."));
        assert!(!looks_like_email("a @b.com"));
    }

    #[test]
    fn test_login_requires_email_and_password() {
        let errors = validate_auth_form(AuthMode::Login, &form("", "", "", ""), 6);
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("password"), Some("Password is required"));
        assert!(!errors.contains("name"));
        assert!(!errors.contains("confirm_password"));
    }

    #[test]
    fn test_login_format_and_length() {
        let errors = validate_auth_form(AuthMode::Login, &form("", "nope", "abcde", ""), 6);
        assert_eq!(errors.get("email"), Some("Please enter a valid email"));
        assert_eq!(errors.get("password"), Some("Password must be at least 6 characters"));

        assert!(validate_auth_form(AuthMode::Login, &form("", "a@b.com", "abcdef", ""), 6).is_empty());
    }

    #[test]
    fn test_signup_checks_name_and_confirmation() {
        let errors = validate_auth_form(AuthMode::Signup, &form("", "a@b.com", "abcdef", "abcdeg"), 6);
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("confirm_password"), Some("Passwords do not match"));
        assert_eq!(errors.len(), 2);

        let ok = validate_auth_form(AuthMode::Signup, &form("Asha", "a@b.com", "abcdef", "abcdef"), 6);
        assert!(ok.is_empty());

        let blank_name = validate_auth_form(AuthMode::Signup, &form(" ", "a@b.com", "abcdef", "abcdef"), 6);
        assert!(!blank_name.contains("name"));
    }
}
