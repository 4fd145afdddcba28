use log::info;
use serde::{Deserialize, Serialize};

/// Footer newsletter form.
///
/// Nothing is sent anywhere; a non-empty email flips the form to its confirmation state,
/// which the caller expires after a few seconds with the token `subscribe` returned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsletterSignup {
    email: String,
    subscribed: bool,
    generation: u64,
}

impl NewsletterSignup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Submit the form. Returns the expiry token, or `None` when the email field is empty.
    pub fn subscribe(&mut self) -> Option<u64> {
        if self.email.is_empty() {
            return None;
        }
        info!("Newsletter signup for {}", self.email);
        self.email.clear();
        self.subscribed = true;
        self.generation += 1;
        Some(self.generation)
    }

    /// Hide the confirmation, unless a newer signup has happened since `token` was issued
    pub fn expire(&mut self, token: u64) {
        if token == self.generation {
            self.subscribed = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_email_is_ignored() {
        let mut signup = NewsletterSignup::new();
        assert_eq!(signup.subscribe(), None);
        assert!(!signup.is_subscribed());
    }

    #[test]
    fn test_subscribe_clears_field_and_expires() {
        let mut signup = NewsletterSignup::new();
        signup.set_email("a@b.com");

        let token = signup.subscribe().unwrap();
        assert!(signup.is_subscribed());
        assert_eq!(signup.email(), "");

        signup.expire(token);
        assert!(!signup.is_subscribed());
    }

    #[test]
    fn test_stale_expiry_keeps_newer_confirmation() {
        let mut signup = NewsletterSignup::new();
        signup.set_email("a@b.com");
        let first = signup.subscribe().unwrap();
        signup.set_email("c@d.com");
        let second = signup.subscribe().unwrap();

        signup.expire(first);
        assert!(signup.is_subscribed());
        signup.expire(second);
        assert!(!signup.is_subscribed());
    }
}
