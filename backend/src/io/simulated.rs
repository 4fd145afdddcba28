//! Stand-in gateways that wait a fixed time and then answer locally.
//!
//! This is a placeholder for a real auth and booking backend: credentials are not verified,
//! nothing is hashed, and every well-formed booking is accepted.

use anyhow::Result;
use async_trait::async_trait;
use log::{debug, info};
use shared::{BookingConfirmation, BookingRequest, User, UserType};
use std::sync::Arc;
use uuid::Uuid;

use super::delay::Delay;
use super::gateway::{AuthGateway, BookingGateway};
use crate::config::AppConfig;
use crate::domain::commands::auth::{LoginCommand, SignupCommand};

/// Accepts any non-empty email with a long enough password
#[derive(Clone)]
pub struct SimulatedAuthGateway {
    delay: Arc<dyn Delay>,
    delay_ms: u32,
    min_password_length: usize,
}

impl SimulatedAuthGateway {
    pub fn new(delay: Arc<dyn Delay>, delay_ms: u32, min_password_length: usize) -> Self {
        Self {
            delay,
            delay_ms,
            min_password_length,
        }
    }

    pub fn from_config(config: &AppConfig, delay: Arc<dyn Delay>) -> Self {
        Self::new(delay, config.auth_delay_ms, config.min_password_length)
    }

    fn credentials_acceptable(&self, email: &str, password: &str) -> bool {
        !email.is_empty() && password.chars().count() >= self.min_password_length
    }

    fn fabricate_user(name: String, email: &str, user_type: UserType) -> User {
        User {
            id: format!("user::{}", Uuid::new_v4()),
            name,
            email: email.to_string(),
            user_type,
        }
    }
}

/// The part of an email address before the `@`
pub fn email_local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or_default()
}

#[async_trait(?Send)]
impl AuthGateway for SimulatedAuthGateway {
    async fn login(&self, command: &LoginCommand) -> Result<Option<User>> {
        // the wait happens whatever the outcome
        self.delay.sleep(self.delay_ms).await;

        if !self.credentials_acceptable(&command.email, &command.password) {
            debug!("Simulated login refused for '{}'", command.email);
            return Ok(None);
        }

        let name = email_local_part(&command.email).to_string();
        Ok(Some(Self::fabricate_user(name, &command.email, command.user_type)))
    }

    async fn signup(&self, command: &SignupCommand) -> Result<Option<User>> {
        self.delay.sleep(self.delay_ms).await;

        if command.name.is_empty()
            || !self.credentials_acceptable(&command.email, &command.password)
        {
            debug!("Simulated signup refused for '{}'", command.email);
            return Ok(None);
        }

        Ok(Some(Self::fabricate_user(command.name.clone(), &command.email, command.user_type)))
    }
}

/// Confirms every booking after a pause
#[derive(Clone)]
pub struct SimulatedBookingGateway {
    delay: Arc<dyn Delay>,
    delay_ms: u32,
}

impl SimulatedBookingGateway {
    pub fn new(delay: Arc<dyn Delay>, delay_ms: u32) -> Self {
        Self { delay, delay_ms }
    }

    pub fn from_config(config: &AppConfig, delay: Arc<dyn Delay>) -> Self {
        Self::new(delay, config.booking_delay_ms)
    }
}

#[async_trait(?Send)]
impl BookingGateway for SimulatedBookingGateway {
    async fn submit_booking(&self, request: &BookingRequest) -> Result<BookingConfirmation> {
        self.delay.sleep(self.delay_ms).await;

        let confirmation = BookingConfirmation {
            reference: format!("booking::{}", Uuid::new_v4()),
            trainer_name: request.trainer_name.clone(),
            date: request.selection.date,
            time: request.selection.time.clone(),
            duration_id: request.selection.duration_id.clone(),
            total_price: request.total_price,
        };
        info!("Simulated booking accepted: {}", confirmation.reference);
        Ok(confirmation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::delay::RecordingDelay;
    use shared::BookingSelection;

    fn login(email: &str, password: &str) -> LoginCommand {
        LoginCommand {
            email: email.to_string(),
            password: password.to_string(),
            user_type: UserType::User,
        }
    }

    #[test]
    fn test_email_local_part() {
        assert_eq!(email_local_part("a@b.com"), "a");
        assert_eq!(email_local_part("no-at-sign"), "no-at-sign");
        assert_eq!(email_local_part(""), "");
    }

    #[tokio::test]
    async fn test_login_waits_even_when_refused() {
        let delay = Arc::new(RecordingDelay::new());
        let gateway = SimulatedAuthGateway::new(delay.clone(), 1000, 6);

        assert_eq!(gateway.login(&login("", "abcdef")).await.unwrap(), None);
        assert_eq!(gateway.login(&login("a@b.com", "abcde")).await.unwrap(), None);
        assert_eq!(delay.requested(), vec![1000, 1000]);
    }

    #[tokio::test]
    async fn test_login_accepts_any_non_empty_email() {
        let gateway = SimulatedAuthGateway::new(Arc::new(RecordingDelay::new()), 1000, 6);
        let user = gateway.login(&login(" ", "abcdef")).await.unwrap().unwrap();
        assert_eq!(user.email, " ");
    }

    #[tokio::test]
    async fn test_login_fabricates_user_from_email() {
        let gateway = SimulatedAuthGateway::new(Arc::new(RecordingDelay::new()), 1000, 6);
        let user = gateway.login(&login("a@b.com", "abcdef")).await.unwrap().unwrap();

        assert_eq!(user.name, "a");
        assert_eq!(user.email, "a@b.com");
        assert_eq!(user.user_type, UserType::User);
        assert!(user.id.starts_with("user::"));
    }

    #[tokio::test]
    async fn test_signup_uses_given_name() {
        let gateway = SimulatedAuthGateway::new(Arc::new(RecordingDelay::new()), 1000, 6);
        let mut command = SignupCommand {
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            password: "abcdef".to_string(),
            user_type: UserType::Trainer,
        };

        let user = gateway.signup(&command).await.unwrap().unwrap();
        assert_eq!(user.name, "Asha Rao");
        assert_eq!(user.user_type, UserType::Trainer);

        command.name = "  ".to_string();
        assert_eq!(gateway.signup(&command).await.unwrap().unwrap().name, "  ");

        command.name = String::new();
        assert_eq!(gateway.signup(&command).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_booking_confirms_after_delay() {
        let delay = Arc::new(RecordingDelay::new());
        let gateway = SimulatedBookingGateway::new(delay.clone(), 2000);
        let request = BookingRequest {
            trainer_id: 2,
            trainer_name: "Rajesh Kumar".to_string(),
            selection: BookingSelection {
                time: "06:00 PM".to_string(),
                ..BookingSelection::default()
            },
            total_price: 1500,
        };

        let confirmation = gateway.submit_booking(&request).await.unwrap();
        assert!(confirmation.reference.starts_with("booking::"));
        assert_eq!(confirmation.time, "06:00 PM");
        assert_eq!(confirmation.total_price, 1500);
        assert_eq!(delay.requested(), vec![2000]);
    }
}
