//! Gateway traits for the operations that would go over the network in a real deployment.

use anyhow::Result;
use async_trait::async_trait;
use shared::{BookingConfirmation, BookingRequest, User};

use crate::domain::commands::auth::{LoginCommand, SignupCommand};

/// Answers sign-in and sign-up attempts
#[async_trait(?Send)]
pub trait AuthGateway {
    /// `Ok(None)` when the credentials are refused, `Err` when the call itself failed
    async fn login(&self, command: &LoginCommand) -> Result<Option<User>>;

    /// `Ok(None)` when the account could not be created
    async fn signup(&self, command: &SignupCommand) -> Result<Option<User>>;
}

/// Places bookings
#[async_trait(?Send)]
pub trait BookingGateway {
    async fn submit_booking(&self, request: &BookingRequest) -> Result<BookingConfirmation>;
}
