//! Auth service for the booking site.
//!
//! This is a placeholder sign-in flow. The gateway decides whether a login or signup is
//! accepted (see [`crate::io::SimulatedAuthGateway`]); this service keeps the current user in
//! memory and mirrors it to the session repository so it survives a reload.
//!
//! ## Key Responsibilities
//!
//! - **Session restore**: adopt the stored user on start-up, dropping unreadable records
//! - **Login / signup**: ask the gateway, persist and adopt the user on success
//! - **Logout**: forget the user in memory and in storage
//!
//! There is no credential verification, no password hashing and no multi-device session.
//! Passwords are never logged.

use anyhow::{anyhow, Result};
use log::{info, warn};
use shared::{User, UserType};
use std::sync::{Arc, Mutex};

use crate::domain::auth_form::validate_auth_form;
use crate::domain::commands::auth::{LoginCommand, SignupCommand};
use crate::domain::models::{AuthForm, AuthMode, AuthSubmitError};
use crate::io::AuthGateway;
use crate::storage::SessionRepository;

#[derive(Clone)]
pub struct AuthService {
    gateway: Arc<dyn AuthGateway>,
    sessions: SessionRepository,
    current_user: Arc<Mutex<Option<User>>>,
    min_password_length: usize,
}

impl AuthService {
    pub fn new(gateway: Arc<dyn AuthGateway>, sessions: SessionRepository, min_password_length: usize) -> Self {
        Self {
            gateway,
            sessions,
            current_user: Arc::new(Mutex::new(None)),
            min_password_length,
        }
    }

    pub fn current_user(&self) -> Option<User> {
        self.current_user.lock().ok().and_then(|user| user.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    fn set_current_user(&self, user: Option<User>) -> Result<()> {
        let mut current = self
            .current_user
            .lock()
            .map_err(|_| anyhow!("Current user lock poisoned"))?;
        *current = user;
        Ok(())
    }

    /// Adopt the persisted user, if any. A corrupt record is cleared and the session starts
    /// signed out.
    pub fn restore_session(&self) -> Result<Option<User>> {
        let user = self.sessions.load()?;
        match &user {
            Some(user) => info!("Restored session for {} ({})", user.email, user.user_type),
            None => info!("No session to restore"),
        }
        self.set_current_user(user.clone())?;
        Ok(user)
    }

    /// Sign in. `Ok(false)` when the credentials are refused; nothing is persisted then.
    pub async fn login(&self, command: LoginCommand) -> Result<bool> {
        info!("Login attempt for {} as {}", command.email, command.user_type);
        let user = self.gateway.login(&command).await?;
        self.adopt(user)
    }

    /// Create an account and sign in with it. `Ok(false)` when the signup is refused.
    pub async fn signup(&self, command: SignupCommand) -> Result<bool> {
        info!("Signup attempt for {} as {}", command.email, command.user_type);
        let user = self.gateway.signup(&command).await?;
        self.adopt(user)
    }

    fn adopt(&self, user: Option<User>) -> Result<bool> {
        let Some(user) = user else {
            warn!("Authentication refused");
            return Ok(false);
        };

        // last login wins: the single stored record is replaced
        self.sessions.save(&user)?;
        info!("Signed in as {} ({})", user.email, user.user_type);
        self.set_current_user(Some(user))?;
        Ok(true)
    }

    /// Forget the current user and delete the stored record
    pub fn logout(&self) -> Result<()> {
        if let Some(user) = self.current_user() {
            info!("Signing out {}", user.email);
        }
        self.set_current_user(None)?;
        self.sessions.clear()
    }

    /// Validate the auth modal form and, when it is clean, log in or sign up with it.
    ///
    /// Maps every outcome onto what the modal shows: inline field errors, the mode's
    /// rejection banner, or the generic failure banner.
    pub async fn submit_form(
        &self,
        mode: AuthMode,
        user_type: UserType,
        form: &AuthForm,
    ) -> Result<User, AuthSubmitError> {
        validate_auth_form(mode, form, self.min_password_length)
            .into_result()
            .map_err(AuthSubmitError::Invalid)?;

        let outcome = match mode {
            AuthMode::Login => {
                self.login(LoginCommand {
                    email: form.email.clone(),
                    password: form.password.clone(),
                    user_type,
                })
                .await
            }
            AuthMode::Signup => {
                self.signup(SignupCommand {
                    name: form.name.clone(),
                    email: form.email.clone(),
                    password: form.password.clone(),
                    user_type,
                })
                .await
            }
        };

        match outcome {
            Ok(true) => self
                .current_user()
                .ok_or_else(|| AuthSubmitError::Failed("Signed-in user missing".to_string())),
            Ok(false) => Err(AuthSubmitError::Rejected(mode)),
            Err(e) => {
                warn!("Authentication failed: {:#}", e);
                Err(AuthSubmitError::Failed(format!("{:#}", e)))
            }
        }
    }
}
