use backend::{
    AppConfig, AuthService, BookingGateway, SessionRepository, SimulatedAuthGateway,
    SimulatedBookingGateway,
};
use std::rc::Rc;
use std::sync::Arc;

use super::delay::GlooDelay;
use super::local_storage::LocalStorageSessionStorage;

const SITE_CONFIG: &str = include_str!("../../config/site.yaml");

/// Everything the components need from the backend, shared through a Yew context
#[derive(Clone)]
pub struct AppServices {
    pub config: Rc<AppConfig>,
    pub auth: AuthService,
    pub booking_gateway: Rc<dyn BookingGateway>,
}

impl AppServices {
    pub fn new() -> Self {
        let config = AppConfig::from_yaml_or_default(SITE_CONFIG);
        Self::with_config(config)
    }

    pub fn with_config(config: AppConfig) -> Self {
        let delay = Arc::new(GlooDelay);
        let sessions = SessionRepository::new(
            Arc::new(LocalStorageSessionStorage),
            config.session_storage_key.clone(),
        );
        let auth = AuthService::new(
            Arc::new(SimulatedAuthGateway::from_config(&config, delay.clone())),
            sessions,
            config.min_password_length,
        );
        let booking_gateway: Rc<dyn BookingGateway> =
            Rc::new(SimulatedBookingGateway::from_config(&config, delay));

        Self {
            config: Rc::new(config),
            auth,
            booking_gateway,
        }
    }
}

impl Default for AppServices {
    fn default() -> Self {
        Self::new()
    }
}

// Services are built once per app; identity is enough for Yew's change detection
impl PartialEq for AppServices {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.config, &other.config)
    }
}
