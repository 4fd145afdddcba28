pub mod app_services;
pub mod delay;
pub mod local_storage;
pub mod logging;

pub use app_services::AppServices;
