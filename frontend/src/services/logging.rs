//! Component-tagged logging on top of the `log` facade.
//!
//! `console_log` forwards everything to the browser console; the component tag makes it easy
//! to filter by section.

pub struct Logger;

impl Logger {
    pub fn init() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            gloo::console::error!("Failed to initialise logging:", e.to_string());
        }
    }

    pub fn debug_with_component(component: &str, message: &str) {
        log::debug!(target: "svasthify", "[{}] {}", component, message);
    }

    pub fn info_with_component(component: &str, message: &str) {
        log::info!(target: "svasthify", "[{}] {}", component, message);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        log::warn!(target: "svasthify", "[{}] {}", component, message);
    }

    pub fn error_with_component(component: &str, message: &str) {
        log::error!(target: "svasthify", "[{}] {}", component, message);
    }
}
