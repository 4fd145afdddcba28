//! # IO Module
//!
//! The asynchronous edge of the backend. Anything that would talk to a server sits behind a
//! gateway trait here; today those gateways are simulated with a fixed delay.
//!
//! - **delay**: the `Delay` abstraction used instead of timers
//! - **gateway**: `AuthGateway` and `BookingGateway`
//! - **simulated**: delay-then-answer implementations of both gateways

pub mod delay;
pub mod gateway;
pub mod simulated;

pub use delay::{Delay, NoDelay, RecordingDelay};
#[cfg(not(target_arch = "wasm32"))]
pub use delay::TokioDelay;
pub use gateway::{AuthGateway, BookingGateway};
pub use simulated::{SimulatedAuthGateway, SimulatedBookingGateway};
