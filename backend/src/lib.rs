//! # Backend
//!
//! Contains all non-UI logic for the Svasthify booking site.
//!
//! This crate brings together:
//! - **Domain**: booking calendar, pricing, the booking wizard state machine, the auth stub
//!   and the smaller pieces of page state (notifications, carousel, newsletter)
//! - **Storage**: where the signed-in user record lives between visits
//! - **IO**: the asynchronous boundary to the outside world (booking and auth gateways)
//!
//! The backend is UI-agnostic. The Yew frontend drives it, and every piece of it runs
//! natively under `cargo test`.
//!
//! ## Architecture
//!
//! ```text
//! UI Layer (Yew frontend)
//!     ↓
//! Domain Layer (wizard, pricing, calendar, auth service)
//!     ↓                       ↓
//! Storage Layer          IO Layer (gateways, simulated delay)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

pub use config::AppConfig;
pub use domain::*;
pub use io::*;
pub use storage::*;
