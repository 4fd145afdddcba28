//! # Domain Module
//!
//! Business logic for the booking site, independent of any UI framework or storage mechanism.
//!
//! ## Module Organization
//!
//! - **calendar**: 6x7 booking calendar generation and the date availability rule
//! - **pricing**: session price from slot price, duration multiplier and session-type surcharge
//! - **booking_wizard**: the three-step booking dialog state machine
//! - **auth_service**: login/signup/logout stub on top of the session repository
//! - **auth_form**: inline validation of the auth modal form
//! - **notifications**: header notification list
//! - **carousel**: testimonial carousel navigation and swipe detection
//! - **newsletter**: footer newsletter signup
//!
//! ## Business Rules
//!
//! - A date is bookable iff it is today or later and not a Sunday
//! - Total = round(slot price x duration multiplier + session surcharge)
//! - The wizard only advances from step 1 with a date and a time, and only submits
//!   with a name, an email and a phone number
//! - Closing the booking dialog throws the selection away

pub mod auth_form;
pub mod auth_service;
pub mod booking_wizard;
pub mod calendar;
pub mod carousel;
pub mod commands;
pub mod models;
pub mod newsletter;
pub mod notifications;
pub mod pricing;

pub use auth_form::*;
pub use auth_service::*;
pub use booking_wizard::*;
pub use calendar::*;
pub use carousel::*;
pub use commands::{LoginCommand, SignupCommand};
pub use models::*;
pub use newsletter::*;
pub use notifications::*;
pub use pricing::*;
