pub mod auth;
pub mod booking;
pub mod validation;

pub use auth::*;
pub use booking::*;
pub use validation::*;
