//! Domain-level command types.
//!
//! Services take these rather than loose argument lists. The frontend builds them
//! from form state.

pub mod auth {
    use shared::UserType;

    /// Input for signing in.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct LoginCommand {
        pub email: String,
        pub password: String,
        pub user_type: UserType,
    }

    /// Input for creating an account.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SignupCommand {
        pub name: String,
        pub email: String,
        pub password: String,
        pub user_type: UserType,
    }
}

pub use auth::{LoginCommand, SignupCommand};
