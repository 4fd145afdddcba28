//! # Storage Module
//!
//! Where the signed-in user record lives between visits.
//!
//! The domain layer never touches a concrete store. It talks to a [`SessionRepository`], which
//! serializes the [`shared::User`] to JSON and hands the text to a [`SessionStorage`]
//! implementation:
//!
//! - **InMemorySessionStorage**: process-local, used by tests
//! - **FileSessionStorage**: one JSON file on disk (native builds only)
//! - **LocalStorageSessionStorage**: browser local storage, lives in the frontend crate
//!
//! There is exactly one record: the last login wins and logout deletes it.

pub mod memory;
pub mod repository;
pub mod traits;

#[cfg(not(target_arch = "wasm32"))]
pub mod file;

pub use memory::InMemorySessionStorage;
pub use repository::SessionRepository;
pub use traits::SessionStorage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileSessionStorage;
