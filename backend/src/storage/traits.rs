//! # Storage Traits
//!
//! Key-value abstraction over the place the session record is kept, so the auth service can
//! run against browser local storage, a file, or plain memory without modification.

use anyhow::Result;

/// Raw text storage keyed by string.
///
/// Synchronous because every backing store in use (browser local storage, a small file,
/// memory) answers immediately.
pub trait SessionStorage: Send + Sync {
    /// Read the value stored under `key`, `None` when absent
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete the value under `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
