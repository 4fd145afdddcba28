use async_trait::async_trait;
use std::sync::Mutex;

/// An awaitable pause.
///
/// Futures are `?Send`: in the browser they run on the single event loop, and tests drive them
/// on a current-thread runtime.
#[async_trait(?Send)]
pub trait Delay {
    async fn sleep(&self, ms: u32);
}

/// Returns immediately
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait(?Send)]
impl Delay for NoDelay {
    async fn sleep(&self, _ms: u32) {}
}

/// Returns immediately but remembers every requested pause
#[derive(Debug, Default)]
pub struct RecordingDelay {
    requested: Mutex<Vec<u32>>,
}

impl RecordingDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requested(&self) -> Vec<u32> {
        self.requested.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait(?Send)]
impl Delay for RecordingDelay {
    async fn sleep(&self, ms: u32) {
        if let Ok(mut requested) = self.requested.lock() {
            requested.push(ms);
        }
    }
}

/// Real wall-clock pause on the tokio timer
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioDelay;

#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl Delay for TokioDelay {
    async fn sleep(&self, ms: u32) {
        tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
    }
}
