use async_trait::async_trait;
use backend::Delay;
use gloo::timers::future::TimeoutFuture;

/// Browser timer delay
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooDelay;

#[async_trait(?Send)]
impl Delay for GlooDelay {
    async fn sleep(&self, ms: u32) {
        TimeoutFuture::new(ms).await;
    }
}
