//! Pauses between sequential upstream calls.
//!
//! The registry has no bulk endpoint and rate-limits single checks, so batch
//! checks wait between calls. Waiting goes through [`Pacer`] so tests can
//! record pauses instead of sleeping.

use async_trait::async_trait;
use std::time::Duration;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Pacer: Send + Sync {
    async fn pause(&self, duration: Duration);
}

/// Sleeps on the Tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioPacer;

#[async_trait]
impl Pacer for TokioPacer {
    async fn pause(&self, duration: Duration) {
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }
}
