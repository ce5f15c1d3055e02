//! Recording sleeper for retry tests.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::transport::Sleeper;

/// A [`Sleeper`] that returns immediately and remembers every delay.
///
/// Clones share the same record, so keep one clone and hand the other to
/// the client.
#[derive(Debug, Clone, Default)]
pub struct RecordingSleeper {
    delays: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingSleeper {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Delays requested so far, in order.
    #[must_use]
    pub fn delays(&self) -> Vec<Duration> {
        self.delays
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Delays requested so far, in whole seconds.
    #[must_use]
    pub fn delay_secs(&self) -> Vec<u64> {
        self.delays().iter().map(Duration::as_secs).collect()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.delays
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_records_without_waiting() {
        let sleeper = RecordingSleeper::new();
        let shared = sleeper.clone();

        shared.sleep(Duration::from_secs(30)).await;
        shared.sleep(Duration::from_secs(1)).await;

        assert_eq!(sleeper.delay_secs(), vec![30, 1]);
    }
}
