use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Duration};

/// Delays a handler until calls stop arriving for a quiet period.
/// Only the last call of a burst runs, with its own arguments.
pub struct Debouncer<T> {
    delay   : Duration,
    handler : Arc<dyn Fn(T) + Send + Sync>,
    pending : Option<JoinHandle<()>>,
}

impl<T> Debouncer<T> where T: Send + 'static {
    pub fn new<F>(delay: u64 /* ms */, handler: F) -> Self
    where F: Fn(T) + Send + Sync + 'static {
        Self {
            delay   : Duration::from_millis(delay),
            handler : Arc::new(handler),
            pending : None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Supersedes any scheduled call and schedules `args` after the quiet period.
    /// Must be called inside a tokio runtime.
    pub fn trigger(&mut self, args: T) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }

        let handler = self.handler.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            sleep(delay).await;
            handler(args);
        }));
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}
