//! Configuration for the sync engine.

use std::time::Duration;

/// Timing and endpoint configuration for the board engine.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Base URL of the remote snapshot store.
    pub base_url: String,
    /// Quiet period before a debounced write fires.
    pub debounce_delay: Duration,
    /// Interval between reconciliation polls.
    pub poll_interval: Duration,
    /// Grace window after a successful write during which polls are
    /// suppressed, so a read never races the write's own remote settle.
    pub min_save_interval: Duration,
}

impl SyncConfig {
    /// Creates a configuration for the given store URL with default
    /// timings.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            debounce_delay: Duration::from_millis(400),
            poll_interval: Duration::from_secs(5),
            min_save_interval: Duration::from_secs(2),
        }
    }

    /// Sets the debounce quiet period.
    pub fn with_debounce_delay(mut self, delay: Duration) -> Self {
        self.debounce_delay = delay;
        self
    }

    /// Sets the poll interval.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Sets the post-write grace window.
    pub fn with_min_save_interval(mut self, interval: Duration) -> Self {
        self.min_save_interval = interval;
        self
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self::new("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder() {
        let config = SyncConfig::new("https://store.example.com")
            .with_debounce_delay(Duration::from_millis(250))
            .with_poll_interval(Duration::from_secs(10))
            .with_min_save_interval(Duration::from_secs(3));

        assert_eq!(config.base_url, "https://store.example.com");
        assert_eq!(config.debounce_delay, Duration::from_millis(250));
        assert_eq!(config.poll_interval, Duration::from_secs(10));
        assert_eq!(config.min_save_interval, Duration::from_secs(3));
    }

    #[test]
    fn default_timings() {
        let config = SyncConfig::default();
        assert!(config.debounce_delay < config.min_save_interval);
        assert!(config.min_save_interval < config.poll_interval);
    }
}
