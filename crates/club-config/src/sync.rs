//! Batch persistence tuning.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default number of rows persisted concurrently.
const fn default_concurrency() -> usize {
    4
}

/// Default per-call timeout in milliseconds.
const fn default_call_timeout_ms() -> u64 {
    5_000
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SyncConfig {
    /// Maximum store calls in flight during a batch. `1` persists rows one by one.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Upper bound for a single store call before the row is reported as failed.
    #[serde(default = "default_call_timeout_ms")]
    pub call_timeout_ms: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            concurrency: default_concurrency(),
            call_timeout_ms: default_call_timeout_ms(),
        }
    }
}

impl SyncConfig {
    #[must_use]
    pub const fn call_timeout(&self) -> Duration {
        Duration::from_millis(self.call_timeout_ms)
    }

    /// # Errors
    ///
    /// [`ConfigError::InvalidValue`] when either knob is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.concurrency == 0 {
            return Err(ConfigError::InvalidValue {
                field: "sync.concurrency".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.call_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "sync.call_timeout_ms".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}
