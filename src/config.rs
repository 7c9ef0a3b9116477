//! Engine configuration
//!
//! A single knob matters to the core: the bound on each lock acquisition
//! attempt. It is supplied externally (CLI flag in the service binary,
//! explicit value in tests) and carried into the engine by value.

use std::time::Duration;

/// Default bound on a single lock acquisition attempt, in milliseconds
pub const DEFAULT_LOCK_TIMEOUT_MS: u64 = 1000;

/// Configuration for the transfer engine
///
/// A transfer acquires at most two locks, each attempt bounded by
/// `lock_timeout`, so the worst-case wait for one transfer is twice this
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferConfig {
    /// Maximum wait for either account lock before the transfer fails
    /// with `LockTimeout`
    pub lock_timeout: Duration,
}

impl TransferConfig {
    /// Build a config from a timeout in milliseconds
    pub fn with_timeout_ms(lock_timeout_ms: u64) -> Self {
        TransferConfig {
            lock_timeout: Duration::from_millis(lock_timeout_ms),
        }
    }
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self::with_timeout_ms(DEFAULT_LOCK_TIMEOUT_MS)
    }
}
