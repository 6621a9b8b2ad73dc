//! Read-only configuration shape.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings consumed by callers of the runner.
///
/// No defaults and no validation: whoever builds one is responsible for
/// populating it sensibly. Fields are read through getters only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConfigOptions {
    debug: bool,
    /// Milliseconds. `0` disables the per-attempt bound in the runner.
    timeout: u64,
    retries: u32,
}

impl ConfigOptions {
    pub fn new(debug: bool, timeout: u64, retries: u32) -> Self {
        Self {
            debug,
            timeout,
            retries,
        }
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn timeout(&self) -> u64 {
        self.timeout
    }

    pub fn timeout_duration(&self) -> Duration {
        Duration::from_millis(self.timeout)
    }

    pub fn retries(&self) -> u32 {
        self.retries
    }
}
