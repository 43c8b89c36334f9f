//! Dispatch configuration

use crate::DEFAULT_MAX_LISTENERS;
use serde::{Deserialize, Serialize};

/// Configuration of an event target's delivery loop.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Convert listener panics into reported failures instead of unwinding
    /// through `notify`.
    pub catch_panics: bool,
    /// Registrations per kind above which a possible leak is logged once.
    /// `0` disables the warning.
    pub max_listeners_per_kind: usize,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            catch_panics: true,
            max_listeners_per_kind: DEFAULT_MAX_LISTENERS,
        }
    }
}

impl DispatchConfig {
    /// Builder-style method to set panic isolation
    pub fn with_catch_panics(mut self, catch_panics: bool) -> Self {
        self.catch_panics = catch_panics;
        self
    }

    /// Builder-style method to set the leak warning threshold
    pub fn with_max_listeners(mut self, max: usize) -> Self {
        self.max_listeners_per_kind = max;
        self
    }

    /// Whether adding the `count`-th registration crosses the leak threshold.
    pub fn crosses_leak_threshold(&self, count: usize) -> bool {
        self.max_listeners_per_kind != 0 && count == self.max_listeners_per_kind + 1
    }
}
