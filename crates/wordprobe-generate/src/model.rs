use serde::{Deserialize, Serialize};

use crate::MAX_OUTPUT;

/// Knobs controlling one generation call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Number of candidates requested.
    pub count: usize,
    /// Minimum candidate length, measured before the watermark.
    pub min_len: usize,
    /// Maximum candidate length, measured before the watermark.
    pub max_len: usize,
    /// Enable the special-character append and insert stages.
    pub include_specials: bool,
    /// Enable the uppercase/case-variant stage.
    pub include_uppercase: bool,
    /// Seed for the call-scoped RNG; fixed seed, reproducible output.
    pub seed: u64,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            count: 1000,
            min_len: 6,
            max_len: 16,
            include_specials: true,
            include_uppercase: true,
            seed: 42,
        }
    }
}

impl GenerateOptions {
    /// Clamp the requested values into the supported ranges.
    pub fn clamped(mut self) -> Self {
        self.count = self.count.clamp(1, MAX_OUTPUT);
        self.min_len = self.min_len.max(1);
        self.max_len = self.max_len.min(50);
        self
    }
}
