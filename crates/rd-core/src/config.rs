//! Dispatch-wide configuration constants.

use crate::{CoreError, CoreResult};

/// Number of dispatch attempts between two fleet-wide availability resets.
pub const DEFAULT_RESET_THRESHOLD: u32 = 6;

/// Seed used when the caller does not supply one.
pub const DEFAULT_SEED: u64 = 42;

/// Startup configuration owned by the dispatcher.
///
/// The location set, road list, and fleet are supplied separately to the
/// dispatcher builder; this struct only carries the scalar policy knobs.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DispatchConfig {
    /// Every `reset_threshold` dispatch attempts the whole fleet is marked
    /// available again.
    pub reset_threshold: u32,

    /// Seed for the customer-id generator.  Identical seeds produce identical
    /// id sequences.
    pub seed: u64,
}

impl DispatchConfig {
    /// Reject values the dispatcher cannot run with.
    pub fn validate(&self) -> CoreResult<()> {
        if self.reset_threshold == 0 {
            return Err(CoreError::Config(
                "reset_threshold must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            reset_threshold: DEFAULT_RESET_THRESHOLD,
            seed:            DEFAULT_SEED,
        }
    }
}
