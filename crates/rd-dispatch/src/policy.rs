//! Fleet reset policies.
//!
//! Cabs never finish trips on their own.  Instead, the dispatcher asks a
//! [`ResetPolicy`] after every dispatch attempt whether the whole fleet
//! should be released.  The policy is kept outside the engine so it can be
//! swapped or tested on its own.

/// Decides when the fleet is bulk-reset to available.
pub trait ResetPolicy {
    /// Note one dispatch attempt (booked or not).  Returns `true` when the
    /// caller must run [`FleetRegistry::reset_all`](rd_fleet::FleetRegistry::reset_all).
    fn record_dispatch(&mut self) -> bool;
}

/// Reset once every `threshold` dispatch attempts, then start counting again.
#[derive(Clone, Debug)]
pub struct EveryNDispatches {
    threshold: u32,
    count:     u32,
}

impl EveryNDispatches {
    pub fn new(threshold: u32) -> Self {
        Self { threshold, count: 0 }
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Attempts recorded since the last reset.
    pub fn count(&self) -> u32 {
        self.count
    }
}

impl ResetPolicy for EveryNDispatches {
    fn record_dispatch(&mut self) -> bool {
        self.count += 1;
        if self.count >= self.threshold {
            self.count = 0;
            true
        } else {
            false
        }
    }
}

/// Never reset.  Assigned cabs stay assigned for the rest of the run.
#[derive(Clone, Copy, Debug, Default)]
pub struct NeverReset;

impl ResetPolicy for NeverReset {
    fn record_dispatch(&mut self) -> bool {
        false
    }
}
