//! Deterministic RNG wrappers.
//!
//! All randomness in the workspace flows from one seeded [`SimRng`], so a
//! run with a fixed seed is reproducible end to end.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::CustomerId;

/// Customer ids are drawn from `0..CUSTOMER_ID_SPACE`.
pub const CUSTOMER_ID_SPACE: u32 = 10_000;

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Process-level RNG.  Single-threaded use only.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}

// ── CustomerIdGenerator ───────────────────────────────────────────────────────

/// Mints customer ids for incoming requests.
///
/// Ids are random in `0..10_000` and are not guaranteed unique; the ledger
/// keys bookings by [`BookingId`](crate::BookingId), never by customer.
pub struct CustomerIdGenerator {
    rng: SimRng,
}

impl CustomerIdGenerator {
    pub fn new(seed: u64) -> Self {
        Self { rng: SimRng::new(seed) }
    }

    pub fn next_id(&mut self) -> CustomerId {
        CustomerId(self.rng.gen_range(0..CUSTOMER_ID_SPACE))
    }
}
