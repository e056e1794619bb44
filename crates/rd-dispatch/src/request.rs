//! Incoming ride requests.

use rd_core::{CustomerId, LocationCode};

/// One customer asking for a ride.  Lives only until it is dispatched.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RideRequest {
    pub customer_id:   CustomerId,
    pub customer_name: String,
    pub pickup:        LocationCode,
    pub dropoff:       LocationCode,
}

impl RideRequest {
    pub fn new(
        customer_id:   CustomerId,
        customer_name: impl Into<String>,
        pickup:        LocationCode,
        dropoff:       LocationCode,
    ) -> Self {
        Self { customer_id, customer_name: customer_name.into(), pickup, dropoff }
    }

    /// `true` when pickup and drop-off coincide.  Such requests are refused.
    pub fn is_round_trip(&self) -> bool {
        self.pickup == self.dropoff
    }
}
