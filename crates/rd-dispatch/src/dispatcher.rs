//! The `Dispatcher` session: boundary validation, dispatch, and reset policy.

use tracing::info;

use rd_core::{CustomerIdGenerator, DispatchConfig, LocationCode, LocationSet};
use rd_fleet::FleetRegistry;
use rd_graph::{RoadGraph, Router};

use crate::{
    BookingLedger, DispatchEngine, DispatchError, DispatchObserver, DispatchOutcome,
    DispatchResult, ResetPolicy, RideRequest,
};

/// Owns all dispatch state and processes one request at a time.
///
/// Per request:
///
/// 1. **Validate** — both codes must be known and must differ.  Refused
///    requests change nothing and do not count towards the reset policy.
/// 2. **Dispatch** — [`DispatchEngine::dispatch`] picks and books a cab, or
///    reports that none is available.
/// 3. **Policy** — the [`ResetPolicy`] is told about the attempt and may ask
///    for [`FleetRegistry::reset_all`].
///
/// Create via [`DispatcherBuilder`][crate::DispatcherBuilder].  Every method
/// that mutates state takes `&mut self`, so one request always runs to
/// completion before the next starts.
pub struct Dispatcher<R: Router, P: ResetPolicy> {
    pub config: DispatchConfig,

    /// Road graph.  Also holds the location set used for validation.
    pub graph: RoadGraph,

    pub fleet: FleetRegistry,

    pub ledger: BookingLedger,

    pub engine: DispatchEngine<R>,

    /// Consulted after each dispatch attempt.
    pub policy: P,

    pub(crate) customer_ids: CustomerIdGenerator,
}

impl<R: Router, P: ResetPolicy> Dispatcher<R, P> {
    pub fn locations(&self) -> &LocationSet {
        self.graph.locations()
    }

    /// Build a request from raw input, minting a fresh customer id.
    ///
    /// # Errors
    ///
    /// - [`DispatchError::UnknownLocation`] for codes outside the location set.
    /// - [`DispatchError::SameOriginDestination`] if both codes match.
    pub fn new_request(
        &mut self,
        customer_name: impl Into<String>,
        pickup:        LocationCode,
        dropoff:       LocationCode,
    ) -> DispatchResult<RideRequest> {
        let locations = self.graph.locations();
        let pickup  = locations.validate(pickup)?;
        let dropoff = locations.validate(dropoff)?;
        if pickup == dropoff {
            return Err(DispatchError::SameOriginDestination(pickup));
        }
        Ok(RideRequest::new(self.customer_ids.next_id(), customer_name, pickup, dropoff))
    }

    /// Dispatch `request`, then apply the reset policy.
    ///
    /// A [`DispatchOutcome::NoCabAvailable`] still counts as an attempt.
    pub fn submit<O: DispatchObserver>(
        &mut self,
        request:  &RideRequest,
        observer: &mut O,
    ) -> DispatchResult<DispatchOutcome> {
        let outcome = match self.engine.dispatch(request, &self.graph, &mut self.fleet, &mut self.ledger) {
            Ok(outcome) => outcome,
            Err(e) => {
                observer.on_rejected(request, &e);
                return Err(e);
            }
        };

        match &outcome {
            DispatchOutcome::Booked(confirmation) => observer.on_booked(confirmation),
            DispatchOutcome::NoCabAvailable => observer.on_no_cab(request),
        }

        if self.policy.record_dispatch() {
            let released = self.fleet.reset_all();
            info!(released, bookings = self.ledger.len(), "periodic fleet reset");
            observer.on_reset(released);
        }

        Ok(outcome)
    }

    /// [`new_request`](Self::new_request) followed by [`submit`](Self::submit).
    pub fn request<O: DispatchObserver>(
        &mut self,
        customer_name: impl Into<String>,
        pickup:        LocationCode,
        dropoff:       LocationCode,
        observer:      &mut O,
    ) -> DispatchResult<DispatchOutcome> {
        let request = self.new_request(customer_name, pickup, dropoff)?;
        self.submit(&request, observer)
    }
}
