//! Nearest-available-cab selection.

use tracing::{debug, info};

use rd_core::LocationCode;
use rd_fleet::{Cab, FleetRegistry, VehicleType};
use rd_graph::{Distance, DistanceTable, RoadGraph, Router};

use crate::{Booking, BookingLedger, DispatchError, DispatchResult, RideRequest};

// ── Outcome types ─────────────────────────────────────────────────────────────

/// Everything the front end needs to tell a rider their cab is coming.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookingConfirmation {
    pub booking:         Booking,
    pub driver:          String,
    pub vehicle:         VehicleType,
    pub pickup_name:     String,
    pub dropoff_name:    String,
    /// Road distance the cab covers to reach the pickup.
    pub pickup_distance: Distance,
}

/// Result of a dispatch attempt that passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DispatchOutcome {
    Booked(BookingConfirmation),
    /// Every cab is assigned, or none can reach the pickup.
    NoCabAvailable,
}

impl DispatchOutcome {
    pub fn is_booked(&self) -> bool {
        matches!(self, DispatchOutcome::Booked(_))
    }

    pub fn booking(&self) -> Option<&Booking> {
        match self {
            DispatchOutcome::Booked(c) => Some(&c.booking),
            DispatchOutcome::NoCabAvailable => None,
        }
    }
}

// ── DispatchEngine ────────────────────────────────────────────────────────────

/// Assigns the closest available cab to a request.
///
/// # Type parameter
///
/// `R` is the shortest-path algorithm (e.g. [`rd_graph::DijkstraRouter`]).
///
/// # Selection rule
///
/// Available cabs are scanned in fleet registration order.  The cab with the
/// smallest road distance to the pickup wins; on a tie the earlier cab keeps
/// the ride.  Cabs that cannot reach the pickup at all are skipped.
pub struct DispatchEngine<R: Router> {
    pub router: R,
}

impl<R: Router> DispatchEngine<R> {
    pub fn new(router: R) -> Self {
        Self { router }
    }

    /// Dispatch one request.
    ///
    /// On success the chosen cab is marked unavailable and parked at the
    /// drop-off, and a booking is appended to `ledger`.  When no cab is
    /// eligible nothing changes and [`DispatchOutcome::NoCabAvailable`] is
    /// returned.
    ///
    /// # Errors
    ///
    /// - [`DispatchError::SameOriginDestination`] if pickup equals drop-off.
    /// - [`DispatchError::UnknownLocation`] if either end is not in `graph`.
    ///
    /// No state is touched when an error is returned.
    pub fn dispatch(
        &self,
        request: &RideRequest,
        graph:   &RoadGraph,
        fleet:   &mut FleetRegistry,
        ledger:  &mut BookingLedger,
    ) -> DispatchResult<DispatchOutcome> {
        if request.is_round_trip() {
            return Err(DispatchError::SameOriginDestination(request.pickup));
        }
        let pickup = graph.node_of(request.pickup)?;
        graph.node_of(request.dropoff)?;

        let table = self.router.distances_from(graph, pickup);
        let Some((cab, pickup_distance)) = nearest_available(graph, fleet, &table)? else {
            info!(customer = %request.customer_id, pickup = %request.pickup, "no cab available");
            return Ok(DispatchOutcome::NoCabAvailable);
        };
        let (cab_id, driver, vehicle) = (cab.id, cab.driver.clone(), cab.vehicle);

        fleet.assign(cab_id, request.dropoff)?;

        let booking = Booking {
            id:       ledger.next_id(),
            customer: request.customer_id,
            cab:      cab_id,
            pickup:   request.pickup,
            dropoff:  request.dropoff,
        };
        ledger.record(booking.clone());

        info!(
            booking = %booking.id,
            cab = %cab_id,
            customer = %request.customer_id,
            distance = %pickup_distance,
            "cab dispatched"
        );

        Ok(DispatchOutcome::Booked(BookingConfirmation {
            booking,
            driver,
            vehicle,
            pickup_name:  location_name(graph, request.pickup),
            dropoff_name: location_name(graph, request.dropoff),
            pickup_distance,
        }))
    }
}

/// First available cab with the strictly smallest finite distance.
fn nearest_available<'f>(
    graph: &RoadGraph,
    fleet: &'f FleetRegistry,
    table: &DistanceTable,
) -> DispatchResult<Option<(&'f Cab, Distance)>> {
    let mut best: Option<(&Cab, Distance)> = None;
    for cab in fleet.available_cabs() {
        let d = table.get(graph.node_of(cab.location)?);
        if !d.is_reachable() {
            debug!(cab = %cab.id, location = %cab.location, "cab cannot reach pickup");
            continue;
        }
        if best.is_none_or(|(_, best_d)| d < best_d) {
            best = Some((cab, d));
        }
    }
    Ok(best)
}

fn location_name(graph: &RoadGraph, code: LocationCode) -> String {
    graph.locations().name(code).unwrap_or_default().to_owned()
}
