//! Append-only booking ledger.

use rd_core::{BookingId, CabId, CustomerId, LocationCode};

/// A completed dispatch.  Immutable once recorded.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Booking {
    pub id:       BookingId,
    pub customer: CustomerId,
    pub cab:      CabId,
    pub pickup:   LocationCode,
    pub dropoff:  LocationCode,
}

/// Every booking made this run, in creation order.
///
/// Booking ids are sequence numbers: the `n`-th booking recorded is `B{n}`.
/// The ledger only grows; nothing is ever removed or edited.
#[derive(Clone, Debug, Default)]
pub struct BookingLedger {
    bookings: Vec<Booking>,
}

impl BookingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id the next recorded booking must carry.
    pub fn next_id(&self) -> BookingId {
        BookingId(self.bookings.len() as u32 + 1)
    }

    /// Append `booking` and return its id.
    pub fn record(&mut self, booking: Booking) -> BookingId {
        debug_assert_eq!(booking.id, self.next_id(), "booking ids must be sequential");
        let id = booking.id;
        self.bookings.push(booking);
        id
    }

    pub fn get(&self, id: BookingId) -> Option<&Booking> {
        id.index().checked_sub(1).and_then(|i| self.bookings.get(i))
    }

    pub fn last(&self) -> Option<&Booking> {
        self.bookings.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Booking> + '_ {
        self.bookings.iter()
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }
}
