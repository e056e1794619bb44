//! Dispatch observer trait for progress reporting.

use crate::{BookingConfirmation, DispatchError, RideRequest};

/// Callbacks invoked by [`Dispatcher::submit`][crate::Dispatcher::submit].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — booking counter
///
/// ```rust,ignore
/// struct Counter { booked: usize }
///
/// impl DispatchObserver for Counter {
///     fn on_booked(&mut self, _c: &BookingConfirmation) {
///         self.booked += 1;
///     }
/// }
/// ```
pub trait DispatchObserver {
    /// A cab was assigned and the booking recorded.
    fn on_booked(&mut self, _confirmation: &BookingConfirmation) {}

    /// The request was valid but no cab could reach the pickup.
    fn on_no_cab(&mut self, _request: &RideRequest) {}

    /// The request was refused before any state changed.
    fn on_rejected(&mut self, _request: &RideRequest, _error: &DispatchError) {}

    /// The reset policy fired.  `released` cabs went back to available.
    fn on_reset(&mut self, _released: usize) {}
}

/// A [`DispatchObserver`] that does nothing.
pub struct NoopObserver;

impl DispatchObserver for NoopObserver {}
