//! `rd-fleet` — cab records and the fleet registry.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`cab`]      | `Cab`, `VehicleType`                                      |
//! | [`registry`] | `FleetRegistry` — ordered cabs + id index                 |
//! | [`error`]    | `FleetError`, `FleetResult<T>`                            |
//!
//! # Availability model
//!
//! A cab is either available or assigned:
//!
//! ```text
//! Available ──dispatch──▶ Assigned ──reset_all──▶ Available
//! ```
//!
//! There is no trip-completion event.  Assigned cabs become available only
//! when the caller runs [`FleetRegistry::reset_all`], and they stay wherever
//! their last drop-off left them.

pub mod cab;
pub mod error;
pub mod registry;


pub use cab::{Cab, VehicleType};
pub use error::{FleetError, FleetResult};
pub use registry::FleetRegistry;
