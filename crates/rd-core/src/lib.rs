//! `rd-core` — foundational types for the `rust_rd` ride-dispatch workspace.
//!
//! Every other `rd-*` crate depends on this one.  It has no `rd-*`
//! dependencies and only `rand` and `thiserror` externally (plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`ids`]      | `CabId`, `CustomerId`, `BookingId`, `NodeId`, `EdgeId`|
//! | [`location`] | `LocationCode`, `Location`, `LocationSet`             |
//! | [`config`]   | `DispatchConfig`                                      |
//! | [`rng`]      | `SimRng`, `CustomerIdGenerator`                       |
//! | [`error`]    | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod location;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::DispatchConfig;
pub use error::{CoreError, CoreResult};
pub use ids::{BookingId, CabId, CustomerId, EdgeId, NodeId};
pub use location::{Location, LocationCode, LocationSet};
pub use rng::{CustomerIdGenerator, SimRng};
