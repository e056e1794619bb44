//! `rd-dispatch` — nearest-available cab dispatch for the rust_rd workspace.
//!
//! # Request lifecycle
//!
//! ```text
//! request(name, pickup, dropoff):
//!   ① Validate  — codes must exist and differ; refusals mutate nothing.
//!   ② Dispatch  — distances from the pickup to every available cab;
//!                 nearest reachable cab wins, ties to registration order.
//!   ③ Book      — cab → unavailable, parked at drop-off; booking B{n}
//!                 appended to the ledger.
//!   ④ Policy    — ResetPolicy counts the attempt and may release the
//!                 whole fleet (FleetRegistry::reset_all).
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rd_core::{DispatchConfig, LocationCode, LocationSet};
//! use rd_dispatch::{DispatcherBuilder, NoopObserver};
//! use rd_graph::DijkstraRouter;
//!
//! let mut dispatcher = DispatcherBuilder::new(DispatchConfig::default(), locations, DijkstraRouter)
//!     .roads(roads)
//!     .cabs(cabs)
//!     .build()?;
//! let outcome = dispatcher.request("Ada", LocationCode('a'), LocationCode('b'), &mut NoopObserver)?;
//! ```

pub mod builder;
pub mod dispatcher;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod observer;
pub mod policy;
pub mod request;


pub use builder::DispatcherBuilder;
pub use dispatcher::Dispatcher;
pub use engine::{BookingConfirmation, DispatchEngine, DispatchOutcome};
pub use error::{DispatchError, DispatchResult};
pub use ledger::{Booking, BookingLedger};
pub use observer::{DispatchObserver, NoopObserver};
pub use policy::{EveryNDispatches, NeverReset, ResetPolicy};
pub use request::RideRequest;
