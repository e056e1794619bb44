//! `rd-graph` — road graph and shortest-path routing.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`distance`] | `Distance` (km, with `UNREACHABLE` sentinel), `DistanceTable` |
//! | [`network`]  | `RoadGraph` (CSR multigraph), `RoadGraphBuilder`           |
//! | [`router`]   | `Router` trait, `Route`, `DijkstraRouter`                  |
//! | [`error`]    | `GraphError`, `GraphResult<T>`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public value types.     |

pub mod distance;
pub mod error;
pub mod network;
pub mod router;

#[cfg(test)]
mod tests;

pub use distance::{Distance, DistanceTable};
pub use error::{GraphError, GraphResult};
pub use network::{RoadGraph, RoadGraphBuilder};
pub use router::{DijkstraRouter, Route, Router};
