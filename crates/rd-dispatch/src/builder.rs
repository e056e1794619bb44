//! Fluent builder for constructing a [`Dispatcher`].

use rd_core::{CustomerIdGenerator, DispatchConfig, LocationCode, LocationSet};
use rd_fleet::{Cab, FleetRegistry};
use rd_graph::{RoadGraphBuilder, Router};

use crate::{
    BookingLedger, DispatchEngine, DispatchError, DispatchResult, Dispatcher, EveryNDispatches,
    ResetPolicy,
};

/// Fluent builder for [`Dispatcher<R, P>`].
///
/// # Required inputs
///
/// - [`DispatchConfig`] — reset threshold and seed
/// - [`LocationSet`] — every code roads, cabs, and requests may use
/// - `R: Router` — the shortest-path algorithm (e.g. [`rd_graph::DijkstraRouter`])
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default                                          |
/// |---------------|--------------------------------------------------|
/// | `.road(..)`   | No roads (every cab unreachable)                 |
/// | `.cab(..)`    | Empty fleet                                      |
/// | `.policy(p)`  | `EveryNDispatches(config.reset_threshold)`       |
///
/// # Example
///
/// ```rust,ignore
/// let mut dispatcher = DispatcherBuilder::new(config, locations, DijkstraRouter)
///     .roads(roads)
///     .cabs(cabs)
///     .build()?;
/// dispatcher.request("Ada", 'a'.into(), 'c'.into(), &mut NoopObserver)?;
/// ```
pub struct DispatcherBuilder<R: Router, P: ResetPolicy> {
    config:    DispatchConfig,
    locations: LocationSet,
    roads:     Vec<(LocationCode, LocationCode, u32)>,
    cabs:      Vec<Cab>,
    router:    R,
    policy:    P,
}

impl<R: Router> DispatcherBuilder<R, EveryNDispatches> {
    /// Create a builder with all required inputs and the default policy.
    pub fn new(config: DispatchConfig, locations: LocationSet, router: R) -> Self {
        let policy = EveryNDispatches::new(config.reset_threshold);
        Self {
            config,
            locations,
            roads: Vec::new(),
            cabs:  Vec::new(),
            router,
            policy,
        }
    }
}

impl<R: Router, P: ResetPolicy> DispatcherBuilder<R, P> {
    /// Add one undirected road of `km` kilometres.
    pub fn road(mut self, u: LocationCode, v: LocationCode, km: u32) -> Self {
        self.roads.push((u, v, km));
        self
    }

    pub fn roads(mut self, roads: impl IntoIterator<Item = (LocationCode, LocationCode, u32)>) -> Self {
        self.roads.extend(roads);
        self
    }

    /// Register one cab.  Registration order is the dispatch tie-break order.
    pub fn cab(mut self, cab: Cab) -> Self {
        self.cabs.push(cab);
        self
    }

    pub fn cabs(mut self, cabs: impl IntoIterator<Item = Cab>) -> Self {
        self.cabs.extend(cabs);
        self
    }

    /// Replace the reset policy.
    pub fn policy<Q: ResetPolicy>(self, policy: Q) -> DispatcherBuilder<R, Q> {
        DispatcherBuilder {
            config:    self.config,
            locations: self.locations,
            roads:     self.roads,
            cabs:      self.cabs,
            router:    self.router,
            policy,
        }
    }

    /// Validate inputs, build the road graph and fleet, and return a ready
    /// [`Dispatcher`].
    ///
    /// # Errors
    ///
    /// - [`DispatchError::Config`] if the config fails validation.
    /// - [`DispatchError::UnknownLocation`] if a road or cab references a
    ///   code outside the location set.
    /// - [`DispatchError::Fleet`] on duplicate cab ids.
    pub fn build(self) -> DispatchResult<Dispatcher<R, P>> {
        self.config.validate()?;

        // ── Cabs must start on the map ────────────────────────────────────
        if let Some(cab) = self.cabs.iter().find(|c| !self.locations.contains(c.location)) {
            return Err(DispatchError::UnknownLocation(cab.location));
        }
        let fleet = FleetRegistry::from_cabs(self.cabs)?;

        // ── Road graph ────────────────────────────────────────────────────
        let mut graph = RoadGraphBuilder::with_capacity(self.locations, self.roads.len());
        for (u, v, km) in self.roads {
            graph.add_edge(u, v, km)?;
        }
        let graph = graph.build();

        Ok(Dispatcher {
            customer_ids: CustomerIdGenerator::new(self.config.seed),
            config:       self.config,
            graph,
            fleet,
            ledger:       BookingLedger::new(),
            engine:       DispatchEngine::new(self.router),
            policy:       self.policy,
        })
    }
}
