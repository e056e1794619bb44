//! The `FleetRegistry` — every cab, in registration order.

use rustc_hash::FxHashMap;
use tracing::debug;

use rd_core::{CabId, LocationCode};

use crate::{Cab, FleetError, FleetResult};

/// Ordered cab storage plus an id → slot index.
///
/// `cabs` keeps registration order.  Iteration order is stable and is what
/// the dispatch engine uses to break distance ties, so the order cabs are
/// registered in matters for reproducibility.  It is not a ranking.
#[derive(Clone, Debug, Default)]
pub struct FleetRegistry {
    cabs:  Vec<Cab>,
    index: FxHashMap<CabId, usize>,
}

impl FleetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every cab in `cabs`, in order.
    pub fn from_cabs(cabs: impl IntoIterator<Item = Cab>) -> FleetResult<Self> {
        let mut fleet = Self::new();
        for cab in cabs {
            fleet.add_cab(cab)?;
        }
        Ok(fleet)
    }

    /// Append `cab` to the fleet.
    ///
    /// # Errors
    ///
    /// [`FleetError::DuplicateCab`] if a cab with the same id exists.
    pub fn add_cab(&mut self, cab: Cab) -> FleetResult<()> {
        if self.index.contains_key(&cab.id) {
            return Err(FleetError::DuplicateCab(cab.id));
        }
        self.index.insert(cab.id, self.cabs.len());
        self.cabs.push(cab);
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn get(&self, id: CabId) -> Option<&Cab> {
        self.index.get(&id).map(|&slot| &self.cabs[slot])
    }

    fn get_mut(&mut self, id: CabId) -> FleetResult<&mut Cab> {
        match self.index.get(&id) {
            Some(&slot) => Ok(&mut self.cabs[slot]),
            None => Err(FleetError::CabNotFound(id)),
        }
    }

    /// All cabs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Cab> + '_ {
        self.cabs.iter()
    }

    /// Cabs that can take a ride, in registration order.
    pub fn available_cabs(&self) -> impl Iterator<Item = &Cab> + '_ {
        self.cabs.iter().filter(|c| c.available)
    }

    pub fn available_count(&self) -> usize {
        self.available_cabs().count()
    }

    pub fn len(&self) -> usize {
        self.cabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cabs.is_empty()
    }

    // ── Mutations ─────────────────────────────────────────────────────────

    /// Take `id` out of the available pool.
    ///
    /// Calling this on a cab that is already assigned is a logic error in the
    /// caller and trips a debug assertion.
    pub fn mark_unavailable(&mut self, id: CabId) -> FleetResult<()> {
        let cab = self.get_mut(id)?;
        debug_assert!(cab.available, "cab {id} assigned twice");
        cab.available = false;
        Ok(())
    }

    /// Move `id` to `location` without touching availability.
    pub fn relocate(&mut self, id: CabId, location: LocationCode) -> FleetResult<()> {
        self.get_mut(id)?.location = location;
        Ok(())
    }

    /// Assign `id` to a ride ending at `dropoff`: mark it unavailable and
    /// park it at the drop-off.
    pub fn assign(&mut self, id: CabId, dropoff: LocationCode) -> FleetResult<()> {
        self.mark_unavailable(id)?;
        self.relocate(id, dropoff)
    }

    /// Make every cab available again, wherever it currently is.
    ///
    /// Locations are left untouched; a cab that dropped a rider off at `f`
    /// stays at `f`.  Returns how many cabs changed state.
    pub fn reset_all(&mut self) -> usize {
        let mut released = 0;
        for cab in &mut self.cabs {
            if !cab.available {
                cab.available = true;
                released += 1;
            }
        }
        debug!(released, fleet = self.cabs.len(), "fleet availability reset");
        released
    }
}
