//! Road distances.

use std::fmt;

use rd_core::NodeId;

/// A road distance in whole kilometres.
///
/// `Distance::UNREACHABLE` stands in for "infinity": it compares greater than
/// every real distance, and path sums never reach it by accident because
/// [`Distance::saturating_add`] caps one below the sentinel.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Distance(pub u32);

impl Distance {
    pub const ZERO: Distance = Distance(0);

    /// No path exists.
    pub const UNREACHABLE: Distance = Distance(u32::MAX);

    /// Largest finite distance.
    pub const MAX_FINITE: Distance = Distance(u32::MAX - 1);

    #[inline]
    pub fn is_reachable(self) -> bool {
        self != Self::UNREACHABLE
    }

    /// Add two distances.  Unreachable stays unreachable; finite sums clamp
    /// to [`MAX_FINITE`](Self::MAX_FINITE).
    #[inline]
    pub fn saturating_add(self, rhs: Distance) -> Distance {
        if !self.is_reachable() || !rhs.is_reachable() {
            return Self::UNREACHABLE;
        }
        Distance(self.0.saturating_add(rhs.0).min(Self::MAX_FINITE.0))
    }

    /// `Some(km)` for finite distances.
    #[inline]
    pub fn km(self) -> Option<u32> {
        self.is_reachable().then_some(self.0)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.km() {
            Some(km) => write!(f, "{km} km"),
            None => f.write_str("unreachable"),
        }
    }
}

/// Single-source shortest distances, indexed by [`NodeId`].
#[derive(Clone, Debug)]
pub struct DistanceTable {
    pub(crate) source: NodeId,
    pub(crate) dist:   Vec<Distance>,
}

impl DistanceTable {
    /// The node the table was computed from.
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Distance from the source to `node`; `UNREACHABLE` for nodes outside
    /// the graph.
    #[inline]
    pub fn get(&self, node: NodeId) -> Distance {
        self.dist.get(node.index()).copied().unwrap_or(Distance::UNREACHABLE)
    }

    pub fn len(&self) -> usize {
        self.dist.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dist.is_empty()
    }
}
