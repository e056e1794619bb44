//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  Each wrapper carries its own
//! display format so the ids render the way riders see them (`C001`, `B3`).

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer with a fixed
/// display format.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty) => $fmt:tt;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID".
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, $fmt, self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Fleet-assigned cab number.  Rendered zero-padded: `CabId(1)` → `C001`.
    pub struct CabId(u32) => "C{:03}";
}

typed_id! {
    /// Per-request customer number, minted by
    /// [`CustomerIdGenerator`](crate::CustomerIdGenerator).
    pub struct CustomerId(u32) => "C{}";
}

typed_id! {
    /// Sequence number of a booking in the ledger, starting at 1.
    pub struct BookingId(u32) => "B{}";
}

typed_id! {
    /// Dense index of a location inside a built road graph.  Assigned in
    /// location-code order, so comparing `NodeId`s compares codes.
    pub struct NodeId(u32) => "N{}";
}

typed_id! {
    /// Index of a directed half of a road inside a built road graph.
    pub struct EdgeId(u32) => "E{}";
}
