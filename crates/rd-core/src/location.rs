//! Location codes and the configured location set.
//!
//! A location is an opaque single-character code (`'a'`, `'b'`, …) paired
//! with a display name.  The [`LocationSet`] is the single source of truth
//! for which codes exist; the road graph, the fleet, and request validation
//! all check against the same set.

use std::fmt;

use crate::{CoreError, CoreResult};

// ── LocationCode ──────────────────────────────────────────────────────────────

/// Opaque location code.  Ordered by the underlying character, which is the
/// tie-break order used by shortest-path searches.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationCode(pub char);

impl fmt::Display for LocationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}'", self.0)
    }
}

impl From<char> for LocationCode {
    fn from(c: char) -> Self {
        LocationCode(c)
    }
}

// ── Location ──────────────────────────────────────────────────────────────────

/// A code with its human-readable name.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub code: LocationCode,
    pub name: String,
}

// ── LocationSet ───────────────────────────────────────────────────────────────

/// The fixed set of known locations, kept sorted by code.
///
/// The position of a location in this set is stable once construction is
/// finished; `rd-graph` uses it as the dense node index.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationSet {
    locations: Vec<Location>,
}

impl LocationSet {
    pub fn new() -> Self {
        Self { locations: Vec::new() }
    }

    /// Build a set from `(code, name)` pairs in any order.
    ///
    /// # Errors
    ///
    /// [`CoreError::DuplicateLocation`] if a code appears twice.
    pub fn from_pairs<I, S>(pairs: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = (char, S)>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for (code, name) in pairs {
            set.insert(LocationCode(code), name)?;
        }
        Ok(set)
    }

    /// Add a location, keeping the set sorted by code.
    pub fn insert(&mut self, code: LocationCode, name: impl Into<String>) -> CoreResult<()> {
        match self.locations.binary_search_by_key(&code, |l| l.code) {
            Ok(_) => Err(CoreError::DuplicateLocation(code)),
            Err(at) => {
                self.locations.insert(at, Location { code, name: name.into() });
                Ok(())
            }
        }
    }

    #[inline]
    pub fn contains(&self, code: LocationCode) -> bool {
        self.position(code).is_some()
    }

    /// Index of `code` in code order, or `None` if unknown.
    #[inline]
    pub fn position(&self, code: LocationCode) -> Option<usize> {
        self.locations.binary_search_by_key(&code, |l| l.code).ok()
    }

    /// Location at dense index `i` (the inverse of [`position`](Self::position)).
    #[inline]
    pub fn at(&self, i: usize) -> Option<&Location> {
        self.locations.get(i)
    }

    pub fn get(&self, code: LocationCode) -> Option<&Location> {
        self.position(code).map(|i| &self.locations[i])
    }

    /// Display name of `code`, or `None` if unknown.
    pub fn name(&self, code: LocationCode) -> Option<&str> {
        self.get(code).map(|l| l.name.as_str())
    }

    /// Return `code` unchanged if it is part of the set.
    pub fn validate(&self, code: LocationCode) -> CoreResult<LocationCode> {
        if self.contains(code) {
            Ok(code)
        } else {
            Err(CoreError::UnknownLocation(code))
        }
    }

    /// Parse raw user input (one character, surrounding whitespace ignored)
    /// into a known code.
    pub fn parse_code(&self, input: &str) -> CoreResult<LocationCode> {
        let mut chars = input.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.validate(LocationCode(c)),
            _ => Err(CoreError::InvalidCode(input.trim().to_owned())),
        }
    }

    /// All locations in code order.
    pub fn iter(&self) -> impl Iterator<Item = &Location> + '_ {
        self.locations.iter()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}
