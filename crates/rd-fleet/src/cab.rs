//! Per-cab record.

use std::fmt;

use rd_core::{CabId, LocationCode};

/// Body style of a cab.  Informational only; dispatch ignores it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VehicleType {
    Sedan,
    Suv,
    Hatchback,
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VehicleType::Sedan     => "Sedan",
            VehicleType::Suv       => "SUV",
            VehicleType::Hatchback => "Hatchback",
        })
    }
}

/// One cab in the fleet.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cab {
    pub id:        CabId,
    pub driver:    String,
    pub vehicle:   VehicleType,
    /// Where the cab is parked now.  Overwritten with the drop-off on every
    /// assignment.
    pub location:  LocationCode,
    pub available: bool,
}

impl Cab {
    pub fn new(
        id:        CabId,
        driver:    impl Into<String>,
        vehicle:   VehicleType,
        location:  LocationCode,
        available: bool,
    ) -> Self {
        Self { id, driver: driver.into(), vehicle, location, available }
    }
}
