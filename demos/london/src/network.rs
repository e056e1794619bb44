//! The London road map and starting fleet.
//!
//! Eleven districts joined by thirteen two-way roads (lengths in km), and
//! four cabs.  One cab starts the run already assigned.

use rd_core::{CabId, CoreResult, LocationCode, LocationSet};
use rd_fleet::{Cab, VehicleType};

const DISTRICTS: [(char, &str); 11] = [
    ('a', "Westminster"),
    ('b', "Camden Town"),
    ('c', "Kensington"),
    ('d', "Greenwich"),
    ('e', "Notting Hill"),
    ('f', "Chelsea"),
    ('g', "Hammersmith"),
    ('h', "Soho"),
    ('i', "Shoreditch"),
    ('j', "Covent Garden"),
    ('k', "Paddington"),
];

const ROADS: [(char, char, u32); 13] = [
    ('a', 'b', 3),
    ('a', 'd', 5),
    ('a', 'c', 4),
    ('b', 'e', 6),
    ('c', 'f', 3),
    ('c', 'g', 6),
    ('d', 'h', 7),
    ('h', 'k', 6),
    ('g', 'k', 5),
    ('f', 'g', 4),
    ('e', 'i', 9),
    ('i', 'j', 6),
    ('j', 'k', 8),
];

pub fn locations() -> CoreResult<LocationSet> {
    LocationSet::from_pairs(DISTRICTS)
}

pub fn roads() -> impl Iterator<Item = (LocationCode, LocationCode, u32)> {
    ROADS.into_iter().map(|(u, v, km)| (LocationCode(u), LocationCode(v), km))
}

pub fn fleet() -> Vec<Cab> {
    vec![
        Cab::new(CabId(1), "John Doe",    VehicleType::Sedan,     LocationCode('k'), true),
        Cab::new(CabId(2), "Jane Smith",  VehicleType::Suv,       LocationCode('e'), true),
        Cab::new(CabId(3), "Bob Johnson", VehicleType::Hatchback, LocationCode('j'), false),
        Cab::new(CabId(4), "Alice Brown", VehicleType::Sedan,     LocationCode('d'), true),
    ]
}
