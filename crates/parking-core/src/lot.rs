//! Lot state - vehicles and the spots they occupy
//!
//! A [`LotState`] is an immutable value. Every derivation (`with_vehicle_added`,
//! `with_vehicle_removed`) returns a fresh state and leaves the receiver
//! untouched, so any earlier state stays valid and observably unchanged.
//!
//! # Invariants
//!
//! - every occupied spot lies in `[1, capacity]`
//! - `occupied() <= capacity`
//! - iteration is always in ascending spot order (BTreeMap)

use std::collections::BTreeMap;

use crate::{Error, Result};

/// Spot number as accepted by `leave`; only `1..=capacity` can ever be occupied
pub type SpotNumber = i64;

/// A parked vehicle
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Vehicle {
    pub registration: String,
    pub color: String,
}

impl Vehicle {
    pub fn new(registration: impl Into<String>, color: impl Into<String>) -> Self {
        Vehicle {
            registration: registration.into(),
            color: color.into(),
        }
    }
}

/// Occupancy of a fixed-capacity lot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LotState {
    capacity: u32,
    occupancy: BTreeMap<SpotNumber, Vehicle>,
}

impl LotState {
    /// Create an empty lot with `capacity` spots
    pub fn new(capacity: u32) -> Self {
        LotState {
            capacity,
            occupancy: BTreeMap::new(),
        }
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Number of occupied spots
    pub fn occupied(&self) -> usize {
        self.occupancy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occupancy.is_empty()
    }

    pub fn has_space(&self) -> bool {
        self.occupancy.len() < self.capacity as usize
    }

    pub fn vehicle_at(&self, spot: SpotNumber) -> Option<&Vehicle> {
        self.occupancy.get(&spot)
    }

    /// Occupied spots in ascending order
    pub fn iter(&self) -> impl Iterator<Item = (SpotNumber, &Vehicle)> {
        self.occupancy.iter().map(|(spot, vehicle)| (*spot, vehicle))
    }

    /// Smallest spot in `[1, capacity]` with no vehicle.
    ///
    /// Callers check [`has_space`](Self::has_space) first; a full lot yields
    /// `Error::LotFull` rather than a made-up spot.
    pub fn first_open_spot(&self) -> Result<SpotNumber> {
        if !self.has_space() {
            return Err(Error::LotFull {
                capacity: self.capacity,
            });
        }

        // Keys are sorted and start at 1, so the first gap is the answer.
        let mut expected: SpotNumber = 1;
        for spot in self.occupancy.keys() {
            if *spot != expected {
                break;
            }
            expected += 1;
        }
        Ok(expected)
    }

    /// New state with `spot` vacated; a no-op if it was already empty
    pub fn with_vehicle_removed(&self, spot: SpotNumber) -> LotState {
        let mut occupancy = self.occupancy.clone();
        occupancy.remove(&spot);
        LotState {
            capacity: self.capacity,
            occupancy,
        }
    }

    /// New state with `vehicle` in the lowest open spot, plus that spot
    pub fn with_vehicle_added(&self, vehicle: Vehicle) -> Result<(LotState, SpotNumber)> {
        let spot = self.first_open_spot()?;
        let mut occupancy = self.occupancy.clone();
        occupancy.insert(spot, vehicle);
        tracing::trace!(spot, occupied = occupancy.len(), "derived lot state");
        Ok((
            LotState {
                capacity: self.capacity,
                occupancy,
            },
            spot,
        ))
    }
}
