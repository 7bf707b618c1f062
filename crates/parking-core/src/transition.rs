//! Transitions - pure functions from (state, input) to an outcome
//!
//! Neither function touches its input state. A successful outcome carries the
//! derived state; a rejected one (full lot, empty spot) carries none, so the
//! caller keeps its current state.

use crate::lot::{LotState, SpotNumber, Vehicle};

/// Result of a `park` request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParkOutcome {
    /// No open spot; state unchanged
    Full,
    /// Vehicle placed at `spot` in `state`
    Parked {
        state: LotState,
        spot: SpotNumber,
        color: String,
    },
}

impl ParkOutcome {
    pub fn message(&self) -> String {
        match self {
            ParkOutcome::Full => "Sorry, the parking lot is full.".to_string(),
            ParkOutcome::Parked { spot, color, .. } => {
                format!("{} car parked in spot {}.", color, spot)
            }
        }
    }
}

/// Result of a `leave` request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeaveOutcome {
    /// Nothing parked at `spot`; state unchanged
    AlreadyEmpty { spot: SpotNumber },
    /// `spot` vacated in `state`
    Left { state: LotState, spot: SpotNumber },
}

impl LeaveOutcome {
    pub fn message(&self) -> String {
        match self {
            LeaveOutcome::AlreadyEmpty { spot } => format!("There is no car in spot {}.", spot),
            LeaveOutcome::Left { spot, .. } => format!("Spot {} is free.", spot),
        }
    }
}

/// Park `vehicle` in the lowest open spot
pub fn park(state: &LotState, vehicle: Vehicle) -> ParkOutcome {
    if !state.has_space() {
        return ParkOutcome::Full;
    }
    let color = vehicle.color.clone();
    match state.with_vehicle_added(vehicle) {
        Ok((state, spot)) => ParkOutcome::Parked { state, spot, color },
        // has_space was checked above, so this only fires if that invariant breaks
        Err(e) => {
            tracing::error!(error = %e, "open spot vanished after has_space check");
            ParkOutcome::Full
        }
    }
}

/// Vacate `spot`; spots outside `[1, capacity]` are always empty
pub fn leave(state: &LotState, spot: SpotNumber) -> LeaveOutcome {
    if state.vehicle_at(spot).is_none() {
        return LeaveOutcome::AlreadyEmpty { spot };
    }
    LeaveOutcome::Left {
        state: state.with_vehicle_removed(spot),
        spot,
    }
}
