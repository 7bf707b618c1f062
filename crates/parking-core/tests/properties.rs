//! Property tests for lot transitions, queries, and the parser

use parking_core::query;
use parking_core::{
    leave, park, parse_command, Command, LeaveOutcome, LotState, ParkOutcome, SpotNumber, Vehicle,
};
use proptest::prelude::*;

fn token() -> impl Strategy<Value = String> {
    "[A-Za-z0-9]{1,10}"
}

/// Mostly a shared palette so queries find matches, sometimes free-form
/// words including multi-word colors such as `Dark Blue`
fn color() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => prop::sample::select(vec!["White", "Red", "Black", "Blue", "Dark Blue"])
            .prop_map(String::from),
        1 => "[A-Za-z]{1,6}( [A-Za-z]{1,6})?",
    ]
}

fn vehicle() -> impl Strategy<Value = Vehicle> {
    (token(), color()).prop_map(|(reg, color)| Vehicle::new(reg, color))
}

/// Park each vehicle in turn, then vacate every spot in `leaves`
fn build_lot(capacity: u32, vehicles: &[Vehicle], leaves: &[SpotNumber]) -> LotState {
    let lot = vehicles.iter().fold(LotState::new(capacity), |lot, v| {
        match park(&lot, v.clone()) {
            ParkOutcome::Parked { state, .. } => state,
            ParkOutcome::Full => lot,
        }
    });
    leaves
        .iter()
        .fold(lot, |lot, spot| lot.with_vehicle_removed(*spot))
}

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        any::<u32>().prop_map(|capacity| Command::CreateLot { capacity }),
        vehicle().prop_map(|vehicle| Command::Park { vehicle }),
        any::<i64>().prop_map(|spot| Command::Leave { spot }),
        color().prop_map(|color| Command::RegistrationsByColor { color }),
        color().prop_map(|color| Command::SpotsByColor { color }),
        token().prop_map(|registration| Command::SpotsByRegistration { registration }),
    ]
}

proptest! {
    #[test]
    fn fresh_lot_is_empty(capacity in 0u32..1000) {
        let lot = LotState::new(capacity);
        prop_assert!(lot.is_empty());
        prop_assert_eq!(lot.has_space(), capacity > 0);
    }

    #[test]
    fn park_takes_smallest_open_spot(
        capacity in 1u32..20,
        vehicles in prop::collection::vec(vehicle(), 0..15),
        leaves in prop::collection::vec(1i64..20, 0..10),
        incoming in vehicle(),
    ) {
        let lot = build_lot(capacity, &vehicles, &leaves);
        prop_assume!(lot.has_space());

        let expected = (1..=capacity as SpotNumber)
            .find(|spot| lot.vehicle_at(*spot).is_none())
            .unwrap();
        match park(&lot, incoming.clone()) {
            ParkOutcome::Parked { state, spot, .. } => {
                prop_assert_eq!(spot, expected);
                prop_assert_eq!(state.vehicle_at(spot), Some(&incoming));
                prop_assert_eq!(state.occupied(), lot.occupied() + 1);
            }
            ParkOutcome::Full => prop_assert!(false, "lot had space"),
        }
    }

    #[test]
    fn occupancy_never_exceeds_capacity(
        capacity in 0u32..10,
        vehicles in prop::collection::vec(vehicle(), 0..30),
    ) {
        let lot = build_lot(capacity, &vehicles, &[]);
        prop_assert!(lot.occupied() <= capacity as usize);
        for (spot, _) in lot.iter() {
            prop_assert!(spot >= 1 && spot <= capacity as SpotNumber);
        }
    }

    #[test]
    fn park_into_full_lot_is_rejected(
        capacity in 0u32..10,
        vehicles in prop::collection::vec(vehicle(), 10..15),
        incoming in vehicle(),
    ) {
        let lot = build_lot(capacity, &vehicles, &[]);
        prop_assert!(!lot.has_space());
        prop_assert_eq!(park(&lot, incoming), ParkOutcome::Full);
    }

    #[test]
    fn leave_twice_settles_state(
        capacity in 1u32..10,
        vehicles in prop::collection::vec(vehicle(), 1..10),
        spot in -2i64..12,
    ) {
        let lot = build_lot(capacity, &vehicles, &[]);
        let after_first = match leave(&lot, spot) {
            LeaveOutcome::Left { state, .. } => state,
            LeaveOutcome::AlreadyEmpty { .. } => lot.clone(),
        };
        prop_assert_eq!(
            leave(&after_first, spot),
            LeaveOutcome::AlreadyEmpty { spot }
        );
        prop_assert_eq!(after_first.with_vehicle_removed(spot), after_first);
    }

    #[test]
    fn queries_are_ascending(
        capacity in 1u32..20,
        vehicles in prop::collection::vec(vehicle(), 0..25),
        leaves in prop::collection::vec(1i64..20, 0..10),
        refill in prop::collection::vec(vehicle(), 0..10),
        probe in color(),
    ) {
        let lot = build_lot(capacity, &vehicles, &leaves);
        let lot = build_lot_from(lot, &refill);
        let spots = query::spots_by_color(&lot, &probe);
        prop_assert!(spots.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn color_match_ignores_case(
        capacity in 1u32..20,
        vehicles in prop::collection::vec(vehicle(), 0..20),
        probe in color(),
    ) {
        let lot = build_lot(capacity, &vehicles, &[]);
        let lower = query::spots_by_color(&lot, &probe.to_lowercase());
        let upper = query::spots_by_color(&lot, &probe.to_uppercase());
        prop_assert_eq!(&lower, &upper);
        prop_assert_eq!(
            query::registrations_by_color(&lot, &probe.to_lowercase()),
            query::registrations_by_color(&lot, &probe.to_uppercase())
        );
    }

    #[test]
    fn canonical_form_round_trips(cmd in command()) {
        prop_assert_eq!(parse_command(&cmd.to_string()).unwrap(), cmd);
    }

    #[test]
    fn multi_word_color_round_trips(
        reg in token(),
        first in "[A-Za-z]{1,6}",
        second in "[A-Za-z]{1,6}",
    ) {
        let color = format!("{} {}", first, second);
        let park = Command::Park { vehicle: Vehicle::new(reg, color.clone()) };
        prop_assert_eq!(parse_command(&park.to_string()).unwrap(), park);
        let query = Command::RegistrationsByColor { color };
        prop_assert_eq!(parse_command(&query.to_string()).unwrap(), query);
    }
}

fn build_lot_from(lot: LotState, vehicles: &[Vehicle]) -> LotState {
    vehicles.iter().fold(lot, |lot, v| match park(&lot, v.clone()) {
        ParkOutcome::Parked { state, .. } => state,
        ParkOutcome::Full => lot,
    })
}

#[test]
fn registration_match_ignores_case() {
    let lot = build_lot(2, &[Vehicle::new("AB1234", "red")], &[]);
    assert_eq!(query::spots_by_registration(&lot, "ab1234"), vec![1]);
    assert_eq!(
        query::spots_by_color(&lot, "RED"),
        query::spots_by_color(&lot, "red")
    );
}
