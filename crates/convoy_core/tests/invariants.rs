//! Property-based checks of the engine's numeric invariants.

use convoy_core::test_fixtures::{base_constants, base_content, base_state, ScriptedDice};
use convoy_core::*;
use proptest::prelude::*;

// ===========================================================================
// Generators
// ===========================================================================

fn arb_role() -> impl Strategy<Value = Role> {
    prop_oneof![
        Just(Role::Engineer),
        Just(Role::Cook),
        Just(Role::Security),
        Just(Role::Free),
    ]
}

fn arb_resources(max: Resources) -> impl Strategy<Value = Resources> {
    (0..=max.fuel, 0..=max.food, 0..=max.water, 0..=max.money).prop_map(
        |(fuel, food, water, money)| Resources {
            fuel,
            food,
            water,
            money,
        },
    )
}

// ===========================================================================
// Properties
// ===========================================================================

proptest! {
    #[test]
    fn fuel_burn_never_increases_with_engineers(power in 0u32..20, engineers in 0usize..64) {
        let constants = base_constants();
        let fewer = fuel_consumption(&constants, power, engineers);
        let more = fuel_consumption(&constants, power, engineers + 1);
        prop_assert!(more <= fewer);
        prop_assert!(more >= 0);
    }

    #[test]
    fn advance_keeps_cursor_in_range(
        progress in 0u32..20,
        movement in 0u32..500,
        index in 0usize..10,
    ) {
        let step = advance(progress, movement, 20, index, 9);
        prop_assert!(step.new_waypoint_index <= 9);
        prop_assert!(step.new_waypoint_index >= index);
        if step.new_waypoint_index < 9 {
            prop_assert!(step.new_progress < 20);
        }
        prop_assert_eq!(step.crossed, step.new_waypoint_index > index);
    }

    #[test]
    fn turn_keeps_every_resource_in_bounds(
        resources in arb_resources(base_constants().max_resources),
        roles in proptest::collection::vec(arb_role(), 4),
        roll in 0i64..=10,
        index in 0usize..10,
        progress in 0u32..20,
        power in 0u32..12,
    ) {
        let content = base_content();
        let mut state = base_state(&content);
        state.resources = resources;
        state.journey = Journey { waypoint_index: index, progress };
        state.vehicle.power = power;
        for (member, role) in state.crew.iter_mut().zip(roles) {
            member.role = role;
        }

        let mut dice = ScriptedDice::new(&[roll]);
        let result = process_turn(&state, &content, &mut dice, &mut Disabled, &mut Disabled);

        let max = content.constants.max_resources;
        prop_assert!((0..=max.fuel).contains(&result.resources.fuel));
        prop_assert!((0..=max.food).contains(&result.resources.food));
        prop_assert!((0..=max.water).contains(&result.resources.water));
        prop_assert!((0..=max.money).contains(&result.resources.money));
        prop_assert_eq!(result.turn, state.turn + 1);
        prop_assert_eq!(result.waypoint_reward.is_some(), result.arrived_at_waypoint);
    }

    #[test]
    fn station_money_is_linear_in_security(security in 0u32..50) {
        let constants = base_constants();
        let reward = waypoint_reward(0, security, &constants);
        prop_assert_eq!(
            reward.money_earned,
            constants.base_station_money + i64::from(security) * constants.money_multiplier
        );
    }
}
