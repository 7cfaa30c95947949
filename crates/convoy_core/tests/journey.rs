//! Whole-journey regression tests: play seeded games to the end and check
//! the bookkeeping that spans turns.

use convoy_core::test_fixtures::{base_content, base_state, sample_cargo, FixedCargo};
use convoy_core::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const TURN_LIMIT: u32 = 500;

fn play(seed: u64, setup: impl Fn(&mut GameState)) -> (GameState, Vec<TurnResult>) {
    let content = base_content();
    let mut state = base_state(&content);
    setup(&mut state);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut results = Vec::new();
    while !state.status.is_terminal() && state.turn < TURN_LIMIT {
        let result = process_turn(&state, &content, &mut rng, &mut Disabled, &mut Disabled);
        apply_turn_result(&mut state, &result);
        results.push(result);
    }
    (state, results)
}

#[test]
fn balanced_crew_reaches_the_end() {
    let (state, results) = play(42, |state| {
        state.crew[0].role = Role::Engineer;
        state.crew[1].role = Role::Cook;
        state.crew[2].role = Role::Cook;
        state.crew[3].role = Role::Security;
    });

    assert!(state.status.is_terminal(), "game should finish");
    assert_eq!(state.status, GameStatus::Victory);
    assert_eq!(state.journey.waypoint_index, 9);
    assert_eq!(state.turn as usize, results.len() + 1);
}

#[test]
fn turn_counter_and_position_never_go_backwards() {
    let (_, results) = play(7, |_| {});

    for pair in results.windows(2) {
        assert_eq!(pair[1].turn, pair[0].turn + 1);
        assert!(pair[1].waypoint_index >= pair[0].waypoint_index);
    }
    let arrivals = results.iter().filter(|r| r.arrived_at_waypoint).count();
    let last = results.last().expect("at least one turn");
    assert!(arrivals <= last.waypoint_index);
}

#[test]
fn idle_crew_without_cooks_starves() {
    let (state, _) = play(3, |_| {});

    assert_eq!(
        state.status,
        GameStatus::GameOver(GameOverReason::Starvation)
    );
}

#[test]
fn cargo_never_arrives_with_a_waypoint() {
    let content = base_content();
    let mut state = base_state(&content);
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let mut cargo = FixedCargo::firing(sample_cargo());

    while !state.status.is_terminal() && state.turn < TURN_LIMIT {
        let result = process_turn(&state, &content, &mut rng, &mut Disabled, &mut cargo);
        assert!(
            !(result.arrived_at_waypoint && result.cargo.is_some()),
            "turn {} delivered cargo on arrival",
            result.turn
        );
        apply_turn_result(&mut state, &result);
        if let Some(item) = result.cargo {
            collect_cargo(&mut state, item, &content.constants.max_resources);
        }
    }
    assert!(!state.cargo_hold.is_empty());
}
