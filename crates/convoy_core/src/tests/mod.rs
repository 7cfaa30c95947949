use super::*;
use crate::test_fixtures::{
    base_content, base_state, make_rng, sample_cargo, sample_event, FixedCargo, FixedEvents,
    ScriptedDice,
};


// --- Shared test helpers ------------------------------------------------

fn test_content() -> GameContent {
    base_content()
}

fn test_state(content: &GameContent) -> GameState {
    base_state(content)
}

/// Runs one turn with a scripted movement roll and both hooks silent.
fn quiet_turn(state: &GameState, content: &GameContent, roll: i64) -> TurnResult {
    let mut dice = ScriptedDice::new(&[roll]);
    process_turn(state, content, &mut dice, &mut Disabled, &mut Disabled)
}
