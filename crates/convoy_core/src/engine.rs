use crate::arrival::waypoint_reward;
use crate::cargo::collect_cargo;
use crate::crew::RoleCounts;
use crate::dice::{roll_movement, RandomSource};
use crate::economy::{apply_delta, consumption, food_production, net_delta};
use crate::encounters::{apply_penalty, resolve_event, EventResolution};
use crate::movement::{advance, movement_distance};
use crate::outcome::check_status;
use crate::sources::{CargoSource, EventSource};
use crate::{GameContent, GameState, TurnResult};

/// Resolve one turn of travel. Does not modify `state`.
///
/// Order of operations:
/// 1. Roll movement and advance along the route.
/// 2. Sum consumption, production, and the arrival reward (if a waypoint
///    was reached) into one delta.
/// 3. Clamp the delta onto the stockpile once.
/// 4. Check victory, then depletion.
/// 5. Consult the event hook, and the cargo hook on turns without an
///    arrival.
///
/// Event penalties and cargo rewards are recorded, never applied.
pub fn process_turn(
    state: &GameState,
    content: &GameContent,
    dice: &mut impl RandomSource,
    events: &mut impl EventSource,
    cargo: &mut impl CargoSource,
) -> TurnResult {
    let c = &content.constants;
    let last_index = c.total_waypoints.saturating_sub(1);

    let dice_roll = roll_movement(dice);
    let movement = movement_distance(dice_roll, &state.vehicle);
    let step = advance(
        state.journey.progress,
        movement,
        c.distance_per_waypoint,
        state.journey.waypoint_index,
        last_index,
    );

    let roles = RoleCounts::from_crew(&state.crew);
    let consumed = consumption(c, &state.vehicle, &roles);
    let food_produced = food_production(c, &state.leader, &roles);
    let mut delta = net_delta(&consumed, food_produced);

    let reward = step.crossed.then(|| {
        waypoint_reward(
            state.resources.water - consumed.water,
            state.leader.security,
            c,
        )
    });
    if let Some(reward) = &reward {
        delta = delta + reward.as_delta();
    }

    let resources = apply_delta(&state.resources, &delta, &c.max_resources);
    let status = check_status(&resources, step.new_waypoint_index, c.total_waypoints);

    let mut event = None;
    if events.should_trigger_event(dice) {
        event = events.select_random_event(dice);
    }
    let mut found_cargo = None;
    if !step.crossed && cargo.should_discover_cargo(dice) {
        found_cargo = cargo.select_random_cargo(dice);
    }

    let turn = state.turn + 1;
    tracing::debug!(
        turn,
        dice_roll,
        movement,
        waypoint = step.new_waypoint_index,
        progress = step.new_progress,
        arrived = step.crossed,
        "turn processed"
    );
    if status.is_terminal() {
        tracing::info!(turn, ?status, "journey ended");
    }

    TurnResult {
        turn,
        dice_roll,
        movement,
        consumption: consumed,
        food_produced,
        delta,
        resources,
        waypoint_index: step.new_waypoint_index,
        progress: step.new_progress,
        arrived_at_waypoint: step.crossed,
        waypoint_reward: reward,
        status,
        event,
        cargo: found_cargo,
    }
}

/// Copies the position, stockpile, counter and status from `result` into
/// `state`. Events and cargo are left to [`settle_hooks`].
pub fn apply_turn_result(state: &mut GameState, result: &TurnResult) {
    state.resources = result.resources;
    state.journey.waypoint_index = result.waypoint_index;
    state.journey.progress = result.progress;
    state.turn = result.turn;
    state.status = result.status;
}

/// Applies what the turn's hooks turned up, after [`apply_turn_result`]:
/// rolls the event check and takes any penalty, stows any cargo, then
/// re-checks the status once against the final stockpile.
///
/// Returns the event check, if an event fired.
pub fn settle_hooks(
    state: &mut GameState,
    result: &TurnResult,
    content: &GameContent,
    dice: &mut impl RandomSource,
) -> Option<EventResolution> {
    let c = &content.constants;
    let mut resolution = None;
    if let Some(event) = &result.event {
        let outcome = resolve_event(event, &state.leader, &state.crew, dice);
        if let Some(penalty) = &outcome.penalty {
            state.resources = apply_penalty(&state.resources, penalty, &c.max_resources);
        }
        resolution = Some(outcome);
    }
    if let Some(item) = &result.cargo {
        collect_cargo(state, item.clone(), &c.max_resources);
    }

    let status = check_status(
        &state.resources,
        state.journey.waypoint_index,
        c.total_waypoints,
    );
    if status != state.status {
        tracing::info!(
            turn = state.turn,
            before = ?state.status,
            after = ?status,
            "status changed by hooks"
        );
    }
    state.status = status;
    resolution
}
