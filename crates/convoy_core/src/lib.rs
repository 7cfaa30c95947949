//! `convoy_core`: the deterministic turn engine.
//!
//! No IO. All randomness via a passed-in [`RandomSource`]. The caller owns
//! the [`GameState`]; [`process_turn`] only reads it.

mod arrival;
mod cargo;
mod crew;
pub mod dice;
mod economy;
mod encounters;
mod engine;
mod id;
mod movement;
mod outcome;
mod sources;
mod types;

#[cfg(any(test, feature = "test-support"))]
pub mod test_fixtures;

pub use arrival::waypoint_reward;
pub use cargo::{collect_cargo, roll_rarity, RARITIES};
pub use crew::{assign_role, RoleCounts};
pub use dice::RandomSource;
pub use economy::{
    apply_delta, consumption, final_score, food_production, fuel_consumption, fuel_efficiency,
    net_delta, Consumption,
};
pub use encounters::{apply_penalty, resolve_event, supporting_role, EventResolution};
pub use engine::{apply_turn_result, process_turn, settle_hooks};
pub use id::{run_id, seeded_uuid};
pub use movement::{advance, movement_distance, Advance};
pub use outcome::{check_status, depletion};
pub use sources::{CargoSource, Disabled, EventSource};
pub use types::*;

#[cfg(test)]
mod tests;
