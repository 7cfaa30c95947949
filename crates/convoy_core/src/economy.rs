//! Per-turn resource economy: consumption, production, and the single
//! clamp that turns a summed delta into a new stockpile.

use serde::{Deserialize, Serialize};

use crate::crew::RoleCounts;
use crate::{Constants, Leader, ResourceDelta, Resources, Vehicle};

/// Resources burned in one turn, all non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Consumption {
    pub fuel: i64,
    pub food: i64,
    pub water: i64,
    pub wages: i64,
}

/// Multiplier on base fuel burn. Power 3 is neutral; each point above
/// saves 10%, each point below costs 10%, never better than half.
pub fn fuel_efficiency(vehicle_power: u32) -> f64 {
    (1.0 - (f64::from(vehicle_power) - 3.0) * 0.1).max(0.5)
}

pub fn fuel_consumption(constants: &Constants, vehicle_power: u32, engineers: usize) -> i64 {
    let base = (constants.base_fuel as f64 * fuel_efficiency(vehicle_power)).round() as i64;
    let savings = count(engineers).saturating_mul(constants.engineer_savings);
    base.saturating_sub(savings).max(0)
}

pub fn consumption(constants: &Constants, vehicle: &Vehicle, roles: &RoleCounts) -> Consumption {
    let crew = count(roles.total());
    Consumption {
        fuel: fuel_consumption(constants, vehicle.power, roles.engineers),
        food: constants.base_food_per_crew.saturating_mul(crew),
        water: constants.base_water_per_crew.saturating_mul(crew),
        wages: constants.base_wage_per_crew.saturating_mul(crew),
    }
}

/// Food grown this turn: each cook adds `producer_rate`, plus the
/// leader's cooking attribute.
pub fn food_production(constants: &Constants, leader: &Leader, roles: &RoleCounts) -> i64 {
    constants
        .producer_rate
        .saturating_mul(count(roles.cooks))
        .saturating_add(i64::from(leader.cooking))
}

/// Production minus consumption. Only food has a production side.
pub fn net_delta(consumption: &Consumption, food_produced: i64) -> ResourceDelta {
    ResourceDelta {
        fuel: -consumption.fuel,
        food: food_produced - consumption.food,
        water: -consumption.water,
        money: -consumption.wages,
    }
}

/// Adds `delta` and clamps every field into `[0, max]` independently.
///
/// Call once per turn with the fully summed delta; clamping partial
/// deltas loses information.
pub fn apply_delta(resources: &Resources, delta: &ResourceDelta, max: &Resources) -> Resources {
    Resources {
        fuel: clamp_field(resources.fuel, delta.fuel, max.fuel),
        food: clamp_field(resources.food, delta.food, max.food),
        water: clamp_field(resources.water, delta.water, max.water),
        money: clamp_field(resources.money, delta.money, max.money),
    }
}

fn clamp_field(current: i64, delta: i64, max: i64) -> i64 {
    current.saturating_add(delta).clamp(0, max.max(0))
}

fn count(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

/// Leaderboard score: the plain sum of what is left.
pub fn final_score(resources: &Resources) -> i64 {
    resources.fuel + resources.food + resources.water + resources.money
}
