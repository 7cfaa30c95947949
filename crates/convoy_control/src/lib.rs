use convoy_core::dice::{MOVEMENT_ROLL_MAX, MOVEMENT_ROLL_MIN};
use convoy_core::{
    food_production, fuel_consumption, CrewId, CrewMember, GameContent, GameState, Role,
    RoleCounts,
};
use serde::{Deserialize, Serialize};

/// Decides crew roles between turns. Returned pairs are applied with
/// [`convoy_core::assign_role`] and take effect on the next turn.
pub trait CrewController {
    fn assign_roles(&mut self, state: &GameState, content: &GameContent) -> Vec<(CrewId, Role)>;
}

/// How much of each resource the autopilot wants left over at the end of
/// the projected journey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutopilotConfig {
    pub food_margin: i64,
    pub fuel_margin: i64,
}

impl Default for AutopilotConfig {
    fn default() -> Self {
        Self {
            food_margin: 10,
            fuel_margin: 10,
        }
    }
}

/// Staffs the convoy from a projection of the rest of the journey:
/// 1. The fewest cooks that keep food above the margin until arrival.
/// 2. The fewest engineers that keep fuel above the margin.
/// 3. Everyone else alternates security and engineer.
///
/// Reassigns as few crew members as possible.
#[derive(Debug, Clone, Default)]
pub struct AutopilotController {
    pub config: AutopilotConfig,
}

impl AutopilotController {
    pub fn new(config: AutopilotConfig) -> Self {
        Self { config }
    }
}

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

/// Turns still needed at an average roll, at least 1.
pub fn estimated_turns_left(state: &GameState, content: &GameContent) -> i64 {
    let c = &content.constants;
    let last = c.total_waypoints.saturating_sub(1);
    let legs = last.saturating_sub(state.journey.waypoint_index) as i64;
    let remaining = (legs * i64::from(c.distance_per_waypoint))
        .saturating_sub(i64::from(state.journey.progress))
        .max(0);
    let mean_move =
        ((MOVEMENT_ROLL_MIN + MOVEMENT_ROLL_MAX) / 2 + i64::from(state.vehicle.speed)).max(1);
    ((remaining + mean_move - 1) / mean_move).max(1)
}

/// Role head-counts the autopilot is aiming for.
pub fn plan_roles(state: &GameState, content: &GameContent, config: &AutopilotConfig) -> RoleCounts {
    let c = &content.constants;
    let crew = state.crew.len();
    let turns = estimated_turns_left(state, content);

    let food_burn = c.base_food_per_crew * crew as i64;
    let food_ok = |cooks: usize| {
        let counts = RoleCounts {
            cooks,
            ..RoleCounts::default()
        };
        let net = food_production(c, &state.leader, &counts) - food_burn;
        state.resources.food + turns * net > config.food_margin
    };
    let cooks = (0..=crew).find(|&k| food_ok(k)).unwrap_or(crew);

    let spare = crew - cooks;
    let fuel_ok = |engineers: usize| {
        let burn = fuel_consumption(c, state.vehicle.power, engineers);
        state.resources.fuel - turns * burn > config.fuel_margin
    };
    let mut engineers = (0..=spare).find(|&e| fuel_ok(e)).unwrap_or(spare);

    let mut security = 0;
    for slot in 0..spare - engineers {
        if slot % 2 == 0 {
            security += 1;
        } else {
            engineers += 1;
        }
    }

    RoleCounts {
        engineers,
        cooks,
        security,
        free: crew - cooks - engineers - security,
    }
}

// ---------------------------------------------------------------------------
// Assignment
// ---------------------------------------------------------------------------

fn take(quota: &mut RoleCounts, role: Role) -> bool {
    let slot = match role {
        Role::Engineer => &mut quota.engineers,
        Role::Cook => &mut quota.cooks,
        Role::Security => &mut quota.security,
        Role::Free => &mut quota.free,
    };
    if *slot == 0 {
        return false;
    }
    *slot -= 1;
    true
}

/// Role changes that bring `crew` to the head-counts in `plan`. Members
/// already in a role that is still needed keep it.
pub fn role_changes(crew: &[CrewMember], plan: RoleCounts) -> Vec<(CrewId, Role)> {
    let mut quota = plan;
    let keeps: Vec<bool> = crew.iter().map(|m| take(&mut quota, m.role)).collect();

    let mut changes = Vec::new();
    for (member, kept) in crew.iter().zip(keeps) {
        if kept {
            continue;
        }
        let role = [Role::Cook, Role::Engineer, Role::Security]
            .into_iter()
            .find(|&r| take(&mut quota, r))
            .unwrap_or(Role::Free);
        if role != member.role {
            changes.push((member.id.clone(), role));
        }
    }
    changes
}

impl CrewController for AutopilotController {
    fn assign_roles(&mut self, state: &GameState, content: &GameContent) -> Vec<(CrewId, Role)> {
        let plan = plan_roles(state, content, &self.config);
        role_changes(&state.crew, plan)
    }
}
