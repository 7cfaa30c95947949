//! Resolving a random event once the front end has shown it.

use serde::{Deserialize, Serialize};

use crate::crew::RoleCounts;
use crate::dice::RandomSource;
use crate::{Attribute, CrewMember, Leader, Penalty, RandomEvent, ResourceDelta, Resources, Role};

pub const CHECK_ROLL_MIN: i64 = 1;
pub const CHECK_ROLL_MAX: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventResolution {
    pub roll: i64,
    /// Roll plus leader attribute plus matching crew.
    pub score: i64,
    pub success: bool,
    /// Set only when the check failed.
    pub penalty: Option<Penalty>,
}

/// Crew role that helps with an attribute check.
pub fn supporting_role(attribute: Attribute) -> Role {
    match attribute {
        Attribute::Engineering => Role::Engineer,
        Attribute::Cooking => Role::Cook,
        Attribute::Security => Role::Security,
    }
}

pub fn resolve_event(
    event: &RandomEvent,
    leader: &Leader,
    crew: &[CrewMember],
    dice: &mut impl RandomSource,
) -> EventResolution {
    let roll = dice.roll_in_range(CHECK_ROLL_MIN, CHECK_ROLL_MAX);
    let helpers = RoleCounts::from_crew(crew).of(supporting_role(event.tested_attribute));
    let score = roll
        + i64::from(leader.attribute(event.tested_attribute))
        + i64::try_from(helpers).unwrap_or(i64::MAX);
    let success = score >= i64::from(event.difficulty);
    EventResolution {
        roll,
        score,
        success,
        penalty: (!success).then_some(event.penalty),
    }
}

/// Subtracts the penalty (a negative amount is treated as zero) and clamps.
pub fn apply_penalty(resources: &Resources, penalty: &Penalty, max: &Resources) -> Resources {
    let delta = ResourceDelta::single(penalty.resource, -penalty.amount.max(0));
    crate::economy::apply_delta(resources, &delta, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{base_content, base_state, sample_event, ScriptedDice};
    use crate::ResourceKind;

    #[test]
    fn high_roll_passes() {
        let content = base_content();
        let state = base_state(&content);
        let mut event = sample_event();
        event.difficulty = 5;
        let mut dice = ScriptedDice::new(&[10]);
        let outcome = resolve_event(&event, &state.leader, &state.crew, &mut dice);
        assert!(outcome.success);
        assert!(outcome.penalty.is_none());
    }

    #[test]
    fn failed_check_carries_penalty() {
        let content = base_content();
        let state = base_state(&content);
        let mut event = sample_event();
        event.difficulty = 99;
        let mut dice = ScriptedDice::new(&[1]);
        let outcome = resolve_event(&event, &state.leader, &state.crew, &mut dice);
        assert!(!outcome.success);
        assert_eq!(outcome.penalty, Some(event.penalty));
    }

    #[test]
    fn matching_crew_adds_to_score() {
        let content = base_content();
        let mut state = base_state(&content);
        let event = sample_event();
        let mut dice = ScriptedDice::new(&[4, 4]);
        let before = resolve_event(&event, &state.leader, &state.crew, &mut dice).score;

        let role = supporting_role(event.tested_attribute);
        state.crew[0].role = role;
        state.crew[1].role = role;
        let after = resolve_event(&event, &state.leader, &state.crew, &mut dice).score;
        assert_eq!(after - before, 2);
    }

    #[test]
    fn penalty_is_clamped_at_zero() {
        let max = Resources {
            fuel: 100,
            food: 100,
            water: 100,
            money: 100,
        };
        let current = Resources {
            fuel: 5,
            food: 50,
            water: 50,
            money: 50,
        };
        let penalty = Penalty {
            resource: ResourceKind::Fuel,
            amount: 20,
        };
        let next = apply_penalty(&current, &penalty, &max);
        assert_eq!(next.fuel, 0);
        assert_eq!(next.food, 50);
    }
}
