//! Crew roles: tallies for the economy and the role-cycling used by
//! front ends between turns.

use serde::{Deserialize, Serialize};

use crate::{CrewId, CrewMember, GameState, Role};

impl Role {
    /// Next role in the assignment cycle:
    /// Engineer → Cook → Security → Free → Engineer.
    pub fn next(self) -> Role {
        match self {
            Role::Engineer => Role::Cook,
            Role::Cook => Role::Security,
            Role::Security => Role::Free,
            Role::Free => Role::Engineer,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Engineer => "engineer",
            Role::Cook => "cook",
            Role::Security => "security",
            Role::Free => "free",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RoleCounts {
    pub engineers: usize,
    pub cooks: usize,
    pub security: usize,
    pub free: usize,
}

impl RoleCounts {
    pub fn from_crew(crew: &[CrewMember]) -> Self {
        let mut counts = Self::default();
        for member in crew {
            match member.role {
                Role::Engineer => counts.engineers += 1,
                Role::Cook => counts.cooks += 1,
                Role::Security => counts.security += 1,
                Role::Free => counts.free += 1,
            }
        }
        counts
    }

    pub fn of(&self, role: Role) -> usize {
        match role {
            Role::Engineer => self.engineers,
            Role::Cook => self.cooks,
            Role::Security => self.security,
            Role::Free => self.free,
        }
    }

    pub fn total(&self) -> usize {
        self.engineers + self.cooks + self.security + self.free
    }
}

/// Sets a crew member's role. Returns `false` if no member has `crew_id`.
///
/// Takes effect from the next processed turn.
pub fn assign_role(state: &mut GameState, crew_id: &CrewId, role: Role) -> bool {
    let Some(member) = state.crew.iter_mut().find(|m| m.id == *crew_id) else {
        return false;
    };
    member.role = role;
    true
}
