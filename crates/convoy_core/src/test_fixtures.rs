//! Shared test fixtures for `convoy_core` and downstream crates.
//!
//! `base_content()` is a small but complete `GameContent`; `base_state()`
//! starts a game from it with every crew member unassigned.

use crate::dice::RandomSource;
use crate::sources::{CargoSource, EventSource};
use crate::{
    Attribute, CargoId, CargoItem, CargoReward, Constants, CrewId, CrewMember, EventId,
    GameContent, GameState, GameStatus, Journey, Leader, LeaderId, MetaState, Penalty,
    RandomEvent, Rarity, RarityWeights, ResourceKind, Resources, Role, Vehicle, VehicleId,
    WaypointDef,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub fn base_constants() -> Constants {
    Constants {
        total_waypoints: 10,
        distance_per_waypoint: 20,
        crew_size: 4,
        starting_resources: Resources {
            fuel: 150,
            food: 80,
            water: 48,
            money: 100,
        },
        max_resources: Resources {
            fuel: 150,
            food: 120,
            water: 48,
            money: 500,
        },
        base_fuel: 5,
        engineer_savings: 1,
        base_food_per_crew: 2,
        base_water_per_crew: 2,
        base_wage_per_crew: 2,
        producer_rate: 3,
        base_station_money: 20,
        money_multiplier: 5,
        event_chance_percent: 25,
        cargo_chance_percent: 20,
        rarity_weights: RarityWeights {
            common: 60,
            uncommon: 25,
            rare: 12,
            legendary: 3,
        },
    }
}

pub fn sample_event() -> RandomEvent {
    RandomEvent {
        id: EventId("event_engine_fault".to_string()),
        name: "Engine Fault".to_string(),
        description: "The boiler pressure drops.".to_string(),
        tested_attribute: Attribute::Engineering,
        difficulty: 8,
        penalty: Penalty {
            resource: ResourceKind::Fuel,
            amount: 10,
        },
    }
}

pub fn sample_cargo() -> CargoItem {
    CargoItem {
        id: CargoId("cargo_coal_crate".to_string()),
        name: "Coal Crate".to_string(),
        rarity: Rarity::Common,
        reward: CargoReward {
            resource: ResourceKind::Fuel,
            amount: 15,
        },
        description: "A crate of coal left by the tracks.".to_string(),
    }
}

fn crew_member(n: usize) -> CrewMember {
    CrewMember {
        id: CrewId(format!("crew_{n:02}")),
        name: format!("Crew {n}"),
        avatar: format!("avatar_{n:02}"),
        role: Role::Free,
    }
}

pub fn base_content() -> GameContent {
    GameContent {
        content_version: "test".to_string(),
        leaders: vec![Leader {
            id: LeaderId("leader_test".to_string()),
            name: "Test Captain".to_string(),
            engineering: 2,
            cooking: 1,
            security: 2,
        }],
        vehicles: vec![Vehicle {
            id: VehicleId("vehicle_test".to_string()),
            name: "Test Engine".to_string(),
            speed: 3,
            reliability: 3,
            power: 3,
        }],
        crew_roster: (1..=6).map(crew_member).collect(),
        waypoints: (0..10)
            .map(|i| WaypointDef {
                name: format!("Waypoint {i}"),
                description: String::new(),
            })
            .collect(),
        events: vec![sample_event()],
        cargo: vec![sample_cargo()],
        constants: base_constants(),
    }
}

/// Fresh game on turn 1 at the first waypoint, crew unassigned.
pub fn base_state(content: &GameContent) -> GameState {
    GameState {
        meta: MetaState {
            seed: 42,
            schema_version: 1,
            content_version: content.content_version.clone(),
        },
        leader: content.leaders[0].clone(),
        vehicle: content.vehicles[0].clone(),
        crew: content
            .crew_roster
            .iter()
            .take(content.constants.crew_size)
            .cloned()
            .collect(),
        resources: content.constants.starting_resources,
        journey: Journey::default(),
        turn: 1,
        status: GameStatus::Playing,
        cargo_hold: vec![],
    }
}

/// Deterministic RNG seeded with 42.
pub fn make_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

/// Replays a fixed list of rolls, clamped into the requested range.
/// Once exhausted every roll returns the range minimum.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    rolls: Vec<i64>,
    next: usize,
}

impl ScriptedDice {
    pub fn new(rolls: &[i64]) -> Self {
        Self {
            rolls: rolls.to_vec(),
            next: 0,
        }
    }

    pub fn consumed(&self) -> usize {
        self.next
    }
}

impl RandomSource for ScriptedDice {
    fn roll_in_range(&mut self, min: i64, max: i64) -> i64 {
        let Some(&roll) = self.rolls.get(self.next) else {
            return min;
        };
        self.next += 1;
        if min >= max {
            min
        } else {
            roll.clamp(min, max)
        }
    }
}

/// Event hook with a fixed answer. Counts how often it was asked.
#[derive(Debug, Clone, Default)]
pub struct FixedEvents {
    pub fire: bool,
    pub event: Option<RandomEvent>,
    pub asked: usize,
}

impl FixedEvents {
    pub fn firing(event: RandomEvent) -> Self {
        Self {
            fire: true,
            event: Some(event),
            asked: 0,
        }
    }
}

impl EventSource for FixedEvents {
    fn should_trigger_event(&mut self, _dice: &mut impl RandomSource) -> bool {
        self.asked += 1;
        self.fire
    }

    fn select_random_event(&mut self, _dice: &mut impl RandomSource) -> Option<RandomEvent> {
        self.event.clone()
    }
}

/// Cargo hook with a fixed answer. Counts how often it was asked.
#[derive(Debug, Clone, Default)]
pub struct FixedCargo {
    pub fire: bool,
    pub item: Option<CargoItem>,
    pub asked: usize,
}

impl FixedCargo {
    pub fn firing(item: CargoItem) -> Self {
        Self {
            fire: true,
            item: Some(item),
            asked: 0,
        }
    }
}

impl CargoSource for FixedCargo {
    fn should_discover_cargo(&mut self, _dice: &mut impl RandomSource) -> bool {
        self.asked += 1;
        self.fire
    }

    fn select_random_cargo(&mut self, _dice: &mut impl RandomSource) -> Option<CargoItem> {
        self.item.clone()
    }
}
