//! Type definitions for `convoy_core`.
//!
//! All public types, structs, enums, and ID newtypes used by the engine.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ID newtypes
// ---------------------------------------------------------------------------

macro_rules! string_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub String);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(LeaderId);
string_id!(VehicleId);
string_id!(CrewId);
string_id!(EventId);
string_id!(CargoId);

// ---------------------------------------------------------------------------
// Core enums
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Fuel,
    Food,
    Water,
    Money,
}

/// Crew assignment. Only `Engineer` and `Cook` feed the turn economy;
/// `Security` helps with security-tested events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Role {
    Engineer,
    Cook,
    Security,
    #[default]
    Free,
}

/// Leader attribute an event tests against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    Engineering,
    Cooking,
    Security,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Legendary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOverReason {
    Starvation,
    OutOfFuel,
    Dehydration,
    Broke,
}

impl GameOverReason {
    pub fn label(self) -> &'static str {
        match self {
            GameOverReason::Starvation => "starvation",
            GameOverReason::OutOfFuel => "out of fuel",
            GameOverReason::Dehydration => "dehydration",
            GameOverReason::Broke => "broke",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Playing,
    Victory,
    GameOver(GameOverReason),
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

/// Stockpile of the four convoy resources. Also used for per-field maxima.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Resources {
    pub fuel: i64,
    pub food: i64,
    pub water: i64,
    pub money: i64,
}

impl Resources {
    pub fn get(&self, kind: ResourceKind) -> i64 {
        match kind {
            ResourceKind::Fuel => self.fuel,
            ResourceKind::Food => self.food,
            ResourceKind::Water => self.water,
            ResourceKind::Money => self.money,
        }
    }
}

/// Signed per-resource change. Never clamped on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResourceDelta {
    pub fuel: i64,
    pub food: i64,
    pub water: i64,
    pub money: i64,
}

impl ResourceDelta {
    /// Delta touching a single resource.
    pub fn single(kind: ResourceKind, amount: i64) -> Self {
        let mut delta = Self::default();
        match kind {
            ResourceKind::Fuel => delta.fuel = amount,
            ResourceKind::Food => delta.food = amount,
            ResourceKind::Water => delta.water = amount,
            ResourceKind::Money => delta.money = amount,
        }
        delta
    }
}

impl std::ops::Add for ResourceDelta {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            fuel: self.fuel.saturating_add(rhs.fuel),
            food: self.food.saturating_add(rhs.food),
            water: self.water.saturating_add(rhs.water),
            money: self.money.saturating_add(rhs.money),
        }
    }
}

// ---------------------------------------------------------------------------
// Party
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leader {
    pub id: LeaderId,
    pub name: String,
    /// Tested by engineering events. Fuel burn is driven by vehicle power.
    pub engineering: u32,
    /// Added to food production every turn.
    pub cooking: u32,
    /// Scales the money earned at each waypoint.
    pub security: u32,
}

impl Leader {
    pub fn attribute(&self, attribute: Attribute) -> u32 {
        match attribute {
            Attribute::Engineering => self.engineering,
            Attribute::Cooking => self.cooking,
            Attribute::Security => self.security,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: VehicleId,
    pub name: String,
    pub speed: u32,
    /// Not read by the engine.
    pub reliability: u32,
    pub power: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewMember {
    pub id: CrewId,
    pub name: String,
    pub avatar: String,
    #[serde(default)]
    pub role: Role,
}

// ---------------------------------------------------------------------------
// Events and cargo
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Penalty {
    pub resource: ResourceKind,
    pub amount: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomEvent {
    pub id: EventId,
    pub name: String,
    pub description: String,
    pub tested_attribute: Attribute,
    pub difficulty: u32,
    pub penalty: Penalty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CargoReward {
    pub resource: ResourceKind,
    pub amount: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CargoItem {
    pub id: CargoId,
    pub name: String,
    pub rarity: Rarity,
    pub reward: CargoReward,
    pub description: String,
}

// ---------------------------------------------------------------------------
// State types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub meta: MetaState,
    pub leader: Leader,
    pub vehicle: Vehicle,
    pub crew: Vec<CrewMember>,
    pub resources: Resources,
    pub journey: Journey,
    /// Starts at 1; bumped once per processed turn.
    pub turn: u32,
    pub status: GameStatus,
    /// Cargo the caller chose to keep. The engine never writes here.
    #[serde(default)]
    pub cargo_hold: Vec<CargoItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetaState {
    pub seed: u64,
    pub schema_version: u32,
    pub content_version: String,
}

/// Position along the route: which waypoint was last reached and how far
/// past it the convoy has travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Journey {
    pub waypoint_index: usize,
    pub progress: u32,
}

// ---------------------------------------------------------------------------
// Turn output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaypointReward {
    pub water_refill: i64,
    pub money_earned: i64,
}

/// Everything one call to [`crate::process_turn`] decided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnResult {
    /// Turn counter after this turn.
    pub turn: u32,
    pub dice_roll: i64,
    pub movement: u32,
    pub consumption: crate::Consumption,
    pub food_produced: i64,
    /// Consumption, production and waypoint reward summed, before clamping.
    pub delta: ResourceDelta,
    pub resources: Resources,
    pub waypoint_index: usize,
    pub progress: u32,
    pub arrived_at_waypoint: bool,
    pub waypoint_reward: Option<WaypointReward>,
    pub status: GameStatus,
    pub event: Option<RandomEvent>,
    pub cargo: Option<CargoItem>,
}

// ---------------------------------------------------------------------------
// Content types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameContent {
    pub content_version: String,
    pub leaders: Vec<Leader>,
    pub vehicles: Vec<Vehicle>,
    pub crew_roster: Vec<CrewMember>,
    pub waypoints: Vec<WaypointDef>,
    pub events: Vec<RandomEvent>,
    pub cargo: Vec<CargoItem>,
    pub constants: Constants,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaypointDef {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Constants {
    pub total_waypoints: usize,
    pub distance_per_waypoint: u32,
    pub crew_size: usize,
    pub starting_resources: Resources,
    pub max_resources: Resources,
    /// Fuel burned per turn before vehicle power and engineers are applied.
    pub base_fuel: i64,
    pub engineer_savings: i64,
    pub base_food_per_crew: i64,
    pub base_water_per_crew: i64,
    pub base_wage_per_crew: i64,
    /// Food each cook adds per turn.
    pub producer_rate: i64,
    pub base_station_money: i64,
    pub money_multiplier: i64,
    /// Percent chance (0-100) per turn.
    pub event_chance_percent: u32,
    /// Percent chance (0-100) per non-arrival turn.
    pub cargo_chance_percent: u32,
    pub rarity_weights: RarityWeights,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RarityWeights {
    pub common: u32,
    pub uncommon: u32,
    pub rare: u32,
    pub legendary: u32,
}
