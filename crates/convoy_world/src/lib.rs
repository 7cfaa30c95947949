//! Content loading, new-game setup, the table-driven event/cargo sources,
//! and the leaderboard. Shared by `convoy_cli` and any other front end.

use anyhow::{bail, Context, Result};
use convoy_core::{
    CargoItem, Constants, CrewMember, GameContent, GameState, GameStatus, Journey, Leader,
    LeaderId, MetaState, RandomEvent, Role, Vehicle, VehicleId, WaypointDef,
};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

pub mod leaderboard;
mod tables;

pub use tables::{CargoTable, EventTable};

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Deserialize)]
struct LeadersFile {
    content_version: String,
    leaders: Vec<Leader>,
}

#[derive(Deserialize)]
struct VehiclesFile {
    vehicles: Vec<Vehicle>,
}

#[derive(Deserialize)]
struct CrewFile {
    crew: Vec<CrewMember>,
}

#[derive(Deserialize)]
struct WaypointsFile {
    waypoints: Vec<WaypointDef>,
}

#[derive(Deserialize)]
struct EventsFile {
    events: Vec<RandomEvent>,
}

#[derive(Deserialize)]
struct CargoFile {
    cargo: Vec<CargoItem>,
}

fn assert_unique<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) {
    let mut seen = HashSet::new();
    for id in ids {
        assert!(!id.is_empty(), "{kind} has empty id");
        assert!(seen.insert(id), "duplicate {kind} id '{id}'");
    }
}

/// Validates loaded content, panicking on any authoring error.
///
/// Catches mistakes like: a waypoint list that does not match
/// `total_waypoints`, a roster too small for the crew, a starting stockpile
/// above its cap, or two leaders sharing an id.
pub fn validate_content(content: &GameContent) {
    let c = &content.constants;

    assert!(
        c.total_waypoints >= 2,
        "total_waypoints must be at least 2, got {}",
        c.total_waypoints
    );
    assert!(
        c.distance_per_waypoint > 0,
        "distance_per_waypoint must be positive"
    );
    assert_eq!(
        content.waypoints.len(),
        c.total_waypoints,
        "waypoints.json lists {} waypoints but total_waypoints is {}",
        content.waypoints.len(),
        c.total_waypoints,
    );
    assert!(
        content.crew_roster.len() >= c.crew_size,
        "crew roster has {} members but crew_size is {}",
        content.crew_roster.len(),
        c.crew_size,
    );
    assert!(!content.leaders.is_empty(), "no leaders defined");
    assert!(!content.vehicles.is_empty(), "no vehicles defined");

    assert_unique("leader", content.leaders.iter().map(|l| l.id.0.as_str()));
    assert_unique("vehicle", content.vehicles.iter().map(|v| v.id.0.as_str()));
    assert_unique("crew", content.crew_roster.iter().map(|m| m.id.0.as_str()));
    assert_unique("event", content.events.iter().map(|e| e.id.0.as_str()));
    assert_unique("cargo", content.cargo.iter().map(|i| i.id.0.as_str()));

    validate_constants(c);

    for event in &content.events {
        assert!(
            event.penalty.amount >= 0,
            "event '{}' has negative penalty {}",
            event.id,
            event.penalty.amount
        );
    }
    for item in &content.cargo {
        assert!(
            item.reward.amount > 0,
            "cargo '{}' has non-positive reward {}",
            item.id,
            item.reward.amount
        );
    }
}

fn validate_constants(c: &Constants) {
    let fields = [
        ("fuel", c.starting_resources.fuel, c.max_resources.fuel),
        ("food", c.starting_resources.food, c.max_resources.food),
        ("water", c.starting_resources.water, c.max_resources.water),
        ("money", c.starting_resources.money, c.max_resources.money),
    ];
    for (name, start, max) in fields {
        assert!(
            (0..=max).contains(&start),
            "starting {name} {start} outside [0, {max}]"
        );
    }

    let rates = [
        ("base_fuel", c.base_fuel),
        ("engineer_savings", c.engineer_savings),
        ("base_food_per_crew", c.base_food_per_crew),
        ("base_water_per_crew", c.base_water_per_crew),
        ("base_wage_per_crew", c.base_wage_per_crew),
        ("producer_rate", c.producer_rate),
        ("base_station_money", c.base_station_money),
        ("money_multiplier", c.money_multiplier),
    ];
    for (name, value) in rates {
        assert!(value >= 0, "{name} must be non-negative, got {value}");
    }

    assert!(
        c.event_chance_percent <= 100,
        "event_chance_percent {} above 100",
        c.event_chance_percent
    );
    assert!(
        c.cargo_chance_percent <= 100,
        "cargo_chance_percent {} above 100",
        c.cargo_chance_percent
    );
    assert!(
        c.rarity_weights.total() > 0,
        "rarity_weights must not all be zero"
    );
}

fn read_json<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<T> {
    let path = dir.join(file);
    let text =
        std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

pub fn load_content(content_dir: &str) -> Result<GameContent> {
    let dir = Path::new(content_dir);
    let constants: Constants = read_json(dir, "constants.json")?;
    let leaders_file: LeadersFile = read_json(dir, "leaders.json")?;
    let vehicles_file: VehiclesFile = read_json(dir, "vehicles.json")?;
    let crew_file: CrewFile = read_json(dir, "crew.json")?;
    let waypoints_file: WaypointsFile = read_json(dir, "waypoints.json")?;
    let events_file: EventsFile = read_json(dir, "events.json")?;
    let cargo_file: CargoFile = read_json(dir, "cargo.json")?;

    let content = GameContent {
        content_version: leaders_file.content_version,
        leaders: leaders_file.leaders,
        vehicles: vehicles_file.vehicles,
        crew_roster: crew_file.crew,
        waypoints: waypoints_file.waypoints,
        events: events_file.events,
        cargo: cargo_file.cargo,
        constants,
    };
    validate_content(&content);
    tracing::debug!(
        content_version = %content.content_version,
        leaders = content.leaders.len(),
        vehicles = content.vehicles.len(),
        events = content.events.len(),
        cargo = content.cargo.len(),
        "content loaded"
    );
    Ok(content)
}

/// Starts a new game with the chosen leader and vehicle and a crew drawn
/// from the roster. Everyone starts unassigned.
pub fn build_initial_state(
    content: &GameContent,
    seed: u64,
    leader_id: &LeaderId,
    vehicle_id: &VehicleId,
    rng: &mut impl Rng,
) -> Result<GameState> {
    let Some(leader) = content.leaders.iter().find(|l| l.id == *leader_id) else {
        bail!("unknown leader '{leader_id}'");
    };
    let Some(vehicle) = content.vehicles.iter().find(|v| v.id == *vehicle_id) else {
        bail!("unknown vehicle '{vehicle_id}'");
    };
    let crew_size = content.constants.crew_size;
    if content.crew_roster.len() < crew_size {
        bail!(
            "crew roster has {} members, need {crew_size}",
            content.crew_roster.len()
        );
    }

    let crew: Vec<CrewMember> = content
        .crew_roster
        .choose_multiple(rng, crew_size)
        .map(|member| CrewMember {
            role: Role::Free,
            ..member.clone()
        })
        .collect();

    Ok(GameState {
        meta: MetaState {
            seed,
            schema_version: SCHEMA_VERSION,
            content_version: content.content_version.clone(),
        },
        leader: leader.clone(),
        vehicle: vehicle.clone(),
        crew,
        resources: content.constants.starting_resources,
        journey: Journey::default(),
        turn: 1,
        status: GameStatus::Playing,
        cargo_hold: vec![],
    })
}

/// Display name of the waypoint at `index`, or a placeholder past the end.
pub fn waypoint_name(content: &GameContent, index: usize) -> &str {
    content
        .waypoints
        .get(index)
        .map_or("uncharted", |w| w.name.as_str())
}
