use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use convoy_control::{AutopilotController, CrewController};
use convoy_core::{
    apply_turn_result, assign_role, final_score, process_turn, settle_hooks, Disabled,
    GameContent, GameState, GameStatus, LeaderId, TurnResult, VehicleId,
};
use convoy_world::leaderboard::{load_leaderboard, new_entry, save_leaderboard};
use convoy_world::{build_initial_state, load_content, waypoint_name, CargoTable, EventTable};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::Path;

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

#[derive(Parser)]
#[command(name = "convoy_cli", about = "Convoy journey simulator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one journey with the autopilot managing the crew.
    Run {
        /// RNG seed. Random if omitted. Mutually exclusive with --state.
        #[arg(long, conflicts_with = "state_file")]
        seed: Option<u64>,
        /// Resume from a saved GameState JSON file.
        #[arg(long = "state", conflicts_with = "seed")]
        state_file: Option<String>,
        /// Leader id. Defaults to the first leader in the content.
        #[arg(long)]
        leader: Option<String>,
        /// Vehicle id. Defaults to the first vehicle in the content.
        #[arg(long)]
        vehicle: Option<String>,
        #[arg(long, default_value = "./content")]
        content_dir: String,
        /// Name recorded on the leaderboard.
        #[arg(long, default_value = "Autopilot")]
        name: String,
        #[arg(long, default_value = ".")]
        leaderboard_dir: String,
        /// Skip the leaderboard entirely.
        #[arg(long)]
        no_record: bool,
        /// Turn off random events and cargo.
        #[arg(long)]
        no_events: bool,
        #[arg(long, default_value_t = 1)]
        print_every: u32,
        /// Stop after this many turns even if the journey is not over.
        #[arg(long, default_value_t = 500)]
        max_turns: u32,
        /// Write the final GameState to this file.
        #[arg(long)]
        save: Option<String>,
    },
    /// Print the saved leaderboard.
    Leaderboard {
        #[arg(long, default_value = ".")]
        leaderboard_dir: String,
    },
}

struct RunOptions {
    seed: Option<u64>,
    state_file: Option<String>,
    leader: Option<String>,
    vehicle: Option<String>,
    content_dir: String,
    name: String,
    leaderboard_dir: String,
    no_record: bool,
    no_events: bool,
    print_every: u32,
    max_turns: u32,
    save: Option<String>,
}

// ---------------------------------------------------------------------------
// Setup
// ---------------------------------------------------------------------------

fn initial_state(content: &GameContent, opts: &RunOptions) -> Result<(GameState, ChaCha8Rng)> {
    if let Some(path) = &opts.state_file {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading state file: {path}"))?;
        let loaded: GameState =
            serde_json::from_str(&json).with_context(|| format!("parsing state file: {path}"))?;
        let rng = ChaCha8Rng::seed_from_u64(loaded.meta.seed ^ u64::from(loaded.turn));
        return Ok((loaded, rng));
    }

    let seed = opts.seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let leader = match &opts.leader {
        Some(id) => LeaderId(id.clone()),
        None => content
            .leaders
            .first()
            .map(|l| l.id.clone())
            .context("content has no leaders")?,
    };
    let vehicle = match &opts.vehicle {
        Some(id) => VehicleId(id.clone()),
        None => content
            .vehicles
            .first()
            .map(|v| v.id.clone())
            .context("content has no vehicles")?,
    };
    let state = build_initial_state(content, seed, &leader, &vehicle, &mut rng)?;
    Ok((state, rng))
}

// ---------------------------------------------------------------------------
// Run loop
// ---------------------------------------------------------------------------

/// Settles the turn's event and cargo, then reports them.
fn settle_and_report(
    state: &mut GameState,
    result: &TurnResult,
    content: &GameContent,
    rng: &mut ChaCha8Rng,
) {
    let resolution = settle_hooks(state, result, content, rng);
    if let (Some(event), Some(outcome)) = (&result.event, resolution) {
        match outcome.penalty {
            Some(penalty) => println!(
                "  ! {}: failed ({} vs {}), lost {} {:?}",
                event.name, outcome.score, event.difficulty, penalty.amount, penalty.resource
            ),
            None => println!(
                "  ! {}: handled ({} vs {})",
                event.name, outcome.score, event.difficulty
            ),
        }
    }
    if let Some(item) = &result.cargo {
        println!(
            "  + found {} ({:?}): +{} {:?}",
            item.name, item.rarity, item.reward.amount, item.reward.resource
        );
    }
}

fn run(opts: &RunOptions) -> Result<()> {
    let content = load_content(&opts.content_dir)?;
    let (mut state, mut rng) = initial_state(&content, opts)?;
    let mut autopilot = AutopilotController::default();
    let mut events = EventTable::from_content(&content);
    let mut cargo = CargoTable::from_content(&content);

    println!(
        "Starting journey: seed={} leader={} vehicle={} content_version={}",
        state.meta.seed, state.leader.name, state.vehicle.name, content.content_version,
    );
    println!("{}", "-".repeat(80));

    let mut turns_played = 0;
    while !state.status.is_terminal() && turns_played < opts.max_turns {
        for (crew_id, role) in autopilot.assign_roles(&state, &content) {
            assign_role(&mut state, &crew_id, role);
            tracing::debug!(crew = %crew_id, role = role.label(), "reassigned");
        }

        let result = if opts.no_events {
            process_turn(&state, &content, &mut rng, &mut Disabled, &mut Disabled)
        } else {
            process_turn(&state, &content, &mut rng, &mut events, &mut cargo)
        };
        apply_turn_result(&mut state, &result);
        turns_played += 1;

        if let Some(reward) = &result.waypoint_reward {
            println!(
                "*** ARRIVED: {} at turn={:03} (+{} water, +{} money) ***",
                waypoint_name(&content, result.waypoint_index),
                result.turn,
                reward.water_refill,
                reward.money_earned,
            );
        }
        settle_and_report(&mut state, &result, &content, &mut rng);

        if opts.print_every > 0 && result.turn % opts.print_every == 0 {
            print_status(&state, &content);
        }
    }

    println!("{}", "-".repeat(80));
    let score = final_score(&state.resources);
    match state.status {
        GameStatus::Victory => println!("Victory after {} turns.", state.turn - 1),
        GameStatus::GameOver(reason) => {
            println!("Game over ({}) on turn {}.", reason.label(), state.turn);
        }
        GameStatus::Playing => println!("Stopped after {turns_played} turns, still travelling."),
    }
    print_status(&state, &content);
    println!("Score: {score}");

    if let Some(path) = &opts.save {
        let json = serde_json::to_string_pretty(&state).context("serializing final state")?;
        std::fs::write(path, json).with_context(|| format!("writing {path}"))?;
        println!("State saved to {path}");
    }

    if state.status.is_terminal() && !opts.no_record {
        let dir = Path::new(&opts.leaderboard_dir);
        let mut board = load_leaderboard(dir)?;
        if board.qualifies(score) {
            let today = chrono::Local::now().date_naive();
            let entry = new_entry(&opts.name, &state.resources, today, &mut rng);
            if let Some(rank) = board.record(entry) {
                save_leaderboard(dir, &board)?;
                println!("Leaderboard rank #{}", rank + 1);
            }
        } else {
            println!("Score did not make the leaderboard.");
        }
    }

    Ok(())
}

fn print_status(state: &GameState, content: &GameContent) {
    let r = &state.resources;
    println!(
        "[turn={:03}]  at={:<20} progress={:2}/{}  \
         fuel={:3}  food={:3}  water={:3}  money={:3}  cargo={}",
        state.turn,
        waypoint_name(content, state.journey.waypoint_index),
        state.journey.progress,
        content.constants.distance_per_waypoint,
        r.fuel,
        r.food,
        r.water,
        r.money,
        state.cargo_hold.len(),
    );
}

fn show_leaderboard(dir: &str) -> Result<()> {
    let board = load_leaderboard(Path::new(dir))?;
    if board.entries.is_empty() {
        println!("No scores yet.");
        return Ok(());
    }
    for (rank, entry) in board.entries.iter().enumerate() {
        println!(
            "{:2}. {:<20} {:6}  {}",
            rank + 1,
            entry.name,
            entry.score,
            entry.date
        );
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            seed,
            state_file,
            leader,
            vehicle,
            content_dir,
            name,
            leaderboard_dir,
            no_record,
            no_events,
            print_every,
            max_turns,
            save,
        } => run(&RunOptions {
            seed,
            state_file,
            leader,
            vehicle,
            content_dir,
            name,
            leaderboard_dir,
            no_record,
            no_events,
            print_every,
            max_turns,
            save,
        })?,
        Commands::Leaderboard { leaderboard_dir } => show_leaderboard(&leaderboard_dir)?,
    }
    Ok(())
}
