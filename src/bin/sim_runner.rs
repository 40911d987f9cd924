//! Headless Scenario Runner
//!
//! Walks a scripted player through the mansion's task chain while the
//! monster hunts, and reports the run as JSON for balance tuning.

use clap::Parser;
use glam::Vec3;
use serde::Serialize;

use mansion_horror::core::SimulationConfig;
use mansion_horror::monster::MonsterState;
use mansion_horror::simulation::{Outcome, Simulation, TickInput};

/// Headless Scenario Runner - scripted stealth runs for balance tuning
#[derive(Parser, Debug)]
#[command(name = "sim_runner")]
#[command(about = "Run a scripted player through the mansion and output the result")]
struct Args {
    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum ticks before the run times out
    #[arg(long, default_value_t = 36_000)]
    max_ticks: u64,

    /// Seconds per tick
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Player walk speed (units/sec)
    #[arg(long, default_value_t = 5.0)]
    walk_speed: f32,

    /// Duck into the nearest hiding spot whenever the monster chases
    #[arg(long)]
    hide_when_chased: bool,

    /// Output format: json or text
    #[arg(long, default_value = "json")]
    format: String,

    /// Enable verbose simulation logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// JSON output structure
#[derive(Serialize)]
struct RunResult {
    outcome: String,
    ticks: u64,
    seconds: f32,
    health_remaining: f32,
    stamina_remaining: f32,
    tasks_completed: usize,
    total_tasks: usize,
    seed: u64,
}

fn main() {
    let args = Args::parse();

    let filter = if args.verbose {
        "mansion_horror=debug"
    } else {
        "mansion_horror=warn"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = SimulationConfig::default();
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    let seed = config.seed;

    let mut sim = match Simulation::new(config) {
        Ok(sim) => sim,
        Err(err) => {
            eprintln!("failed to build simulation: {err}");
            std::process::exit(1);
        }
    };

    let mut player_pos = Vec3::new(5.0, 0.0, 5.0);
    let mut hiding = false;
    let mut ticks = 0u64;

    while ticks < args.max_ticks {
        let monster_hunting = matches!(
            sim.monster().state(),
            MonsterState::Chase | MonsterState::Attack
        );

        if args.hide_when_chased {
            if !hiding
                && monster_hunting
                && sim.mansion().nearest_hiding_spot(player_pos, 2.0).is_some()
            {
                hiding = true;
            } else if hiding && sim.monster().state() == MonsterState::Patrol {
                hiding = false;
            }
        }

        // Walk straight at the current objective unless hiding
        let mut speed = 0.0;
        if !hiding {
            if let Some(task) = sim.tasks().current_task() {
                let step = args.walk_speed * args.dt;
                let to_task = task.location - player_pos;
                if to_task.length() <= step {
                    player_pos = task.location;
                } else {
                    player_pos += to_task.normalize_or_zero() * step;
                }
                speed = args.walk_speed;
            }
        }

        let report = sim.step(&TickInput {
            dt: args.dt,
            player_pos,
            player_hiding: hiding,
            player_speed: speed,
            player_sprinting: false,
        });
        ticks += 1;

        if report.outcome.is_some() {
            break;
        }
    }

    let result = RunResult {
        outcome: match sim.outcome() {
            Some(Outcome::Escaped) => "escaped".to_string(),
            Some(Outcome::Caught) => "caught".to_string(),
            None => "timeout".to_string(),
        },
        ticks,
        seconds: ticks as f32 * args.dt,
        health_remaining: sim.player().health(),
        stamina_remaining: sim.player().stamina(),
        tasks_completed: sim.tasks().completed_count(),
        total_tasks: sim.tasks().total_count(),
        seed,
    };

    if args.format == "json" {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("failed to serialize result: {err}");
                std::process::exit(1);
            }
        }
    } else {
        println!(
            "{} after {} ticks ({:.1}s): {}/{} tasks, {:.0} health left (seed {})",
            result.outcome,
            result.ticks,
            result.seconds,
            result.tasks_completed,
            result.total_tasks,
            result.health_remaining,
            result.seed,
        );
    }
}
