//! Mansion Horror - Entry Point
//!
//! A minimal text host for the stealth simulation core. The real game
//! wraps this core in a renderer and input layer; here the player proxy
//! walks toward typed destinations while the monster hunts.

use std::io::{self, Write};

use glam::Vec3;
use mansion_horror::core::error::Result;
use mansion_horror::core::SimulationConfig;
use mansion_horror::simulation::{Outcome, Simulation, TickInput};

/// Player walk speed in the reference host (units/sec)
const WALK_SPEED: f32 = 5.0;
/// Player sprint speed in the reference host (units/sec)
const SPRINT_SPEED: f32 = 8.0;
/// Fixed tick length for the console host
const TICK_DT: f32 = 1.0 / 60.0;
/// How close the player must be to a hiding spot to use it
const HIDE_REACH: f32 = 2.0;

/// The host-side player the console moves around
struct HostPlayer {
    position: Vec3,
    destination: Option<Vec3>,
    hiding: bool,
    sprinting: bool,
}

fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter("mansion_horror=debug")
        .init();

    tracing::info!("Mansion Horror starting...");

    let mut sim = Simulation::new(SimulationConfig::default())?;
    let mut player = HostPlayer {
        position: Vec3::new(5.0, 0.0, 5.0),
        destination: None,
        hiding: false,
        sprinting: false,
    };

    println!("\n=== MANSION HORROR ===");
    println!("Escape the mansion before the monster finds you");
    println!();
    println!("Commands:");
    println!("  tick / t        - Advance the simulation by one tick");
    println!("  run <seconds>   - Simulate for a number of seconds");
    println!("  walk <x> <z>    - Set a destination to walk toward");
    println!("  sprint          - Toggle sprinting");
    println!("  hide            - Toggle hiding (needs a nearby spot)");
    println!("  status / s      - Show detailed status");
    println!("  quit / q        - Exit");
    println!();

    loop {
        display_status(&sim, &player);

        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let input = input.trim();

        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "q" {
            break;
        }

        let parts: Vec<&str> = input.split_whitespace().collect();
        match parts.as_slice() {
            ["tick"] | ["t"] => {
                advance(&mut sim, &mut player, 1);
            }
            ["run", seconds] => match seconds.parse::<f32>() {
                Ok(s) if s > 0.0 => {
                    let ticks = (s / TICK_DT).round() as u64;
                    advance(&mut sim, &mut player, ticks);
                }
                _ => println!("usage: run <seconds>"),
            },
            ["walk", x, z] => match (x.parse::<f32>(), z.parse::<f32>()) {
                (Ok(x), Ok(z)) => {
                    player.destination = Some(Vec3::new(x, player.position.y, z));
                    println!("Walking toward ({x:.1}, {z:.1})");
                }
                _ => println!("usage: walk <x> <z>"),
            },
            ["sprint"] => {
                player.sprinting = !player.sprinting;
                println!(
                    "Sprinting {}",
                    if player.sprinting { "on" } else { "off" }
                );
            }
            ["hide"] => toggle_hiding(&sim, &mut player),
            ["status"] | ["s"] => {} // status prints at the top of the loop
            _ => println!("Unknown command: {input}"),
        }

        if let Some(outcome) = sim.outcome() {
            match outcome {
                Outcome::Caught => println!("\nThe monster caught you. GAME OVER."),
                Outcome::Escaped => println!("\nYou escaped the mansion. YOU WIN!"),
            }
            break;
        }
    }

    Ok(())
}

/// Run `ticks` simulation steps, walking the player toward their
/// destination between steps
fn advance(sim: &mut Simulation, player: &mut HostPlayer, ticks: u64) {
    for _ in 0..ticks {
        let speed = move_player(player);

        let report = sim.step(&TickInput {
            dt: TICK_DT,
            player_pos: player.position,
            player_hiding: player.hiding,
            player_speed: speed,
            player_sprinting: player.sprinting,
        });

        for event in &report.events {
            println!("  * {event:?}");
        }
        if report.outcome.is_some() {
            break;
        }
    }
}

/// Step the player toward their destination; returns the speed moved at
fn move_player(player: &mut HostPlayer) -> f32 {
    // Hiding pins you in place
    if player.hiding {
        return 0.0;
    }
    let Some(dest) = player.destination else {
        return 0.0;
    };

    let speed = if player.sprinting {
        SPRINT_SPEED
    } else {
        WALK_SPEED
    };
    let step = speed * TICK_DT;
    let to_dest = dest - player.position;

    if to_dest.length() <= step {
        player.position = dest;
        player.destination = None;
        println!("Arrived at ({:.1}, {:.1})", dest.x, dest.z);
    } else {
        player.position += to_dest.normalize_or_zero() * step;
    }
    speed
}

fn toggle_hiding(sim: &Simulation, player: &mut HostPlayer) {
    if player.hiding {
        player.hiding = false;
        println!("You step out of hiding.");
        return;
    }

    match sim
        .mansion()
        .nearest_hiding_spot(player.position, HIDE_REACH)
    {
        Some(spot) => {
            player.hiding = true;
            player.destination = None;
            println!("You hide ({:?}).", spot.kind);
        }
        None => println!("No hiding spot within reach."),
    }
}

fn display_status(sim: &Simulation, player: &HostPlayer) {
    let monster = sim.monster();
    let room = sim
        .mansion()
        .room_containing(player.position)
        .map(|(_, r)| r.name.as_str())
        .unwrap_or("nowhere in particular");

    println!();
    println!(
        "[tick {:>6}] you: ({:.1}, {:.1}) in {} | health {:.0} stamina {:.0}{}{}",
        sim.tick(),
        player.position.x,
        player.position.z,
        room,
        sim.player().health(),
        sim.player().stamina(),
        if player.hiding { " [hiding]" } else { "" },
        if player.sprinting { " [sprinting]" } else { "" },
    );
    println!(
        "  monster: ({:.1}, {:.1}) {} alertness {:.2}",
        monster.position().x,
        monster.position().z,
        monster.state(),
        monster.alertness(),
    );
    println!(
        "  objective {}/{}: {}",
        sim.tasks().completed_count(),
        sim.tasks().total_count(),
        sim.tasks().current_description(),
    );
}
