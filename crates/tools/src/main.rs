mod seed;

use std::io;

use anyhow::{Context, Result, ensure};
use clap::{Parser, ValueEnum};
use geode_core::content::upgrade_by_id;
use geode_core::{Direction, RoomCoord, RoomLayout, RunContext, generate_room_layout};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use seed::SeedChoice;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Summary,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
struct Args {
    /// Run seed; generated from the clock when absent
    #[arg(short, long)]
    seed: Option<u32>,
    /// Room x coordinate
    #[arg(short, long, default_value_t = 0)]
    x: i32,
    /// Room y coordinate
    #[arg(short, long, default_value_t = 0)]
    y: i32,
    #[arg(short, long, default_value_t = 0)]
    depth: u32,
    /// Comma-separated upgrade ids the run already owns
    #[arg(long, value_delimiter = ',')]
    owned: Vec<String>,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Summary)]
    format: OutputFormat,
    /// Walk a run of N rooms from the origin instead of printing a single room
    #[arg(short, long)]
    walk: Option<u32>,
}

#[derive(Serialize)]
struct WalkStep<'a> {
    step: u32,
    via: &'static str,
    layout: &'a RoomLayout,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();

    let args = Args::parse();
    let seed = SeedChoice::resolve(args.seed);
    info!(seed = seed.value(), generated = matches!(seed, SeedChoice::Generated(_)), "run seed");

    for id in &args.owned {
        ensure!(upgrade_by_id(id).is_some(), "unknown upgrade id `{id}`");
    }

    match args.walk {
        Some(rooms) => walk_run(seed.value(), rooms, args.format),
        None => {
            let owned: Vec<&str> = args.owned.iter().map(String::as_str).collect();
            let coord = RoomCoord::new(args.x, args.y);
            let layout = generate_room_layout(seed.value(), coord, args.depth, &owned);
            match args.format {
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&layout).context("Failed to serialize layout")?
                ),
                OutputFormat::Summary => print_summary(&layout),
            }
            Ok(())
        }
    }
}

/// Clears every room, claims any shrine, and leaves through the portal when one exists,
/// otherwise through a random door.
fn walk_run(run_seed: u32, rooms: u32, format: OutputFormat) -> Result<()> {
    let mut run = RunContext::start(run_seed);
    let mut rng = ChaCha8Rng::seed_from_u64(u64::from(run_seed));
    let mut steps = vec![(0, "start", run.layout().clone())];

    for step in 1..rooms {
        run.mark_room_cleared();
        if let Some(shrine) = run.layout().shrine {
            run.claim_shrine(shrine.upgrade_id).context("Shrine rolled an unknown upgrade")?;
        }

        let via = if run.current_portal().is_some() {
            run.use_portal().context("Portal jump failed after clearing the room")?;
            "portal"
        } else {
            let exits = run.layout().exits;
            let open: Vec<Direction> =
                Direction::ALL.into_iter().filter(|&door| exits.is_open(door)).collect();
            ensure!(!open.is_empty(), "Room {} has no open door", run.room());
            let direction = open[(rng.next_u64() % open.len() as u64) as usize];
            run.exit(direction).context("Door exit failed after clearing the room")?;
            direction_name(direction)
        };
        steps.push((step, via, run.layout().clone()));
    }

    match format {
        OutputFormat::Json => {
            let records: Vec<WalkStep<'_>> = steps
                .iter()
                .map(|(step, via, layout)| WalkStep { step: *step, via: *via, layout })
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&records).context("Failed to serialize walk")?
            );
        }
        OutputFormat::Summary => {
            for (step, via, layout) in &steps {
                println!("--- step {step} via {via} ---");
                print_summary(layout);
            }
            println!(
                "Walk complete. depth={} best={} visited={} upgrades={}",
                run.depth(),
                run.best_depth(),
                run.visited_count(),
                run.owned_upgrades().join(",")
            );
        }
    }
    Ok(())
}

fn direction_name(direction: Direction) -> &'static str {
    match direction {
        Direction::North => "north",
        Direction::South => "south",
        Direction::West => "west",
        Direction::East => "east",
    }
}

fn print_summary(layout: &RoomLayout) {
    println!(
        "Room {} depth {} seed {} theme {:?} event {}",
        layout.coord,
        layout.depth,
        layout.seed,
        layout.theme,
        layout.event.as_str()
    );
    println!(
        "  obstacles {}  hazards {}  decorations {}",
        layout.obstacles.len(),
        layout.hazards.len(),
        layout.decorations.len()
    );
    let doors: Vec<&str> = Direction::ALL
        .into_iter()
        .filter(|&door| layout.exits.is_open(door))
        .map(direction_name)
        .collect();
    println!("  exits {}", doors.join(","));
    let elites = layout.enemy_plan.iter().filter(|spawn| spawn.elite).count();
    println!("  enemies {} ({elites} elite)", layout.enemy_plan.len());
    for spawn in &layout.enemy_plan {
        let tag = if spawn.elite { " elite" } else { "" };
        println!("    {} @ ({}, {}){tag}", spawn.enemy_id, spawn.x, spawn.y);
    }
    if let Some(drop) = layout.weapon_drop {
        println!("  weapon {} @ ({}, {})", drop.weapon_id, drop.x, drop.y);
    }
    if let Some(drop) = layout.ammo_drop {
        println!("  ammo {} @ ({}, {})", drop.amount, drop.x, drop.y);
    }
    if let Some(drop) = layout.health_drop {
        println!("  health {} @ ({}, {})", drop.amount, drop.x, drop.y);
    }
    if let Some(shrine) = layout.shrine {
        println!("  shrine {} @ ({}, {})", shrine.upgrade_id, shrine.x, shrine.y);
    }
    if let Some(portal) = layout.portal {
        println!("  portal @ ({}, {}) -> {}", portal.x, portal.y, portal.target);
    }
    println!("  fingerprint {:016x}", layout.fingerprint());
}
