use std::io;

use anyhow::{Result, ensure};
use clap::Parser;
use geode_core::content::UPGRADES;
use geode_core::roomgen::{RoomEvent, blocks_entry_lane, wave_cap};
use geode_core::tuning::{ROOM_HEIGHT, ROOM_WIDTH};
use geode_core::{RoomCoord, RoomLayout, generate_room_layout};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    rooms: u32,
}

fn choose<T: Copy>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p]
}

fn signed_in(rng: &mut ChaCha8Rng, span: u32) -> i32 {
    (rng.next_u64() % u64::from(span * 2 + 1)) as i32 - span as i32
}

fn in_room(x: i32, y: i32) -> bool {
    (0..=ROOM_WIDTH).contains(&x) && (0..=ROOM_HEIGHT).contains(&y)
}

fn check_layout(layout: &RoomLayout) -> Result<()> {
    let room = layout.coord;
    ensure!(
        layout.enemy_plan.len() <= wave_cap(layout.depth),
        "room {room}: {} enemies exceed cap {}",
        layout.enemy_plan.len(),
        wave_cap(layout.depth)
    );

    if layout.event == RoomEvent::Bosslet {
        ensure!(
            layout.enemy_plan.iter().any(|spawn| matches!(spawn.enemy_id, "brute" | "oracle")),
            "room {room}: bosslet without a brute or oracle"
        );
    }

    if let Some(portal) = layout.portal {
        let target = portal.target;
        ensure!(target.manhattan(room) >= 2, "room {room}: trivial portal to {target}");
    }

    for (index, rect) in layout.obstacles.iter().enumerate() {
        ensure!(!blocks_entry_lane(rect), "room {room}: obstacle {rect:?} blocks a door lane");
        for other in &layout.obstacles[index + 1..] {
            ensure!(!rect.overlaps_padded(other, 10), "room {room}: {rect:?} overlaps {other:?}");
        }
    }

    for spawn in &layout.enemy_plan {
        ensure!(in_room(spawn.x, spawn.y), "room {room}: enemy outside bounds {spawn:?}");
    }
    for decoration in &layout.decorations {
        ensure!(
            in_room(decoration.x, decoration.y),
            "room {room}: decoration outside bounds {decoration:?}"
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();

    let args = Args::parse();
    info!(seed = args.seed, rooms = args.rooms, "starting room generation fuzz");
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let upgrade_ids: Vec<&str> = UPGRADES.iter().map(|upgrade| upgrade.id).collect();

    for _ in 0..args.rooms {
        let run_seed = rng.next_u64() as u32;
        let coord = RoomCoord::new(signed_in(&mut rng, 64), signed_in(&mut rng, 64));
        let depth = (rng.next_u64() % 48) as u32;
        let owned_count = (rng.next_u64() % (upgrade_ids.len() as u64 + 1)) as usize;
        let owned: Vec<&str> = (0..owned_count).map(|_| choose(&mut rng, &upgrade_ids)).collect();

        let layout = generate_room_layout(run_seed, coord, depth, &owned);
        check_layout(&layout)?;

        let repeat = generate_room_layout(run_seed, coord, depth, &owned);
        ensure!(
            layout.fingerprint() == repeat.fingerprint(),
            "run {run_seed} room {coord} depth {depth}: regeneration changed the fingerprint"
        );
        debug!(run_seed, room = %coord, depth, fingerprint = layout.fingerprint(), "room ok");
    }

    info!(rooms = args.rooms, "fuzzing completed successfully");
    Ok(())
}
