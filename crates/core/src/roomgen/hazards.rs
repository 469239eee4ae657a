use crate::rng::RngStream;
use crate::types::Rect;

use super::model::{HazardKind, HazardPlan, RoomEvent};
use super::placement::HAZARD;

const MAX_BASE_HAZARDS: u32 = 5;
const PULSE_CHANCE: f64 = 0.65;

pub(super) fn hazard_count(rng: &mut RngStream, depth: u32, event: RoomEvent) -> u32 {
    let ceiling = (1 + depth / 4).min(MAX_BASE_HAZARDS);
    let rolled = rng.int(0, ceiling as i32) as u32;
    match event {
        RoomEvent::Gauntlet => rolled + 1,
        RoomEvent::Cache | RoomEvent::Shrine => rolled.saturating_sub(1),
        _ => rolled,
    }
}

pub(super) fn generate_hazards(
    rng: &mut RngStream,
    depth: u32,
    obstacles: &[Rect],
    event: RoomEvent,
) -> Vec<HazardPlan> {
    let count = hazard_count(rng, depth, event);
    (0..count)
        .map(|_| {
            let point = HAZARD.sample(rng, obstacles, &[]);
            let pulse = rng.chance(PULSE_CHANCE);
            let radius = if pulse { rng.int(28, 42) } else { rng.int(22, 34) };
            let period_ms = if pulse { rng.int(1_000, 1_650) } else { rng.int(1_800, 2_500) };
            let phase_ms = rng.int(0, 1_200);
            HazardPlan {
                kind: if pulse { HazardKind::Pulse } else { HazardKind::Ember },
                x: point.x,
                y: point.y,
                radius,
                damage: if pulse { 1 } else { 2 },
                period_ms: period_ms as u32,
                phase_ms: phase_ms as u32,
            }
        })
        .collect()
}
