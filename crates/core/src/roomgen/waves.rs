//! Room event rolls and budgeted enemy waves.

use crate::content::{ENEMIES, EnemyAi, EnemyDef, keys};
use crate::rng::RngStream;
use crate::tuning::TUNING;
use crate::types::Rect;
use crate::weighted::weighted_pick;

use super::model::{EnemySpawnPlan, RoomEvent};
use super::placement::ENEMY_SPAWN;

const BOSSLET_DEPTH_INTERVAL: u32 = 6;
const EVENT_WEIGHTS: [(RoomEvent, f64); 5] = [
    (RoomEvent::Skirmish, 44.0),
    (RoomEvent::Swarm, 24.0),
    (RoomEvent::Gauntlet, 16.0),
    (RoomEvent::Cache, 8.0),
    (RoomEvent::Shrine, 8.0),
];
const MIN_SPENDABLE_BUDGET: f64 = 0.75;
const GUARANTEED_PICKS: usize = 4;
const ELITE_COST_MULT: f64 = 1.9;
const ORACLE_FALLBACK_DEPTH: u32 = 9;

impl RoomEvent {
    pub fn budget_multiplier(self) -> f64 {
        match self {
            Self::Skirmish => 1.0,
            Self::Swarm => 1.3,
            Self::Gauntlet => 1.55,
            Self::Cache => 0.8,
            Self::Shrine => 0.74,
            Self::Bosslet => 1.9,
        }
    }
}

/// Bosslet on every sixth depth, otherwise a weighted draw over the remaining events.
/// The stream is left untouched on bosslet depths.
pub fn roll_room_event(rng: &mut RngStream, depth: u32) -> RoomEvent {
    if depth > 0 && depth % BOSSLET_DEPTH_INTERVAL == 0 {
        return RoomEvent::Bosslet;
    }

    weighted_pick(rng, &EVENT_WEIGHTS, |&(_, weight)| weight)
        .map_or(RoomEvent::Skirmish, |&(event, _)| event)
}

/// Upper bound on wave size at `depth`.
pub fn wave_cap(depth: u32) -> usize {
    let scaled = 8 + (f64::from(depth) * 1.6).floor() as usize;
    scaled.min(TUNING.spawn.max_enemies)
}

pub fn threat_budget(depth: u32, event: RoomEvent) -> f64 {
    (7.0 + f64::from(depth) * 1.9) * event.budget_multiplier()
}

fn elite_chance(depth: u32, event: RoomEvent) -> f64 {
    match event {
        RoomEvent::Bosslet => 0.45,
        _ => (0.08 + f64::from(depth) * 0.012).min(0.4),
    }
}

fn enemy_weight(enemy: &EnemyDef, depth: u32, event: RoomEvent) -> f64 {
    let depth_past_unlock = f64::from(depth.saturating_sub(enemy.min_depth));
    let weight = (42.0 - enemy.threat * 8.0 + depth_past_unlock * 2.8).max(4.0);
    let event_bonus = match event {
        RoomEvent::Swarm if matches!(enemy.ai, EnemyAi::Chaser | EnemyAi::Strafer) => 1.25,
        RoomEvent::Gauntlet if enemy.ai == EnemyAi::Turret => 1.35,
        RoomEvent::Cache if enemy.ai == EnemyAi::Chaser => 1.1,
        RoomEvent::Bosslet if enemy.threat > 2.5 => 1.5,
        _ => 1.0,
    };
    weight * event_bonus
}

/// Spends a threat budget on enemies unlocked at `depth`.
///
/// The first four picks are always placed even when they overshoot the budget. Bosslet
/// rooms end with an elite brute (or oracle from depth 9) unless the wave already holds
/// one of the two; on a full wave the anchor takes the last slot so the cap still holds.
pub fn generate_enemy_wave(
    rng: &mut RngStream,
    depth: u32,
    obstacles: &[Rect],
    event: RoomEvent,
) -> Vec<EnemySpawnPlan> {
    let candidates: Vec<&EnemyDef> =
        ENEMIES.iter().filter(|enemy| enemy.is_unlocked_at(depth)).collect();
    let mut plan = Vec::new();
    if candidates.is_empty() {
        return plan;
    }

    let mut budget = threat_budget(depth, event);
    let max_count = wave_cap(depth);
    let elite_odds = elite_chance(depth, event);

    while budget > MIN_SPENDABLE_BUDGET && plan.len() < max_count {
        let Some(enemy) =
            weighted_pick(rng, &candidates, |enemy| enemy_weight(enemy, depth, event))
        else {
            break;
        };
        let elite = rng.chance(elite_odds);
        let cost = enemy.threat * if elite { ELITE_COST_MULT } else { 1.0 };
        if cost > budget && plan.len() >= GUARANTEED_PICKS {
            break;
        }

        let point = ENEMY_SPAWN.sample(rng, obstacles, &[]);
        plan.push(EnemySpawnPlan { enemy_id: enemy.id, x: point.x, y: point.y, elite });
        budget -= cost;
    }

    if event == RoomEvent::Bosslet && !plan.iter().any(is_boss_anchor) {
        let enemy_id = if depth >= ORACLE_FALLBACK_DEPTH {
            keys::ENEMY_ORACLE
        } else {
            keys::ENEMY_BRUTE
        };
        let point = ENEMY_SPAWN.sample(rng, obstacles, &[]);
        if plan.len() >= max_count {
            plan.pop();
        }
        plan.push(EnemySpawnPlan { enemy_id, x: point.x, y: point.y, elite: true });
    }

    plan
}

fn is_boss_anchor(spawn: &EnemySpawnPlan) -> bool {
    matches!(spawn.enemy_id, keys::ENEMY_BRUTE | keys::ENEMY_ORACLE)
}
