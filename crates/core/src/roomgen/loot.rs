//! Per-room drops and the weighted weapon and upgrade tables behind them.

use crate::content::{UPGRADES, UpgradeDef, WEAPONS, WeaponDef, WeaponRarity, keys};
use crate::rng::RngStream;
use crate::types::Rect;
use crate::weighted::weighted_pick;

use super::model::{AmmoDrop, HealthDrop, LootPlan, RoomEvent, ShrinePlan, WeaponDrop};
use super::placement::LOOT;

const EARLY_EPIC_DEPTH: u32 = 3;
const EARLY_EPIC_DAMPING: f64 = 0.2;
const EARLY_LEGENDARY_DEPTH: u32 = 6;
const EARLY_LEGENDARY_DAMPING: f64 = 0.05;

struct DropChances {
    weapon: f64,
    ammo: f64,
    health: f64,
    shrine: f64,
}

impl DropChances {
    fn for_room(depth: u32, event: RoomEvent) -> Self {
        let depth = f64::from(depth);
        let bonus = |applies: bool, amount: f64| if applies { amount } else { 0.0 };
        Self {
            weapon: (0.36 + depth * 0.011 + bonus(event == RoomEvent::Cache, 0.38)).clamp(0.0, 1.0),
            ammo: (0.62 + bonus(event == RoomEvent::Swarm, 0.2)).clamp(0.0, 1.0),
            health: (0.26 + depth * 0.006 + bonus(event == RoomEvent::Gauntlet, 0.1))
                .clamp(0.0, 1.0),
            shrine: (0.14 + bonus(event == RoomEvent::Shrine, 0.75)).clamp(0.0, 1.0),
        }
    }
}

/// Rolls weapon, ammo, health, and shrine in that order; each drop draws its payload
/// before its position.
pub fn roll_room_loot(
    rng: &mut RngStream,
    depth: u32,
    event: RoomEvent,
    obstacles: &[Rect],
    owned_upgrades: &[&str],
) -> LootPlan {
    let chances = DropChances::for_room(depth, event);

    let weapon_drop = rng.chance(chances.weapon).then(|| {
        let weapon_id = roll_weapon_id(rng, depth);
        let point = LOOT.sample(rng, obstacles, &[]);
        WeaponDrop { weapon_id, x: point.x, y: point.y }
    });

    let ammo_drop = rng.chance(chances.ammo).then(|| {
        let depth_bonus = (f64::from(depth) * 1.2).floor() as u32;
        let amount = (rng.int(20, 54) as u32).saturating_add(depth_bonus);
        let point = LOOT.sample(rng, obstacles, &[]);
        AmmoDrop { amount, x: point.x, y: point.y }
    });

    let health_drop = rng.chance(chances.health).then(|| {
        let amount = rng.int(1, 2) as u32;
        let point = LOOT.sample(rng, obstacles, &[]);
        HealthDrop { amount, x: point.x, y: point.y }
    });

    let shrine = rng.chance(chances.shrine).then(|| {
        let upgrade_id = roll_upgrade_id(rng, owned_upgrades);
        let point = LOOT.sample(rng, obstacles, &[]);
        ShrinePlan { upgrade_id, x: point.x, y: point.y }
    });

    LootPlan { weapon_drop, ammo_drop, health_drop, shrine }
}

fn weapon_weight(weapon: &WeaponDef, depth: u32) -> f64 {
    let weight = weapon.rarity.weight_at_depth(depth);
    match weapon.rarity {
        WeaponRarity::Epic if depth < EARLY_EPIC_DEPTH => weight * EARLY_EPIC_DAMPING,
        WeaponRarity::Legendary if depth < EARLY_LEGENDARY_DEPTH => {
            weight * EARLY_LEGENDARY_DAMPING
        }
        _ => weight,
    }
}

pub fn roll_weapon_id(rng: &mut RngStream, depth: u32) -> &'static str {
    let candidates: Vec<&WeaponDef> =
        WEAPONS.iter().filter(|weapon| weapon_weight(weapon, depth) > 0.0).collect();
    weighted_pick(rng, &candidates, |weapon| weapon_weight(weapon, depth))
        .map_or(keys::WEAPON_PISTOL, |weapon| weapon.id)
}

/// Prefers upgrades the run does not own yet; once everything is owned the full catalog
/// is back in play.
pub fn roll_upgrade_id(rng: &mut RngStream, owned_upgrades: &[&str]) -> &'static str {
    let unowned: Vec<&UpgradeDef> =
        UPGRADES.iter().filter(|upgrade| !owned_upgrades.contains(&upgrade.id)).collect();
    let pool: Vec<&UpgradeDef> =
        if unowned.is_empty() { UPGRADES.iter().collect() } else { unowned };
    weighted_pick(rng, &pool, |upgrade| upgrade.weight())
        .map_or(keys::UPGRADE_OVERCLOCK, |upgrade| upgrade.id)
}
