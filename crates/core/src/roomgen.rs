//! Procedural room generation split into one submodule per concern.

pub mod model;

mod decor;
mod generator;
mod hazards;
mod loot;
mod obstacles;
mod placement;
mod portal;
mod theme;
mod waves;

pub use generator::RoomGenerator;
pub use loot::{roll_room_loot, roll_upgrade_id, roll_weapon_id};
pub use model::{
    AmmoDrop, DecorationKind, DecorationPlan, EnemySpawnPlan, Exits, HazardKind, HazardPlan,
    HealthDrop, LootPlan, PortalPlan, PortalState, RoomEvent, RoomLayout, RoomTheme, ShrinePlan,
    WeaponDrop,
};
pub use obstacles::blocks_entry_lane;
pub use waves::{generate_enemy_wave, roll_room_event, threat_budget, wave_cap};

use crate::types::RoomCoord;

pub fn generate_room_layout(
    run_seed: u32,
    coord: RoomCoord,
    depth: u32,
    owned_upgrades: &[&str],
) -> RoomLayout {
    RoomGenerator::new(run_seed).generate(coord, depth, owned_upgrades)
}
