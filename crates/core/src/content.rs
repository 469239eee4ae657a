//! Static enemy, weapon, and upgrade catalogs. Entries are referenced by id everywhere
//! else so that reordering a table never changes generated content.

mod enemies;
mod upgrades;
mod weapons;

pub use enemies::{ENEMIES, EnemyAi, EnemyDef, ProjectileStats, SpawnStats, enemy_by_id};
pub use upgrades::{UPGRADES, RunModifiers, UpgradeDef, UpgradeRarity, upgrade_by_id};
pub use weapons::{WEAPONS, WeaponDef, WeaponFxProfile, WeaponRarity, weapon_by_id};

pub mod keys {
    pub const ENEMY_MITE: &str = "mite";
    pub const ENEMY_WISP: &str = "wisp";
    pub const ENEMY_SHARDLING: &str = "shardling";
    pub const ENEMY_BRUTE: &str = "brute";
    pub const ENEMY_LANCER: &str = "lancer";
    pub const ENEMY_SENTRY: &str = "sentry";
    pub const ENEMY_CHARGER: &str = "charger";
    pub const ENEMY_BOMBER: &str = "bomber";
    pub const ENEMY_SENTINEL: &str = "sentinel";
    pub const ENEMY_ORACLE: &str = "oracle";

    pub const WEAPON_PISTOL: &str = "pistol";
    pub const WEAPON_SHARD_SMG: &str = "shardsmg";
    pub const WEAPON_BURST_RIFLE: &str = "burstRifle";
    pub const WEAPON_SHOTGUN: &str = "shotgun";
    pub const WEAPON_PLASMA_FAN: &str = "plasmafan";
    pub const WEAPON_LASER: &str = "laser";
    pub const WEAPON_RAILGUN: &str = "railgun";
    pub const WEAPON_ROCKET: &str = "rocket";
    pub const WEAPON_CATACLYSM: &str = "cataclysm";

    pub const UPGRADE_OVERCLOCK: &str = "overclock";
    pub const UPGRADE_HOLLOWPOINT: &str = "hollowpoint";
    pub const UPGRADE_HYPERCOIL: &str = "hypercoil";
    pub const UPGRADE_STABILIZER: &str = "stabilizer";
    pub const UPGRADE_SCAVENGER: &str = "scavenger";
    pub const UPGRADE_PIERCER: &str = "piercer";
    pub const UPGRADE_BLOODLINK: &str = "bloodlink";
    pub const UPGRADE_CRITICALITY: &str = "criticality";
    pub const UPGRADE_WARD: &str = "ward";
}
