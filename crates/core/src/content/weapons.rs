use serde::Serialize;

use super::keys;
use crate::tuning::TUNING;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WeaponRarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl WeaponRarity {
    pub fn base_weight(self) -> f64 {
        match self {
            Self::Common => 55.0,
            Self::Uncommon => 27.0,
            Self::Rare => 12.0,
            Self::Epic => 5.0,
            Self::Legendary => 1.0,
        }
    }

    /// Drop weight at `depth`: commons fade out while rarer tiers ramp in past their own
    /// thresholds.
    pub fn weight_at_depth(self, depth: u32) -> f64 {
        let base = self.base_weight();
        let depth = f64::from(depth);
        match self {
            Self::Common => (base - depth * 2.2).max(8.0),
            Self::Uncommon => base + depth * 1.3,
            Self::Rare => base + (depth - 2.0).max(0.0) * 1.4,
            Self::Epic => base + (depth - 5.0).max(0.0) * 1.8,
            Self::Legendary => base + (depth - 9.0).max(0.0) * 2.1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WeaponFxProfile {
    Pistol,
    Shotgun,
    Rifle,
    Laser,
    Rocket,
    Rail,
    Plasma,
    Smg,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeaponDef {
    pub id: &'static str,
    pub name: &'static str,
    pub rarity: WeaponRarity,
    pub fire_rate_ms: u32,
    pub pellets: u32,
    pub spread_deg: f64,
    pub projectile_speed: f64,
    pub damage: u32,
    pub knockback: f64,
    pub ammo_max: u32,
    pub reload_ms: u32,
    pub shot_kick: f64,
    pub fx_profile: WeaponFxProfile,
    pub pierce: u32,
    pub ttl_ms: Option<u32>,
    pub explosion_radius: Option<f64>,
    pub ammo_per_shot: Option<u32>,
}

impl WeaponDef {
    pub fn projectile_ttl_ms(&self) -> u32 {
        self.ttl_ms.unwrap_or(TUNING.bullets.ttl_ms)
    }

    pub fn explosion(&self) -> f64 {
        self.explosion_radius.unwrap_or(0.0)
    }

    pub fn ammo_cost(&self) -> u32 {
        self.ammo_per_shot.unwrap_or(1)
    }
}

pub fn weapon_by_id(id: &str) -> Option<&'static WeaponDef> {
    WEAPONS.iter().find(|weapon| weapon.id == id)
}

pub static WEAPONS: &[WeaponDef] = &[
    WeaponDef {
        id: keys::WEAPON_PISTOL,
        name: "Ion Pistol",
        rarity: WeaponRarity::Common,
        fire_rate_ms: 170,
        pellets: 1,
        spread_deg: 2.0,
        projectile_speed: 930.0,
        damage: 12,
        knockback: 130.0,
        ammo_max: 140,
        reload_ms: 950,
        shot_kick: 0.006,
        fx_profile: WeaponFxProfile::Pistol,
        pierce: 0,
        ttl_ms: None,
        explosion_radius: None,
        ammo_per_shot: None,
    },
    WeaponDef {
        id: keys::WEAPON_SHARD_SMG,
        name: "Shard SMG",
        rarity: WeaponRarity::Common,
        fire_rate_ms: 65,
        pellets: 1,
        spread_deg: 8.0,
        projectile_speed: 1_020.0,
        damage: 7,
        knockback: 90.0,
        ammo_max: 260,
        reload_ms: 1_250,
        shot_kick: 0.005,
        fx_profile: WeaponFxProfile::Smg,
        pierce: 0,
        ttl_ms: None,
        explosion_radius: None,
        ammo_per_shot: None,
    },
    WeaponDef {
        id: keys::WEAPON_BURST_RIFLE,
        name: "Prism Burst Rifle",
        rarity: WeaponRarity::Uncommon,
        fire_rate_ms: 230,
        pellets: 3,
        spread_deg: 5.0,
        projectile_speed: 1_030.0,
        damage: 9,
        knockback: 105.0,
        ammo_max: 210,
        reload_ms: 1_180,
        shot_kick: 0.008,
        fx_profile: WeaponFxProfile::Rifle,
        pierce: 0,
        ttl_ms: None,
        explosion_radius: None,
        ammo_per_shot: None,
    },
    WeaponDef {
        id: keys::WEAPON_SHOTGUN,
        name: "Shard Shotgun",
        rarity: WeaponRarity::Uncommon,
        fire_rate_ms: 500,
        pellets: 8,
        spread_deg: 24.0,
        projectile_speed: 740.0,
        damage: 8,
        knockback: 210.0,
        ammo_max: 52,
        reload_ms: 1_180,
        shot_kick: 0.011,
        fx_profile: WeaponFxProfile::Shotgun,
        pierce: 0,
        ttl_ms: None,
        explosion_radius: None,
        ammo_per_shot: None,
    },
    WeaponDef {
        id: keys::WEAPON_PLASMA_FAN,
        name: "Plasma Fan",
        rarity: WeaponRarity::Rare,
        fire_rate_ms: 320,
        pellets: 5,
        spread_deg: 34.0,
        projectile_speed: 860.0,
        damage: 11,
        knockback: 150.0,
        ammo_max: 90,
        reload_ms: 1_020,
        shot_kick: 0.009,
        fx_profile: WeaponFxProfile::Plasma,
        pierce: 1,
        ttl_ms: Some(730),
        explosion_radius: None,
        ammo_per_shot: None,
    },
    WeaponDef {
        id: keys::WEAPON_LASER,
        name: "Violet Laser Lance",
        rarity: WeaponRarity::Rare,
        fire_rate_ms: 45,
        pellets: 1,
        spread_deg: 0.8,
        projectile_speed: 1_500.0,
        damage: 7,
        knockback: 56.0,
        ammo_max: 310,
        reload_ms: 950,
        shot_kick: 0.004,
        fx_profile: WeaponFxProfile::Laser,
        pierce: 1,
        ttl_ms: Some(650),
        explosion_radius: None,
        ammo_per_shot: None,
    },
    WeaponDef {
        id: keys::WEAPON_RAILGUN,
        name: "Geode Railgun",
        rarity: WeaponRarity::Epic,
        fire_rate_ms: 620,
        pellets: 1,
        spread_deg: 0.3,
        projectile_speed: 1_700.0,
        damage: 62,
        knockback: 280.0,
        ammo_max: 38,
        reload_ms: 1_400,
        shot_kick: 0.014,
        fx_profile: WeaponFxProfile::Rail,
        pierce: 3,
        ttl_ms: Some(880),
        explosion_radius: None,
        ammo_per_shot: None,
    },
    WeaponDef {
        id: keys::WEAPON_ROCKET,
        name: "Nova Rocket Tube",
        rarity: WeaponRarity::Epic,
        fire_rate_ms: 700,
        pellets: 1,
        spread_deg: 3.0,
        projectile_speed: 540.0,
        damage: 38,
        knockback: 420.0,
        ammo_max: 26,
        reload_ms: 1_520,
        shot_kick: 0.014,
        fx_profile: WeaponFxProfile::Rocket,
        pierce: 0,
        ttl_ms: None,
        explosion_radius: Some(74.0),
        ammo_per_shot: None,
    },
    WeaponDef {
        id: keys::WEAPON_CATACLYSM,
        name: "Cataclysm Arc",
        rarity: WeaponRarity::Legendary,
        fire_rate_ms: 380,
        pellets: 6,
        spread_deg: 44.0,
        projectile_speed: 1_200.0,
        damage: 20,
        knockback: 260.0,
        ammo_max: 80,
        reload_ms: 1_360,
        shot_kick: 0.015,
        fx_profile: WeaponFxProfile::Plasma,
        pierce: 2,
        ttl_ms: Some(780),
        explosion_radius: None,
        ammo_per_shot: Some(2),
    },
];
