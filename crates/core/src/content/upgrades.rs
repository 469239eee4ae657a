use serde::Serialize;

use super::keys;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UpgradeRarity {
    Common,
    Rare,
    Epic,
}

impl UpgradeRarity {
    pub fn weight(self) -> f64 {
        match self {
            Self::Common => 64.0,
            Self::Rare => 28.0,
            Self::Epic => 8.0,
        }
    }
}

/// Permanent stat multipliers accumulated over a run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RunModifiers {
    pub fire_rate_mult: f64,
    pub damage_mult: f64,
    pub projectile_speed_mult: f64,
    pub spread_mult: f64,
    pub ammo_pickup_mult: f64,
    pub pierce_bonus: u32,
    pub crit_chance: f64,
    pub crit_damage_mult: f64,
    pub life_on_kill: f64,
}

impl Default for RunModifiers {
    fn default() -> Self {
        Self {
            fire_rate_mult: 1.0,
            damage_mult: 1.0,
            projectile_speed_mult: 1.0,
            spread_mult: 1.0,
            ammo_pickup_mult: 1.0,
            pierce_bonus: 0,
            crit_chance: 0.0,
            crit_damage_mult: 1.75,
            life_on_kill: 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct UpgradeDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub rarity: UpgradeRarity,
    pub apply: fn(RunModifiers) -> RunModifiers,
    pub bonus_max_health: Option<u32>,
    pub bonus_heal: Option<u32>,
}

impl UpgradeDef {
    pub fn weight(&self) -> f64 {
        self.rarity.weight()
    }
}

pub fn upgrade_by_id(id: &str) -> Option<&'static UpgradeDef> {
    UPGRADES.iter().find(|upgrade| upgrade.id == id)
}

pub static UPGRADES: &[UpgradeDef] = &[
    UpgradeDef {
        id: keys::UPGRADE_OVERCLOCK,
        name: "Overclock Coils",
        description: "20% faster fire rate",
        rarity: UpgradeRarity::Common,
        apply: |mods| RunModifiers { fire_rate_mult: mods.fire_rate_mult * 0.8, ..mods },
        bonus_max_health: None,
        bonus_heal: None,
    },
    UpgradeDef {
        id: keys::UPGRADE_HOLLOWPOINT,
        name: "Hollowpoint Lattice",
        description: "20% more bullet damage",
        rarity: UpgradeRarity::Common,
        apply: |mods| RunModifiers { damage_mult: mods.damage_mult * 1.2, ..mods },
        bonus_max_health: None,
        bonus_heal: None,
    },
    UpgradeDef {
        id: keys::UPGRADE_HYPERCOIL,
        name: "Hypercoil Capacitor",
        description: "35% faster projectiles",
        rarity: UpgradeRarity::Common,
        apply: |mods| RunModifiers {
            projectile_speed_mult: mods.projectile_speed_mult * 1.35,
            ..mods
        },
        bonus_max_health: None,
        bonus_heal: None,
    },
    UpgradeDef {
        id: keys::UPGRADE_STABILIZER,
        name: "Gyro Stabilizer",
        description: "35% tighter spread",
        rarity: UpgradeRarity::Common,
        apply: |mods| RunModifiers { spread_mult: mods.spread_mult * 0.65, ..mods },
        bonus_max_health: None,
        bonus_heal: None,
    },
    UpgradeDef {
        id: keys::UPGRADE_SCAVENGER,
        name: "Scavenger Lenses",
        description: "50% more ammo from pickups",
        rarity: UpgradeRarity::Common,
        apply: |mods| RunModifiers { ammo_pickup_mult: mods.ammo_pickup_mult * 1.5, ..mods },
        bonus_max_health: None,
        bonus_heal: None,
    },
    UpgradeDef {
        id: keys::UPGRADE_PIERCER,
        name: "Piercer Matrix",
        description: "Bullets pierce +1 target",
        rarity: UpgradeRarity::Rare,
        apply: |mods| RunModifiers { pierce_bonus: mods.pierce_bonus + 1, ..mods },
        bonus_max_health: None,
        bonus_heal: None,
    },
    UpgradeDef {
        id: keys::UPGRADE_BLOODLINK,
        name: "Bloodlink Nanites",
        description: "Heal on kill",
        rarity: UpgradeRarity::Rare,
        apply: |mods| RunModifiers { life_on_kill: mods.life_on_kill + 0.14, ..mods },
        bonus_max_health: None,
        bonus_heal: None,
    },
    UpgradeDef {
        id: keys::UPGRADE_CRITICALITY,
        name: "Criticality Prism",
        description: "12% crit chance",
        rarity: UpgradeRarity::Rare,
        apply: |mods| RunModifiers { crit_chance: mods.crit_chance + 0.12, ..mods },
        bonus_max_health: None,
        bonus_heal: None,
    },
    UpgradeDef {
        id: keys::UPGRADE_WARD,
        name: "Resonant Ward",
        description: "+1 max health and heal 1",
        rarity: UpgradeRarity::Epic,
        apply: |mods| mods,
        bonus_max_health: Some(1),
        bonus_heal: Some(1),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_transforms_touch_only_their_own_stat() {
        let base = RunModifiers::default();
        let overclocked = (upgrade_by_id(keys::UPGRADE_OVERCLOCK).expect("catalogued").apply)(base);
        assert!((overclocked.fire_rate_mult - 0.8).abs() < 1e-12);
        assert_eq!(RunModifiers { fire_rate_mult: 1.0, ..overclocked }, base);

        let pierced = (upgrade_by_id(keys::UPGRADE_PIERCER).expect("catalogued").apply)(base);
        assert_eq!(pierced.pierce_bonus, 1);
    }

    #[test]
    fn transforms_stack_multiplicatively() {
        let hollowpoint = upgrade_by_id(keys::UPGRADE_HOLLOWPOINT).expect("catalogued");
        let twice = (hollowpoint.apply)((hollowpoint.apply)(RunModifiers::default()));
        assert!((twice.damage_mult - 1.44).abs() < 1e-12);
    }

    #[test]
    fn only_ward_grants_health() {
        for upgrade in UPGRADES {
            let grants_health = upgrade.bonus_max_health.is_some() || upgrade.bonus_heal.is_some();
            assert_eq!(grants_health, upgrade.id == keys::UPGRADE_WARD);
        }
    }
}
