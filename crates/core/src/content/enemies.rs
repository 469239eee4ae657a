use serde::Serialize;

use super::keys;

/// Behaviour tag interpreted by the simulation layer. Generation only reads it for
/// weighting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EnemyAi {
    Chaser,
    Strafer,
    Sniper,
    Turret,
    Charger,
    Bomber,
}

const DEFAULT_BURST: u32 = 1;
const DEFAULT_SPREAD_DEG: f64 = 6.0;

const ELITE_HP_MULT: f64 = 1.65;
const ELITE_SPEED_MULT: f64 = 1.12;
const ELITE_FIRE_INTERVAL_MULT: f64 = 0.85;
const ELITE_CONTACT_MULT: f64 = 1.5;
const HP_GROWTH_PER_DEPTH: f64 = 0.03;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectileStats {
    pub damage: u32,
    pub speed: f64,
    pub fire_rate_ms: u32,
    pub spread_deg: Option<f64>,
    pub burst: Option<u32>,
}

impl ProjectileStats {
    pub fn burst_count(&self) -> u32 {
        self.burst.unwrap_or(DEFAULT_BURST)
    }

    pub fn spread(&self) -> f64 {
        self.spread_deg.unwrap_or(DEFAULT_SPREAD_DEG)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnemyDef {
    pub id: &'static str,
    pub name: &'static str,
    pub max_hp: u32,
    pub speed: f64,
    pub contact_damage: u32,
    pub score_value: u32,
    pub ai: EnemyAi,
    pub threat: f64,
    pub min_depth: u32,
    pub texture_key: &'static str,
    pub projectile: Option<ProjectileStats>,
}

/// Stats for one spawned enemy after elite and depth scaling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnStats {
    pub max_hp: u32,
    pub speed: f64,
    pub contact_damage: u32,
    pub fire_interval_ms: Option<f64>,
    pub projectile_damage: Option<u32>,
}

impl EnemyDef {
    pub fn is_unlocked_at(&self, depth: u32) -> bool {
        self.min_depth <= depth
    }

    /// Elite status scales the stat block; it never changes which enemy this is.
    pub fn spawn_stats(&self, elite: bool, depth: u32) -> SpawnStats {
        let hp_mult = if elite { ELITE_HP_MULT } else { 1.0 };
        let depth_mult = 1.0 + f64::from(depth) * HP_GROWTH_PER_DEPTH;
        let max_hp = (f64::from(self.max_hp) * hp_mult * depth_mult).floor() as u32;

        let contact_damage = if elite {
            ((f64::from(self.contact_damage) * ELITE_CONTACT_MULT).floor() as u32).max(1)
        } else {
            self.contact_damage.max(1)
        };

        SpawnStats {
            max_hp,
            speed: self.speed * if elite { ELITE_SPEED_MULT } else { 1.0 },
            contact_damage,
            fire_interval_ms: self.projectile.map(|projectile| {
                f64::from(projectile.fire_rate_ms)
                    * if elite { ELITE_FIRE_INTERVAL_MULT } else { 1.0 }
            }),
            projectile_damage: self
                .projectile
                .map(|projectile| projectile.damage + u32::from(elite)),
        }
    }
}

pub fn enemy_by_id(id: &str) -> Option<&'static EnemyDef> {
    ENEMIES.iter().find(|enemy| enemy.id == id)
}

pub static ENEMIES: &[EnemyDef] = &[
    EnemyDef {
        id: keys::ENEMY_MITE,
        name: "Geode Mite",
        max_hp: 24,
        speed: 146.0,
        contact_damage: 1,
        score_value: 28,
        ai: EnemyAi::Chaser,
        threat: 1.0,
        min_depth: 0,
        texture_key: "enemy_mite",
        projectile: None,
    },
    EnemyDef {
        id: keys::ENEMY_WISP,
        name: "Neon Wisp",
        max_hp: 18,
        speed: 172.0,
        contact_damage: 1,
        score_value: 34,
        ai: EnemyAi::Strafer,
        threat: 1.2,
        min_depth: 0,
        texture_key: "enemy_wisp",
        projectile: Some(ProjectileStats {
            damage: 1,
            speed: 420.0,
            fire_rate_ms: 1_700,
            spread_deg: Some(10.0),
            burst: None,
        }),
    },
    EnemyDef {
        id: keys::ENEMY_SHARDLING,
        name: "Shardling",
        max_hp: 14,
        speed: 210.0,
        contact_damage: 1,
        score_value: 32,
        ai: EnemyAi::Chaser,
        threat: 1.05,
        min_depth: 1,
        texture_key: "enemy_shardling",
        projectile: None,
    },
    EnemyDef {
        id: keys::ENEMY_BRUTE,
        name: "Basalt Brute",
        max_hp: 74,
        speed: 94.0,
        contact_damage: 2,
        score_value: 92,
        ai: EnemyAi::Chaser,
        threat: 2.8,
        min_depth: 2,
        texture_key: "enemy_brute",
        projectile: None,
    },
    EnemyDef {
        id: keys::ENEMY_LANCER,
        name: "Prism Lancer",
        max_hp: 30,
        speed: 126.0,
        contact_damage: 1,
        score_value: 72,
        ai: EnemyAi::Sniper,
        threat: 2.2,
        min_depth: 3,
        texture_key: "enemy_lancer",
        projectile: Some(ProjectileStats {
            damage: 2,
            speed: 620.0,
            fire_rate_ms: 1_500,
            spread_deg: None,
            burst: Some(1),
        }),
    },
    EnemyDef {
        id: keys::ENEMY_SENTRY,
        name: "Aegis Sentry",
        max_hp: 45,
        speed: 16.0,
        contact_damage: 1,
        score_value: 88,
        ai: EnemyAi::Turret,
        threat: 2.4,
        min_depth: 4,
        texture_key: "enemy_sentry",
        projectile: Some(ProjectileStats {
            damage: 2,
            speed: 510.0,
            fire_rate_ms: 950,
            spread_deg: Some(8.0),
            burst: Some(2),
        }),
    },
    EnemyDef {
        id: keys::ENEMY_CHARGER,
        name: "Shard Charger",
        max_hp: 42,
        speed: 108.0,
        contact_damage: 2,
        score_value: 102,
        ai: EnemyAi::Charger,
        threat: 2.6,
        min_depth: 5,
        texture_key: "enemy_charger",
        projectile: None,
    },
    EnemyDef {
        id: keys::ENEMY_BOMBER,
        name: "Ignis Bomber",
        max_hp: 36,
        speed: 104.0,
        contact_damage: 1,
        score_value: 110,
        ai: EnemyAi::Bomber,
        threat: 2.9,
        min_depth: 6,
        texture_key: "enemy_bomber",
        projectile: Some(ProjectileStats {
            damage: 2,
            speed: 440.0,
            fire_rate_ms: 1_450,
            spread_deg: Some(22.0),
            burst: Some(3),
        }),
    },
    EnemyDef {
        id: keys::ENEMY_SENTINEL,
        name: "Hex Sentinel",
        max_hp: 52,
        speed: 72.0,
        contact_damage: 2,
        score_value: 136,
        ai: EnemyAi::Sniper,
        threat: 3.2,
        min_depth: 7,
        texture_key: "enemy_sentinel",
        projectile: Some(ProjectileStats {
            damage: 2,
            speed: 680.0,
            fire_rate_ms: 1_120,
            spread_deg: Some(7.0),
            burst: Some(2),
        }),
    },
    EnemyDef {
        id: keys::ENEMY_ORACLE,
        name: "Void Oracle",
        max_hp: 58,
        speed: 148.0,
        contact_damage: 2,
        score_value: 172,
        ai: EnemyAi::Sniper,
        threat: 4.5,
        min_depth: 9,
        texture_key: "enemy_oracle",
        projectile: Some(ProjectileStats {
            damage: 3,
            speed: 700.0,
            fire_rate_ms: 1_050,
            spread_deg: Some(16.0),
            burst: Some(3),
        }),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_zero_unlocks_only_starter_enemies() {
        let unlocked: Vec<_> =
            ENEMIES.iter().filter(|enemy| enemy.is_unlocked_at(0)).map(|e| e.id).collect();
        assert_eq!(unlocked, vec![keys::ENEMY_MITE, keys::ENEMY_WISP]);
    }

    #[test]
    fn elite_scaling_keeps_identity_and_raises_stats() {
        let brute = enemy_by_id(keys::ENEMY_BRUTE).expect("brute is catalogued");
        let normal = brute.spawn_stats(false, 0);
        let elite = brute.spawn_stats(true, 0);
        assert_eq!(normal.max_hp, 74);
        assert_eq!(elite.max_hp, 122);
        assert_eq!(elite.contact_damage, 3);
        assert!(elite.speed > normal.speed);
        assert_eq!(elite.fire_interval_ms, None);
    }

    #[test]
    fn ranged_elites_fire_faster_and_hit_harder() {
        let oracle = enemy_by_id(keys::ENEMY_ORACLE).expect("oracle is catalogued");
        let normal = oracle.spawn_stats(false, 10);
        let elite = oracle.spawn_stats(true, 10);
        assert_eq!(normal.max_hp, 75);
        assert_eq!(normal.projectile_damage, Some(3));
        assert_eq!(elite.projectile_damage, Some(4));
        let normal_interval = normal.fire_interval_ms.expect("oracle shoots");
        let elite_interval = elite.fire_interval_ms.expect("oracle shoots");
        assert!(elite_interval < normal_interval);
    }

    #[test]
    fn projectile_defaults_fill_missing_fields() {
        let wisp = enemy_by_id(keys::ENEMY_WISP).and_then(|e| e.projectile).expect("wisp shoots");
        assert_eq!(wisp.burst_count(), 1);
        assert_eq!(wisp.spread(), 10.0);
        let lancer =
            enemy_by_id(keys::ENEMY_LANCER).and_then(|e| e.projectile).expect("lancer shoots");
        assert_eq!(lancer.spread(), 6.0);
    }
}
