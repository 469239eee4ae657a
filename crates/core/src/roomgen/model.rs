//! Public data models for generated rooms: obstacles, hazards, decorations, the enemy
//! plan, loot drops, and the optional portal.

use serde::Serialize;
use xxhash_rust::xxh3::xxh3_64;

use crate::types::{Direction, Point, Rect, RoomCoord};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomTheme {
    Azurite,
    Teal,
    Violet,
    Magmatic,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomEvent {
    Skirmish,
    Swarm,
    Gauntlet,
    Cache,
    Shrine,
    Bosslet,
}

impl RoomEvent {
    pub const ALL: [Self; 6] =
        [Self::Skirmish, Self::Swarm, Self::Gauntlet, Self::Cache, Self::Shrine, Self::Bosslet];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Skirmish => "skirmish",
            Self::Swarm => "swarm",
            Self::Gauntlet => "gauntlet",
            Self::Cache => "cache",
            Self::Shrine => "shrine",
            Self::Bosslet => "bosslet",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HazardKind {
    Pulse,
    Ember,
}

/// A periodically damaging area; the host applies `damage` each time its room clock
/// crosses the next pulse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HazardPlan {
    pub kind: HazardKind,
    pub x: i32,
    pub y: i32,
    pub radius: i32,
    pub damage: u32,
    pub period_ms: u32,
    pub phase_ms: u32,
}

impl HazardPlan {
    pub fn covers(&self, point: Point, extra: i32) -> bool {
        let dx = i64::from(point.x - self.x);
        let dy = i64::from(point.y - self.y);
        let reach = i64::from(self.radius + extra);
        dx * dx + dy * dy < reach * reach
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DecorationKind {
    CrystalSmall,
    CrystalTall,
    Pillar,
    Rune,
    Spike,
}

/// Cosmetic scatter; never collides.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DecorationPlan {
    pub kind: DecorationKind,
    pub x: i32,
    pub y: i32,
    pub scale: f64,
    pub alpha: f64,
    pub rotation: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnemySpawnPlan {
    pub enemy_id: &'static str,
    pub x: i32,
    pub y: i32,
    pub elite: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponDrop {
    pub weapon_id: &'static str,
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AmmoDrop {
    pub amount: u32,
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct HealthDrop {
    pub amount: u32,
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShrinePlan {
    pub upgrade_id: &'static str,
    pub x: i32,
    pub y: i32,
}

/// Four independently rolled drops; any of them may be absent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LootPlan {
    pub weapon_drop: Option<WeaponDrop>,
    pub ammo_drop: Option<AmmoDrop>,
    pub health_drop: Option<HealthDrop>,
    pub shrine: Option<ShrinePlan>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PortalPlan {
    pub x: i32,
    pub y: i32,
    pub target: RoomCoord,
}

/// Host-owned activation record for a room's portal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PortalState {
    pub x: i32,
    pub y: i32,
    pub active: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Exits {
    pub n: bool,
    pub s: bool,
    pub w: bool,
    pub e: bool,
}

impl Exits {
    pub const ALL_OPEN: Self = Self { n: true, s: true, w: true, e: true };

    pub fn is_open(&self, direction: Direction) -> bool {
        match direction {
            Direction::North => self.n,
            Direction::South => self.s,
            Direction::West => self.w,
            Direction::East => self.e,
        }
    }
}

/// Everything the gameplay host needs to instantiate one room. Never mutated after
/// generation.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomLayout {
    pub coord: RoomCoord,
    pub depth: u32,
    pub seed: u32,
    pub theme: RoomTheme,
    pub event: RoomEvent,
    pub obstacles: Vec<Rect>,
    pub hazards: Vec<HazardPlan>,
    pub decorations: Vec<DecorationPlan>,
    pub exits: Exits,
    pub enemy_plan: Vec<EnemySpawnPlan>,
    pub weapon_drop: Option<WeaponDrop>,
    pub ammo_drop: Option<AmmoDrop>,
    pub health_drop: Option<HealthDrop>,
    pub shrine: Option<ShrinePlan>,
    pub portal: Option<PortalPlan>,
}

impl RoomLayout {
    pub fn loot(&self) -> LootPlan {
        LootPlan {
            weapon_drop: self.weapon_drop,
            ammo_drop: self.ammo_drop,
            health_drop: self.health_drop,
            shrine: self.shrine,
        }
    }

    /// Portal state the host should spawn, carrying activation over from `existing`.
    pub fn portal_state(&self, existing: Option<&PortalState>) -> Option<PortalState> {
        self.portal.map(|portal| PortalState {
            x: portal.x,
            y: portal.y,
            active: existing.is_some_and(|state| state.active),
        })
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend(self.coord.x.to_le_bytes());
        bytes.extend(self.coord.y.to_le_bytes());
        bytes.extend(self.depth.to_le_bytes());
        bytes.extend(self.seed.to_le_bytes());
        bytes.push(match self.theme {
            RoomTheme::Azurite => 0,
            RoomTheme::Teal => 1,
            RoomTheme::Violet => 2,
            RoomTheme::Magmatic => 3,
        });
        bytes.push(match self.event {
            RoomEvent::Skirmish => 0,
            RoomEvent::Swarm => 1,
            RoomEvent::Gauntlet => 2,
            RoomEvent::Cache => 3,
            RoomEvent::Shrine => 4,
            RoomEvent::Bosslet => 5,
        });

        bytes.extend((self.obstacles.len() as u32).to_le_bytes());
        for rect in &self.obstacles {
            for value in [rect.x, rect.y, rect.w, rect.h] {
                bytes.extend(value.to_le_bytes());
            }
        }

        bytes.extend((self.hazards.len() as u32).to_le_bytes());
        for hazard in &self.hazards {
            bytes.push(match hazard.kind {
                HazardKind::Pulse => 0,
                HazardKind::Ember => 1,
            });
            for value in [hazard.x, hazard.y, hazard.radius] {
                bytes.extend(value.to_le_bytes());
            }
            for value in [hazard.damage, hazard.period_ms, hazard.phase_ms] {
                bytes.extend(value.to_le_bytes());
            }
        }

        bytes.extend((self.decorations.len() as u32).to_le_bytes());
        for decoration in &self.decorations {
            bytes.push(match decoration.kind {
                DecorationKind::CrystalSmall => 0,
                DecorationKind::CrystalTall => 1,
                DecorationKind::Pillar => 2,
                DecorationKind::Rune => 3,
                DecorationKind::Spike => 4,
            });
            bytes.extend(decoration.x.to_le_bytes());
            bytes.extend(decoration.y.to_le_bytes());
            for value in [decoration.scale, decoration.alpha, decoration.rotation] {
                bytes.extend(value.to_le_bytes());
            }
        }

        for open in [self.exits.n, self.exits.s, self.exits.w, self.exits.e] {
            bytes.push(u8::from(open));
        }

        bytes.extend((self.enemy_plan.len() as u32).to_le_bytes());
        for spawn in &self.enemy_plan {
            push_id(&mut bytes, spawn.enemy_id);
            bytes.extend(spawn.x.to_le_bytes());
            bytes.extend(spawn.y.to_le_bytes());
            bytes.push(u8::from(spawn.elite));
        }

        push_optional(&mut bytes, self.weapon_drop, |bytes, drop| {
            push_id(bytes, drop.weapon_id);
            push_point(bytes, drop.x, drop.y);
        });
        push_optional(&mut bytes, self.ammo_drop, |bytes, drop| {
            bytes.extend(drop.amount.to_le_bytes());
            push_point(bytes, drop.x, drop.y);
        });
        push_optional(&mut bytes, self.health_drop, |bytes, drop| {
            bytes.extend(drop.amount.to_le_bytes());
            push_point(bytes, drop.x, drop.y);
        });
        push_optional(&mut bytes, self.shrine, |bytes, shrine| {
            push_id(bytes, shrine.upgrade_id);
            push_point(bytes, shrine.x, shrine.y);
        });
        push_optional(&mut bytes, self.portal, |bytes, portal| {
            push_point(bytes, portal.x, portal.y);
            push_point(bytes, portal.target.x, portal.target.y);
        });

        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}

fn push_id(bytes: &mut Vec<u8>, id: &str) {
    bytes.extend((id.len() as u32).to_le_bytes());
    bytes.extend(id.as_bytes());
}

fn push_point(bytes: &mut Vec<u8>, x: i32, y: i32) {
    bytes.extend(x.to_le_bytes());
    bytes.extend(y.to_le_bytes());
}

fn push_optional<T>(bytes: &mut Vec<u8>, value: Option<T>, write: impl FnOnce(&mut Vec<u8>, T)) {
    match value {
        Some(value) => {
            bytes.push(1);
            write(bytes, value);
        }
        None => bytes.push(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exits_report_each_door() {
        assert!(Direction::ALL.into_iter().all(|door| Exits::ALL_OPEN.is_open(door)));
        let west_only = Exits { n: false, s: false, w: true, e: false };
        let open: Vec<Direction> =
            Direction::ALL.into_iter().filter(|&door| west_only.is_open(door)).collect();
        assert_eq!(open, [Direction::West]);
    }

    fn empty_layout() -> RoomLayout {
        RoomLayout {
            coord: RoomCoord::ORIGIN,
            depth: 0,
            seed: 1,
            theme: RoomTheme::Azurite,
            event: RoomEvent::Skirmish,
            obstacles: Vec::new(),
            hazards: Vec::new(),
            decorations: Vec::new(),
            exits: Exits::ALL_OPEN,
            enemy_plan: Vec::new(),
            weapon_drop: None,
            ammo_drop: None,
            health_drop: None,
            shrine: None,
            portal: None,
        }
    }

    #[test]
    fn portal_state_defaults_to_dormant() {
        let mut layout = empty_layout();
        assert_eq!(layout.portal_state(None), None);

        layout.portal = Some(PortalPlan { x: 300, y: 400, target: RoomCoord::new(2, 1) });
        let fresh = layout.portal_state(None).expect("layout has a portal");
        assert!(!fresh.active);

        let stored = PortalState { x: 300, y: 400, active: true };
        assert!(layout.portal_state(Some(&stored)).is_some_and(|state| state.active));
    }

    #[test]
    fn fingerprint_tracks_optional_fields() {
        let base = empty_layout();
        let mut with_ammo = base.clone();
        with_ammo.ammo_drop = Some(AmmoDrop { amount: 30, x: 500, y: 500 });
        assert_eq!(base.fingerprint(), empty_layout().fingerprint());
        assert_ne!(base.fingerprint(), with_ammo.fingerprint());
    }

    #[test]
    fn hazard_coverage_is_strict_at_the_edge() {
        let hazard = HazardPlan {
            kind: HazardKind::Pulse,
            x: 0,
            y: 0,
            radius: 30,
            damage: 1,
            period_ms: 1_000,
            phase_ms: 0,
        };
        assert!(hazard.covers(Point { x: 51, y: 0 }, 22));
        assert!(!hazard.covers(Point { x: 52, y: 0 }, 22));
    }

    #[test]
    fn layout_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(empty_layout()).expect("layout serializes");
        assert!(json.get("enemyPlan").is_some());
        assert_eq!(json["event"], "skirmish");
        assert_eq!(json["exits"]["n"], true);
    }
}
