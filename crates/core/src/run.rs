//! Host-side run bookkeeping layered over the room generator: which room the player is
//! in, how deep the run has gone, what has been claimed, and which portals are live.

use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;
use tracing::info;

use crate::content::{RunModifiers, upgrade_by_id};
use crate::roomgen::{PortalState, RoomGenerator, RoomLayout};
use crate::tuning::TUNING;
use crate::types::{Direction, RoomCoord};

const DOOR_DEPTH_STEP: i32 = 1;
const PORTAL_DEPTH_STEP: i32 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunError {
    #[error("unknown upgrade id `{0}`")]
    UnknownUpgrade(String),
    #[error("room {0} still has enemies")]
    RoomNotCleared(RoomCoord),
    #[error("room {0} has no portal")]
    NoPortal(RoomCoord),
    #[error("portal in room {0} is dormant until the room is cleared")]
    PortalDormant(RoomCoord),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShrineOutcome {
    Granted,
    /// The upgrade was already owned; nothing changed.
    Dormant,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PortalJump {
    pub from: RoomCoord,
    pub to: RoomCoord,
    pub depth: u32,
}

pub struct RunContext {
    generator: RoomGenerator,
    depth: u32,
    best_depth: u32,
    room: RoomCoord,
    visited: BTreeSet<RoomCoord>,
    owned_upgrades: Vec<&'static str>,
    modifiers: RunModifiers,
    health: u32,
    max_health: u32,
    rooms_cleared: u32,
    room_cleared: bool,
    portal_rooms: BTreeMap<String, PortalState>,
    layout: RoomLayout,
}

impl RunContext {
    /// Starts a fresh run at the origin room, depth 0.
    pub fn start(run_seed: u32) -> Self {
        let generator = RoomGenerator::new(run_seed);
        let layout = generator.generate(RoomCoord::ORIGIN, 0, &[]);
        let max_health = TUNING.player.max_health;
        let mut run = Self {
            generator,
            depth: 0,
            best_depth: 0,
            room: RoomCoord::ORIGIN,
            visited: BTreeSet::new(),
            owned_upgrades: Vec::new(),
            modifiers: RunModifiers::default(),
            health: max_health,
            max_health,
            rooms_cleared: 0,
            room_cleared: false,
            portal_rooms: BTreeMap::new(),
            layout,
        };
        info!(run_seed, "run started");
        run.install_layout(RoomCoord::ORIGIN);
        run
    }

    pub fn run_seed(&self) -> u32 {
        self.generator.run_seed()
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn best_depth(&self) -> u32 {
        self.best_depth
    }

    pub fn room(&self) -> RoomCoord {
        self.room
    }

    pub fn layout(&self) -> &RoomLayout {
        &self.layout
    }

    pub fn has_visited(&self, coord: RoomCoord) -> bool {
        self.visited.contains(&coord)
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    pub fn owned_upgrades(&self) -> &[&'static str] {
        &self.owned_upgrades
    }

    pub fn modifiers(&self) -> &RunModifiers {
        &self.modifiers
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn rooms_cleared(&self) -> u32 {
        self.rooms_cleared
    }

    pub fn is_room_cleared(&self) -> bool {
        self.room_cleared
    }

    /// Portal state for the current room, if the room has one the player has not used.
    pub fn current_portal(&self) -> Option<&PortalState> {
        self.portal_rooms.get(&self.room.key())
    }

    /// Moves to `coord` and regenerates its layout. Depth never drops below zero.
    pub fn enter_room(&mut self, coord: RoomCoord, depth_delta: i32) -> &RoomLayout {
        self.depth = self.depth.saturating_add_signed(depth_delta);
        self.layout = self.generator.generate(coord, self.depth, &self.owned_upgrades);
        self.install_layout(coord);
        info!(
            room = %coord,
            depth = self.depth,
            event = self.layout.event.as_str(),
            enemies = self.layout.enemy_plan.len(),
            "entered room"
        );
        &self.layout
    }

    fn install_layout(&mut self, coord: RoomCoord) {
        self.room = coord;
        self.visited.insert(coord);
        self.best_depth = self.best_depth.max(self.depth);
        self.room_cleared = false;

        let key = coord.key();
        if let Some(state) = self.layout.portal_state(self.portal_rooms.get(&key)) {
            self.portal_rooms.insert(key, state);
        }
        if self.layout.enemy_plan.is_empty() {
            self.mark_room_cleared();
        }
    }

    /// Records the current room as cleared and wakes its portal. Repeated calls are no-ops.
    pub fn mark_room_cleared(&mut self) {
        if self.room_cleared {
            return;
        }
        self.room_cleared = true;
        self.rooms_cleared += 1;
        if let Some(portal) = self.portal_rooms.get_mut(&self.room.key()) {
            portal.active = true;
        }
        info!(room = %self.room, cleared = self.rooms_cleared, "room cleared");
    }

    /// Leaves through a door into the neighbouring room, one level deeper.
    pub fn exit(&mut self, direction: Direction) -> Result<&RoomLayout, RunError> {
        if !self.room_cleared {
            return Err(RunError::RoomNotCleared(self.room));
        }
        let target = self.room.neighbor(direction);
        Ok(self.enter_room(target, DOOR_DEPTH_STEP))
    }

    /// Consumes the current room's portal and jumps two levels deeper.
    pub fn use_portal(&mut self) -> Result<PortalJump, RunError> {
        let from = self.room;
        let key = from.key();
        let state = self.portal_rooms.get(&key).ok_or(RunError::NoPortal(from))?;
        if !state.active {
            return Err(RunError::PortalDormant(from));
        }
        let to = match self.layout.portal {
            Some(portal) => portal.target,
            None => return Err(RunError::NoPortal(from)),
        };

        self.portal_rooms.remove(&key);
        self.enter_room(to, PORTAL_DEPTH_STEP);
        info!(from = %from, to = %to, depth = self.depth, "portal jump");
        Ok(PortalJump { from, to, depth: self.depth })
    }

    pub fn claim_shrine(&mut self, upgrade_id: &str) -> Result<ShrineOutcome, RunError> {
        let upgrade =
            upgrade_by_id(upgrade_id).ok_or_else(|| RunError::UnknownUpgrade(upgrade_id.into()))?;
        if self.owned_upgrades.contains(&upgrade.id) {
            info!(upgrade = upgrade.id, "shrine dormant: upgrade already owned");
            return Ok(ShrineOutcome::Dormant);
        }

        self.owned_upgrades.push(upgrade.id);
        self.modifiers = (upgrade.apply)(self.modifiers);
        if let Some(bonus) = upgrade.bonus_max_health {
            self.max_health += bonus;
            self.heal(bonus);
        }
        if let Some(amount) = upgrade.bonus_heal {
            self.heal(amount);
        }
        info!(upgrade = upgrade.id, name = upgrade.name, "shrine granted");
        Ok(ShrineOutcome::Granted)
    }

    pub fn heal(&mut self, amount: u32) {
        self.health = (self.health + amount).min(self.max_health);
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }
}
