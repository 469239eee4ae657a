//! Room generation orchestration: derives one stream per concern from the room seed and
//! composes theme, event, obstacles, hazards, decorations, wave, loot, and portal.

use tracing::debug;

use crate::rng::RngStream;
use crate::seed::{derive_room_seed, derive_stream_seed};
use crate::types::RoomCoord;

use super::decor::generate_decorations;
use super::hazards::generate_hazards;
use super::loot::roll_room_loot;
use super::model::{Exits, RoomLayout};
use super::obstacles::generate_obstacles;
use super::portal::generate_portal;
use super::theme::roll_theme;
use super::waves::{generate_enemy_wave, roll_room_event};

/// Independent streams so that a change in one concern never shifts another.
struct RoomStreams {
    theme: RngStream,
    layout: RngStream,
    event: RngStream,
    enemies: RngStream,
    loot: RngStream,
    hazards: RngStream,
    decor: RngStream,
    portal: RngStream,
}

impl RoomStreams {
    fn derive(room_seed: u32) -> Self {
        let stream = |purpose: &str| RngStream::new(derive_stream_seed(room_seed, purpose));
        Self {
            theme: stream("theme"),
            layout: stream("layout"),
            event: stream("event"),
            enemies: stream("enemies"),
            loot: stream("loot"),
            hazards: stream("hazards"),
            decor: stream("decor"),
            portal: stream("portal"),
        }
    }
}

pub struct RoomGenerator {
    run_seed: u32,
}

impl RoomGenerator {
    pub fn new(run_seed: u32) -> Self {
        Self { run_seed }
    }

    pub fn run_seed(&self) -> u32 {
        self.run_seed
    }

    pub fn generate(&self, coord: RoomCoord, depth: u32, owned_upgrades: &[&str]) -> RoomLayout {
        let seed = derive_room_seed(self.run_seed, coord.x, coord.y);
        let mut streams = RoomStreams::derive(seed);

        let theme = roll_theme(&mut streams.theme, depth);
        let event = roll_room_event(&mut streams.event, depth);
        let obstacles = generate_obstacles(&mut streams.layout, depth);
        let hazards = generate_hazards(&mut streams.hazards, depth, &obstacles, event);
        let decorations =
            generate_decorations(&mut streams.decor, &obstacles, &hazards, theme, depth);
        let enemy_plan = generate_enemy_wave(&mut streams.enemies, depth, &obstacles, event);
        let loot = roll_room_loot(&mut streams.loot, depth, event, &obstacles, owned_upgrades);
        let portal =
            generate_portal(&mut streams.portal, coord, depth, &obstacles, &hazards, event);

        debug!(
            room = %coord,
            depth,
            seed,
            theme = ?theme,
            event = event.as_str(),
            obstacles = obstacles.len(),
            hazards = hazards.len(),
            enemies = enemy_plan.len(),
            portal = portal.is_some(),
            "generated room layout"
        );

        RoomLayout {
            coord,
            depth,
            seed,
            theme,
            event,
            obstacles,
            hazards,
            decorations,
            exits: Exits::ALL_OPEN,
            enemy_plan,
            weapon_drop: loot.weapon_drop,
            ammo_drop: loot.ammo_drop,
            health_drop: loot.health_drop,
            shrine: loot.shrine,
            portal,
        }
    }
}
