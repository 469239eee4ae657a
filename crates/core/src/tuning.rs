//! Static tuning constants shared by the generators and the run host.

use crate::types::Point;

pub struct PlayerTuning {
    pub max_health: u32,
}

pub struct BulletTuning {
    pub ttl_ms: u32,
}

pub struct RoomTuning {
    pub width: i32,
    pub height: i32,
    pub obstacle_count_min: i32,
    pub obstacle_count_max: i32,
    pub obstacle_padding: i32,
}

impl RoomTuning {
    pub const fn center(&self) -> Point {
        Point { x: self.width / 2, y: self.height / 2 }
    }
}

pub struct SpawnTuning {
    pub max_enemies: usize,
}

pub struct Tuning {
    pub player: PlayerTuning,
    pub bullets: BulletTuning,
    pub room: RoomTuning,
    pub spawn: SpawnTuning,
}

pub const TUNING: Tuning = Tuning {
    player: PlayerTuning { max_health: 5 },
    bullets: BulletTuning { ttl_ms: 920 },
    room: RoomTuning {
        width: 2_200,
        height: 1_320,
        obstacle_count_min: 14,
        obstacle_count_max: 30,
        obstacle_padding: 90,
    },
    spawn: SpawnTuning { max_enemies: 34 },
};

pub const ROOM_WIDTH: i32 = TUNING.room.width;
pub const ROOM_HEIGHT: i32 = TUNING.room.height;
pub const ROOM_CENTER: Point = TUNING.room.center();
