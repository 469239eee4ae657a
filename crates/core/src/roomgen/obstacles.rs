//! Solid rectangle placement: a rejection-sampled interior field plus a few pillars
//! hugging the walls.

use crate::rng::RngStream;
use crate::tuning::{ROOM_CENTER, ROOM_HEIGHT, ROOM_WIDTH, TUNING};
use crate::types::Rect;

const CENTER_CLEARANCE: i32 = 220;
const INTERIOR_PAD: i32 = 14;
const PILLAR_PAD: i32 = 10;
const PILLAR_WALL_OFFSET: i32 = 52;
const PILLAR_SPAN_MARGIN: i32 = 76;
const LANE_HALF_WIDTH: i32 = 180;
const LANE_DEPTH_VERTICAL: i32 = 140;
const LANE_DEPTH_HORIZONTAL: i32 = 150;

pub(super) fn generate_obstacles(rng: &mut RngStream, depth: u32) -> Vec<Rect> {
    let room = &TUNING.room;
    let count = rng.int(room.obstacle_count_min + 2, room.obstacle_count_max + 8) as usize;
    let padding = room.obstacle_padding;
    let wide_chance = 0.3 + (f64::from(depth) * 0.01).min(0.18);

    let mut obstacles: Vec<Rect> = Vec::with_capacity(count + 4);
    for _ in 0..count * 2 {
        if obstacles.len() >= count {
            break;
        }
        let wide = rng.chance(wide_chance);
        let w = if wide { rng.int(180, 340) } else { rng.int(60, 190) };
        let h = if wide { rng.int(34, 120) } else { rng.int(52, 170) };
        let x = rng.int(padding, ROOM_WIDTH - padding - w);
        let y = rng.int(padding, ROOM_HEIGHT - padding - h);
        let rect = Rect::new(x, y, w, h);

        if rect.touches_circle(ROOM_CENTER.x, ROOM_CENTER.y, CENTER_CLEARANCE)
            || blocks_entry_lane(&rect)
            || overlaps_any(&rect, &obstacles, INTERIOR_PAD)
        {
            continue;
        }
        obstacles.push(rect);
    }

    let pillar_count = rng.int(1, 4);
    for _ in 0..pillar_count {
        let rect = edge_pillar(rng);
        if !overlaps_any(&rect, &obstacles, PILLAR_PAD) && !blocks_entry_lane(&rect) {
            obstacles.push(rect);
        }
    }

    obstacles
}

fn edge_pillar(rng: &mut RngStream) -> Rect {
    if rng.chance(0.5) {
        let w = rng.int(88, 180);
        let h = rng.int(28, 56);
        let x = rng.int(PILLAR_SPAN_MARGIN, ROOM_WIDTH - PILLAR_SPAN_MARGIN - w);
        let y = if rng.chance(0.5) {
            PILLAR_WALL_OFFSET
        } else {
            ROOM_HEIGHT - PILLAR_WALL_OFFSET - h
        };
        Rect::new(x, y, w, h)
    } else {
        let w = rng.int(28, 56);
        let h = rng.int(88, 180);
        let x = if rng.chance(0.5) {
            PILLAR_WALL_OFFSET
        } else {
            ROOM_WIDTH - PILLAR_WALL_OFFSET - w
        };
        let y = rng.int(PILLAR_SPAN_MARGIN, ROOM_HEIGHT - PILLAR_SPAN_MARGIN - h);
        Rect::new(x, y, w, h)
    }
}

fn overlaps_any(rect: &Rect, placed: &[Rect], pad: i32) -> bool {
    placed.iter().any(|other| rect.overlaps_padded(other, pad))
}

/// True when `rect` intrudes on the corridor leading in from any of the four doors.
pub fn blocks_entry_lane(rect: &Rect) -> bool {
    let spans_center_x = rect.x < ROOM_CENTER.x + LANE_HALF_WIDTH
        && rect.right() > ROOM_CENTER.x - LANE_HALF_WIDTH;
    let spans_center_y = rect.y < ROOM_CENTER.y + LANE_HALF_WIDTH
        && rect.bottom() > ROOM_CENTER.y - LANE_HALF_WIDTH;

    let top = rect.y < LANE_DEPTH_VERTICAL && spans_center_x;
    let bottom = rect.bottom() > ROOM_HEIGHT - LANE_DEPTH_VERTICAL && spans_center_x;
    let left = rect.x < LANE_DEPTH_HORIZONTAL && spans_center_y;
    let right = rect.right() > ROOM_WIDTH - LANE_DEPTH_HORIZONTAL && spans_center_y;
    top || bottom || left || right
}
