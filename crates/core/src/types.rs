use std::fmt::{self, Display};

use serde::Serialize;

/// A room on the infinite run grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RoomCoord {
    pub x: i32,
    pub y: i32,
}

impl RoomCoord {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Stable `"x,y"` key used for visited-room and portal bookkeeping.
    pub fn key(self) -> String {
        self.to_string()
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self { x: self.x.saturating_add(dx), y: self.y.saturating_add(dy) }
    }

    pub fn neighbor(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.offset(dx, dy)
    }

    pub fn manhattan(self, other: Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl Display for RoomCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::West, Self::East];

    /// Grid delta; north is `-y`.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::South => (0, 1),
            Self::West => (-1, 0),
            Self::East => (1, 0),
        }
    }
}

/// Integer point in room-local pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Axis-aligned rectangle in room-local pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// True when `point` lies inside this rect grown by `margin` on every side.
    pub fn contains_with_margin(&self, point: Point, margin: i32) -> bool {
        point.x >= self.x - margin
            && point.x <= self.right() + margin
            && point.y >= self.y - margin
            && point.y <= self.bottom() + margin
    }

    /// Overlap test that also rejects rects closer than `pad` pixels apart.
    pub fn overlaps_padded(&self, other: &Rect, pad: i32) -> bool {
        self.x < other.right() + pad
            && self.right() + pad > other.x
            && self.y < other.bottom() + pad
            && self.bottom() + pad > other.y
    }

    /// True when the circle at (`cx`, `cy`) touches the rect.
    pub fn touches_circle(&self, cx: i32, cy: i32, radius: i32) -> bool {
        let closest_x = cx.clamp(self.x, self.right());
        let closest_y = cy.clamp(self.y, self.bottom());
        let dx = i64::from(cx - closest_x);
        let dy = i64::from(cy - closest_y);
        dx * dx + dy * dy <= i64::from(radius) * i64::from(radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_key_uses_comma_separated_coordinates() {
        assert_eq!(RoomCoord::new(2, -1).key(), "2,-1");
        assert_eq!(RoomCoord::ORIGIN.key(), "0,0");
    }

    #[test]
    fn neighbors_follow_screen_axes() {
        let origin = RoomCoord::ORIGIN;
        assert_eq!(origin.neighbor(Direction::North), RoomCoord::new(0, -1));
        assert_eq!(origin.neighbor(Direction::South), RoomCoord::new(0, 1));
        assert_eq!(origin.neighbor(Direction::West), RoomCoord::new(-1, 0));
        assert_eq!(origin.neighbor(Direction::East), RoomCoord::new(1, 0));
        for direction in Direction::ALL {
            assert_eq!(origin.manhattan(origin.neighbor(direction)), 1);
        }
    }

    #[test]
    fn offsets_stop_at_the_grid_edge() {
        let edge = RoomCoord::new(i32::MAX, i32::MIN);
        assert_eq!(edge.offset(3, -3), edge);
        assert_eq!(edge.neighbor(Direction::East), edge);
        assert_eq!(edge.neighbor(Direction::West), RoomCoord::new(i32::MAX - 1, i32::MIN));
    }

    #[test]
    fn margin_containment_is_inclusive() {
        let rect = Rect::new(100, 100, 80, 40);
        assert!(rect.contains_with_margin(Point { x: 86, y: 100 }, 14));
        assert!(!rect.contains_with_margin(Point { x: 85, y: 100 }, 14));
        assert!(rect.contains_with_margin(Point { x: 194, y: 154 }, 14));
    }

    #[test]
    fn padded_overlap_catches_near_misses() {
        let a = Rect::new(0, 0, 50, 50);
        let b = Rect::new(60, 0, 50, 50);
        assert!(!a.overlaps_padded(&b, 0));
        assert!(a.overlaps_padded(&b, 14));
    }

    #[test]
    fn circle_touch_uses_closest_point() {
        let rect = Rect::new(0, 0, 100, 100);
        assert!(rect.touches_circle(50, 50, 1));
        assert!(rect.touches_circle(150, 50, 50));
        assert!(!rect.touches_circle(151, 50, 50));
    }
}
