//! Rejection samplers for points inside a room. Each sampler draws a bounded number of
//! candidates from its stream and falls back to a fixed point once the budget runs out.

use tracing::trace;

use crate::rng::RngStream;
use crate::tuning::{ROOM_CENTER, ROOM_HEIGHT, ROOM_WIDTH};
use crate::types::{Point, Rect};

use super::model::HazardPlan;

pub(super) struct PointSampler {
    label: &'static str,
    attempts: u32,
    x_margin: i32,
    y_margin: i32,
    center_clearance: i32,
    obstacle_margin: i32,
    hazard_clearance: Option<i32>,
    fallback: Point,
}

pub(super) const ENEMY_SPAWN: PointSampler = PointSampler {
    label: "enemy spawn",
    attempts: 50,
    x_margin: 100,
    y_margin: 92,
    center_clearance: 130,
    obstacle_margin: 18,
    hazard_clearance: None,
    fallback: ROOM_CENTER,
};

pub(super) const LOOT: PointSampler = PointSampler {
    label: "loot",
    attempts: 36,
    x_margin: 110,
    y_margin: 96,
    center_clearance: 0,
    obstacle_margin: 14,
    hazard_clearance: None,
    fallback: ROOM_CENTER,
};

pub(super) const HAZARD: PointSampler = PointSampler {
    label: "hazard",
    attempts: 42,
    x_margin: 96,
    y_margin: 92,
    center_clearance: 110,
    obstacle_margin: 20,
    hazard_clearance: None,
    fallback: Point { x: ROOM_CENTER.x + 120, y: ROOM_CENTER.y },
};

pub(super) const DECOR: PointSampler = PointSampler {
    label: "decor",
    attempts: 48,
    x_margin: 72,
    y_margin: 72,
    center_clearance: 130,
    obstacle_margin: 14,
    hazard_clearance: Some(22),
    fallback: Point { x: ROOM_CENTER.x + 140, y: ROOM_CENTER.y + 80 },
};

impl PointSampler {
    pub(super) fn sample(
        &self,
        rng: &mut RngStream,
        obstacles: &[Rect],
        hazards: &[HazardPlan],
    ) -> Point {
        for _ in 0..self.attempts {
            let candidate = Point {
                x: rng.int(self.x_margin, ROOM_WIDTH - self.x_margin),
                y: rng.int(self.y_margin, ROOM_HEIGHT - self.y_margin),
            };
            if self.accepts(candidate, obstacles, hazards) {
                return candidate;
            }
        }

        trace!(sampler = self.label, attempts = self.attempts, "point sampler fell back");
        self.fallback
    }

    fn accepts(&self, point: Point, obstacles: &[Rect], hazards: &[HazardPlan]) -> bool {
        if within_center(point, self.center_clearance) {
            return false;
        }
        if obstacles.iter().any(|rect| rect.contains_with_margin(point, self.obstacle_margin)) {
            return false;
        }
        match self.hazard_clearance {
            Some(extra) => !hazards.iter().any(|hazard| hazard.covers(point, extra)),
            None => true,
        }
    }
}

fn within_center(point: Point, clearance: i32) -> bool {
    let dx = i64::from(point.x - ROOM_CENTER.x);
    let dy = i64::from(point.y - ROOM_CENTER.y);
    dx * dx + dy * dy < i64::from(clearance) * i64::from(clearance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roomgen::model::HazardKind;

    #[test]
    fn samplers_respect_their_margins() {
        let obstacles = [Rect::new(400, 300, 200, 120), Rect::new(1500, 900, 160, 90)];
        let mut rng = RngStream::new(42);
        for sampler in [&ENEMY_SPAWN, &LOOT, &HAZARD] {
            for _ in 0..200 {
                let point = sampler.sample(&mut rng, &obstacles, &[]);
                if point == sampler.fallback {
                    continue;
                }
                assert!(point.x >= sampler.x_margin && point.x <= ROOM_WIDTH - sampler.x_margin);
                assert!(point.y >= sampler.y_margin && point.y <= ROOM_HEIGHT - sampler.y_margin);
                assert!(!within_center(point, sampler.center_clearance));
                assert!(
                    !obstacles
                        .iter()
                        .any(|rect| rect.contains_with_margin(point, sampler.obstacle_margin))
                );
            }
        }
    }

    #[test]
    fn decor_avoids_hazard_rings() {
        let hazards = [HazardPlan {
            kind: HazardKind::Ember,
            x: 600,
            y: 400,
            radius: 30,
            damage: 2,
            period_ms: 2_000,
            phase_ms: 0,
        }];
        let mut rng = RngStream::new(7);
        for _ in 0..300 {
            let point = DECOR.sample(&mut rng, &[], &hazards);
            assert!(!hazards[0].covers(point, 22));
        }
    }

    #[test]
    fn exhausted_sampler_returns_fallback() {
        let wall = [Rect::new(0, 0, ROOM_WIDTH, ROOM_HEIGHT)];
        let mut rng = RngStream::new(1);
        assert_eq!(ENEMY_SPAWN.sample(&mut rng, &wall, &[]), ROOM_CENTER);
        assert_eq!(HAZARD.sample(&mut rng, &wall, &[]), Point { x: 1_220, y: 660 });
        assert_eq!(DECOR.sample(&mut rng, &wall, &[]), Point { x: 1_240, y: 740 });
    }
}
