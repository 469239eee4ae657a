use crate::rng::RngStream;
use crate::types::{Rect, RoomCoord};

use super::model::{HazardPlan, PortalPlan, RoomEvent};
use super::placement::DECOR;

const MAX_PORTAL_CHANCE: f64 = 0.42;

pub(super) fn portal_chance(depth: u32, event: RoomEvent) -> f64 {
    let base = 0.1 + (f64::from(depth) * 0.008).min(0.22);
    let bonus = match event {
        RoomEvent::Cache => 0.12,
        RoomEvent::Bosslet => 0.04,
        _ => 0.0,
    };
    (base + bonus).min(MAX_PORTAL_CHANCE)
}

pub(super) fn generate_portal(
    rng: &mut RngStream,
    coord: RoomCoord,
    depth: u32,
    obstacles: &[Rect],
    hazards: &[HazardPlan],
    event: RoomEvent,
) -> Option<PortalPlan> {
    if !rng.chance(portal_chance(depth, event)) {
        return None;
    }

    let point = DECOR.sample(rng, obstacles, hazards);
    let mut dx = rng.int(-3, 3);
    let mut dy = rng.int(-3, 3);
    if dx == 0 && dy == 0 {
        dx = if rng.chance(0.5) { 2 } else { -2 };
    }
    if dx.abs() + dy.abs() < 2 {
        if dx.abs() > dy.abs() {
            dx += if dx >= 0 { 1 } else { -1 };
        } else {
            dy += if dy >= 0 { 1 } else { -1 };
        }
    }

    Some(PortalPlan { x: point.x, y: point.y, target: coord.offset(dx, dy) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chance_is_capped() {
        assert!((portal_chance(0, RoomEvent::Skirmish) - 0.1).abs() < 1e-12);
        assert!((portal_chance(10, RoomEvent::Cache) - 0.3).abs() < 1e-12);
        assert!((portal_chance(200, RoomEvent::Cache) - MAX_PORTAL_CHANCE).abs() < 1e-12);
    }

    #[test]
    fn jumps_are_never_trivial() {
        let origin = RoomCoord::new(4, -2);
        let mut portals = 0;
        for seed in 0..2_000 {
            let mut rng = RngStream::new(seed);
            let Some(portal) = generate_portal(&mut rng, origin, 30, &[], &[], RoomEvent::Cache)
            else {
                continue;
            };
            portals += 1;
            let distance = portal.target.manhattan(origin);
            assert!((2..=6).contains(&distance), "jump of {distance}");
        }
        assert!(portals > 600);
    }
}
