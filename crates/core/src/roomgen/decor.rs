use crate::rng::RngStream;
use crate::types::Rect;

use super::model::{DecorationKind, DecorationPlan, HazardPlan, RoomTheme};
use super::placement::DECOR;

/// Cumulative thresholds per theme; the last entry takes whatever remains.
fn kind_table(theme: RoomTheme) -> [(f64, DecorationKind); 5] {
    use DecorationKind::{CrystalSmall, CrystalTall, Pillar, Rune, Spike};
    match theme {
        RoomTheme::Magmatic => {
            [(0.26, Spike), (0.52, CrystalTall), (0.72, Pillar), (0.88, CrystalSmall), (1.0, Rune)]
        }
        RoomTheme::Violet => {
            [(0.32, Rune), (0.56, CrystalTall), (0.74, CrystalSmall), (0.88, Pillar), (1.0, Spike)]
        }
        RoomTheme::Teal => {
            [(0.36, CrystalSmall), (0.58, Rune), (0.78, CrystalTall), (0.92, Pillar), (1.0, Spike)]
        }
        RoomTheme::Azurite => {
            [(0.3, CrystalSmall), (0.56, CrystalTall), (0.78, Pillar), (0.9, Rune), (1.0, Spike)]
        }
    }
}

pub(super) fn roll_decoration_kind(rng: &mut RngStream, theme: RoomTheme) -> DecorationKind {
    let roll = rng.next_f64();
    let table = kind_table(theme);
    table
        .iter()
        .find(|(threshold, _)| roll < *threshold)
        .map_or(table[table.len() - 1].1, |&(_, kind)| kind)
}

pub(super) fn generate_decorations(
    rng: &mut RngStream,
    obstacles: &[Rect],
    hazards: &[HazardPlan],
    theme: RoomTheme,
    depth: u32,
) -> Vec<DecorationPlan> {
    let extra_by_depth = (f64::from(depth) * 1.5).floor().min(30.0) as i32;
    let count = rng.int(34, 64) + extra_by_depth;

    (0..count)
        .map(|_| {
            let point = DECOR.sample(rng, obstacles, hazards);
            let kind = roll_decoration_kind(rng, theme);
            let scale = rng.float(0.68, 1.48);
            let alpha = rng.float(0.45, 0.95);
            let rotation = rng.float(-0.15, 0.15);
            DecorationPlan { kind, x: point.x, y: point.y, scale, alpha, rotation }
        })
        .collect()
}
