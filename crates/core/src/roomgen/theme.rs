use crate::rng::RngStream;

use super::model::RoomTheme;

const MAGMATIC_DEPTH_INTERVAL: u32 = 5;

/// Every fifth depth is forced magmatic; the roll is still drawn so the stream stays
/// aligned.
pub(super) fn roll_theme(rng: &mut RngStream, depth: u32) -> RoomTheme {
    let roll = rng.next_f64();
    if depth > 0 && depth % MAGMATIC_DEPTH_INTERVAL == 0 {
        return RoomTheme::Magmatic;
    }
    match roll {
        r if r < 0.26 => RoomTheme::Azurite,
        r if r < 0.49 => RoomTheme::Teal,
        r if r < 0.74 => RoomTheme::Violet,
        _ => RoomTheme::Magmatic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_fifth_depth_is_magmatic() {
        for depth in [5, 10, 15, 40] {
            for seed in 0..16 {
                assert_eq!(roll_theme(&mut RngStream::new(seed), depth), RoomTheme::Magmatic);
            }
        }
    }

    #[test]
    fn forced_theme_still_consumes_a_draw() {
        let mut forced = RngStream::new(11);
        let mut free = RngStream::new(11);
        roll_theme(&mut forced, 5);
        roll_theme(&mut free, 4);
        assert_eq!(forced, free);
    }

    #[test]
    fn depth_zero_uses_the_roll() {
        // mulberry32(0) opens with 0.266..., just above the azurite cut.
        assert_eq!(roll_theme(&mut RngStream::new(0), 0), RoomTheme::Teal);
    }
}
