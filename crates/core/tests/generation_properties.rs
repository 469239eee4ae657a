use std::collections::BTreeMap;

use geode_core::roomgen::{
    RoomEvent, blocks_entry_lane, generate_enemy_wave, roll_room_event, roll_room_loot, wave_cap,
};
use geode_core::tuning::{ROOM_HEIGHT, ROOM_WIDTH};
use geode_core::{RngStream, RoomCoord, generate_room_layout};
use proptest::prelude::*;

fn event_from_selector(selector: u8) -> RoomEvent {
    RoomEvent::ALL[usize::from(selector) % RoomEvent::ALL.len()]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]
    #[test]
    fn waves_never_exceed_the_depth_cap(
        seed in any::<u32>(),
        depth in 0_u32..60,
        selector in 0_u8..6
    ) {
        let event = event_from_selector(selector);
        let wave = generate_enemy_wave(&mut RngStream::new(seed), depth, &[], event);
        prop_assert!(!wave.is_empty());
        prop_assert!(
            wave.len() <= wave_cap(depth),
            "seed={seed}, depth={depth}, event={event:?} produced {} enemies",
            wave.len()
        );
    }

    #[test]
    fn bosslet_rooms_always_hold_a_brute_or_oracle(seed in any::<u32>(), multiple in 1_u32..=2) {
        let depth = multiple * 6;
        let wave = generate_enemy_wave(&mut RngStream::new(seed), depth, &[], RoomEvent::Bosslet);
        prop_assert!(wave.iter().any(|spawn| matches!(spawn.enemy_id, "brute" | "oracle")));
    }

    #[test]
    fn portals_always_jump_at_least_two_rooms(
        run_seed in any::<u32>(),
        x in -40_i32..40,
        y in -40_i32..40,
        depth in 0_u32..40
    ) {
        let coord = RoomCoord::new(x, y);
        let layout = generate_room_layout(run_seed, coord, depth, &[]);
        if let Some(portal) = layout.portal {
            prop_assert!(portal.target.manhattan(coord) >= 2, "portal {portal:?} from {coord}");
        }
    }

    #[test]
    fn obstacles_stay_apart_and_clear_of_lanes(
        run_seed in any::<u32>(),
        x in -20_i32..20,
        y in -20_i32..20,
        depth in 0_u32..30
    ) {
        let layout = generate_room_layout(run_seed, RoomCoord::new(x, y), depth, &[]);
        for (index, rect) in layout.obstacles.iter().enumerate() {
            prop_assert!(!blocks_entry_lane(rect));
            prop_assert!(rect.x >= 0 && rect.right() <= ROOM_WIDTH);
            prop_assert!(rect.y >= 0 && rect.bottom() <= ROOM_HEIGHT);
            for other in &layout.obstacles[index + 1..] {
                prop_assert!(!rect.overlaps_padded(other, 10), "{rect:?} overlaps {other:?}");
            }
        }
        for spawn in &layout.enemy_plan {
            prop_assert!((0..=ROOM_WIDTH).contains(&spawn.x));
            prop_assert!((0..=ROOM_HEIGHT).contains(&spawn.y));
        }
    }

    #[test]
    fn loot_rolls_repeat_for_identical_inputs(
        seed in any::<u32>(),
        depth in 0_u32..30,
        selector in 0_u8..6
    ) {
        let event = event_from_selector(selector);
        let first = roll_room_loot(&mut RngStream::new(seed), depth, event, &[], &["ward"]);
        let second = roll_room_loot(&mut RngStream::new(seed), depth, event, &[], &["ward"]);
        prop_assert_eq!(first, second);
    }
}

#[test]
fn loot_differs_across_seeds() {
    let reference = roll_room_loot(&mut RngStream::new(0), 5, RoomEvent::Skirmish, &[], &[]);
    let differing = (1..=20)
        .map(|seed| roll_room_loot(&mut RngStream::new(seed), 5, RoomEvent::Skirmish, &[], &[]))
        .filter(|loot| *loot != reference)
        .count();
    assert!(differing >= 1);
}

#[test]
fn event_frequencies_track_their_weights() {
    let mut counts: BTreeMap<RoomEvent, u32> = BTreeMap::new();
    let samples = 20_000_u32;
    for seed in 0..samples {
        let event = roll_room_event(&mut RngStream::new(seed.wrapping_mul(2_654_435_761)), 7);
        *counts.entry(event).or_default() += 1;
    }

    let expected = [
        (RoomEvent::Skirmish, 0.44),
        (RoomEvent::Swarm, 0.24),
        (RoomEvent::Gauntlet, 0.16),
        (RoomEvent::Cache, 0.08),
        (RoomEvent::Shrine, 0.08),
    ];
    assert_eq!(counts.get(&RoomEvent::Bosslet), None);
    for (event, share) in expected {
        let observed = f64::from(counts.get(&event).copied().unwrap_or(0)) / f64::from(samples);
        assert!(
            (observed - share).abs() < 0.02,
            "{event:?}: observed {observed}, expected {share}"
        );
    }
}
