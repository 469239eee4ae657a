use geode_core::content::keys;
use geode_core::{Direction, RoomCoord, RunContext, RunError, ShrineOutcome};

/// Finds a run seed whose origin room rolls a portal.
fn run_with_origin_portal() -> RunContext {
    (0..10_000)
        .map(RunContext::start)
        .find(|run| run.layout().portal.is_some())
        .expect("some seed in range rolls a depth-0 portal")
}

#[test]
fn door_walk_increments_depth_and_tracks_visits() {
    let mut run = RunContext::start(4_040);
    let path = [Direction::East, Direction::East, Direction::South, Direction::West];

    for (step, direction) in path.into_iter().enumerate() {
        run.mark_room_cleared();
        let layout = run.exit(direction).expect("cleared room lets the player leave");
        assert_eq!(layout.depth, step as u32 + 1);
    }

    assert_eq!(run.room(), RoomCoord::new(1, 1));
    assert_eq!(run.depth(), 4);
    assert_eq!(run.best_depth(), 4);
    assert_eq!(run.visited_count(), 5);
    assert_eq!(run.rooms_cleared(), 4);
}

#[test]
fn revisiting_a_room_regenerates_at_the_new_depth() {
    let mut run = RunContext::start(77);
    let first_visit = run.layout().clone();

    run.mark_room_cleared();
    run.exit(Direction::North).expect("room cleared");
    run.mark_room_cleared();
    let revisit = run.exit(Direction::South).expect("room cleared").clone();

    assert_eq!(revisit.coord, first_visit.coord);
    assert_eq!(revisit.seed, first_visit.seed);
    assert_eq!(revisit.depth, 2);
    assert_eq!(run.visited_count(), 2);
}

#[test]
fn portal_is_dormant_until_cleared_then_consumed() {
    let mut run = run_with_origin_portal();
    let origin = run.room();
    let target = run.layout().portal.map(|portal| portal.target);

    assert_eq!(run.current_portal().map(|state| state.active), Some(false));
    assert_eq!(run.use_portal(), Err(RunError::PortalDormant(origin)));

    run.mark_room_cleared();
    assert_eq!(run.current_portal().map(|state| state.active), Some(true));

    let jump = run.use_portal().expect("active portal");
    assert_eq!(Some(jump.to), target);
    assert_eq!(jump.from, origin);
    assert_eq!(jump.depth, 2);
    assert_eq!(run.depth(), 2);
    assert!(run.has_visited(jump.to));
}

#[test]
fn room_without_portal_reports_it() {
    let run_seed = (0..10_000)
        .find(|&seed| RunContext::start(seed).layout().portal.is_none())
        .expect("most origin rooms have no portal");
    let mut run = RunContext::start(run_seed);
    run.mark_room_cleared();
    assert_eq!(run.use_portal(), Err(RunError::NoPortal(RoomCoord::ORIGIN)));
}

#[test]
fn shrine_upgrades_feed_back_into_generation() {
    let mut run = RunContext::start(5);
    for id in [keys::UPGRADE_HYPERCOIL, keys::UPGRADE_CRITICALITY, keys::UPGRADE_WARD] {
        assert_eq!(run.claim_shrine(id), Ok(ShrineOutcome::Granted));
    }
    assert_eq!(run.claim_shrine(keys::UPGRADE_WARD), Ok(ShrineOutcome::Dormant));
    assert_eq!(run.owned_upgrades().len(), 3);

    run.mark_room_cleared();
    let layout = run.exit(Direction::West).expect("room cleared").clone();
    if let Some(shrine) = layout.shrine {
        assert!(!run.owned_upgrades().contains(&shrine.upgrade_id));
    }
}
