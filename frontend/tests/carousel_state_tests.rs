mod common;

use chfi_frontend::carousel::{CarouselError, CarouselState, Direction, Mode};
use common::count;

#[test]
fn advance_cycles_through_every_item() {
    for n in 1..=7 {
        let mut state = CarouselState::discrete(count(n));
        let mut seen = Vec::new();
        for _ in 0..n {
            seen.push(state.index());
            state.advance();
        }
        assert_eq!(seen, (0..n).collect::<Vec<_>>());
        assert_eq!(state.index(), 0, "wraps after {} advances", n);
    }
}

#[test]
fn retreat_undoes_advance() {
    for n in 1..=5 {
        for start in 0..n {
            let mut state = CarouselState::discrete(count(n));
            state.jump_to(start).unwrap();

            state.retreat();
            state.advance();
            assert_eq!(state.index(), start);

            state.advance();
            state.retreat();
            assert_eq!(state.index(), start);
        }
    }
}

#[test]
fn retreat_from_first_wraps_to_last() {
    let mut state = CarouselState::discrete(count(4));
    state.retreat();
    assert_eq!(state.index(), 3);
    assert_eq!(state.direction(), Direction::Backward);
}

#[test]
fn two_slides_alternate() {
    let mut state = CarouselState::discrete(count(2));
    let mut positions = vec![state.position()];
    state.advance();
    positions.push(state.position());
    state.advance();
    positions.push(state.position());
    assert_eq!(positions, vec![0.0, 1.0, 0.0]);
}

#[test]
fn jump_to_in_range_sets_index() {
    let mut state = CarouselState::discrete(count(5));
    assert_eq!(state.jump_to(3), Ok(()));
    assert_eq!(state.index(), 3);
    assert_eq!(state.direction(), Direction::Forward);

    state.jump_to(1).unwrap();
    assert_eq!(state.index(), 1);
    assert_eq!(state.direction(), Direction::Backward);
}

#[test]
fn jump_to_out_of_range_leaves_state_alone() {
    let mut state = CarouselState::discrete(count(2));
    state.advance();
    let before = state;

    assert_eq!(
        state.jump_to(5),
        Err(CarouselError::OutOfRange {
            index: 5,
            item_count: 2
        })
    );
    assert_eq!(state, before);
    assert_eq!(state.jump_to(2).unwrap_err().to_string(), "index 2 is out of range for 2 items");
}

#[test]
fn continuous_resets_exactly_at_loop_point() {
    let mut state = CarouselState::continuous_with_step(100.0, 0.5).unwrap();
    assert_eq!(state.mode(), Mode::Continuous);

    let mut previous = state.position();
    for call in 1..200 {
        state.tick();
        assert_eq!(state.position(), previous + 0.5, "tick {}", call);
        assert!(state.position() < 100.0);
        previous = state.position();
    }
    assert_eq!(state.position(), 99.5);

    state.tick();
    assert_eq!(state.position(), 0.0);
}

#[test]
fn continuous_never_exposes_loop_point() {
    let mut state = CarouselState::continuous_with_step(10.0, 3.0).unwrap();
    for _ in 0..50 {
        state.tick();
        assert!(state.position() < 10.0);
    }
}

#[test]
fn default_step_comes_from_config() {
    let state = CarouselState::continuous(100.0).unwrap();
    assert_eq!(state.step(), Some(chfi_frontend::config::REVIEW_STRIP_STEP_PX));
    assert_eq!(state.item_count(), None);
}

#[test]
fn manual_navigation_is_ignored_in_continuous_mode() {
    let mut state = CarouselState::continuous_with_step(100.0, 0.5).unwrap();
    state.tick();
    state.advance();
    state.retreat();
    assert_eq!(state.position(), 0.5);
    assert_eq!(
        state.jump_to(0),
        Err(CarouselError::OutOfRange {
            index: 0,
            item_count: 0
        })
    );
}

#[test]
fn tick_is_ignored_in_discrete_mode() {
    let mut state = CarouselState::discrete(count(3));
    state.tick();
    assert_eq!(state.index(), 0);
}

#[test]
fn pause_blocks_scheduled_ticks_but_keeps_position() {
    let mut state = CarouselState::discrete(count(3));
    state.advance();
    state.pause();
    for _ in 0..10 {
        assert!(!state.scheduled_tick());
    }
    assert_eq!(state.index(), 1);

    // Manual navigation still works while paused.
    state.advance();
    assert_eq!(state.index(), 2);

    state.resume();
    assert!(state.scheduled_tick());
    assert_eq!(state.index(), 0);
}

#[test]
fn shrinking_loop_point_resets_offset_past_it() {
    let mut state = CarouselState::continuous_with_step(100.0, 10.0).unwrap();
    for _ in 0..6 {
        state.tick();
    }
    assert_eq!(state.position(), 60.0);

    state.set_half_width(80.0).unwrap();
    assert_eq!(state.position(), 60.0);

    state.set_half_width(50.0).unwrap();
    assert_eq!(state.position(), 0.0);
    assert_eq!(state.half_width(), Some(50.0));
}

#[test]
fn invalid_measurement_is_rejected() {
    let mut state = CarouselState::continuous(100.0).unwrap();
    assert_eq!(
        state.set_half_width(0.0),
        Err(CarouselError::InvalidWidth { half_width: 0.0 })
    );
    assert_eq!(state.half_width(), Some(100.0));

    let mut discrete = CarouselState::discrete(count(2));
    assert_eq!(discrete.set_half_width(-5.0), Ok(()));
}
