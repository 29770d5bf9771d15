// SPDX-License-Identifier: MPL-2.0
//! End-to-end walks through the framework guide deck: timed auto-advance,
//! insight overlays pausing the tour, and free navigation.

use std::time::Instant;
use vital_atlas::catalog::Catalog;
use vital_atlas::ui::guide::{Effect, Message, State};

fn catalog() -> Catalog {
    Catalog::load().expect("embedded catalog should parse")
}

/// Drives ticks far enough into the future to fire the current slide.
fn fire_current_slide(state: &mut State, catalog: &Catalog, epoch: Instant) -> Effect {
    let duration = state.current_slide_duration(catalog).as_duration();
    state.handle_message(Message::Tick(epoch + duration), catalog)
}

#[test]
fn timed_tour_runs_to_completion_without_overshooting() {
    let catalog = catalog();
    let mut state = State::new(&catalog, true, 8);
    let slide_count = catalog.deck().len();

    // Each firing lands exactly one slide further; the cursor never leaves
    // the valid range.
    let mut epoch = Instant::now();
    for expected in 1..slide_count {
        let duration = state.current_slide_duration(&catalog).as_duration();
        epoch += duration;
        let effect = state.handle_message(Message::Tick(epoch), &catalog);
        assert_eq!(effect, Effect::None);
        assert_eq!(state.cursor(), expected);
    }

    // The would-be next firing reports completion and stays put.
    let duration = state.current_slide_duration(&catalog).as_duration();
    let effect = state.handle_message(Message::Tick(epoch + duration), &catalog);
    assert_eq!(effect, Effect::Completed);
    assert_eq!(state.cursor(), slide_count - 1);

    // And the countdown is dead afterwards.
    assert!(!state.auto_advance_enabled());
}

#[test]
fn early_ticks_do_not_advance() {
    let catalog = catalog();
    let mut state = State::new(&catalog, true, 8);

    let effect = state.handle_message(Message::Tick(Instant::now()), &catalog);
    assert_eq!(effect, Effect::None);
    assert_eq!(state.cursor(), 0);
}

#[test]
fn insight_pauses_and_resuming_restarts_the_countdown() {
    let catalog = catalog();
    let mut state = State::new(&catalog, true, 8);

    state.handle_message(Message::OpenInsight("coverage-depth".into()), &catalog);
    assert!(!state.auto_advance_enabled(), "insight pauses the tour");
    assert!(!state.needs_tick());

    // Closing the overlay does not resume by itself; the user re-arms.
    state.handle_message(Message::CloseInsight, &catalog);
    assert!(!state.auto_advance_enabled());

    state.handle_message(Message::ToggleAutoAdvance, &catalog);
    assert!(state.needs_tick());
    // Epoch taken after the re-arm, so the full duration has elapsed.
    let effect = fire_current_slide(&mut state, &catalog, Instant::now());
    assert_eq!(effect, Effect::None);
    assert_eq!(state.cursor(), 1);
}

#[test]
fn free_jumping_is_never_gated() {
    let catalog = catalog();
    let mut state = State::new(&catalog, false, 8);
    let last = catalog.deck().len() - 1;

    // The deck is a passive tour: digit jumps and dots work regardless of
    // any selection state elsewhere in the app.
    state.handle_message(Message::GoTo(last), &catalog);
    assert_eq!(state.cursor(), last);

    state.handle_message(Message::GoTo(0), &catalog);
    assert_eq!(state.cursor(), 0);

    // Out-of-range jumps are ignored, not clamped.
    state.handle_message(Message::GoTo(last + 10), &catalog);
    assert_eq!(state.cursor(), 0);
}

#[test]
fn manual_navigation_rearms_the_countdown() {
    let catalog = catalog();
    let mut state = State::new(&catalog, true, 8);
    let epoch = Instant::now();

    // Manually moving re-arms; a tick for the old deadline no longer fires.
    state.handle_message(Message::Next, &catalog);
    assert_eq!(state.cursor(), 1);

    let old_duration = state.current_slide_duration(&catalog).as_duration();
    let effect = state.handle_message(Message::Tick(epoch + old_duration / 2), &catalog);
    assert_eq!(effect, Effect::None);
    assert_eq!(state.cursor(), 1);
}

#[test]
fn every_slide_insight_opens_and_deep_links() {
    let catalog = catalog();

    for slide in catalog.deck() {
        for insight_id in &slide.insight_ids {
            let mut state = State::new(&catalog, false, 8);
            state.handle_message(Message::OpenInsight(insight_id.clone()), &catalog);
            assert!(state.insight_open(), "insight '{insight_id}' should open");

            if let Some(block) = catalog
                .insight(insight_id)
                .and_then(|i| i.block_id.clone())
            {
                let effect =
                    state.handle_message(Message::OpenInsightBlock(block.clone()), &catalog);
                assert_eq!(effect, Effect::NavigateToBlock(block));
                assert!(!state.insight_open());
            }
        }
    }
}
