//! Panel transition engine tests
//!
//! Appear/disappear per animation kind, completion snapping, the global
//! gate, auto-hide timers and shown notifications.

mod common;

use common::*;
use panel_manager::anim::Vec2;
use panel_manager::config::PanelConfig;
use panel_manager::panel::{AppearKind, DisappearKind, PanelId, PanelState};
use panel_manager::Cmd;

// ========================================================================
// Appear
// ========================================================================

#[test]
fn test_appear_none_is_immediate() {
    let mut model = test_manager(vec![hidden_panel(1)]);

    let cmd = model.show_panel(PanelId(1));

    assert_eq!(cmd, Some(Cmd::Redraw));
    assert_eq!(state(&model, 1), PanelState::Visible);
    assert_eq!(opacity(&model, 1), 1.0);
    assert!(model.animations.is_empty());
    assert!(!model.is_transition_running());
}

#[test]
fn test_fade_in_interpolates_then_snaps() {
    let mut model = test_manager(vec![fading_panel(1)]);
    assert_eq!(opacity(&model, 1), 0.0);

    model.show_panel(PanelId(1));
    assert_eq!(state(&model, 1), PanelState::Appearing);
    assert!(model.is_transition_running());

    advance(&mut model, 0.5);
    assert_eq!(opacity(&model, 1), 0.5);
    assert_eq!(state(&model, 1), PanelState::Appearing);

    advance(&mut model, 0.5);
    assert_eq!(opacity(&model, 1), 1.0);
    assert_eq!(state(&model, 1), PanelState::Visible);
    assert!(!model.is_transition_running());
}

#[test]
fn test_fly_in_from_left_starts_offscreen() {
    let mut model = test_manager(vec![PanelConfig {
        appear: AppearKind::FlyLeft,
        layout: Some(test_layout()),
        ..hidden_panel(1)
    }]);

    model.show_panel(PanelId(1));
    assert_eq!(position(&model, 1), Vec2::new(-400.0, 50.0));
    assert_eq!(opacity(&model, 1), 1.0);

    advance(&mut model, 0.5);
    assert_eq!(position(&model, 1), Vec2::new(-150.0, 50.0));

    advance(&mut model, 0.5);
    assert_eq!(position(&model, 1), Vec2::new(100.0, 50.0));
    assert_eq!(state(&model, 1), PanelState::Visible);
}

#[test]
fn test_fly_in_from_top_travels_vertically() {
    let mut model = test_manager(vec![PanelConfig {
        appear: AppearKind::FlyTop,
        layout: Some(test_layout()),
        ..hidden_panel(1)
    }]);

    model.show_panel(PanelId(1));
    assert_eq!(position(&model, 1), Vec2::new(100.0, 1180.0));

    advance(&mut model, 1.0);
    assert_eq!(position(&model, 1), Vec2::new(100.0, 50.0));
}

#[test]
fn test_show_on_visible_panel_is_noop() {
    let mut model = test_manager(vec![fading_panel(1)]);
    model.show_panel(PanelId(1));
    advance(&mut model, 1.0);
    let shown = record_shown(&mut model);

    assert_eq!(model.show_panel(PanelId(1)), None);
    assert_eq!(state(&model, 1), PanelState::Visible);
    assert!(!model.is_transition_running());
    assert!(shown.borrow().is_empty());
}

#[test]
fn test_render_above_everything_raises_on_appear() {
    let mut model = test_manager(vec![
        PanelConfig {
            render_above_everything: true,
            ..hidden_panel(1)
        },
        hidden_panel(2),
    ]);
    assert_eq!(model.draw_order, vec![PanelId(1), PanelId(2)]);

    model.show_panel(PanelId(1));
    assert_eq!(model.draw_order, vec![PanelId(2), PanelId(1)]);

    model.show_panel(PanelId(2));
    assert_eq!(model.draw_order, vec![PanelId(2), PanelId(1)]);
}

// ========================================================================
// Disappear
// ========================================================================

#[test]
fn test_fade_out_ends_transparent_and_hidden() {
    let mut model = test_manager(vec![PanelConfig {
        disappear: DisappearKind::Fade,
        ..panel(1)
    }]);

    model.hide_panel(PanelId(1));
    assert_eq!(state(&model, 1), PanelState::Disappearing);

    advance(&mut model, 0.75);
    assert_eq!(opacity(&model, 1), 0.25);

    advance(&mut model, 0.25);
    assert_eq!(opacity(&model, 1), 0.0);
    assert_eq!(state(&model, 1), PanelState::Hidden);
    assert!(!model.is_transition_running());
}

#[test]
fn test_disappear_none_is_immediate() {
    let mut model = test_manager(vec![panel(1)]);
    model.hide_panel(PanelId(1));
    assert_eq!(state(&model, 1), PanelState::Hidden);
    assert_eq!(opacity(&model, 1), 1.0);
}

#[test]
fn test_fly_away_bottom_ends_offscreen() {
    let mut model = test_manager(vec![PanelConfig {
        disappear: DisappearKind::FlyBottom,
        layout: Some(test_layout()),
        ..panel(1)
    }]);

    model.hide_panel(PanelId(1));
    assert_eq!(position(&model, 1), Vec2::new(100.0, 50.0));

    advance(&mut model, 1.0);
    assert_eq!(position(&model, 1), Vec2::new(100.0, -1180.0));
    assert_eq!(opacity(&model, 1), 0.0);
    assert_eq!(state(&model, 1), PanelState::Hidden);
}

#[test]
fn test_hide_on_hidden_panel_is_noop() {
    let mut model = test_manager(vec![hidden_panel(1)]);
    assert_eq!(model.hide_panel(PanelId(1)), None);
    assert_eq!(state(&model, 1), PanelState::Hidden);
}

#[test]
fn test_unknown_panel_is_ignored() {
    let mut model = test_manager(vec![panel(1)]);
    assert_eq!(model.show_panel(PanelId(42)), None);
    assert_eq!(model.hide_panel(PanelId(42)), None);
}

#[test]
fn test_hide_mid_appear_reverses_without_torn_state() {
    let mut model = test_manager(vec![fading_panel(1)]);
    model.show_panel(PanelId(1));
    advance(&mut model, 0.5);

    model.hide_panel(PanelId(1));
    assert_eq!(state(&model, 1), PanelState::Disappearing);
    assert_eq!(model.animations.len(), 1);
    assert_eq!(model.gate.holders(), &[PanelId(1)]);

    advance(&mut model, 1.0);
    assert_eq!(state(&model, 1), PanelState::Hidden);
    assert_eq!(opacity(&model, 1), 0.0);
    assert!(!model.is_transition_running());
}

// ========================================================================
// Gate
// ========================================================================

#[test]
fn test_gate_held_until_last_transition_finishes() {
    let mut model = test_manager(vec![fading_panel(1), fading_panel(2)]);

    model.show_panel(PanelId(1));
    advance(&mut model, 0.5);
    model.show_panel(PanelId(2));
    assert_eq!(model.gate.holders().len(), 2);

    advance(&mut model, 0.5);
    assert_eq!(state(&model, 1), PanelState::Visible);
    assert!(model.is_transition_running());

    advance(&mut model, 0.5);
    assert_eq!(state(&model, 2), PanelState::Visible);
    assert!(!model.is_transition_running());
}

#[test]
fn test_none_kind_never_takes_gate() {
    let mut model = test_manager(vec![hidden_panel(1)]);
    model.show_panel(PanelId(1));
    model.hide_panel(PanelId(1));
    assert!(model.gate.holders().is_empty());
}

// ========================================================================
// Shown notifications
// ========================================================================

#[test]
fn test_shown_fires_on_appear_completion() {
    let mut model = test_manager(vec![fading_panel(1)]);
    let shown = record_shown(&mut model);

    model.show_panel(PanelId(1));
    assert!(shown.borrow().is_empty());

    advance(&mut model, 1.0);
    assert_eq!(*shown.borrow(), vec![PanelId(1)]);
}

#[test]
fn test_shown_carries_configuration_snapshot() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let mut model = test_manager(vec![PanelConfig {
        name: "inventory".to_string(),
        hide_after_seconds: Some(3.0),
        ..hidden_panel(7)
    }]);
    let seen = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&seen);
    model.subscribe_shown(move |event| *sink.borrow_mut() = Some(event.clone()));

    model.show_panel(PanelId(7));

    let event = seen.borrow().clone().expect("shown event delivered");
    assert_eq!(event.panel.id, PanelId(7));
    assert_eq!(event.panel.name, "inventory");
    assert_eq!(event.panel.state, PanelState::Visible);
    assert_eq!(event.panel.hide_after_seconds, Some(3.0));
}

#[test]
fn test_listeners_run_in_subscription_order() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let mut model = test_manager(vec![hidden_panel(1)]);
    let order = Rc::new(RefCell::new(Vec::new()));
    for tag in ["first", "second", "third"] {
        let sink = Rc::clone(&order);
        model.subscribe_shown(move |_| sink.borrow_mut().push(tag));
    }

    model.show_panel(PanelId(1));
    assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
}

#[test]
fn test_unsubscribed_listener_not_called() {
    let mut model = test_manager(vec![hidden_panel(1)]);
    let kept = record_shown(&mut model);
    let dropped = std::rc::Rc::new(std::cell::Cell::new(0));
    let counter = std::rc::Rc::clone(&dropped);
    let id = model.subscribe_shown(move |_| counter.set(counter.get() + 1));

    assert!(model.unsubscribe_shown(id));
    model.show_panel(PanelId(1));

    assert_eq!(dropped.get(), 0);
    assert_eq!(kept.borrow().len(), 1);
}

// ========================================================================
// Auto-hide
// ========================================================================

#[test]
fn test_auto_hide_after_two_seconds() {
    let mut model = test_manager(vec![PanelConfig {
        hide_after_seconds: Some(2.0),
        disappear: DisappearKind::Fade,
        ..hidden_panel(1)
    }]);

    model.show_panel(PanelId(1));
    assert_eq!(state(&model, 1), PanelState::Visible);

    advance(&mut model, 1.75);
    assert_eq!(state(&model, 1), PanelState::Visible);

    advance(&mut model, 0.25);
    assert_eq!(state(&model, 1), PanelState::Disappearing);

    advance(&mut model, 1.0);
    assert_eq!(state(&model, 1), PanelState::Hidden);
    assert_eq!(opacity(&model, 1), 0.0);
}

#[test]
fn test_auto_hide_armed_after_animated_appear() {
    let mut model = test_manager(vec![PanelConfig {
        hide_after_seconds: Some(1.0),
        ..fading_panel(1)
    }]);

    model.show_panel(PanelId(1));
    assert!(model.timers.is_empty());

    advance(&mut model, 1.0);
    assert_eq!(model.timers.due_at(PanelId(1)), Some(2.0));
}

#[test]
fn test_stale_timer_dropped_when_hidden_early() {
    let mut model = test_manager(vec![PanelConfig {
        hide_after_seconds: Some(2.0),
        ..hidden_panel(1)
    }]);

    model.show_panel(PanelId(1));
    advance(&mut model, 1.0);
    model.hide_panel(PanelId(1));
    assert!(model.timers.is_empty());

    // Re-shown at t=1.5: only the fresh deadline at t=3.5 applies
    advance(&mut model, 0.5);
    model.show_panel(PanelId(1));
    advance(&mut model, 1.0);
    assert_eq!(state(&model, 1), PanelState::Visible);

    advance(&mut model, 1.0);
    assert_eq!(state(&model, 1), PanelState::Hidden);
}

#[test]
fn test_auto_hide_freezes_while_paused() {
    let mut model = test_manager(vec![PanelConfig {
        hide_after_seconds: Some(1.0),
        ..hidden_panel(1)
    }]);

    model.show_panel(PanelId(1));
    model.clock.pause();
    advance(&mut model, 5.0);
    assert_eq!(state(&model, 1), PanelState::Visible);

    model.clock.resume();
    advance(&mut model, 1.0);
    assert_eq!(state(&model, 1), PanelState::Hidden);
}

#[test]
fn test_animations_run_while_paused() {
    let mut model = test_manager(vec![fading_panel(1)]);
    model.clock.pause();

    model.show_panel(PanelId(1));
    advance(&mut model, 1.0);

    assert_eq!(state(&model, 1), PanelState::Visible);
    assert_eq!(model.now(), 0.0);
}

#[test]
fn test_non_positive_or_non_finite_tick_ignored() {
    let mut model = test_manager(vec![fading_panel(1)]);
    model.show_panel(PanelId(1));

    assert_eq!(model.tick(0.0), None);
    assert_eq!(model.tick(-1.0), None);
    assert_eq!(model.tick(f32::NAN), None);
    assert_eq!(model.tick(f32::INFINITY), None);
    assert_eq!(opacity(&model, 1), 0.0);
}
