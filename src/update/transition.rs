//! Panel transition engine
//!
//! Drives one panel through `Hidden -> Appearing -> Visible` and
//! `Visible -> Disappearing -> Hidden`. Animated kinds hold the transition
//! gate until their animation completes; `None` kinds complete in the same
//! call and never touch the gate.
//!
//! None of these functions consult the gate before starting. Gate-respecting
//! dispatch paths check `model.gate.is_busy()` themselves.

use crate::anim::{offscreen_position, TRANSITION_SECONDS};
use crate::commands::Cmd;
use crate::model::{Animation, PanelManager, PanelShown, Track, Transition};
use crate::panel::{PanelId, PanelState};

/// Start showing a panel
///
/// A panel already `Visible` or `Appearing` is left alone. A panel that is
/// mid-disappear has that animation cancelled and turns around.
pub fn appear(model: &mut PanelManager, id: PanelId) -> Option<Cmd> {
    let Some(panel) = model.registry.get(id) else {
        tracing::warn!(panel = %id, "show requested for unknown panel");
        return None;
    };
    if matches!(panel.state, PanelState::Visible | PanelState::Appearing) {
        tracing::trace!(panel = %id, state = %panel.state, "show ignored");
        return None;
    }

    cancel_animation(model, id);

    let canvas = model.canvas;
    let raise = {
        let panel = model.registry.get_mut(id)?;
        panel.state = PanelState::Appearing;
        panel.render_above_everything
    };
    if raise {
        model.raise(id);
    }

    let panel = model.registry.get_mut(id)?;
    let kind = panel.appear;
    tracing::debug!(panel = %panel.label(), ?kind, "appear");

    let track = if let Some(side) = kind.fly_side() {
        let from = offscreen_position(&panel.layout, &canvas, side);
        panel.opacity = 1.0;
        panel.position = from;
        Some(Track::Position {
            from,
            to: panel.layout.position,
        })
    } else if kind.is_animated() {
        panel.position = panel.layout.position;
        panel.opacity = 0.0;
        Some(Track::Opacity { from: 0.0, to: 1.0 })
    } else {
        None
    };

    match track {
        Some(track) => {
            model.animations.insert(Animation::new(
                id,
                Transition::Appear,
                track,
                TRANSITION_SECONDS,
            ));
            model.gate.enter(id);
        }
        None => complete_appear(model, id),
    }

    Some(Cmd::Redraw)
}

/// Start hiding a panel
///
/// A panel already `Hidden` or `Disappearing` is left alone. Any pending
/// auto-hide for the panel is dropped.
pub fn disappear(model: &mut PanelManager, id: PanelId) -> Option<Cmd> {
    let Some(panel) = model.registry.get(id) else {
        tracing::warn!(panel = %id, "hide requested for unknown panel");
        return None;
    };
    if matches!(panel.state, PanelState::Hidden | PanelState::Disappearing) {
        tracing::trace!(panel = %id, state = %panel.state, "hide ignored");
        return None;
    }

    cancel_animation(model, id);
    model.timers.cancel(id);

    let canvas = model.canvas;
    let panel = model.registry.get_mut(id)?;
    panel.state = PanelState::Disappearing;
    let kind = panel.disappear;
    tracing::debug!(panel = %panel.label(), ?kind, "disappear");

    let track = if let Some(side) = kind.fly_side() {
        let to = offscreen_position(&panel.layout, &canvas, side);
        let from = panel.layout.position;
        panel.position = from;
        panel.opacity = 1.0;
        Some(Track::Position { from, to })
    } else if kind.is_animated() {
        panel.opacity = 1.0;
        Some(Track::Opacity { from: 1.0, to: 0.0 })
    } else {
        None
    };

    match track {
        Some(track) => {
            model.animations.insert(Animation::new(
                id,
                Transition::Disappear,
                track,
                TRANSITION_SECONDS,
            ));
            model.gate.enter(id);
        }
        None => complete_disappear(model, id),
    }

    Some(Cmd::Redraw)
}

/// Finish an appear: snap to the resting state, arm auto-hide, notify
pub fn complete_appear(model: &mut PanelManager, id: PanelId) {
    model.gate.release(id);
    let now = model.clock.now();

    let Some(panel) = model.registry.get_mut(id) else {
        return;
    };
    panel.state = PanelState::Visible;
    panel.opacity = 1.0;
    panel.position = panel.layout.position;
    let hide_after = panel.hide_after;
    let event = PanelShown {
        panel: panel.snapshot(),
        at: now,
    };

    if let Some(seconds) = hide_after {
        model.timers.arm(id, now + seconds as f64);
        tracing::debug!(panel = %id, seconds, "auto-hide armed");
    }

    tracing::debug!(panel = %id, "shown");
    model.listeners.notify(&event);
}

/// Finish a disappear: fade/fly kinds end fully transparent, then deactivate
pub fn complete_disappear(model: &mut PanelManager, id: PanelId) {
    model.gate.release(id);

    let Some(panel) = model.registry.get_mut(id) else {
        return;
    };
    if panel.disappear.is_animated() {
        panel.opacity = 0.0;
    }
    panel.state = PanelState::Hidden;
    tracing::debug!(panel = %id, "hidden");
}

/// Drop the running animation for `id`, if any, and its gate hold
pub fn cancel_animation(model: &mut PanelManager, id: PanelId) -> Option<Animation> {
    let cancelled = model.animations.remove(id)?;
    model.gate.release(id);
    tracing::debug!(
        panel = %id,
        transition = ?cancelled.transition,
        elapsed = cancelled.elapsed,
        "animation superseded"
    );
    Some(cancelled)
}

/// Advance every running animation by `dt` real seconds
///
/// Finished animations are removed and their completion handlers run in
/// the order the animations were started.
pub fn step_animations(model: &mut PanelManager, dt: f32) -> Option<Cmd> {
    if model.animations.is_empty() {
        return None;
    }

    let mut finished = Vec::new();
    for animation in model.animations.iter_mut() {
        let done = animation.advance(dt);
        if let Some(panel) = model.registry.get_mut(animation.panel) {
            animation.apply(panel);
        }
        if done {
            finished.push((animation.panel, animation.transition));
        }
    }

    for (id, transition) in finished {
        model.animations.remove(id);
        match transition {
            Transition::Appear => complete_appear(model, id),
            Transition::Disappear => complete_disappear(model, id),
        }
    }

    Some(Cmd::Redraw)
}

/// Run every auto-hide whose deadline has passed on the game clock
pub fn fire_timers(model: &mut PanelManager) -> Option<Cmd> {
    let due = model.timers.take_due(model.clock.now());
    let cmds: Vec<_> = due
        .into_iter()
        .map(|id| {
            if model.state_of(id) == Some(PanelState::Hidden) {
                tracing::warn!(panel = %id, "auto-hide fired on hidden panel");
                return None;
            }
            tracing::debug!(panel = %id, "auto-hide");
            disappear(model, id)
        })
        .collect();
    Cmd::merge(cmds)
}
