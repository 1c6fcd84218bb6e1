//! Frame tick

use super::group::apply_pending_pause;
use super::transition::{fire_timers, step_animations};
use crate::commands::Cmd;
use crate::model::PanelManager;

/// Advance time by `dt` real seconds
///
/// Animations run on real time so panels keep moving while the game is
/// paused. Auto-hide deadlines run on game time and freeze with it.
pub fn tick(model: &mut PanelManager, dt: f32) -> Option<Cmd> {
    if !dt.is_finite() || dt <= 0.0 {
        return None;
    }

    model.clock.advance(dt);

    let animated = step_animations(model, dt);
    let timers = fire_timers(model);
    let paused = apply_pending_pause(model);

    Cmd::merge([animated, timers, paused])
}
