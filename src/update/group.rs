//! Group-key dispatch and pause handling

use super::transition::{appear, disappear};
use crate::commands::Cmd;
use crate::messages::GroupMsg;
use crate::model::PanelManager;
use crate::panel::PanelId;

/// Handle group messages
pub fn update_group(model: &mut PanelManager, msg: GroupMsg) -> Option<Cmd> {
    match msg {
        GroupMsg::ShowAll => show_all(model),
        GroupMsg::HideAll => hide_all(model),
        GroupMsg::Toggle => toggle_group(model),
    }
}

/// Show every panel the group key fully controls
pub fn show_all(model: &mut PanelManager) -> Option<Cmd> {
    let mut cmds = Vec::new();
    if model.settings.cursor_change_on_hover {
        cmds.push(Some(Cmd::SetCursor(model.settings.cursor_over_panel.clone())));
    }

    let targets: Vec<PanelId> = model
        .registry
        .iter()
        .filter(|p| p.group.shown_by_group())
        .map(|p| p.id)
        .collect();
    tracing::debug!(count = targets.len(), "show all");
    for id in targets {
        cmds.push(appear(model, id));
    }

    model.group_visible = true;
    Cmd::merge(cmds)
}

/// Hide every panel the group key may hide, except constantly visible ones
pub fn hide_all(model: &mut PanelManager) -> Option<Cmd> {
    let mut cmds = vec![Some(Cmd::SetCursor(None))];

    let targets: Vec<PanelId> = model
        .registry
        .iter()
        .filter(|p| !p.is_constantly_visible() && p.group.hidden_by_group())
        .map(|p| p.id)
        .collect();
    tracing::debug!(count = targets.len(), "hide all");
    for id in targets {
        cmds.push(disappear(model, id));
    }

    model.group_visible = false;
    Cmd::merge(cmds)
}

/// What the group key does
///
/// Showing may queue a pause for when the gate clears; hiding undoes it
/// immediately.
pub fn toggle_group(model: &mut PanelManager) -> Option<Cmd> {
    let pause_on_show = model.settings.pause_on_group_show;

    if model.group_visible {
        let hidden = hide_all(model);
        let resumed = if pause_on_show && (model.is_paused() || model.pending_pause) {
            resume(model)
        } else {
            None
        };
        Cmd::merge([hidden, resumed])
    } else {
        let shown = show_all(model);
        let paused = if pause_on_show && !model.is_paused() {
            request_pause(model)
        } else {
            None
        };
        Cmd::merge([shown, paused])
    }
}

/// Pause now if no transition is running, otherwise once the gate clears
pub fn request_pause(model: &mut PanelManager) -> Option<Cmd> {
    if model.gate.is_busy() {
        tracing::debug!("pause deferred until transitions finish");
        model.pending_pause = true;
        return None;
    }
    pause_now(model)
}

/// Apply a deferred pause once the gate is idle
pub fn apply_pending_pause(model: &mut PanelManager) -> Option<Cmd> {
    if !model.pending_pause || model.gate.is_busy() {
        return None;
    }
    model.pending_pause = false;
    pause_now(model)
}

/// Resume the game clock, dropping any deferred pause
pub fn resume(model: &mut PanelManager) -> Option<Cmd> {
    model.pending_pause = false;
    if !model.clock.is_paused() {
        return None;
    }
    model.clock.resume();
    tracing::info!("game resumed");
    Some(Cmd::SetTimeScale(1.0))
}

fn pause_now(model: &mut PanelManager) -> Option<Cmd> {
    if model.clock.is_paused() {
        return None;
    }
    model.clock.pause();
    tracing::info!("game paused");
    Some(Cmd::SetTimeScale(0.0))
}
