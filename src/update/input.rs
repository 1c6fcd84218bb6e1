//! Hotkey dispatch

use super::group::{request_pause, resume, toggle_group};
use super::transition::{appear, disappear};
use crate::commands::Cmd;
use crate::keymap::Keystroke;
use crate::messages::InputMsg;
use crate::model::PanelManager;

/// Handle input messages
pub fn update_input(model: &mut PanelManager, msg: InputMsg) -> Option<Cmd> {
    match msg {
        InputMsg::KeysPressed(keys) => press_keys(model, &keys),
    }
}

/// Process the keys pressed this frame
///
/// Nothing happens while a transition is running. Otherwise individual panel
/// keys are handled first, then the group key.
pub fn press_keys(model: &mut PanelManager, pressed: &[Keystroke]) -> Option<Cmd> {
    if pressed.is_empty() {
        return None;
    }
    if model.gate.is_busy() {
        tracing::trace!("hotkeys suppressed, transition running");
        return None;
    }

    let mut cmds = Vec::new();

    for index in model.keymap.individual_pressed(pressed) {
        let Some(panel) = model.registry.at(index) else {
            continue;
        };
        let (id, pause_on_show) = (panel.id, panel.pause_on_show);
        let (active, constantly_visible) = (panel.is_active(), panel.is_constantly_visible());

        if !active {
            cmds.push(appear(model, id));
            if pause_on_show {
                cmds.push(request_pause(model));
            }
        } else if !constantly_visible {
            cmds.push(disappear(model, id));
            if pause_on_show {
                cmds.push(resume(model));
            }
        }
    }

    if model.keymap.group_pressed(pressed) {
        cmds.push(toggle_group(model));
    }

    Cmd::merge(cmds)
}
