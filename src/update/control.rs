//! Control-click dispatch
//!
//! Three shapes of click:
//! - a control shared for show and hide toggles every panel bound to it
//! - a distinct show or hide control drives its panels, gate permitting
//! - an exclusive control sets the exact visible set

use super::transition::{appear, disappear};
use crate::commands::Cmd;
use crate::messages::ControlMsg;
use crate::model::PanelManager;
use crate::panel::{ControlId, ControlRole, PanelId};

/// Handle control messages
pub fn update_control(model: &mut PanelManager, msg: ControlMsg) -> Option<Cmd> {
    match msg {
        ControlMsg::Clicked(control) => click(model, control),
        ControlMsg::ShowExclusive(ids) => show_exclusive(model, &ids),
        ControlMsg::ShowOnly(id) => show_exclusive(model, &[id]),
    }
}

/// Route a click on `control` to every panel bound to it
pub fn click(model: &mut PanelManager, control: ControlId) -> Option<Cmd> {
    if !model.controls.is_interactable(control) {
        tracing::debug!(%control, "click on disabled control dropped");
        return None;
    }

    if let Some(ids) = model.controls.exclusive_set(control) {
        let ids = ids.to_vec();
        return show_exclusive(model, &ids);
    }

    let targets = model.registry.by_control(control);
    if targets.is_empty() {
        tracing::debug!(%control, "click on unbound control");
        return None;
    }

    let mut cmds = Vec::with_capacity(targets.len());
    for id in targets {
        let Some(panel) = model.registry.get(id) else {
            continue;
        };
        let (active, binding) = (panel.is_active(), panel.binding);
        let Some(role) = binding.role_of(control) else {
            continue;
        };

        match role {
            ControlRole::Toggle => {
                cmds.push(if active {
                    disappear(model, id)
                } else {
                    appear(model, id)
                });
            }
            ControlRole::Show | ControlRole::Hide => {
                // Checked per panel: an animated transition started for an
                // earlier panel on this control closes the gate for the rest
                if model.gate.is_busy() {
                    tracing::debug!(panel = %id, %control, "click ignored, transition running");
                    continue;
                }
                cmds.push(if role == ControlRole::Show {
                    appear(model, id)
                } else {
                    disappear(model, id)
                });
                if let Some(other) = binding.antagonist(control) {
                    model.controls.set_interactable(control, false);
                    model.controls.set_interactable(other, true);
                }
            }
        }
    }

    Cmd::merge(cmds)
}

/// Show exactly `ids` and hide every other panel
///
/// Bypasses group policy, constant visibility and the gate.
pub fn show_exclusive(model: &mut PanelManager, ids: &[PanelId]) -> Option<Cmd> {
    tracing::debug!(?ids, "exclusive set");
    let all = model.registry.ids();
    let cmds: Vec<_> = all
        .into_iter()
        .map(|id| {
            if ids.contains(&id) {
                appear(model, id)
            } else {
                disappear(model, id)
            }
        })
        .collect();
    Cmd::merge(cmds)
}
