//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod control;
mod group;
mod input;
mod tick;
pub mod transition;

use crate::commands::Cmd;
use crate::keymap::Keystroke;
use crate::messages::{ControlMsg, GroupMsg, Msg, PanelMsg};
use crate::model::PanelManager;
use crate::panel::{ControlId, PanelId};

#[cfg(debug_assertions)]
use crate::tracing::PanelsSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use control::{click, show_exclusive, update_control};
pub use group::{
    apply_pending_pause, hide_all, request_pause, resume, show_all, toggle_group, update_group,
};
pub use input::{press_keys, update_input};
pub use tick::tick;
pub use transition::{appear, disappear};

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut PanelManager, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut PanelManager, msg: Msg) -> Option<Cmd> {
    #[cfg(feature = "profile-tracing")]
    let _span = tracing::trace_span!("update").entered();

    match msg {
        Msg::Panel(PanelMsg::Show(id)) => transition::appear(model, id),
        Msg::Panel(PanelMsg::Hide(id)) => transition::disappear(model, id),
        Msg::Group(m) => group::update_group(model, m),
        Msg::Control(m) => control::update_control(model, m),
        Msg::Input(m) => input::update_input(model, m),
        Msg::Tick(dt) => tick::tick(model, dt),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after panel states and logs diffs for debugging.
/// Ticks are only logged when they change a panel's state.
#[cfg(debug_assertions)]
fn update_traced(model: &mut PanelManager, msg: Msg) -> Option<Cmd> {
    let is_noisy = matches!(&msg, Msg::Tick(_));

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = PanelsSnapshot::from_model(model);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    let after = PanelsSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "panels", msg = %msg_name, %diff, "state changed");
    }

    result
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Panel::Show(PanelId(3))`
/// - `Control::Clicked(ControlId(7))`
/// - `Tick(0.016)`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Panel(m) => format!("Panel::{:?}", m),
        Msg::Group(m) => format!("Group::{:?}", m),
        Msg::Control(m) => format!("Control::{:?}", m),
        Msg::Input(m) => format!("Input::{:?}", m),
        Msg::Tick(dt) => format!("Tick({})", dt),
    }
}

/// Direct-call API for game code that does not build messages itself
impl PanelManager {
    /// Run the startup group pass: hide everything or show everything
    pub fn start(&mut self) -> Option<Cmd> {
        let msg = if self.settings.hide_all_on_start {
            GroupMsg::HideAll
        } else {
            GroupMsg::ShowAll
        };
        tracing::info!(?msg, "starting panel manager");
        update(self, Msg::Group(msg))
    }

    /// Show one panel, regardless of the gate
    pub fn show_panel(&mut self, id: PanelId) -> Option<Cmd> {
        update(self, Msg::Panel(PanelMsg::Show(id)))
    }

    /// Hide one panel, regardless of the gate or constant visibility
    pub fn hide_panel(&mut self, id: PanelId) -> Option<Cmd> {
        update(self, Msg::Panel(PanelMsg::Hide(id)))
    }

    pub fn show_all(&mut self) -> Option<Cmd> {
        update(self, Msg::Group(GroupMsg::ShowAll))
    }

    pub fn hide_all(&mut self) -> Option<Cmd> {
        update(self, Msg::Group(GroupMsg::HideAll))
    }

    pub fn toggle_group(&mut self) -> Option<Cmd> {
        update(self, Msg::Group(GroupMsg::Toggle))
    }

    pub fn click(&mut self, control: ControlId) -> Option<Cmd> {
        update(self, Msg::Control(ControlMsg::Clicked(control)))
    }

    /// Show exactly `ids`, hide everything else
    pub fn show_exclusive(&mut self, ids: Vec<PanelId>) -> Option<Cmd> {
        update(self, Msg::Control(ControlMsg::ShowExclusive(ids)))
    }

    /// Show exactly `id`, hide everything else
    pub fn show_only(&mut self, id: PanelId) -> Option<Cmd> {
        update(self, Msg::Control(ControlMsg::ShowOnly(id)))
    }

    pub fn press_keys(&mut self, keys: Vec<Keystroke>) -> Option<Cmd> {
        update(self, Msg::keys(keys))
    }

    pub fn tick(&mut self, dt: f32) -> Option<Cmd> {
        update(self, Msg::Tick(dt))
    }
}
