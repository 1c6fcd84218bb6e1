//! Message types for the Elm-style architecture
//!
//! Every external trigger (hotkey, control click, scripted call, frame tick)
//! reaches the manager as one of these.

use crate::keymap::Keystroke;
use crate::panel::{ControlId, PanelId};

/// Single-panel requests (scripted show/hide by id)
#[derive(Debug, Clone, PartialEq)]
pub enum PanelMsg {
    /// Show the panel, bypassing the gate
    Show(PanelId),
    /// Hide the panel, bypassing the gate
    Hide(PanelId),
}

/// Group-key behavior
#[derive(Debug, Clone, PartialEq)]
pub enum GroupMsg {
    /// Show every panel the group key shows
    ShowAll,
    /// Hide every panel the group key hides
    HideAll,
    /// What the group key does: hide if shown, show otherwise
    Toggle,
}

/// Control activation
#[derive(Debug, Clone, PartialEq)]
pub enum ControlMsg {
    /// A control was clicked
    Clicked(ControlId),
    /// Show exactly these panels, hide the rest
    ShowExclusive(Vec<PanelId>),
    /// Show exactly this panel, hide the rest
    ShowOnly(PanelId),
}

/// Input device events
#[derive(Debug, Clone, PartialEq)]
pub enum InputMsg {
    /// Keys pressed down during this frame
    KeysPressed(Vec<Keystroke>),
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Panel(PanelMsg),
    Group(GroupMsg),
    Control(ControlMsg),
    Input(InputMsg),
    /// Advance time by this many real seconds
    Tick(f32),
}

// Convenience constructors for common messages
impl Msg {
    pub fn show(id: PanelId) -> Self {
        Msg::Panel(PanelMsg::Show(id))
    }

    pub fn hide(id: PanelId) -> Self {
        Msg::Panel(PanelMsg::Hide(id))
    }

    pub fn click(control: ControlId) -> Self {
        Msg::Control(ControlMsg::Clicked(control))
    }

    pub fn keys(pressed: Vec<Keystroke>) -> Self {
        Msg::Input(InputMsg::KeysPressed(pressed))
    }
}
