//! Scripted event files for headless runs
//!
//! ```yaml
//! dialog:
//!   panel: 4
//!   lines: ["Hello there", "$", "Back again"]
//! events:
//!   - { at: 0.5, do: keys, keys: [tab] }
//!   - { at: 2.0, do: click, control: 10 }
//!   - { at: 3.0, do: show_only, panel: 2 }
//! ```
//!
//! Event times are in real (unscaled) seconds since the run started.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::dialog::DialogScript;
use crate::keymap::{parse_key_string, Keystroke};
use crate::messages::{ControlMsg, GroupMsg, Msg, PanelMsg};
use crate::panel::{ControlId, PanelId};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub dialog: Option<DialogScript>,
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptEvent {
    pub at: f64,
    #[serde(flatten)]
    pub action: ScriptAction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "do", rename_all = "snake_case")]
pub enum ScriptAction {
    /// Keys pressed together in one frame
    Keys { keys: Vec<String> },
    Click { control: ControlId },
    Show { panel: PanelId },
    Hide { panel: PanelId },
    ShowOnly { panel: PanelId },
    ShowExclusive { panels: Vec<PanelId> },
    ShowAll,
    HideAll,
    ToggleGroup,
    /// Advance the dialog sequence
    NextDialog,
}

/// A script action resolved into something the simulation can apply
#[derive(Debug, Clone, PartialEq)]
pub enum Scheduled {
    Msg(Msg),
    NextDialog,
}

impl ScriptAction {
    pub fn resolve(&self) -> Result<Scheduled> {
        let msg = match self {
            ScriptAction::Keys { keys } => {
                let strokes = keys
                    .iter()
                    .map(|k| parse_key_string(k))
                    .collect::<Result<Vec<Keystroke>, _>>()?;
                Msg::keys(strokes)
            }
            ScriptAction::Click { control } => Msg::Control(ControlMsg::Clicked(*control)),
            ScriptAction::Show { panel } => Msg::Panel(PanelMsg::Show(*panel)),
            ScriptAction::Hide { panel } => Msg::Panel(PanelMsg::Hide(*panel)),
            ScriptAction::ShowOnly { panel } => Msg::Control(ControlMsg::ShowOnly(*panel)),
            ScriptAction::ShowExclusive { panels } => {
                Msg::Control(ControlMsg::ShowExclusive(panels.clone()))
            }
            ScriptAction::ShowAll => Msg::Group(GroupMsg::ShowAll),
            ScriptAction::HideAll => Msg::Group(GroupMsg::HideAll),
            ScriptAction::ToggleGroup => Msg::Group(GroupMsg::Toggle),
            ScriptAction::NextDialog => return Ok(Scheduled::NextDialog),
        };
        Ok(Scheduled::Msg(msg))
    }
}

impl Script {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let script: Script = serde_yaml::from_str(yaml).context("invalid script")?;
        if let Some(bad) = script.events.iter().find(|e| !e.at.is_finite() || e.at < 0.0) {
            anyhow::bail!("event time must be a non-negative number, got {}", bad.at);
        }
        Ok(script)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read script {}", path.display()))?;
        let script = Self::from_yaml(&content)
            .with_context(|| format!("failed to parse script {}", path.display()))?;
        tracing::info!(events = script.events.len(), "Loaded script from {}", path.display());
        Ok(script)
    }

    /// Events resolved to messages, ordered by time (stable for equal times)
    pub fn schedule(&self) -> Result<Vec<(f64, Scheduled)>> {
        let mut out = self
            .events
            .iter()
            .map(|e| {
                e.action
                    .resolve()
                    .with_context(|| format!("bad event at t={}", e.at))
                    .map(|s| (e.at, s))
            })
            .collect::<Result<Vec<_>>>()?;
        out.sort_by(|a, b| a.0.total_cmp(&b.0));
        Ok(out)
    }
}
