//! Dialog sequencing on top of a single dialog panel
//!
//! Lines are shown one at a time in the dialog panel. A line equal to
//! [`DIALOG_STOP_DELIMITER`] hides the panel instead, pausing the sequence
//! until the next advance. Running past the last line hides the panel.

use serde::{Deserialize, Serialize};

use crate::commands::Cmd;
use crate::model::PanelManager;
use crate::panel::PanelId;

/// A dialog line that hides the panel instead of displaying text
pub const DIALOG_STOP_DELIMITER: &str = "$";

/// Game-time delay before the first line is shown
pub const FIRST_DIALOG_DELAY_SECONDS: f64 = 1.5;

/// Dialog configuration, as it appears in script files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogScript {
    /// Panel that displays the dialog text
    pub panel: PanelId,
    pub lines: Vec<String>,
    /// Show the first line automatically after the start delay
    #[serde(default = "default_auto_start")]
    pub auto_start: bool,
}

fn default_auto_start() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq)]
pub struct DialogSequencer {
    panel: PanelId,
    lines: Vec<String>,
    next: usize,
    current: Option<String>,
    /// Game time at which the first line is shown automatically
    start_at: Option<f64>,
}

impl DialogSequencer {
    pub fn new(panel: PanelId, lines: Vec<String>) -> Self {
        Self {
            panel,
            lines,
            next: 0,
            current: None,
            start_at: None,
        }
    }

    pub fn from_script(script: &DialogScript, now: f64) -> Self {
        let mut sequencer = Self::new(script.panel, script.lines.clone());
        if script.auto_start {
            sequencer.start_at = Some(now + FIRST_DIALOG_DELAY_SECONDS);
        }
        sequencer
    }

    /// Text currently displayed in the dialog panel
    pub fn current_text(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn panel(&self) -> PanelId {
        self.panel
    }

    /// Index of the next line to display
    pub fn position(&self) -> usize {
        self.next
    }

    pub fn is_finished(&self) -> bool {
        self.next >= self.lines.len()
    }

    /// Show the first line once the start delay has elapsed on the game clock
    pub fn tick(&mut self, manager: &mut PanelManager) -> Option<Cmd> {
        let at = self.start_at?;
        if manager.now() < at {
            return None;
        }
        self.start_at = None;
        self.display_next(manager)
    }

    /// Advance to the next dialog line
    pub fn display_next(&mut self, manager: &mut PanelManager) -> Option<Cmd> {
        let Some(line) = self.lines.get(self.next) else {
            tracing::debug!(panel = %self.panel, "dialog finished");
            self.current = None;
            return manager.hide_panel(self.panel);
        };

        let cmd = if line == DIALOG_STOP_DELIMITER {
            tracing::debug!(panel = %self.panel, line = self.next, "dialog paused");
            self.current = None;
            manager.hide_panel(self.panel)
        } else {
            tracing::debug!(panel = %self.panel, line = self.next, text = %line, "dialog line");
            self.current = Some(line.clone());
            manager.show_panel(self.panel)
        };
        self.next += 1;
        cmd
    }
}
