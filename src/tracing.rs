//! Logging setup and panel state diffs
//!
//! Debug builds log one line per message under the `message` target and a
//! state diff under `panels` whenever a panel changes state, the gate gains
//! or loses a holder, or the clock pauses. Useful filters:
//! - `RUST_LOG=panels=debug` follows transitions only
//! - `RUST_LOG=panel_manager::update=trace` adds ignored show/hide requests

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::PanelManager;
use crate::panel::{PanelId, PanelState};

/// Install the global subscriber for the simulator binary
///
/// Stdout carries simulation events (JSON lines with `--json`), so console
/// logs go to stderr at `warn` unless RUST_LOG says otherwise. A debug-level
/// copy goes to a daily file under [`crate::config_paths::logs_dir`].
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "panel-manager.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("panel-manager: file logging disabled: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of panel states and the gate for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct PanelsSnapshot {
    pub states: Vec<(PanelId, PanelState)>,
    pub gate_holders: usize,
    pub paused: bool,
}

impl PanelsSnapshot {
    pub fn from_model(model: &PanelManager) -> Self {
        Self {
            states: model.registry.iter().map(|p| (p.id, p.state)).collect(),
            gate_holders: model.gate.holders().len(),
            paused: model.is_paused(),
        }
    }

    /// Generate a diff description between two snapshots
    ///
    /// Opacity and position are left out; they change on every animated tick.
    pub fn diff(&self, other: &PanelsSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        for ((id, before), (_, after)) in self.states.iter().zip(&other.states) {
            if before != after {
                changes.push(format!("{}: {} → {}", id, before, after));
            }
        }
        if self.gate_holders != other.gate_holders {
            changes.push(format!(
                "gate: {} → {} holders",
                self.gate_holders, other.gate_holders
            ));
        }
        if self.paused != other.paused {
            let status = if other.paused { "paused" } else { "running" };
            changes.push(format!("clock {}", status));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
