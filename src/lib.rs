//! Panel Manager - show/hide orchestration for animated UI panels
//!
//! This crate provides the panel state machine, its transition engine and
//! the group/control/hotkey dispatch on top of it, implementing the Elm
//! Architecture pattern.

pub mod anim;
pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod dialog;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod panel;
pub mod runtime;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::{ConfigError, ManagerConfig};
pub use messages::Msg;
pub use model::{PanelManager, PanelShown};
pub use panel::{ControlId, PanelId, PanelState};
pub use update::update;
