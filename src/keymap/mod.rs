//! Hotkeys for the panel manager
//!
//! Two kinds of keys are recognized:
//! - the group key, which toggles show-all / hide-all
//! - one optional individual key per panel, index-aligned with the registry
//!
//! # Architecture
//!
//! ```text
//! "shift+i" → parse_key_string() → Keystroke → PanelKeymap::*_pressed() → Msg
//! ```
//!
//! The host polls its input device and reports the keystrokes pressed this
//! tick; nothing here talks to a real keyboard.

mod panel_keymap;
mod parse;
mod types;

pub use panel_keymap::PanelKeymap;
pub use parse::{parse_key_string, KeymapError};
pub use types::{KeyCode, Keystroke, Modifiers};
