//! Panel records and the fixed registry that owns them
//!
//! This module defines what a managed panel *is*: its identity, its policy
//! (how group keys and hide requests treat it), its animation kinds and its
//! control bindings. Nothing in here animates; see `update::transition`.
//!
//! ## Architecture
//!
//! - `PanelId` / `ControlId`: stable identifiers assigned in configuration
//! - `Panel`: one managed UI surface plus its live state (state, opacity, position)
//! - `PanelRegistry`: the session-long table of panels, in configuration order
//! - `ControlRegistry`: interactable flags and exclusive sets for clickable controls

mod controls;
mod record;
mod registry;

pub use controls::{Control, ControlRegistry};
pub use record::{
    AppearKind, ControlBinding, ControlId, ControlRole, DisappearKind, GroupPolicy, Panel,
    PanelId, PanelSnapshot, PanelState, VisibilityPolicy,
};
pub use registry::PanelRegistry;
