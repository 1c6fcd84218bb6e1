//! Clickable controls and their interactable state

use std::collections::BTreeMap;

use super::record::{ControlId, PanelId};

/// A clickable control known to the manager
#[derive(Debug, Clone, PartialEq)]
pub struct Control {
    pub id: ControlId,
    pub name: String,
    pub interactable: bool,
    /// Clicking shows exactly these panels and hides every other one
    pub exclusive: Option<Vec<PanelId>>,
}

impl Control {
    pub fn new(id: ControlId) -> Self {
        Self {
            id,
            name: String::new(),
            interactable: true,
            exclusive: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ControlRegistry {
    controls: BTreeMap<ControlId, Control>,
}

impl ControlRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, control: Control) {
        self.controls.insert(control.id, control);
    }

    /// Register `id` with defaults unless already known
    pub fn ensure(&mut self, id: ControlId) {
        self.controls.entry(id).or_insert_with(|| Control::new(id));
    }

    pub fn get(&self, id: ControlId) -> Option<&Control> {
        self.controls.get(&id)
    }

    /// Unknown controls are treated as interactable
    pub fn is_interactable(&self, id: ControlId) -> bool {
        self.controls.get(&id).map_or(true, |c| c.interactable)
    }

    pub fn set_interactable(&mut self, id: ControlId, interactable: bool) {
        self.controls
            .entry(id)
            .or_insert_with(|| Control::new(id))
            .interactable = interactable;
    }

    pub fn exclusive_set(&self, id: ControlId) -> Option<&[PanelId]> {
        self.controls.get(&id)?.exclusive.as_deref()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Control> {
        self.controls.values()
    }
}
