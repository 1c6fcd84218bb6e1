//! Group key and per-panel individual keys

use super::types::{KeyCode, Keystroke};

/// Hotkeys recognized by the panel manager
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelKeymap {
    /// Toggles show-all / hide-all
    pub group_key: Option<Keystroke>,
    /// Slot `i` toggles the panel at registry index `i`
    pub individual: Vec<Option<Keystroke>>,
}

impl Default for PanelKeymap {
    fn default() -> Self {
        Self {
            group_key: Some(Keystroke::key(KeyCode::Tab)),
            individual: Vec::new(),
        }
    }
}

impl PanelKeymap {
    pub fn new(group_key: Option<Keystroke>, individual: Vec<Option<Keystroke>>) -> Self {
        Self {
            group_key,
            individual,
        }
    }

    /// Grow with empty slots or truncate from the tail to match `panel_count`
    pub fn resize_to(&mut self, panel_count: usize) {
        let len = self.individual.len();
        if len != panel_count {
            tracing::debug!(
                from = len,
                to = panel_count,
                "Resizing individual key list to match panel count"
            );
            self.individual.resize(panel_count, None);
        }
    }

    /// Whether the group key is among this tick's pressed keys
    pub fn group_pressed(&self, pressed: &[Keystroke]) -> bool {
        self.group_key.is_some_and(|k| pressed.contains(&k))
    }

    /// Registry indices whose individual key was pressed this tick
    pub fn individual_pressed(&self, pressed: &[Keystroke]) -> Vec<usize> {
        self.individual
            .iter()
            .enumerate()
            .filter_map(|(i, key)| match key {
                Some(k) if pressed.contains(k) => Some(i),
                _ => None,
            })
            .collect()
    }
}
