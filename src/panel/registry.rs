//! The fixed panel table
//!
//! Built once from configuration and never grown or shrunk afterwards. Order
//! is configuration order, which is also the index order individual hotkeys
//! are aligned with.

use std::collections::HashMap;

use super::record::{ControlId, Panel, PanelId};
use crate::config::ConfigError;

#[derive(Debug, Clone, Default)]
pub struct PanelRegistry {
    panels: Vec<Panel>,
    index: HashMap<PanelId, usize>,
}

impl PanelRegistry {
    /// Build the registry, rejecting duplicate ids
    pub fn new(panels: Vec<Panel>) -> Result<Self, ConfigError> {
        let mut index = HashMap::with_capacity(panels.len());
        for (i, panel) in panels.iter().enumerate() {
            if index.insert(panel.id, i).is_some() {
                return Err(ConfigError::DuplicatePanelId(panel.id));
            }
        }
        Ok(Self { panels, index })
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn contains(&self, id: PanelId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn get(&self, id: PanelId) -> Option<&Panel> {
        self.index.get(&id).map(|&i| &self.panels[i])
    }

    pub fn get_mut(&mut self, id: PanelId) -> Option<&mut Panel> {
        let i = *self.index.get(&id)?;
        self.panels.get_mut(i)
    }

    /// Panel at a configuration index (hotkey alignment)
    pub fn at(&self, index: usize) -> Option<&Panel> {
        self.panels.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Panel> {
        self.panels.iter()
    }

    /// All ids in configuration order
    pub fn ids(&self) -> Vec<PanelId> {
        self.panels.iter().map(|p| p.id).collect()
    }

    /// Every panel bound to `control`, in configuration order.
    ///
    /// Several panels may share one control; all of them are returned.
    pub fn by_control(&self, control: ControlId) -> Vec<PanelId> {
        self.panels
            .iter()
            .filter(|p| p.binding.binds(control))
            .map(|p| p.id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PanelConfig;

    fn panel(id: u32, show: Option<u32>, hide: Option<u32>) -> Panel {
        Panel::from_config(&PanelConfig {
            show_control: show.map(ControlId),
            hide_control: hide.map(ControlId),
            ..PanelConfig::new(id)
        })
        .unwrap()
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = PanelRegistry::new(vec![panel(1, None, None), panel(1, None, None)]);
        assert!(matches!(result, Err(ConfigError::DuplicatePanelId(PanelId(1)))));
    }

    #[test]
    fn test_lookup_by_id() {
        let registry = PanelRegistry::new(vec![panel(5, None, None), panel(9, None, None)]).unwrap();
        assert_eq!(registry.get(PanelId(9)).map(|p| p.id), Some(PanelId(9)));
        assert!(registry.get(PanelId(2)).is_none());
        assert_eq!(registry.at(0).map(|p| p.id), Some(PanelId(5)));
    }

    #[test]
    fn test_by_control_returns_all_matches() {
        let registry = PanelRegistry::new(vec![
            panel(1, Some(10), Some(10)),
            panel(2, Some(11), Some(10)),
            panel(3, Some(12), None),
        ])
        .unwrap();

        assert_eq!(registry.by_control(ControlId(10)), vec![PanelId(1), PanelId(2)]);
        assert_eq!(registry.by_control(ControlId(12)), vec![PanelId(3)]);
        assert!(registry.by_control(ControlId(99)).is_empty());
    }
}
