//! The global transition gate
//!
//! One latch for the whole manager. While any panel is mid-animation the gate
//! reports busy, and gate-respecting dispatch paths (hotkeys, paired show/hide
//! controls) refuse to start anything new. Group operations and scripted calls
//! enter the gate unconditionally, so several panels may hold it at once; it
//! only reopens when the last holder releases.

use crate::panel::PanelId;

#[derive(Debug, Clone, Default)]
pub struct TransitionGate {
    holders: Vec<PanelId>,
}

impl TransitionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while any transition is in flight
    #[inline]
    pub fn is_busy(&self) -> bool {
        !self.holders.is_empty()
    }

    /// Take the gate for `panel` only if nothing else holds it
    pub fn try_acquire(&mut self, panel: PanelId) -> bool {
        if self.is_busy() {
            return false;
        }
        self.holders.push(panel);
        true
    }

    /// Take the gate for `panel` regardless of other holders
    pub fn enter(&mut self, panel: PanelId) {
        if !self.holders.contains(&panel) {
            self.holders.push(panel);
        }
    }

    /// Drop `panel`'s hold. Returns false if it held nothing.
    pub fn release(&mut self, panel: PanelId) -> bool {
        let before = self.holders.len();
        self.holders.retain(|p| *p != panel);
        self.holders.len() != before
    }

    pub fn holders(&self) -> &[PanelId] {
        &self.holders
    }
}
