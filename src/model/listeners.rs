//! "Panel shown" notification fan-out
//!
//! Listeners run synchronously, in subscription order, over a snapshot of the
//! subscriber list taken when the notification starts.

use serde::Serialize;
use std::fmt;
use std::rc::Rc;

use crate::panel::PanelSnapshot;

/// Delivered to listeners when a panel finishes appearing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelShown {
    pub panel: PanelSnapshot,
    /// Scaled game time of completion
    pub at: f64,
}

pub type ShownListener = Rc<dyn Fn(&PanelShown)>;

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Default)]
pub struct ShownListeners {
    next_id: u64,
    entries: Vec<(ListenerId, ShownListener)>,
}

impl fmt::Debug for ShownListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShownListeners")
            .field("count", &self.entries.len())
            .finish()
    }
}

impl ShownListeners {
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: Fn(&PanelShown) + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Rc::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub fn notify(&self, event: &PanelShown) {
        let snapshot: Vec<ShownListener> = self.entries.iter().map(|(_, l)| Rc::clone(l)).collect();
        for listener in snapshot {
            listener(event);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
