//! Per-panel tables of in-flight work
//!
//! - `AnimationTable`: at most one running transition animation per panel
//! - `AutoHideTimers`: at most one pending auto-hide per panel
//!
//! Both are keyed by panel id so that a panel changing state for another
//! reason can drop its entry instead of leaving a stale continuation behind.

use std::collections::BTreeMap;

use crate::anim::{interpolate, interpolate_vec2, Vec2};
use crate::panel::{Panel, PanelId};

/// Which way a panel is heading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Appear,
    Disappear,
}

/// The property an animation drives
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Track {
    Opacity { from: f32, to: f32 },
    Position { from: Vec2, to: Vec2 },
}

/// A running transition for one panel
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    pub panel: PanelId,
    pub transition: Transition,
    pub track: Track,
    pub elapsed: f32,
    pub duration: f32,
}

impl Animation {
    pub fn new(panel: PanelId, transition: Transition, track: Track, duration: f32) -> Self {
        Self {
            panel,
            transition,
            track,
            elapsed: 0.0,
            duration,
        }
    }

    /// Advance by `dt`; true once the duration has elapsed
    pub fn advance(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        self.is_finished()
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Write the interpolated value for the current elapsed time
    pub fn apply(&self, panel: &mut Panel) {
        match self.track {
            Track::Opacity { from, to } => {
                panel.opacity = interpolate(from, to, self.elapsed, self.duration);
            }
            Track::Position { from, to } => {
                panel.position = interpolate_vec2(from, to, self.elapsed, self.duration);
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AnimationTable {
    active: Vec<Animation>,
}

impl AnimationTable {
    /// Start `animation`, replacing any running one for the same panel
    pub fn insert(&mut self, animation: Animation) -> Option<Animation> {
        let replaced = self.remove(animation.panel);
        self.active.push(animation);
        replaced
    }

    pub fn remove(&mut self, panel: PanelId) -> Option<Animation> {
        let index = self.active.iter().position(|a| a.panel == panel)?;
        Some(self.active.remove(index))
    }

    pub fn get(&self, panel: PanelId) -> Option<&Animation> {
        self.active.iter().find(|a| a.panel == panel)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Animation> {
        self.active.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Animation> {
        self.active.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

/// Pending auto-hide deadlines, in scaled game time
#[derive(Debug, Clone, Default)]
pub struct AutoHideTimers {
    due: BTreeMap<PanelId, f64>,
}

impl AutoHideTimers {
    /// Arm (or re-arm) the timer for `panel`
    pub fn arm(&mut self, panel: PanelId, at: f64) {
        self.due.insert(panel, at);
    }

    /// Drop the timer for `panel`; true if one was pending
    pub fn cancel(&mut self, panel: PanelId) -> bool {
        self.due.remove(&panel).is_some()
    }

    pub fn due_at(&self, panel: PanelId) -> Option<f64> {
        self.due.get(&panel).copied()
    }

    /// Remove and return every timer due at `now`, earliest first
    pub fn take_due(&mut self, now: f64) -> Vec<PanelId> {
        let mut fired: Vec<(f64, PanelId)> = self
            .due
            .iter()
            .filter(|(_, &at)| at <= now)
            .map(|(&panel, &at)| (at, panel))
            .collect();
        fired.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

        for (_, panel) in &fired {
            self.due.remove(panel);
        }
        fired.into_iter().map(|(_, panel)| panel).collect()
    }

    pub fn len(&self) -> usize {
        self.due.len()
    }

    pub fn is_empty(&self) -> bool {
        self.due.is_empty()
    }
}
