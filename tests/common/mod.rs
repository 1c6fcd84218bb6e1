//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.
//!
//! Ticks use a 0.25s step so animation progress and timer deadlines land on
//! exact binary fractions.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use panel_manager::anim::{Layout, Vec2};
use panel_manager::config::{ManagerConfig, PanelConfig};
use panel_manager::model::PanelManager;
use panel_manager::panel::{AppearKind, DisappearKind, PanelId, PanelState};

pub const STEP: f32 = 0.25;

/// Panel config with defaults, starting visible
pub fn panel(id: u32) -> PanelConfig {
    PanelConfig::new(id)
}

/// Panel config with defaults, starting hidden
pub fn hidden_panel(id: u32) -> PanelConfig {
    PanelConfig {
        start_hidden: true,
        ..PanelConfig::new(id)
    }
}

/// Hidden panel that fades in and out
pub fn fading_panel(id: u32) -> PanelConfig {
    PanelConfig {
        appear: AppearKind::Fade,
        disappear: DisappearKind::Fade,
        ..hidden_panel(id)
    }
}

/// A 400x200 panel resting at (100, 50), anchored bottom-left
pub fn test_layout() -> Layout {
    Layout {
        position: Vec2::new(100.0, 50.0),
        size: Vec2::new(400.0, 200.0),
        anchor_max: Vec2::new(0.0, 0.0),
    }
}

/// Build a manager without running the startup group pass
pub fn test_manager(panels: Vec<PanelConfig>) -> PanelManager {
    test_manager_with(ManagerConfig {
        panels,
        ..ManagerConfig::default()
    })
}

pub fn test_manager_with(config: ManagerConfig) -> PanelManager {
    PanelManager::from_config(&config).expect("test config should be valid")
}

/// Tick in `STEP` increments for `seconds`
pub fn advance(model: &mut PanelManager, seconds: f32) {
    let steps = (seconds / STEP).round() as usize;
    for _ in 0..steps {
        model.tick(STEP);
    }
}

pub fn state(model: &PanelManager, id: u32) -> PanelState {
    model
        .state_of(PanelId(id))
        .unwrap_or_else(|| panic!("panel {} not registered", id))
}

pub fn opacity(model: &PanelManager, id: u32) -> f32 {
    model.panel(PanelId(id)).expect("panel registered").opacity
}

pub fn position(model: &PanelManager, id: u32) -> Vec2 {
    model.panel(PanelId(id)).expect("panel registered").position
}

/// Record the id of every panel shown from now on
pub fn record_shown(model: &mut PanelManager) -> Rc<RefCell<Vec<PanelId>>> {
    let shown = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&shown);
    model.subscribe_shown(move |event| sink.borrow_mut().push(event.panel.id));
    shown
}
