//! Control-click dispatch tests
//!
//! Shared toggle controls, paired show/hide controls with one-at-a-time
//! interactability, and exclusive-set activation.

mod common;

use common::*;
use panel_manager::config::{ControlConfig, ManagerConfig, PanelConfig};
use panel_manager::panel::{AppearKind, ControlId, PanelId, PanelState};

const SHOW: ControlId = ControlId(10);
const HIDE: ControlId = ControlId(11);

fn toggled_by(id: u32, control: ControlId) -> PanelConfig {
    PanelConfig {
        show_control: Some(control),
        hide_control: Some(control),
        ..hidden_panel(id)
    }
}

fn paired(id: u32, one_visible: bool) -> PanelConfig {
    PanelConfig {
        show_control: Some(SHOW),
        hide_control: Some(HIDE),
        one_control_visible_at_a_time: one_visible,
        ..hidden_panel(id)
    }
}

// ========================================================================
// Shared toggle control
// ========================================================================

#[test]
fn test_shared_control_toggles_every_bound_panel() {
    let mut model = test_manager(vec![
        toggled_by(1, SHOW),
        toggled_by(2, SHOW),
        hidden_panel(3),
    ]);

    model.click(SHOW);
    assert_eq!(state(&model, 1), PanelState::Visible);
    assert_eq!(state(&model, 2), PanelState::Visible);
    assert_eq!(state(&model, 3), PanelState::Hidden);

    model.click(SHOW);
    assert_eq!(state(&model, 1), PanelState::Hidden);
    assert_eq!(state(&model, 2), PanelState::Hidden);
}

#[test]
fn test_shared_control_ignores_gate() {
    let mut model = test_manager(vec![fading_panel(1), toggled_by(2, SHOW)]);
    model.show_panel(PanelId(1));
    assert!(model.is_transition_running());

    model.click(SHOW);
    assert_eq!(state(&model, 2), PanelState::Visible);
}

#[test]
fn test_toggle_mid_appear_hides() {
    let mut model = test_manager(vec![PanelConfig {
        show_control: Some(SHOW),
        ..fading_panel(1)
    }]);

    model.click(SHOW);
    advance(&mut model, 0.5);
    model.click(SHOW);

    assert_eq!(state(&model, 1), PanelState::Disappearing);
}

// ========================================================================
// Paired show/hide controls
// ========================================================================

#[test]
fn test_paired_controls_show_and_hide() {
    let mut model = test_manager(vec![paired(1, false)]);

    model.click(SHOW);
    assert_eq!(state(&model, 1), PanelState::Visible);

    model.click(SHOW);
    assert_eq!(state(&model, 1), PanelState::Visible);

    model.click(HIDE);
    assert_eq!(state(&model, 1), PanelState::Hidden);
}

#[test]
fn test_one_visible_pair_swaps_interactable() {
    let mut model = test_manager(vec![paired(1, true)]);
    assert!(model.controls.is_interactable(SHOW));
    assert!(!model.controls.is_interactable(HIDE));

    model.click(SHOW);
    assert_eq!(state(&model, 1), PanelState::Visible);
    assert!(!model.controls.is_interactable(SHOW));
    assert!(model.controls.is_interactable(HIDE));

    model.click(HIDE);
    assert_eq!(state(&model, 1), PanelState::Hidden);
    assert!(model.controls.is_interactable(SHOW));
    assert!(!model.controls.is_interactable(HIDE));
}

#[test]
fn test_disabled_control_click_dropped() {
    let mut model = test_manager(vec![PanelConfig {
        start_hidden: false,
        ..paired(1, true)
    }]);

    // Hide control starts disabled even though the panel is visible
    model.click(HIDE);
    assert_eq!(state(&model, 1), PanelState::Visible);
}

#[test]
fn test_paired_click_ignored_while_gate_busy() {
    let mut model = test_manager(vec![fading_panel(1), paired(2, true)]);
    model.show_panel(PanelId(1));

    assert_eq!(model.click(SHOW), None);
    assert_eq!(state(&model, 2), PanelState::Hidden);
    assert!(model.controls.is_interactable(SHOW));

    advance(&mut model, 1.0);
    model.click(SHOW);
    assert_eq!(state(&model, 2), PanelState::Visible);
}

#[test]
fn test_shared_show_control_starts_one_transition() {
    // The first panel's fade closes the gate before the second is reached
    let mut model = test_manager(vec![
        PanelConfig {
            show_control: Some(SHOW),
            hide_control: Some(HIDE),
            ..fading_panel(1)
        },
        PanelConfig {
            show_control: Some(SHOW),
            hide_control: Some(HIDE),
            ..fading_panel(2)
        },
    ]);

    model.click(SHOW);
    assert_eq!(state(&model, 1), PanelState::Appearing);
    assert_eq!(state(&model, 2), PanelState::Hidden);
    assert_eq!(model.gate.holders(), &[PanelId(1)]);
    assert_eq!(model.animations.len(), 1);

    advance(&mut model, 1.0);
    model.click(SHOW);
    assert_eq!(state(&model, 2), PanelState::Appearing);
}

#[test]
fn test_unbound_control_is_noop() {
    let mut model = test_manager(vec![hidden_panel(1)]);
    assert_eq!(model.click(ControlId(99)), None);
}

// ========================================================================
// Exclusive-set activation
// ========================================================================

#[test]
fn test_exclusive_set_ignores_group_flags() {
    let mut model = test_manager(vec![
        PanelConfig {
            not_influenced_by_group_key: true,
            ..panel(1)
        },
        PanelConfig {
            not_influenced_by_group_key: true,
            ..panel(2)
        },
        PanelConfig {
            not_influenced_by_group_key: true,
            ..hidden_panel(3)
        },
    ]);

    model.show_exclusive(vec![PanelId(3)]);

    assert_eq!(state(&model, 1), PanelState::Hidden);
    assert_eq!(state(&model, 2), PanelState::Hidden);
    assert_eq!(state(&model, 3), PanelState::Visible);
}

#[test]
fn test_exclusive_set_hides_constantly_visible() {
    let mut model = test_manager(vec![
        PanelConfig {
            constantly_visible: true,
            ..panel(1)
        },
        hidden_panel(2),
    ]);

    model.show_only(PanelId(2));

    assert_eq!(state(&model, 1), PanelState::Hidden);
    assert_eq!(state(&model, 2), PanelState::Visible);
}

#[test]
fn test_exclusive_set_runs_while_gate_busy() {
    let mut model = test_manager(vec![
        PanelConfig {
            appear: AppearKind::Fade,
            ..hidden_panel(1)
        },
        hidden_panel(2),
    ]);
    model.show_panel(PanelId(1));
    assert!(model.is_transition_running());

    model.show_only(PanelId(2));

    assert_eq!(state(&model, 1), PanelState::Hidden);
    assert_eq!(state(&model, 2), PanelState::Visible);
    assert!(!model.is_transition_running());
}

#[test]
fn test_exclusive_control_from_config() {
    let mut model = test_manager_with(ManagerConfig {
        panels: vec![panel(1), hidden_panel(2), hidden_panel(3)],
        controls: vec![ControlConfig {
            id: ControlId(20),
            name: "map tab".to_string(),
            exclusive: Some(vec![PanelId(2), PanelId(3)]),
        }],
        ..ManagerConfig::default()
    });

    model.click(ControlId(20));

    assert_eq!(state(&model, 1), PanelState::Hidden);
    assert_eq!(state(&model, 2), PanelState::Visible);
    assert_eq!(state(&model, 3), PanelState::Visible);
}
