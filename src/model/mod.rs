//! Panel manager model - the complete orchestration state
//!
//! `PanelManager` is the context object every dispatch and transition
//! function receives. It owns the panel table, the transition gate, the
//! per-panel animation and timer tables, and the game clock; nothing here is
//! process-global.

pub mod clock;
pub mod listeners;
pub mod schedule;

pub use clock::GameClock;
pub use listeners::{ListenerId, PanelShown, ShownListener, ShownListeners};
pub use schedule::{Animation, AnimationTable, AutoHideTimers, Track, Transition};

use crate::anim::{Canvas, TransitionGate};
use crate::config::{ConfigError, ManagerConfig};
use crate::keymap::PanelKeymap;
use crate::panel::{
    Control, ControlBinding, ControlRegistry, Panel, PanelId, PanelRegistry, PanelState,
};

/// Manager-wide behavior switches captured from configuration
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ManagerSettings {
    /// Run `hide_all` instead of `show_all` when the manager starts
    pub hide_all_on_start: bool,
    /// Pause the game clock after the group key shows every panel
    pub pause_on_group_show: bool,
    /// Emit cursor changes on group show/hide
    pub cursor_change_on_hover: bool,
    /// Cursor image name used while the panel group is shown
    pub cursor_over_panel: Option<String>,
}

impl ManagerSettings {
    pub fn from_config(config: &ManagerConfig) -> Self {
        Self {
            hide_all_on_start: config.hide_all_on_start,
            pause_on_group_show: config.pause_on_group_show,
            cursor_change_on_hover: config.cursor_change_on_hover,
            cursor_over_panel: config.cursor_over_panel.clone(),
        }
    }
}

/// The panel orchestration context
#[derive(Debug)]
pub struct PanelManager {
    /// Fixed panel table, in configuration order
    pub registry: PanelRegistry,
    /// Clickable controls and their interactable flags
    pub controls: ControlRegistry,
    /// Global "a transition is running" latch
    pub gate: TransitionGate,
    /// Running animations, at most one per panel
    pub animations: AnimationTable,
    /// Pending auto-hide deadlines, at most one per panel
    pub timers: AutoHideTimers,
    pub clock: GameClock,
    pub keymap: PanelKeymap,
    pub canvas: Canvas,
    pub settings: ManagerSettings,
    /// Set by `show_all`, cleared by `hide_all`
    pub group_visible: bool,
    /// A pause waiting for the gate to clear
    pub pending_pause: bool,
    /// Back-to-front draw order
    pub draw_order: Vec<PanelId>,
    pub listeners: ShownListeners,
}

impl PanelManager {
    /// Build a manager from configuration
    ///
    /// Validation happens up front: on error nothing is returned, so a
    /// half-initialized manager never exists. The startup group pass is not
    /// run here; call [`PanelManager::start`] once listeners are attached.
    pub fn from_config(config: &ManagerConfig) -> Result<Self, ConfigError> {
        let canvas = config.canvas.to_canvas()?;

        let panels = config
            .panels
            .iter()
            .map(Panel::from_config)
            .collect::<Result<Vec<_>, _>>()?;
        let registry = PanelRegistry::new(panels)?;
        let keymap = config.keymap()?;

        let mut controls = ControlRegistry::new();
        for cfg in &config.controls {
            if controls.get(cfg.id).is_some() {
                return Err(ConfigError::DuplicateControlId(cfg.id));
            }
            if let Some(ids) = &cfg.exclusive {
                if let Some(missing) = ids.iter().find(|id| !registry.contains(**id)) {
                    return Err(ConfigError::UnknownPanel {
                        control: cfg.id,
                        panel: *missing,
                    });
                }
            }
            controls.insert(Control {
                id: cfg.id,
                name: cfg.name.clone(),
                interactable: true,
                exclusive: cfg.exclusive.clone(),
            });
        }

        for panel in registry.iter() {
            for control in panel.binding.controls() {
                controls.ensure(control);
            }
            // One-at-a-time pairs start with only the show control usable
            if let ControlBinding::Paired {
                hide,
                one_visible: true,
                ..
            } = panel.binding
            {
                controls.set_interactable(hide, false);
            }
        }

        let draw_order = registry.ids();

        tracing::info!(
            panels = registry.len(),
            controls = controls.iter().count(),
            "Panel manager initialized"
        );

        Ok(Self {
            registry,
            controls,
            gate: TransitionGate::new(),
            animations: AnimationTable::default(),
            timers: AutoHideTimers::default(),
            clock: GameClock::new(),
            keymap,
            canvas,
            settings: ManagerSettings::from_config(config),
            group_visible: false,
            pending_pause: false,
            draw_order,
            listeners: ShownListeners::default(),
        })
    }

    pub fn panel(&self, id: PanelId) -> Option<&Panel> {
        self.registry.get(id)
    }

    pub fn state_of(&self, id: PanelId) -> Option<PanelState> {
        self.registry.get(id).map(|p| p.state)
    }

    /// True while any panel holds the transition gate
    #[inline]
    pub fn is_transition_running(&self) -> bool {
        self.gate.is_busy()
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.clock.is_paused()
    }

    /// Scaled game time
    #[inline]
    pub fn now(&self) -> f64 {
        self.clock.now()
    }

    /// Register a "panel shown" listener
    pub fn subscribe_shown<F>(&mut self, listener: F) -> ListenerId
    where
        F: Fn(&PanelShown) + 'static,
    {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe_shown(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Move `id` to the top of the draw order
    pub fn raise(&mut self, id: PanelId) {
        if let Some(index) = self.draw_order.iter().position(|p| *p == id) {
            let panel = self.draw_order.remove(index);
            self.draw_order.push(panel);
        }
    }

    /// Ids of panels that are active (anything but hidden)
    pub fn active_panels(&self) -> Vec<PanelId> {
        self.registry
            .iter()
            .filter(|p| p.is_active())
            .map(|p| p.id)
            .collect()
    }
}
