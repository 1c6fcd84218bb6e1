//! Panel record, identifiers and policy enums

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::anim::{Layout, Side, Vec2};
use crate::config::{ConfigError, PanelConfig};

/// Stable panel identifier, unique across the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PanelId(pub u32);

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "panel#{}", self.0)
    }
}

/// Stable identifier of a clickable control (button)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ControlId(pub u32);

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "control#{}", self.0)
    }
}

/// How a panel comes on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppearKind {
    #[default]
    None,
    Fade,
    FlyLeft,
    FlyTop,
    FlyRight,
    FlyBottom,
}

impl AppearKind {
    /// Edge the panel flies in from, for fly kinds
    pub fn fly_side(self) -> Option<Side> {
        match self {
            AppearKind::FlyLeft => Some(Side::Left),
            AppearKind::FlyTop => Some(Side::Top),
            AppearKind::FlyRight => Some(Side::Right),
            AppearKind::FlyBottom => Some(Side::Bottom),
            AppearKind::None | AppearKind::Fade => None,
        }
    }

    pub fn is_animated(self) -> bool {
        self != AppearKind::None
    }
}

/// How a panel leaves the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisappearKind {
    #[default]
    None,
    Fade,
    FlyLeft,
    FlyTop,
    FlyRight,
    FlyBottom,
}

impl DisappearKind {
    /// Edge the panel flies away to, for fly kinds
    pub fn fly_side(self) -> Option<Side> {
        match self {
            DisappearKind::FlyLeft => Some(Side::Left),
            DisappearKind::FlyTop => Some(Side::Top),
            DisappearKind::FlyRight => Some(Side::Right),
            DisappearKind::FlyBottom => Some(Side::Bottom),
            DisappearKind::None | DisappearKind::Fade => None,
        }
    }

    pub fn is_animated(self) -> bool {
        self != DisappearKind::None
    }
}

/// Where a panel is in its show/hide lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelState {
    Hidden,
    Appearing,
    Visible,
    Disappearing,
}

impl PanelState {
    /// Whether the underlying surface is activated (everything but `Hidden`)
    #[inline]
    pub fn is_active(self) -> bool {
        self != PanelState::Hidden
    }
}

impl fmt::Display for PanelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PanelState::Hidden => "hidden",
            PanelState::Appearing => "appearing",
            PanelState::Visible => "visible",
            PanelState::Disappearing => "disappearing",
        };
        f.write_str(name)
    }
}

/// Whether hide requests may take the panel off screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisibilityPolicy {
    #[default]
    Toggleable,
    /// Never hidden by group or individual hotkeys; never animated
    ConstantlyVisible,
}

/// How the group key (show all / hide all) treats a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupPolicy {
    /// Shown by show-all and hidden by hide-all
    #[default]
    Full,
    /// Only hidden by hide-all
    HideOnly,
    /// Ignored by both
    Ignored,
}

impl GroupPolicy {
    /// Build from the two configuration flags; `not_influenced` wins
    pub fn from_flags(not_influenced: bool, only_hidden: bool) -> Self {
        if not_influenced {
            GroupPolicy::Ignored
        } else if only_hidden {
            GroupPolicy::HideOnly
        } else {
            GroupPolicy::Full
        }
    }

    #[inline]
    pub fn shown_by_group(self) -> bool {
        self == GroupPolicy::Full
    }

    #[inline]
    pub fn hidden_by_group(self) -> bool {
        self != GroupPolicy::Ignored
    }
}

/// Role a clicked control plays for a particular panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlRole {
    Toggle,
    Show,
    Hide,
}

/// Which controls show and hide a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlBinding {
    #[default]
    Unbound,
    /// One control both shows and hides
    Toggle(ControlId),
    /// Distinct show and hide controls
    Paired {
        show: ControlId,
        hide: ControlId,
        /// Only one of the pair is interactable at a time
        one_visible: bool,
    },
}

impl ControlBinding {
    /// Resolve the binding from configured controls.
    ///
    /// A lone control, or the same control for both roles, is a toggle.
    /// `one_visible` requires two distinct controls.
    pub fn from_controls(
        show: Option<ControlId>,
        hide: Option<ControlId>,
        one_visible: bool,
    ) -> Result<Self, String> {
        let binding = match (show, hide) {
            (None, None) => ControlBinding::Unbound,
            (Some(show), Some(hide)) if show != hide => {
                return Ok(ControlBinding::Paired {
                    show,
                    hide,
                    one_visible,
                })
            }
            (Some(c), _) | (None, Some(c)) => ControlBinding::Toggle(c),
        };

        if one_visible {
            return Err(
                "one control visible at a time needs distinct show and hide controls".to_string(),
            );
        }
        Ok(binding)
    }

    /// The role `control` plays in this binding, if any
    pub fn role_of(&self, control: ControlId) -> Option<ControlRole> {
        match *self {
            ControlBinding::Unbound => None,
            ControlBinding::Toggle(c) if c == control => Some(ControlRole::Toggle),
            ControlBinding::Paired { show, .. } if show == control => Some(ControlRole::Show),
            ControlBinding::Paired { hide, .. } if hide == control => Some(ControlRole::Hide),
            _ => None,
        }
    }

    pub fn binds(&self, control: ControlId) -> bool {
        self.role_of(control).is_some()
    }

    /// The other control of a one-visible pair
    pub fn antagonist(&self, control: ControlId) -> Option<ControlId> {
        match *self {
            ControlBinding::Paired {
                show,
                hide,
                one_visible: true,
            } => {
                if control == show {
                    Some(hide)
                } else if control == hide {
                    Some(show)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Every control referenced by this binding
    pub fn controls(&self) -> Vec<ControlId> {
        match *self {
            ControlBinding::Unbound => vec![],
            ControlBinding::Toggle(c) => vec![c],
            ControlBinding::Paired { show, hide, .. } => vec![show, hide],
        }
    }
}

/// A managed panel: fixed configuration plus live visual state
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub id: PanelId,
    pub name: String,
    pub state: PanelState,
    pub visibility: VisibilityPolicy,
    pub group: GroupPolicy,
    pub render_above_everything: bool,
    pub pause_on_show: bool,
    pub appear: AppearKind,
    pub disappear: DisappearKind,
    pub binding: ControlBinding,
    /// Auto-hide delay armed on every completed appear
    pub hide_after: Option<f32>,
    pub layout: Layout,
    /// Current anchored position
    pub position: Vec2,
    /// Current opacity in `[0, 1]`
    pub opacity: f32,
}

impl Panel {
    /// Build a panel record from configuration, validating it
    pub fn from_config(cfg: &PanelConfig) -> Result<Self, ConfigError> {
        let visibility = if cfg.constantly_visible {
            VisibilityPolicy::ConstantlyVisible
        } else {
            VisibilityPolicy::Toggleable
        };

        let (appear, disappear) = match visibility {
            VisibilityPolicy::ConstantlyVisible => (AppearKind::None, DisappearKind::None),
            VisibilityPolicy::Toggleable => (cfg.appear, cfg.disappear),
        };

        let binding = ControlBinding::from_controls(
            cfg.show_control,
            cfg.hide_control,
            cfg.one_control_visible_at_a_time,
        )
        .map_err(|reason| ConfigError::InvalidBinding {
            panel: cfg.id,
            reason,
        })?;

        if let Some(secs) = cfg.hide_after_seconds {
            if !secs.is_finite() || secs < 0.0 {
                return Err(ConfigError::InvalidTimer {
                    panel: cfg.id,
                    seconds: secs,
                });
            }
        }

        let flies = appear.fly_side().is_some() || disappear.fly_side().is_some();
        let layout = match cfg.layout {
            Some(layout) => {
                for anchor in [layout.anchor_max.x, layout.anchor_max.y] {
                    if !(0.0..=1.0).contains(&anchor) {
                        return Err(ConfigError::InvalidAnchor {
                            panel: cfg.id,
                            anchor,
                        });
                    }
                }
                layout
            }
            None if flies => return Err(ConfigError::MissingLayout(cfg.id)),
            None => Layout::default(),
        };

        let state = if cfg.start_hidden {
            PanelState::Hidden
        } else {
            PanelState::Visible
        };

        // Hidden fade-in panels wait at zero; anything on screen is opaque.
        let opacity = if state == PanelState::Hidden && appear == AppearKind::Fade {
            0.0
        } else {
            1.0
        };

        Ok(Self {
            id: cfg.id,
            name: cfg.name.clone(),
            state,
            visibility,
            group: GroupPolicy::from_flags(
                cfg.not_influenced_by_group_key,
                cfg.only_hidden_by_group_key,
            ),
            render_above_everything: cfg.render_above_everything,
            pause_on_show: cfg.pause_on_show,
            appear,
            disappear,
            binding,
            hide_after: cfg.hide_after_seconds,
            layout,
            position: layout.position,
            opacity,
        })
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    #[inline]
    pub fn is_constantly_visible(&self) -> bool {
        self.visibility == VisibilityPolicy::ConstantlyVisible
    }

    /// Display label used in logs
    pub fn label(&self) -> String {
        if self.name.is_empty() {
            self.id.to_string()
        } else {
            format!("{} ({})", self.id, self.name)
        }
    }

    pub fn snapshot(&self) -> PanelSnapshot {
        PanelSnapshot {
            id: self.id,
            name: self.name.clone(),
            state: self.state,
            visibility: self.visibility,
            group: self.group,
            render_above_everything: self.render_above_everything,
            pause_on_show: self.pause_on_show,
            appear: self.appear,
            disappear: self.disappear,
            binding: self.binding,
            hide_after_seconds: self.hide_after,
            layout: self.layout,
            position: self.position,
            opacity: self.opacity,
        }
    }
}

/// Owned copy of a panel's configuration and state, handed to listeners
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelSnapshot {
    pub id: PanelId,
    pub name: String,
    pub state: PanelState,
    pub visibility: VisibilityPolicy,
    pub group: GroupPolicy,
    pub render_above_everything: bool,
    pub pause_on_show: bool,
    pub appear: AppearKind,
    pub disappear: DisappearKind,
    pub binding: ControlBinding,
    pub hide_after_seconds: Option<f32>,
    pub layout: Layout,
    pub position: Vec2,
    pub opacity: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_policy_from_flags() {
        assert_eq!(GroupPolicy::from_flags(false, false), GroupPolicy::Full);
        assert_eq!(GroupPolicy::from_flags(false, true), GroupPolicy::HideOnly);
        assert_eq!(GroupPolicy::from_flags(true, true), GroupPolicy::Ignored);
        assert!(!GroupPolicy::HideOnly.shown_by_group());
        assert!(GroupPolicy::HideOnly.hidden_by_group());
    }

    #[test]
    fn test_binding_same_control_is_toggle() {
        let b = ControlBinding::from_controls(Some(ControlId(4)), Some(ControlId(4)), false);
        assert_eq!(b, Ok(ControlBinding::Toggle(ControlId(4))));
    }

    #[test]
    fn test_binding_one_visible_requires_distinct_controls() {
        assert!(ControlBinding::from_controls(Some(ControlId(4)), Some(ControlId(4)), true).is_err());
        assert!(ControlBinding::from_controls(Some(ControlId(4)), None, true).is_err());
        assert!(ControlBinding::from_controls(None, None, true).is_err());
    }

    #[test]
    fn test_binding_roles_and_antagonist() {
        let b = ControlBinding::from_controls(Some(ControlId(1)), Some(ControlId(2)), true).unwrap();
        assert_eq!(b.role_of(ControlId(1)), Some(ControlRole::Show));
        assert_eq!(b.role_of(ControlId(2)), Some(ControlRole::Hide));
        assert_eq!(b.role_of(ControlId(3)), None);
        assert_eq!(b.antagonist(ControlId(1)), Some(ControlId(2)));
        assert_eq!(b.antagonist(ControlId(2)), Some(ControlId(1)));
    }

    #[test]
    fn test_constantly_visible_forces_no_animation() {
        let cfg = PanelConfig {
            constantly_visible: true,
            appear: AppearKind::Fade,
            disappear: DisappearKind::FlyLeft,
            ..PanelConfig::new(1)
        };
        let panel = Panel::from_config(&cfg).unwrap();
        assert_eq!(panel.appear, AppearKind::None);
        assert_eq!(panel.disappear, DisappearKind::None);
    }

    #[test]
    fn test_fly_without_layout_is_rejected() {
        let cfg = PanelConfig {
            appear: AppearKind::FlyTop,
            ..PanelConfig::new(7)
        };
        assert!(matches!(
            Panel::from_config(&cfg),
            Err(ConfigError::MissingLayout(PanelId(7)))
        ));
    }

    #[test]
    fn test_hidden_fade_panel_starts_transparent() {
        let cfg = PanelConfig {
            appear: AppearKind::Fade,
            start_hidden: true,
            ..PanelConfig::new(2)
        };
        let panel = Panel::from_config(&cfg).unwrap();
        assert_eq!(panel.state, PanelState::Hidden);
        assert_eq!(panel.opacity, 0.0);
    }
}
