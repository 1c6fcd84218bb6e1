//! Panel manager configuration
//!
//! Loaded from YAML, by default `~/.config/panel-manager/panels.yaml`.
//! Every recognized per-panel option maps onto a field of [`PanelConfig`];
//! the flags are turned into policy enums when the registry is built.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::anim::{Canvas, Layout, Vec2};
use crate::keymap::{parse_key_string, KeymapError, PanelKeymap};
use crate::panel::{AppearKind, ControlId, DisappearKind, PanelId};

/// Root of a panel configuration file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagerConfig {
    /// Defaults to a 1920x1080 canvas with a matching scaler
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Run hide-all at startup instead of show-all
    #[serde(default)]
    pub hide_all_on_start: bool,

    /// Pause the clock once the group key has shown everything
    #[serde(default)]
    pub pause_on_group_show: bool,

    /// Key toggling show-all / hide-all (e.g. "tab")
    #[serde(default = "default_group_key")]
    pub group_key: Option<String>,

    /// Enable per-panel individual keys
    #[serde(default)]
    pub set_key_calls: bool,

    /// Individual keys, index-aligned with `panels`
    #[serde(default)]
    pub individual_keys: Vec<Option<String>>,

    #[serde(default)]
    pub cursor_change_on_hover: bool,

    /// Cursor shown while the group is visible
    #[serde(default)]
    pub cursor_over_panel: Option<String>,

    #[serde(default)]
    pub panels: Vec<PanelConfig>,

    #[serde(default)]
    pub controls: Vec<ControlConfig>,
}

fn default_group_key() -> Option<String> {
    Some("tab".to_string())
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig::default(),
            hide_all_on_start: false,
            pause_on_group_show: false,
            group_key: default_group_key(),
            set_key_calls: false,
            individual_keys: Vec::new(),
            cursor_change_on_hover: false,
            cursor_over_panel: None,
            panels: Vec::new(),
            controls: Vec::new(),
        }
    }
}

/// The container panels are laid out in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasConfig {
    pub width: f32,
    pub height: f32,
    /// Scaler reference resolution; required
    #[serde(default)]
    pub reference_resolution: Option<Vec2>,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 1920.0,
            height: 1080.0,
            reference_resolution: Some(Vec2::new(1920.0, 1080.0)),
        }
    }
}

impl CanvasConfig {
    /// Validate and convert into a [`Canvas`]
    pub fn to_canvas(&self) -> Result<Canvas, ConfigError> {
        if !(self.width.is_finite() && self.width > 0.0)
            || !(self.height.is_finite() && self.height > 0.0)
        {
            return Err(ConfigError::InvalidCanvas(format!(
                "canvas must have a positive size, got {}x{}",
                self.width, self.height
            )));
        }

        let reference = self
            .reference_resolution
            .ok_or(ConfigError::MissingScaler)?;
        if reference.x <= 0.0 || reference.y <= 0.0 {
            return Err(ConfigError::InvalidCanvas(format!(
                "reference resolution must be positive, got {}",
                reference
            )));
        }

        Ok(Canvas {
            width: self.width,
            height: self.height,
            reference_resolution: reference,
        })
    }
}

/// Configuration of one managed panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    pub id: PanelId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub constantly_visible: bool,
    #[serde(default)]
    pub render_above_everything: bool,
    #[serde(default)]
    pub not_influenced_by_group_key: bool,
    #[serde(default)]
    pub only_hidden_by_group_key: bool,
    #[serde(default)]
    pub pause_on_show: bool,
    #[serde(default)]
    pub appear: AppearKind,
    #[serde(default)]
    pub disappear: DisappearKind,
    #[serde(default)]
    pub show_control: Option<ControlId>,
    #[serde(default)]
    pub hide_control: Option<ControlId>,
    #[serde(default)]
    pub one_control_visible_at_a_time: bool,
    #[serde(default)]
    pub hide_after_seconds: Option<f32>,
    /// Required when either transition flies
    #[serde(default)]
    pub layout: Option<Layout>,
    /// Start deactivated instead of on screen
    #[serde(default)]
    pub start_hidden: bool,
}

impl PanelConfig {
    /// A panel with every option at its default
    pub fn new(id: u32) -> Self {
        Self {
            id: PanelId(id),
            name: String::new(),
            constantly_visible: false,
            render_above_everything: false,
            not_influenced_by_group_key: false,
            only_hidden_by_group_key: false,
            pause_on_show: false,
            appear: AppearKind::None,
            disappear: DisappearKind::None,
            show_control: None,
            hide_control: None,
            one_control_visible_at_a_time: false,
            hide_after_seconds: None,
            layout: None,
            start_hidden: false,
        }
    }
}

/// A clickable control
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlConfig {
    pub id: ControlId,
    #[serde(default)]
    pub name: String,
    /// Panels left visible (all others hidden) when clicked
    #[serde(default)]
    pub exclusive: Option<Vec<PanelId>>,
}

impl ManagerConfig {
    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_yaml(&content)?;
        tracing::info!(
            panels = config.panels.len(),
            "Loaded panel config from {}",
            path.display()
        );
        Ok(config)
    }

    /// Load from the default location, or return defaults if missing or broken
    pub fn load_or_default() -> Self {
        let Some(path) = crate::config_paths::panels_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Panel config not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load panel config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse the configured hotkeys, sizing individual keys to the panel list
    pub fn keymap(&self) -> Result<PanelKeymap, ConfigError> {
        let group_key = self
            .group_key
            .as_deref()
            .map(parse_key_string)
            .transpose()?;

        let individual = if self.set_key_calls {
            self.individual_keys
                .iter()
                .map(|key| key.as_deref().map(parse_key_string).transpose())
                .collect::<Result<Vec<_>, _>>()?
        } else {
            Vec::new()
        };

        let mut keymap = PanelKeymap::new(group_key, individual);
        keymap.resize_to(self.panels.len());
        Ok(keymap)
    }
}

/// Errors raised while building a panel manager from configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Io(String),
    Parse(String),
    InvalidCanvas(String),
    MissingScaler,
    DuplicatePanelId(PanelId),
    DuplicateControlId(ControlId),
    MissingLayout(PanelId),
    InvalidAnchor { panel: PanelId, anchor: f32 },
    InvalidBinding { panel: PanelId, reason: String },
    InvalidTimer { panel: PanelId, seconds: f32 },
    UnknownPanel { control: ControlId, panel: PanelId },
    InvalidKey(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::InvalidCanvas(e) => write!(f, "Invalid canvas: {}", e),
            ConfigError::MissingScaler => write!(
                f,
                "Canvas has no scaler reference resolution; set canvas.reference_resolution"
            ),
            ConfigError::DuplicatePanelId(id) => write!(f, "Duplicate panel id: {}", id.0),
            ConfigError::DuplicateControlId(id) => write!(f, "Duplicate control id: {}", id.0),
            ConfigError::MissingLayout(id) => {
                write!(f, "Panel {} flies in or out but has no layout", id.0)
            }
            ConfigError::InvalidAnchor { panel, anchor } => {
                write!(f, "Panel {} has anchor {} outside [0, 1]", panel.0, anchor)
            }
            ConfigError::InvalidBinding { panel, reason } => {
                write!(f, "Panel {} has an invalid control binding: {}", panel.0, reason)
            }
            ConfigError::InvalidTimer { panel, seconds } => {
                write!(f, "Panel {} has invalid hide_after_seconds {}", panel.0, seconds)
            }
            ConfigError::UnknownPanel { control, panel } => write!(
                f,
                "Control {} references unknown panel {}",
                control.0, panel.0
            ),
            ConfigError::InvalidKey(e) => write!(f, "Invalid key: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<KeymapError> for ConfigError {
    fn from(e: KeymapError) -> Self {
        match e {
            KeymapError::InvalidKey(k) => ConfigError::InvalidKey(k),
        }
    }
}
