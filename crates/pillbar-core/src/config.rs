use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::color::Rgba;
use crate::layout::PillStyle;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub indicator: IndicatorConfig,
    #[serde(default)]
    pub demo: DemoConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (logs of the interactive mode land here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Styleable indicator attributes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorConfig {
    /// Unselected pill color as a hex string (e.g., "#3fffffff")
    #[serde(default = "default_color")]
    pub color: String,
    /// Selected pill color as a hex string
    #[serde(default = "default_selected_color")]
    pub selected_color: String,
    /// Unselected pill width (also the pill height)
    #[serde(default = "default_width")]
    pub width: f32,
    /// Selected pill width
    #[serde(default = "default_selected_width")]
    pub selected_width: f32,
    /// Spacing between adjacent pills
    #[serde(default = "default_distance")]
    pub distance: f32,
    /// Corner radius; anything at or above half the pill height is fully rounded
    #[serde(default = "default_corner")]
    pub corner: f32,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            selected_color: default_selected_color(),
            width: default_width(),
            selected_width: default_selected_width(),
            distance: default_distance(),
            corner: default_corner(),
        }
    }
}

impl IndicatorConfig {
    /// Resolve the attributes into a drawable style
    ///
    /// Malformed colors are rejected; out-of-range dimensions are clamped.
    pub fn style(&self) -> crate::Result<PillStyle> {
        let base_color = Rgba::parse_hex(&self.color)
            .ok_or_else(|| crate::Error::InvalidColor(self.color.clone()))?;
        let selected_color = Rgba::parse_hex(&self.selected_color)
            .ok_or_else(|| crate::Error::InvalidColor(self.selected_color.clone()))?;

        Ok(PillStyle {
            pill_width: self.width,
            selected_pill_width: self.selected_width,
            gap: self.distance,
            corner_radius: self.corner,
            base_color,
            selected_color,
        }
        .sanitized())
    }
}

/// Settings for the interactive terminal demo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Number of simulated pages
    #[serde(default = "default_page_count")]
    pub page_count: usize,
    /// Page shown at startup
    #[serde(default = "default_initial_page")]
    pub initial_page: usize,
    /// Tick rate in milliseconds while nothing animates
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Fraction of a page moved per drag key press
    #[serde(default = "default_drag_step")]
    pub drag_step: f32,
    /// Indicator units covered by one terminal column
    #[serde(default = "default_cell_size")]
    pub cell_size: f32,
    /// Release animation
    #[serde(default)]
    pub settle: SettleConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            page_count: default_page_count(),
            initial_page: default_initial_page(),
            tick_rate_ms: default_tick_rate(),
            drag_step: default_drag_step(),
            cell_size: default_cell_size(),
            settle: SettleConfig::default(),
        }
    }
}

impl DemoConfig {
    /// Reject values the demo cannot run with
    pub fn validate(&self) -> crate::Result<()> {
        if !(self.drag_step.is_finite() && self.drag_step > 0.0 && self.drag_step <= 1.0) {
            return Err(crate::Error::Config(format!(
                "demo.drag_step must be in (0, 1], got {}",
                self.drag_step
            )));
        }
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(crate::Error::Config(format!(
                "demo.cell_size must be positive, got {}",
                self.cell_size
            )));
        }
        Ok(())
    }
}

/// Easing function type for the settle animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EasingType {
    /// No easing, jump to the end
    None,
    /// Linear interpolation
    Linear,
    /// Cubic ease-out (smooth deceleration)
    #[default]
    Cubic,
    /// Quintic ease-out (more pronounced deceleration)
    Quintic,
    /// Exponential ease-out
    EaseOut,
}

/// Settle animation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettleConfig {
    /// Enable the settle animation (disabled = snap straight to the page)
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Duration of a full-page settle in milliseconds
    #[serde(default = "default_settle_duration")]
    pub animation_duration_ms: u64,
    /// Easing curve
    #[serde(default)]
    pub easing: EasingType,
    /// Frame rate while settling
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for SettleConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_settle_duration(),
            easing: EasingType::default(),
            animation_fps: default_animation_fps(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pillbar")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_color() -> String {
    "#3fffffff".to_string()
}

fn default_selected_color() -> String {
    "#ffffffff".to_string()
}

fn default_width() -> f32 {
    20.0
}

fn default_selected_width() -> f32 {
    40.0
}

fn default_distance() -> f32 {
    20.0
}

fn default_corner() -> f32 {
    9999.0 // fully rounded
}

fn default_page_count() -> usize {
    9
}

fn default_initial_page() -> usize {
    2
}

fn default_tick_rate() -> u64 {
    100
}

fn default_drag_step() -> f32 {
    0.1
}

fn default_cell_size() -> f32 {
    10.0
}

fn default_true() -> bool {
    true
}

fn default_settle_duration() -> u64 {
    250
}

fn default_animation_fps() -> u32 {
    60
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, defaults when it does not exist
    pub fn load_from(path: &std::path::Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.demo.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &std::path::Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml()?)?;

        Ok(())
    }

    /// Render configuration as pretty TOML
    pub fn to_toml(&self) -> crate::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Get the configuration file path
    /// Always uses ~/.config/pillbar/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("pillbar")
            .join("config.toml")
    }

    /// Get the log file path used by the interactive mode
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("pillbar.log")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }
}
