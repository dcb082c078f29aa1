//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`WHEEL_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use wheel_core::{
    Segments, SpinParams, WheelError, DEFAULT_DECAY, DEFAULT_LABELS, DEFAULT_MAX_SPEED,
    DEFAULT_MIN_SPEED, DEFAULT_STOP_THRESHOLD,
};
use wheel_render::{Rgba8, WheelStyle};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Wheel labels and spin tuning
    #[serde(default)]
    pub wheel: WheelConfig,
    /// Tick timing
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// On-screen text
    #[serde(default)]
    pub ui: UiConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`WHEEL_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Optional
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // WHEEL_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("WHEEL_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Glücksrad Edith".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Wheel configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    /// Segment labels, clockwise from the +x axis
    pub segments: Vec<String>,
    /// Lower bound of the initial speed (radians per tick)
    pub min_speed: f64,
    /// Upper bound of the initial speed (radians per tick)
    pub max_speed: f64,
    /// Per-tick speed multiplier, in (0, 1)
    pub decay: f64,
    /// Speed below which the wheel stops
    pub stop_threshold: f64,
    /// Fixed RNG seed for reproducible spins
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            segments: DEFAULT_LABELS.iter().map(|s| s.to_string()).collect(),
            min_speed: DEFAULT_MIN_SPEED,
            max_speed: DEFAULT_MAX_SPEED,
            decay: DEFAULT_DECAY,
            stop_threshold: DEFAULT_STOP_THRESHOLD,
            seed: None,
        }
    }
}

impl WheelConfig {
    /// Validate into spin parameters
    pub fn to_spin_params(&self) -> Result<SpinParams, WheelError> {
        SpinParams::new(self.decay, self.stop_threshold, self.min_speed, self.max_speed)
    }

    /// Validate into a segment list
    pub fn to_segments(&self) -> Result<Segments, WheelError> {
        Segments::new(self.segments.iter().cloned())
    }
}

/// Simulation timing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Fixed simulation ticks per second
    pub tick_rate: u32,
    /// Longest frame time fed to the accumulator, in seconds
    pub max_frame_time: f32,
    /// Hard cap on ticks run in a single frame
    pub max_ticks_per_frame: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_rate: 60,
            max_frame_time: 0.25,
            max_ticks_per_frame: 8,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [u8; 4],
    /// Rim and divider color [r, g, b, a]
    pub wheel_color: [u8; 4],
    /// Pointer color [r, g, b, a]
    pub pointer_color: [u8; 4],
    /// Text color [r, g, b, a]
    pub text_color: [u8; 4],
    /// Color of the bars around the scaled frame [r, g, b, a]
    pub letterbox_color: [u8; 4],
    /// Straight segments used for the rim
    pub circle_steps: u32,
    /// Show the angle readout
    pub show_angle: bool,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [30, 30, 30, 255],
            wheel_color: [139, 90, 43, 255],
            pointer_color: [245, 222, 156, 255],
            text_color: [255, 255, 255, 255],
            letterbox_color: [0, 0, 0, 255],
            circle_steps: 64,
            show_angle: true,
        }
    }
}

impl RenderingConfig {
    /// Convert to the renderer's style
    pub fn to_style(&self) -> WheelStyle {
        WheelStyle {
            background: Rgba8::from_array(self.background_color),
            wheel: Rgba8::from_array(self.wheel_color),
            pointer: Rgba8::from_array(self.pointer_color),
            text: Rgba8::from_array(self.text_color),
            circle_steps: self.circle_steps,
            show_angle: self.show_angle,
        }
    }
}

/// On-screen text configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Hint shown until the first spin; empty disables it
    pub tutorial_text: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tutorial_text: "SPACE drücken!".to_string(),
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
