use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::easing::EasingKind;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

/// Parameters of the heart animation. Immutable after construction;
/// the controller reads it, never writes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Final oscillation frequency the build phase ramps towards
    #[serde(default = "default_k_max")]
    pub k_max: f64,
    /// Redraw cadence while the animation is running
    #[serde(default = "default_fps")]
    pub fps: f64,
    /// Number of curve samples per frame
    #[serde(default = "default_points")]
    pub points: usize,
    /// Wall-clock seconds for the build phase at speed 1.0
    #[serde(default = "default_build_secs")]
    pub build_secs: f64,
    /// Easing applied to build progress
    #[serde(default)]
    pub easing: EasingKind,
    /// Base wave amplitude
    #[serde(default = "default_amplitude")]
    pub amplitude: f64,
    /// Amplitude swing of the post-completion breathing effect
    #[serde(default = "default_breathing_amplitude")]
    pub breathing_amplitude: f64,
    /// Period of one full breath, in seconds
    #[serde(default = "default_breathing_period")]
    pub breathing_period_secs: f64,
    /// Multiplier applied per speed-up/slow-down command
    #[serde(default = "default_speed_step")]
    pub speed_step: f64,
    /// Lower bound for the speed multiplier
    #[serde(default = "default_speed_min")]
    pub speed_min: f64,
    /// Upper bound for the speed multiplier
    #[serde(default = "default_speed_max")]
    pub speed_max: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            k_max: default_k_max(),
            fps: default_fps(),
            points: default_points(),
            build_secs: default_build_secs(),
            easing: EasingKind::default(),
            amplitude: default_amplitude(),
            breathing_amplitude: default_breathing_amplitude(),
            breathing_period_secs: default_breathing_period(),
            speed_step: default_speed_step(),
            speed_min: default_speed_min(),
            speed_max: default_speed_max(),
        }
    }
}

impl AnimationConfig {
    /// Reject configurations the controller cannot run with.
    /// Called once at startup; failure is fatal.
    pub fn validate(&self) -> Result<()> {
        if !self.k_max.is_finite() || self.k_max <= 0.0 {
            return Err(Error::Config(format!("k_max must be positive, got {}", self.k_max)));
        }
        if !self.fps.is_finite() || self.fps <= 0.0 {
            return Err(Error::Config(format!("fps must be positive, got {}", self.fps)));
        }
        if self.points < 2 {
            return Err(Error::Config(format!("points must be at least 2, got {}", self.points)));
        }
        if !self.build_secs.is_finite() || self.build_secs <= 0.0 {
            return Err(Error::Config(format!(
                "build_secs must be positive, got {}",
                self.build_secs
            )));
        }
        if !self.breathing_period_secs.is_finite() || self.breathing_period_secs <= 0.0 {
            return Err(Error::Config(format!(
                "breathing_period_secs must be positive, got {}",
                self.breathing_period_secs
            )));
        }
        if self.speed_step <= 1.0 || !self.speed_step.is_finite() {
            return Err(Error::Config(format!(
                "speed_step must be greater than 1, got {}",
                self.speed_step
            )));
        }
        if self.speed_min <= 0.0 || self.speed_max < self.speed_min {
            return Err(Error::Config(format!(
                "speed bounds must satisfy 0 < min <= max, got [{}, {}]",
                self.speed_min, self.speed_max
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Poll timeout in milliseconds while paused
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Redraw cadence for the start-screen pulse
    #[serde(default = "default_splash_fps")]
    pub splash_fps: f64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            splash_fps: default_splash_fps(),
        }
    }
}

/// Optional color overrides for the theme.
/// Each color is a hex string (e.g., "#ff1744" or "ff1744").
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Background
    pub bg: Option<String>,
    /// Core heart line
    pub heart: Option<String>,
    /// Glow layers around the heart line
    pub glow: Option<String>,
    /// Live k readout and completion message
    pub accent: Option<String>,
    /// Formula and regular text
    pub text: Option<String>,
    /// Dim hint text
    pub dim: Option<String>,
}

/// Keymap configuration using Vim-style notation
/// Format: "r", "<Space>", "<CR>" (Enter), "<Esc>", "<Up>", "<C-c>" (Ctrl+c)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Start the animation from the splash screen
    #[serde(default = "default_key_start")]
    pub start: String,
    /// Pause/resume toggle
    #[serde(default = "default_key_toggle_pause")]
    pub toggle_pause: String,
    /// Restart the animation from the beginning
    #[serde(default = "default_key_restart")]
    pub restart: String,
    /// Increase playback speed
    #[serde(default = "default_key_speed_up")]
    pub speed_up: String,
    /// Decrease playback speed
    #[serde(default = "default_key_speed_down")]
    pub speed_down: String,
    /// Quit the application
    #[serde(default = "default_key_quit")]
    pub quit: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            start: default_key_start(),
            toggle_pause: default_key_toggle_pause(),
            restart: default_key_restart(),
            speed_up: default_key_speed_up(),
            speed_down: default_key_speed_down(),
            quit: default_key_quit(),
        }
    }
}

// Default keymap values (Vim-style notation)
fn default_key_start() -> String { "<CR>".to_string() }
fn default_key_toggle_pause() -> String { "<Space>".to_string() }
fn default_key_restart() -> String { "r".to_string() }
fn default_key_speed_up() -> String { "<Up>".to_string() }
fn default_key_speed_down() -> String { "<Down>".to_string() }
fn default_key_quit() -> String { "q".to_string() }

fn default_k_max() -> f64 {
    50.0
}

fn default_fps() -> f64 {
    3.0
}

fn default_points() -> usize {
    3000
}

fn default_build_secs() -> f64 {
    30.0
}

fn default_amplitude() -> f64 {
    0.9
}

fn default_breathing_amplitude() -> f64 {
    0.035
}

fn default_breathing_period() -> f64 {
    6.0
}

fn default_speed_step() -> f64 {
    1.25
}

fn default_speed_min() -> f64 {
    0.25
}

fn default_speed_max() -> f64 {
    8.0
}

fn default_tick_rate() -> u64 {
    100
}

fn default_splash_fps() -> f64 {
    15.0
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            tracing::debug!("Loading config from {}", config_path.display());
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/valentine/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("valentine")
            .join("config.toml")
    }
}
