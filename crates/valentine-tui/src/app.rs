use std::f64::consts::TAU;

use tracing::warn;
use valentine_core::{AnimationController, AppConfig, Command, FrameSample, Phase};

use crate::theme::Theme;

/// Application state: the animation controller plus presentation-only
/// state (splash pulse, status message, last drawn frame).
pub struct App {
    /// Application configuration
    pub config: AppConfig,
    /// Animation controller; owns all playback state
    pub controller: AnimationController,
    /// Runtime theme
    pub theme: Theme,
    /// Most recent frame emitted by the controller, redrawn while paused
    pub frame: Option<FrameSample>,
    /// Seconds into the splash pulse, advanced while idle
    pub splash_phase: f64,
    /// Status message shown in the status bar
    pub status_message: Option<String>,
}

/// Period of the start-button glow pulse, in seconds
const SPLASH_PULSE_SECS: f64 = 2.0;

impl App {
    pub fn new(config: AppConfig, theme: Theme) -> Self {
        let controller = AnimationController::new(config.animation.clone());
        Self {
            config,
            controller,
            theme,
            frame: None,
            splash_phase: 0.0,
            status_message: None,
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.controller.phase()
    }

    pub fn should_quit(&self) -> bool {
        self.controller.should_quit()
    }

    /// Advance the animation by `dt` seconds.
    ///
    /// A rejected tick delta is logged and skipped; the previous frame
    /// stays on screen.
    pub fn on_tick(&mut self, dt: f64) {
        if self.phase() == Phase::Idle {
            self.splash_phase = (self.splash_phase + dt) % SPLASH_PULSE_SECS;
        }
        match self.controller.tick(dt) {
            Ok(Some(frame)) => self.frame = Some(frame),
            Ok(None) => {}
            Err(e) => warn!("Ignoring tick: {}", e),
        }
    }

    /// Intensity of the splash glow pulse in [0, 1]
    pub fn splash_pulse(&self) -> f64 {
        0.5 + 0.5 * (TAU * self.splash_phase / SPLASH_PULSE_SECS).sin()
    }

    /// Apply a playback command and update the status message.
    pub fn on_command(&mut self, cmd: Command) {
        self.controller.apply(cmd);
        match cmd {
            Command::Pause => self.set_status("Paused — press SPACE to continue"),
            Command::Resume => self.clear_status(),
            Command::Restart => {
                self.frame = None;
                self.set_status("Restarted");
            }
            Command::SpeedUp | Command::SpeedDown => {
                self.set_status(format!("Speed x{:.2}", self.controller.state().speed));
            }
            Command::Start | Command::Quit => self.clear_status(),
        }
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(AppConfig::default(), Theme::default())
    }

    #[test]
    fn test_start_produces_frames() {
        let mut app = app();
        assert!(app.frame.is_none());
        app.on_command(Command::Start);
        app.on_tick(0.1);
        assert!(app.frame.is_some());
        assert_eq!(app.phase(), Phase::Running);
    }

    #[test]
    fn test_invalid_dt_keeps_last_frame() {
        let mut app = app();
        app.on_command(Command::Start);
        app.on_tick(0.1);
        let k = app.frame.as_ref().unwrap().k;
        app.on_tick(f64::NAN);
        assert_eq!(app.frame.as_ref().unwrap().k, k);
    }

    #[test]
    fn test_splash_pulse_wraps() {
        let mut app = app();
        app.on_tick(SPLASH_PULSE_SECS * 3.5);
        assert!(app.splash_phase < SPLASH_PULSE_SECS);
        let pulse = app.splash_pulse();
        assert!((0.0..=1.0).contains(&pulse));
    }

    #[test]
    fn test_restart_clears_stale_frame() {
        let mut app = app();
        app.on_command(Command::Start);
        app.on_tick(0.5);
        app.on_command(Command::Restart);
        assert!(app.frame.is_none());
        assert_eq!(app.phase(), Phase::Running);
    }
}
