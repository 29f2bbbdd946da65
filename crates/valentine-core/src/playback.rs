//! Playback state machine and animation controller.
//!
//! The controller owns all mutable animation state. The host pushes
//! commands (from input) and ticks (from its timer) into it; each tick in
//! an animating phase yields a [`FrameSample`] for the presentation layer
//! to draw. The controller never calls back into the host.

use std::f64::consts::TAU;

use crate::config::AnimationConfig;
use crate::curve;
use crate::easing::EasingKind;
use crate::error::{Error, Result};

/// Animation phase.
///
/// `Idle` is the splash screen, `Running` builds the heart by ramping k,
/// `Completed` holds k at its maximum and breathes. `Completed` is
/// terminal until a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Paused,
    Completed,
}

/// Playback commands, produced by the input router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Pause,
    Resume,
    Restart,
    SpeedUp,
    SpeedDown,
    Quit,
}

/// Mutable animation state. Owned exclusively by [`AnimationController`];
/// mutated only through its command and tick methods.
#[derive(Debug, Clone)]
pub struct PlaybackState {
    /// Build progress in [0, 1]; monotone non-decreasing while running,
    /// except across a restart
    pub progress: f64,
    /// Speed multiplier, clamped to the configured bounds
    pub speed: f64,
    /// Current phase
    pub phase: Phase,
    /// Seconds into the current breath, wraps modulo the breathing period
    pub breath_phase: f64,
    quit: bool,
}

impl PlaybackState {
    fn new() -> Self {
        Self {
            progress: 0.0,
            speed: 1.0,
            phase: Phase::Idle,
            breath_phase: 0.0,
            quit: false,
        }
    }
}

/// One rendered frame of the animation: the curve points plus the state
/// metadata the presentation layer displays. Recomputed every tick,
/// never retained by the controller.
#[derive(Debug, Clone)]
pub struct FrameSample {
    /// (x, y) pairs in domain order
    pub points: Vec<(f64, f64)>,
    /// Oscillation frequency this frame was computed with
    pub k: f64,
    /// Build progress in [0, 1]
    pub progress: f64,
    /// Phase the controller was in after this tick
    pub phase: Phase,
    /// Fade-in factor in [0.4, 1.0] during the build, 1.0 afterwards
    pub alpha: f64,
}

/// Time-driven animation controller.
///
/// Call [`apply`](Self::apply) for each input command and
/// [`tick`](Self::tick) with the elapsed seconds since the previous tick;
/// a returned frame is a redraw request.
pub struct AnimationController {
    config: AnimationConfig,
    /// x samples, fixed for the lifetime of the controller
    xs: Vec<f64>,
    state: PlaybackState,
}

impl AnimationController {
    pub fn new(config: AnimationConfig) -> Self {
        let xs = curve::sample_domain(config.points);
        Self {
            config,
            xs,
            state: PlaybackState::new(),
        }
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// True once a quit command has been received; the host stops its
    /// scheduling loop when it observes this.
    #[inline]
    pub fn should_quit(&self) -> bool {
        self.state.quit
    }

    /// Override the speed multiplier, clamped to the configured bounds.
    /// Non-finite values are ignored.
    pub fn set_speed(&mut self, speed: f64) {
        if speed.is_finite() {
            self.state.speed = speed.clamp(self.config.speed_min, self.config.speed_max);
        }
    }

    /// Apply a playback command. Invalid transitions (e.g. Resume while
    /// Idle) are silent no-ops, never errors.
    pub fn apply(&mut self, cmd: Command) {
        match cmd {
            Command::Start => {
                if self.state.phase == Phase::Idle {
                    self.state.phase = Phase::Running;
                }
            }
            Command::Pause => {
                if self.state.phase == Phase::Running {
                    self.state.phase = Phase::Paused;
                }
            }
            Command::Resume => {
                if self.state.phase == Phase::Paused {
                    self.state.phase = Phase::Running;
                }
            }
            Command::Restart => {
                self.state.progress = 0.0;
                self.state.breath_phase = 0.0;
                self.state.phase = Phase::Running;
            }
            Command::SpeedUp => {
                self.state.speed =
                    (self.state.speed * self.config.speed_step).min(self.config.speed_max);
            }
            Command::SpeedDown => {
                self.state.speed =
                    (self.state.speed / self.config.speed_step).max(self.config.speed_min);
            }
            Command::Quit => {
                self.state.quit = true;
            }
        }
    }

    /// Advance the animation by `dt` seconds and return the frame to
    /// draw, if any.
    ///
    /// A negative or non-finite dt is rejected with
    /// [`Error::InvalidTickDelta`] and leaves the state untouched. Idle
    /// and Paused ticks are no-ops on playback state and request no
    /// redraw.
    pub fn tick(&mut self, dt: f64) -> Result<Option<FrameSample>> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(Error::InvalidTickDelta(dt));
        }

        match self.state.phase {
            Phase::Idle | Phase::Paused => Ok(None),
            Phase::Running => {
                let step = self.state.speed * dt / self.config.build_secs;
                self.state.progress = (self.state.progress + step).min(1.0);
                if self.state.progress >= 1.0 {
                    self.state.phase = Phase::Completed;
                    self.state.breath_phase = 0.0;
                }
                let eased = self.config.easing.apply(self.state.progress);
                let k = self.config.k_max * eased;
                // Fade the curve in gradually as it forms
                let alpha = 0.4 + 0.6 * self.state.progress;
                self.frame(k, self.config.amplitude, alpha).map(Some)
            }
            Phase::Completed => {
                self.state.breath_phase =
                    (self.state.breath_phase + dt) % self.config.breathing_period_secs;
                let breath =
                    (TAU * self.state.breath_phase / self.config.breathing_period_secs).sin();
                let amplitude = self.config.amplitude + self.config.breathing_amplitude * breath;
                self.frame(self.config.k_max, amplitude, 1.0).map(Some)
            }
        }
    }

    fn frame(&self, k: f64, amplitude: f64, alpha: f64) -> Result<FrameSample> {
        let ys = curve::evaluate(&self.xs, k, amplitude)?;
        let points = self.xs.iter().copied().zip(ys).collect();
        Ok(FrameSample {
            points,
            k,
            progress: self.state.progress,
            phase: self.state.phase,
            alpha,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> AnimationController {
        let config = AnimationConfig {
            points: 64,
            build_secs: 10.0,
            ..Default::default()
        };
        AnimationController::new(config)
    }

    #[test]
    fn test_start_from_idle() {
        let mut ctl = controller();
        assert_eq!(ctl.phase(), Phase::Idle);
        ctl.apply(Command::Start);
        assert_eq!(ctl.phase(), Phase::Running);
        assert_eq!(ctl.state().progress, 0.0);
    }

    #[test]
    fn test_idle_tick_requests_no_redraw() {
        let mut ctl = controller();
        assert!(ctl.tick(0.1).unwrap().is_none());
        assert_eq!(ctl.phase(), Phase::Idle);
    }

    #[test]
    fn test_progress_monotonic_while_running() {
        let mut ctl = controller();
        ctl.apply(Command::Start);
        let mut prev = 0.0;
        for _ in 0..50 {
            ctl.tick(0.05).unwrap();
            assert!(ctl.state().progress >= prev);
            prev = ctl.state().progress;
        }
    }

    #[test]
    fn test_completion_clamps_progress_and_holds_k_max() {
        let mut ctl = controller();
        ctl.apply(Command::Start);
        // Drive progress close to 1, then push it over in one tick
        ctl.tick(9.99).unwrap();
        assert_eq!(ctl.phase(), Phase::Running);
        let frame = ctl.tick(1.0).unwrap().unwrap();
        assert_eq!(ctl.phase(), Phase::Completed);
        assert_eq!(ctl.state().progress, 1.0);
        assert!((frame.k - ctl.config().k_max).abs() < 1e-12);
    }

    #[test]
    fn test_paused_tick_leaves_progress_unchanged() {
        let mut ctl = controller();
        ctl.apply(Command::Start);
        ctl.tick(1.0).unwrap();
        let progress = ctl.state().progress;
        ctl.apply(Command::Pause);
        assert!(ctl.tick(5.0).unwrap().is_none());
        assert_eq!(ctl.state().progress, progress);
        assert_eq!(ctl.phase(), Phase::Paused);
    }

    #[test]
    fn test_resume_from_paused() {
        let mut ctl = controller();
        ctl.apply(Command::Start);
        ctl.apply(Command::Pause);
        ctl.apply(Command::Resume);
        assert_eq!(ctl.phase(), Phase::Running);
    }

    #[test]
    fn test_resume_while_idle_is_noop() {
        let mut ctl = controller();
        ctl.apply(Command::Resume);
        assert_eq!(ctl.phase(), Phase::Idle);
        ctl.apply(Command::Pause);
        assert_eq!(ctl.phase(), Phase::Idle);
    }

    #[test]
    fn test_speed_clamped_to_bounds() {
        let mut ctl = controller();
        for _ in 0..100 {
            ctl.apply(Command::SpeedUp);
        }
        assert_eq!(ctl.state().speed, ctl.config().speed_max);
        for _ in 0..100 {
            ctl.apply(Command::SpeedDown);
        }
        assert_eq!(ctl.state().speed, ctl.config().speed_min);
    }

    #[test]
    fn test_set_speed_clamped_and_rejects_non_finite() {
        let mut ctl = controller();
        ctl.set_speed(2.0);
        assert_eq!(ctl.state().speed, 2.0);
        ctl.set_speed(1000.0);
        assert_eq!(ctl.state().speed, ctl.config().speed_max);
        ctl.set_speed(0.001);
        assert_eq!(ctl.state().speed, ctl.config().speed_min);
        ctl.set_speed(f64::NAN);
        assert_eq!(ctl.state().speed, ctl.config().speed_min);
    }

    #[test]
    fn test_speed_commands_do_not_change_phase() {
        let mut ctl = controller();
        ctl.apply(Command::SpeedUp);
        assert_eq!(ctl.phase(), Phase::Idle);
        ctl.apply(Command::Start);
        ctl.apply(Command::Pause);
        ctl.apply(Command::SpeedDown);
        assert_eq!(ctl.phase(), Phase::Paused);
    }

    #[test]
    fn test_invalid_tick_delta_rejected() {
        let mut ctl = controller();
        ctl.apply(Command::Start);
        ctl.tick(1.0).unwrap();
        let progress = ctl.state().progress;

        assert!(matches!(ctl.tick(-0.1), Err(Error::InvalidTickDelta(_))));
        assert!(matches!(ctl.tick(f64::NAN), Err(Error::InvalidTickDelta(_))));
        assert!(matches!(
            ctl.tick(f64::INFINITY),
            Err(Error::InvalidTickDelta(_))
        ));
        // Prior state retained
        assert_eq!(ctl.state().progress, progress);
        assert_eq!(ctl.phase(), Phase::Running);
    }

    #[test]
    fn test_restart_from_completed() {
        let mut ctl = controller();
        ctl.apply(Command::Start);
        ctl.tick(100.0).unwrap();
        assert_eq!(ctl.phase(), Phase::Completed);

        ctl.apply(Command::Restart);
        assert_eq!(ctl.phase(), Phase::Running);
        assert_eq!(ctl.state().progress, 0.0);
        assert_eq!(ctl.state().breath_phase, 0.0);
    }

    #[test]
    fn test_completed_tick_breathes_and_stays_completed() {
        let mut ctl = controller();
        ctl.apply(Command::Start);
        ctl.tick(100.0).unwrap();
        assert_eq!(ctl.phase(), Phase::Completed);

        let frame = ctl.tick(0.5).unwrap().unwrap();
        assert_eq!(frame.phase, Phase::Completed);
        assert!((ctl.state().breath_phase - 0.5).abs() < 1e-12);
        assert!((frame.k - ctl.config().k_max).abs() < 1e-12);

        // Phase wraps modulo the period
        let period = ctl.config().breathing_period_secs;
        ctl.tick(period).unwrap();
        assert!(ctl.state().breath_phase < period);
        assert_eq!(ctl.phase(), Phase::Completed);
    }

    #[test]
    fn test_quit_sets_flag_in_any_phase() {
        let mut ctl = controller();
        assert!(!ctl.should_quit());
        ctl.apply(Command::Quit);
        assert!(ctl.should_quit());
    }

    #[test]
    fn test_frame_point_count_matches_config() {
        let mut ctl = controller();
        ctl.apply(Command::Start);
        let frame = ctl.tick(0.1).unwrap().unwrap();
        assert_eq!(frame.points.len(), ctl.config().points);
    }
}
