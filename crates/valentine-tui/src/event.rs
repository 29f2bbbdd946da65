use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};
use valentine_core::Phase;

/// Event handler for terminal events.
///
/// Polls with a cadence matched to the current phase: the configured
/// animation fps while the curve is moving, a smoother rate for the
/// splash pulse, and a lazy rate while paused. A poll timeout becomes a
/// [`AppEvent::Tick`].
pub struct EventHandler {
    /// Poll timeout while paused
    tick_rate: Duration,
    /// Poll timeout on the splash screen
    splash_rate: Duration,
    /// Poll timeout while the animation is running or breathing
    frame_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64, splash_fps: f64, fps: f64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
            splash_rate: fps_period(splash_fps),
            frame_rate: fps_period(fps),
        }
    }

    /// Poll for the next event at the cadence appropriate for `phase`.
    pub fn next(&self, phase: Phase) -> Result<Option<AppEvent>> {
        let timeout = match phase {
            Phase::Idle => self.splash_rate,
            Phase::Running | Phase::Completed => self.frame_rate,
            Phase::Paused => self.tick_rate,
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    // Only handle key press events, ignore release events
                    // (crossterm 0.27+ sends release events on some systems)
                    if key.kind == KeyEventKind::Press {
                        Ok(Some(AppEvent::Key(key)))
                    } else {
                        Ok(None)
                    }
                }
                Event::Mouse(mouse) => {
                    if matches!(mouse.kind, MouseEventKind::Down(_)) {
                        Ok(Some(AppEvent::Click(mouse)))
                    } else {
                        Ok(None)
                    }
                }
                Event::Resize(w, h) => Ok(Some(AppEvent::Resize(w, h))),
                _ => Ok(None),
            }
        } else {
            Ok(Some(AppEvent::Tick))
        }
    }
}

fn fps_period(fps: f64) -> Duration {
    if fps <= 0.0 {
        Duration::from_millis(333) // 3 fps fallback
    } else {
        Duration::from_secs_f64(1.0 / fps)
    }
}

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// A mouse button was pressed
    Click(MouseEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
}
