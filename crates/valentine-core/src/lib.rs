pub mod config;
pub mod curve;
pub mod easing;
pub mod error;
pub mod playback;

pub use config::{AnimationConfig, AppConfig};
pub use easing::EasingKind;
pub use error::{Error, Result};
pub use playback::{AnimationController, Command, FrameSample, Phase, PlaybackState};
