use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use valentine_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "valentine")]
#[command(author, version, about = "An animated heart curve for your terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Final oscillation frequency the build ramps towards
    #[arg(long = "k-max")]
    k_max: Option<f64>,

    /// Frames per second while the animation is running
    #[arg(long)]
    fps: Option<f64>,

    /// Number of curve samples per frame
    #[arg(long)]
    points: Option<usize>,

    /// Seconds the build phase takes at speed 1.0
    #[arg(long = "build-secs")]
    build_secs: Option<f64>,

    /// Initial playback speed multiplier
    #[arg(long)]
    speed: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the animation (default)
    Run,
    /// Write the default configuration to ~/.config/valentine/config.toml
    InitConfig,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    if let Some(Commands::InitConfig) = cli.command {
        return commands::init_config::run();
    }

    // Load configuration and apply command-line overrides
    let mut config = AppConfig::load().context("failed to load configuration")?;
    if let Some(k_max) = cli.k_max {
        config.animation.k_max = k_max;
    }
    if let Some(fps) = cli.fps {
        config.animation.fps = fps;
    }
    if let Some(points) = cli.points {
        config.animation.points = points;
    }
    if let Some(build_secs) = cli.build_secs {
        config.animation.build_secs = build_secs;
    }
    config
        .animation
        .validate()
        .context("invalid animation configuration")?;
    if let Some(speed) = cli.speed {
        anyhow::ensure!(
            speed.is_finite() && speed > 0.0,
            "speed must be positive, got {}",
            speed
        );
    }

    commands::run::run(config, cli.speed)
}
