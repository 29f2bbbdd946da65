use anyhow::{Context, Result};

use valentine_core::AppConfig;

/// Write the default configuration file, refusing to clobber an
/// existing one.
pub fn run() -> Result<()> {
    let path = AppConfig::config_path();
    if path.exists() {
        println!("Config already exists at {}", path.display());
        return Ok(());
    }

    AppConfig::default()
        .save()
        .context("failed to write configuration")?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}
