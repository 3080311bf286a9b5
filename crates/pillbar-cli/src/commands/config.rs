use std::path::Path;

use anyhow::{bail, Result};

use pillbar_core::AppConfig;

pub fn path(config_path: &Path) -> Result<()> {
    println!("{}", config_path.display());
    Ok(())
}

pub fn show(config: &AppConfig) -> Result<()> {
    // Surface color errors before printing
    config.indicator.style()?;
    print!("{}", config.to_toml()?);
    Ok(())
}

pub fn init(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "{} already exists, pass --force to overwrite it",
            config_path.display()
        );
    }

    AppConfig::default().save_to(config_path)?;
    tracing::info!("wrote default configuration to {}", config_path.display());
    println!("Created {}", config_path.display());
    Ok(())
}
