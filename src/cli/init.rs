//! Init command implementation

use std::path::Path;

use anyhow::{Result, bail};

use safeguard::config::Config;

/// Write a default configuration file.
/// By default creates the global config at ~/.safeguard/config.toml;
/// use --config to choose another path.
pub fn init_command(config_path: Option<&Path>, force: bool) -> Result<()> {
    let config_path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::global_config_path);

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    Config::with_defaults().save_to_file(&config_path)?;
    tracing::debug!("Wrote default config to {}", config_path.display());
    println!("Created: {}", config_path.display());

    Ok(())
}
