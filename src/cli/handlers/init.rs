use crate::config::{CONFIG_FILE_NAME, ItemqlConfig};
use crate::error::ItemError;
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

pub fn handle_init(dir: &Path) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        return Err(ItemError::AlreadyInitialized(config_path.display().to_string()).into());
    }

    let config = ItemqlConfig::default();
    config.save(&config_path)?;

    println!(
        "{} itemql config at {}",
        "Initialized".green(),
        config_path.display()
    );
    println!("  database: {}", config.database.url.cyan());
    println!(
        "  endpoint: http://{}:{}{}",
        config.server.host, config.server.port, config.server.path
    );
    Ok(())
}
