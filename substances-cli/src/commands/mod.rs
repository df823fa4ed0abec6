//! CLI command implementations

pub mod doctor;
pub mod effects;
pub mod format;
pub mod init;
pub mod menu;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use substances_core::adapters::ExtensionRegistry;
use substances_core::SubstancesContext;

/// Resolve the data folder: `--dir`/`SUBSTANCES_DIR`, else `~/.substances`
pub fn get_data_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(dir) => Ok(dir),
        None => dirs::home_dir()
            .map(|home| home.join(".substances"))
            .context("Could not find home directory"),
    }
}

/// Load the shop from a data folder
///
/// The CLI runs outside any game server, so no economy plugins are
/// registered and the gateway always comes up unavailable.
pub fn get_context(data_dir: &Path) -> Result<SubstancesContext> {
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {:?}", data_dir))?;

    SubstancesContext::new(data_dir, &ExtensionRegistry::new())
        .context("Failed to load substances config")
}
