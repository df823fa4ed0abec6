//! Init command - write the bundled default config

use std::path::Path;

use anyhow::{Context, Result};
use substances_core::config::Config;

use crate::output;

pub fn run(data_dir: &Path) -> Result<()> {
    let written = Config::write_default(data_dir)
        .with_context(|| format!("Failed to write config in {:?}", data_dir))?;

    let path = Config::path(data_dir);
    if written {
        output::success(&format!("Wrote default config to {}", path.display()));
    } else {
        output::info(&format!("Config already exists at {}", path.display()));
    }
    Ok(())
}
