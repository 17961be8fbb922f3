//! `piphub --config` — write the merged config file.

use std::path::Path;

use anyhow::{Context, Result};

use crate::config::{save_config, Config};

/// Persist `cfg` to `path` and report where it went.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn run_write_config(cfg: &Config, path: &Path) -> Result<()> {
    save_config(cfg, path).with_context(|| format!("failed to write {}", path.display()))?;
    println!("wrote default config to: {}", path.display());
    Ok(())
}
