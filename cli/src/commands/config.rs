//! Config command implementation - print or write an example configuration

use anyhow::Result;
use std::path::PathBuf;

use crate::config::Config;

pub fn execute(write: Option<PathBuf>) -> Result<()> {
    match write {
        Some(path) => {
            Config::default().save_to_file(&path)?;
            log::info!("Wrote example configuration to {}", path.display());
        }
        None => print!("{}", Config::example_toml()?),
    }
    Ok(())
}
