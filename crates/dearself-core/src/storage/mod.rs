mod config;

pub use config::{Config, GoalsConfig, StoreConfig};

use std::path::PathBuf;

use crate::error::Result;

/// Returns `~/.config/dearself[-dev]/` based on DEARSELF_ENV.
///
/// Set DEARSELF_ENV=dev to use a development data directory.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("DEARSELF_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("dearself-dev")
    } else {
        base_dir.join("dearself")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
