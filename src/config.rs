use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::domain::address::{DEFAULT_DOMAIN, DEFAULT_LOCAL_PART_LEN};
use crate::snow::DEFAULT_FLAKES;

const DEFAULT_TICK_MS: u64 = 100;

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Domain part of generated addresses.
    pub domain: Option<String>,
    pub local_part_len: Option<usize>,
    /// Number of snowflakes; 0 turns the animation off.
    pub snowflakes: Option<usize>,
    pub tick_ms: Option<u64>,
}

impl Config {
    pub fn domain(&self) -> &str {
        self.domain.as_deref().unwrap_or(DEFAULT_DOMAIN)
    }

    pub fn local_part_len(&self) -> usize {
        self.local_part_len.unwrap_or(DEFAULT_LOCAL_PART_LEN)
    }

    pub fn snowflakes(&self) -> usize {
        self.snowflakes.unwrap_or(DEFAULT_FLAKES)
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.unwrap_or(DEFAULT_TICK_MS).max(10))
    }
}

fn config_dir() -> Result<PathBuf> {
    Ok(dirs::config_dir()
        .ok_or_else(|| anyhow::anyhow!("no config dir available"))?
        .join("mailly"))
}

pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Loads the default config file, writing a template with the defaults
/// spelled out when none exists yet.
pub fn load_config() -> Result<Config> {
    let path = config_path()?;
    if !path.exists() {
        write_template(&path)?;
        info!("created template config at {}", path.display());
        return Ok(Config::default());
    }
    load_config_from(&path)
}

/// Loads an explicitly chosen config file. A missing file is an error.
pub fn load_config_from(path: &Path) -> Result<Config> {
    let s = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: Config =
        toml::from_str(&s).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(cfg)
}

fn write_template(path: &Path) -> Result<()> {
    let sample = Config {
        domain: Some(DEFAULT_DOMAIN.to_string()),
        local_part_len: Some(DEFAULT_LOCAL_PART_LEN),
        snowflakes: Some(DEFAULT_FLAKES),
        tick_ms: Some(DEFAULT_TICK_MS),
    };
    let tom = toml::to_string_pretty(&sample)?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating config dir {}", dir.display()))?;
    }
    fs::write(path, tom)?;
    Ok(())
}
