//! Builder configuration
//!
//! Defaults ship embedded from `Builder.toml`. Every section is optional; a
//! missing key falls back to the value in [`BuilderConfig::default`].

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::builder::tree::ThemeSettings;
use crate::error::Result;

const EMBEDDED: &str = include_str!("../Builder.toml");

static CURRENT: OnceLock<BuilderConfig> = OnceLock::new();

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Minimum tracing level: `trace`, `debug`, `info`, `warn` or `error`.
    pub log_level: String,
    pub plan: PlanConfig,
    pub sync: SyncConfig,
    pub theme: ThemeSettings,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            plan: PlanConfig::default(),
            sync: SyncConfig::default(),
            theme: ThemeSettings::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanConfig {
    /// Blocks allowed on HOME before the trial asks for an upgrade.
    pub home_block_limit: usize,
    pub pro_price: u32,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            home_block_limit: 10,
            pro_price: 150,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// How long the simulated push to the mobile app takes.
    pub delay_ms: u32,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self { delay_ms: 1500 }
    }
}

impl BuilderConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: BuilderConfig = toml::from_str(content)?;
        config.theme.validate()?;
        Ok(config)
    }

    /// The configuration compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_toml_str(EMBEDDED)
    }

    /// Make `config` the one the running app reads. The first install wins.
    pub fn install(config: BuilderConfig) -> &'static BuilderConfig {
        CURRENT.get_or_init(|| config)
    }

    /// The installed configuration. Built-in defaults if nothing was installed.
    pub fn current() -> &'static BuilderConfig {
        CURRENT.get_or_init(BuilderConfig::default)
    }

    pub fn log_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }
}
