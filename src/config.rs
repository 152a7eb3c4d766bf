use crate::demo::conversation::PendingPolicy;
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_CONFIG_FILE: &str = "searchai-demo.toml";

const MAX_REPLY_DELAY_MS: u64 = 60_000;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub demo: DemoConfig,
    #[serde(default)]
    pub window: WindowConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DemoConfig {
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,
    #[serde(default)]
    pub pending_policy: PendingPolicy,
    /// Pins the fallback selection; unset means seeded from entropy.
    #[serde(default)]
    pub fallback_seed: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WindowConfig {
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(default = "default_height")]
    pub height: f32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: default_reply_delay_ms(),
            pending_policy: PendingPolicy::default(),
            fallback_seed: None,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

impl DemoConfig {
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("invalid config: {}", path.display()))
    }

    /// Loads `path` when it exists, otherwise falls back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(content).context("failed to parse config toml")?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<()> {
        if self.demo.reply_delay_ms > MAX_REPLY_DELAY_MS {
            bail!(
                "demo.reply_delay_ms must be at most {MAX_REPLY_DELAY_MS}, got {}",
                self.demo.reply_delay_ms
            );
        }
        if !(self.window.width > 0.0 && self.window.height > 0.0) {
            bail!("window.width and window.height must be positive");
        }
        Ok(())
    }
}

pub fn config_path_from_args(mut args: impl Iterator<Item = String>) -> PathBuf {
    let _bin = args.next();
    args.next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

fn default_reply_delay_ms() -> u64 {
    800
}

fn default_width() -> f32 {
    1280.0
}

fn default_height() -> f32 {
    820.0
}
