use anyhow::{Context, Result};
use cvkick_backend::BackendConfig;
use cvkick_wizard::CompletionPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub timing: TimingConfig,
    pub wizard: WizardConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub upload_ms: u64,
    pub generation_ms: u64,
    pub send_ms: u64,
    pub toast_ms: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    pub completed_steps: CompletionPolicy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            upload_ms: 1500,
            generation_ms: 3000,
            send_ms: 3000,
            toast_ms: 4000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid config file")
    }

    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_default()
    }

    pub fn backend_config(&self) -> BackendConfig {
        BackendConfig {
            upload_delay: Duration::from_millis(self.timing.upload_ms),
            generation_delay: Duration::from_millis(self.timing.generation_ms),
            send_delay: Duration::from_millis(self.timing.send_ms),
        }
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.timing.toast_ms)
    }
}
