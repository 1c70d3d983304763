use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_MAX_STEPS: usize = 100_000;

/// Settings of the run loop. Absent keys take their default value.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ExecutorConfig {
    /// Number of instructions after which the run is aborted.
    pub max_steps: usize,
    /// Stop when an instruction leaves the command pointer unchanged.
    pub stop_on_self_loop: bool,
    /// Keep every log line in the run outcome.
    pub keep_trace: bool,
    pub stop_addresses: Vec<u16>,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
            stop_on_self_loop: true,
            keep_trace: false,
            stop_addresses: Vec::new(),
        }
    }
}

impl ExecutorConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse YAML from {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: ExecutorConfig = serde_yaml::from_str(content)?;

        Ok(config)
    }

    pub fn with_stop_address(mut self, address: u16) -> Self {
        self.stop_addresses.push(address);
        self
    }
}
