use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use types::Policy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => bail!("Unknown output format: {} (expected text or json)", other),
        }
    }
}

/// Validated settings for one simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    pub policy: Policy,
    pub pages: usize,
    pub frames: usize,
    pub format: OutputFormat,
    /// Dump the page table after every reference.
    pub show_steps: bool,
    /// Run the page table invariant checker after every reference.
    pub check: bool,
    pub verbose: bool,
}

impl SimConfig {
    pub fn new(policy: Policy, pages: usize, frames: usize) -> Self {
        Self {
            policy,
            pages,
            frames,
            format: OutputFormat::Text,
            show_steps: false,
            check: false,
            verbose: false,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.pages == 0 {
            bail!("Number of pages must be positive");
        }
        if self.frames == 0 {
            bail!("Number of frames must be positive");
        }
        Ok(())
    }
}
