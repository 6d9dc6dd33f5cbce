/* src/cli/core/src/config/mod.rs */

mod types;

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub use types::{ContractConfig, RoutesSection};

pub const CONFIG_FILE: &str = "route-contract.toml";

/// Nearest `route-contract.toml` in `start` or one of its ancestors.
pub fn find_contract_config(start: &Path) -> Result<PathBuf> {
  let start =
    start.canonicalize().with_context(|| format!("failed to canonicalize {}", start.display()))?;
  start
    .ancestors()
    .map(|dir| dir.join(CONFIG_FILE))
    .find(|candidate| candidate.is_file())
    .with_context(|| format!("no {CONFIG_FILE} in {} or any parent directory", start.display()))
}

pub fn load_contract_config(path: &Path) -> Result<ContractConfig> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  parse_contract_config(&content).with_context(|| format!("invalid config {}", path.display()))
}

/// Parse and validate config text.
pub fn parse_contract_config(content: &str) -> Result<ContractConfig> {
  let config: ContractConfig = toml::from_str(content).context("failed to parse TOML")?;
  config.validate()?;
  Ok(config)
}
