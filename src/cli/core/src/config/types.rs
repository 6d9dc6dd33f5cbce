/* src/cli/core/src/config/types.rs */

use anyhow::{Result, bail};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ContractConfig {
  pub project: ProjectConfig,
  #[serde(default)]
  pub routes: RoutesSection,
  pub parser: ParserSection,
  #[serde(default)]
  pub check: CheckSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
  pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoutesSection {
  #[serde(default = "default_app_dir")]
  pub app_dir: String,
  /// JSON route manifest; when absent, `<app_dir>/routes/**` and
  /// `<app_dir>/root.*` are route modules.
  pub manifest: Option<String>,
  /// Root route file relative to `app_dir`, overriding `root.*`.
  pub root: Option<String>,
}

impl Default for RoutesSection {
  fn default() -> Self {
    Self { app_dir: default_app_dir(), manifest: None, root: None }
  }
}

fn default_app_dir() -> String {
  "app".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParserSection {
  /// Shell command printing a Babel-compatible JSON AST for the file
  /// path appended as its last argument.
  pub command: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CheckSection {
  #[serde(default = "default_extensions")]
  pub extensions: Vec<String>,
  #[serde(default = "default_prefilter")]
  pub prefilter: bool,
  /// Worker threads; 0 uses the available parallelism.
  #[serde(default)]
  pub jobs: usize,
}

impl Default for CheckSection {
  fn default() -> Self {
    Self { extensions: default_extensions(), prefilter: default_prefilter(), jobs: 0 }
  }
}

fn default_extensions() -> Vec<String> {
  ["ts", "tsx", "js", "jsx", "mjs"].iter().map(|ext| (*ext).to_string()).collect()
}

fn default_prefilter() -> bool {
  true
}

impl ContractConfig {
  pub fn validate(&self) -> Result<()> {
    if self.parser.command.trim().is_empty() {
      bail!("parser.command must not be empty");
    }
    if self.check.extensions.is_empty() {
      bail!("check.extensions must not be empty");
    }
    if let Some(ext) = self.check.extensions.iter().find(|ext| ext.starts_with('.')) {
      bail!("check.extensions entries are written without a leading dot, got \"{ext}\"");
    }
    Ok(())
  }

  pub fn worker_count(&self) -> usize {
    match self.check.jobs {
      0 => std::thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get),
      n => n,
    }
  }
}
