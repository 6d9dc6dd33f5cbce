/* src/cli/core/src/shell.rs */

// Runs the configured parser command for one module.

use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result, bail};

/// Run `command` with `file` as `$1` and return its stdout.
/// Non-zero exit bails with the captured stderr and stdout.
pub(crate) fn run_parser(base_dir: &Path, command: &str, file: &Path) -> Result<String> {
  let script = format!("{command} \"$1\"");
  let output = Command::new("sh")
    .args(["-c", &script, "route-contract-parser"])
    .arg(file)
    .current_dir(base_dir)
    .output()
    .with_context(|| format!("failed to run parser for {}", file.display()))?;

  if !output.status.success() {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let mut msg = format!("parser exited with status {} for {}", output.status, file.display());
    if !stderr.is_empty() {
      msg.push('\n');
      msg.push_str(&stderr);
    }
    if !stdout.is_empty() {
      msg.push('\n');
      msg.push_str(&stdout);
    }
    bail!("{msg}");
  }

  String::from_utf8(output.stdout)
    .with_context(|| format!("parser output for {} is not UTF-8", file.display()))
}
