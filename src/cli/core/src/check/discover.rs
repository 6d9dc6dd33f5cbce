/* src/cli/core/src/check/discover.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Files under `dir` with one of `extensions`, sorted by path.
/// `node_modules` and dot-directories are never entered.
pub(crate) fn discover_modules(dir: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
  let mut files = Vec::new();
  walk(dir, extensions, &mut files)?;
  files.sort();
  Ok(files)
}

fn walk(dir: &Path, extensions: &[String], out: &mut Vec<PathBuf>) -> Result<()> {
  let entries =
    std::fs::read_dir(dir).with_context(|| format!("failed to read dir {}", dir.display()))?;
  for entry in entries {
    let entry = entry.with_context(|| format!("failed to read entry in {}", dir.display()))?;
    let path = entry.path();
    let file_type = entry.file_type()?;
    if file_type.is_dir() {
      let name = entry.file_name();
      let name = name.to_string_lossy();
      if name == "node_modules" || name.starts_with('.') {
        continue;
      }
      walk(&path, extensions, out)?;
    } else if has_extension(&path, extensions) {
      out.push(path);
    }
  }
  Ok(())
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
  path
    .extension()
    .and_then(|ext| ext.to_str())
    .is_some_and(|ext| extensions.iter().any(|wanted| wanted == ext))
}
