/* src/cli/core/src/manifest.rs */

// Decides which files under `app_dir` are route modules.

use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::config::RoutesSection;

#[derive(Debug, Deserialize)]
pub struct RouteManifest {
  pub routes: Vec<RouteEntry>,
}

/// Route ids and any other fields are ignored.
#[derive(Debug, Deserialize)]
pub struct RouteEntry {
  /// Relative to `app_dir`.
  pub file: String,
  #[serde(default)]
  pub children: Vec<RouteEntry>,
}

impl RouteManifest {
  /// Every route file, nested children included, in declaration order.
  pub fn files(&self) -> Vec<&str> {
    fn walk<'a>(entries: &'a [RouteEntry], out: &mut Vec<&'a str>) {
      for entry in entries {
        out.push(&entry.file);
        walk(&entry.children, out);
      }
    }
    let mut out = Vec::new();
    walk(&self.routes, &mut out);
    out
  }
}

pub fn read_route_manifest(path: &Path) -> Result<RouteManifest> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  serde_json::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}

#[derive(Debug)]
pub enum RouteClassifier {
  /// Normalized paths relative to `app_dir`.
  Manifest(BTreeSet<PathBuf>),
  /// `routes/**` plus the root route.
  Convention { root: Option<PathBuf> },
}

impl RouteClassifier {
  pub fn from_config(routes: &RoutesSection, base_dir: &Path) -> Result<Self> {
    let root = routes.root.as_deref().map(normalize);
    match &routes.manifest {
      Some(manifest) => {
        let manifest = read_route_manifest(&base_dir.join(manifest))?;
        let mut files: BTreeSet<PathBuf> = manifest.files().into_iter().map(normalize).collect();
        files.extend(root);
        Ok(Self::Manifest(files))
      }
      None => Ok(Self::Convention { root }),
    }
  }

  /// `rel` is relative to `app_dir`.
  pub fn is_route_module(&self, rel: &Path) -> bool {
    let rel = normalize(rel);
    match self {
      Self::Manifest(files) => files.contains(&rel),
      Self::Convention { root } => {
        if rel.starts_with("routes") {
          return true;
        }
        match root {
          Some(root) => rel == *root,
          None => {
            rel.parent() == Some(Path::new("")) && rel.file_stem().is_some_and(|stem| stem == "root")
          }
        }
      }
    }
  }
}

/// Drop `.` components so `./routes/a.tsx` and `routes/a.tsx` compare equal.
fn normalize(path: impl AsRef<Path>) -> PathBuf {
  path.as_ref().components().filter(|c| !matches!(c, Component::CurDir)).collect()
}
