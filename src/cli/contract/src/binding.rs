/* src/cli/contract/src/binding.rs */

// Binding tracker: which top-level imports bring `defineRoute` or
// `defineRootRoute` into scope, and under what local name.

use std::collections::HashMap;

use crate::ast::Program;
use crate::span::Span;

pub const TRACKED_NAMES: [&str; 2] = ["defineRoute", "defineRootRoute"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedBinding {
  pub imported_name: &'static str,
  pub local_alias: String,
  pub specifier_span: Span,
}

/// Collect tracked import specifiers in source order.
pub fn track_bindings(program: &Program) -> Vec<TrackedBinding> {
  let mut bindings = Vec::new();
  for decl in program.imports() {
    for spec in &decl.specifiers {
      let Some(imported) = spec.imported.as_deref() else { continue };
      let Some(name) = TRACKED_NAMES.into_iter().find(|name| *name == imported) else { continue };
      bindings.push(TrackedBinding {
        imported_name: name,
        local_alias: spec.local.clone(),
        specifier_span: spec.span,
      });
    }
  }
  bindings
}

/// Flat local-name lookup. Imports are module scope, so no scope chain.
#[derive(Debug, Default)]
pub struct Aliases<'a> {
  by_local: HashMap<&'a str, &'a TrackedBinding>,
}

impl<'a> Aliases<'a> {
  pub fn new(bindings: &'a [TrackedBinding]) -> Self {
    let mut by_local = HashMap::new();
    for binding in bindings {
      by_local.entry(binding.local_alias.as_str()).or_insert(binding);
    }
    Self { by_local }
  }

  pub fn get(&self, local: &str) -> Option<&'a TrackedBinding> {
    self.by_local.get(local).copied()
  }

  pub fn is_empty(&self) -> bool {
    self.by_local.is_empty()
  }
}
