/* src/cli/contract/src/lib.rs */

// Static checks for the `defineRoute` authoring contract of route modules.
// Everything here is a pure function of one module's source and AST, so
// callers may validate modules on as many threads as they like.

pub mod ast;
pub mod binding;
pub mod contract;
pub mod export_shape;
pub mod frame;
pub mod gate;
pub mod reference;
pub mod span;
pub mod violation;

#[cfg(test)]
mod tests;

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

pub use ast::{Program, lower_program, parse_program_json};
pub use span::{Position, Span};
pub use violation::{Violation, ViolationKind};

use binding::Aliases;
use export_shape::ExportShape;

/// Substring every module that can import a tracked name must contain
/// (`defineRootRoute` included).
pub const PREFILTER_NEEDLE: &str = "defineRoute";

/// Cheap pre-parse filter for files outside the route manifest.
pub fn may_reference_define_route(source: &str) -> bool {
  source.contains(PREFILTER_NEEDLE)
}

/// One parsed module, plus the route-manifest classification for its path.
#[derive(Debug, Clone, Copy)]
pub struct Module<'a> {
  pub file_path: &'a Path,
  pub source_text: &'a str,
  pub program: &'a Program,
  pub is_route_module: bool,
}

/// Run every check and report the violation that comes first in the
/// source. On a tie the stray reference is reported.
pub fn validate(module: &Module<'_>) -> Option<Violation> {
  let bindings = binding::track_bindings(module.program);
  if !module.is_route_module {
    return gate::check_route_module_gate(&bindings, false);
  }

  let aliases = Aliases::new(&bindings);
  let references = reference::locate_references(module.program, &aliases);
  let stray = reference::check_references(&references);
  let export = match export_shape::classify_default_export(module.program, &aliases) {
    ExportShape::RouteCall(site) => contract::check_call(&site),
    shape => shape.violation(),
  };
  violation::first_in_source(stray, export)
}

/// `validate`, rendered for output.
pub fn check(module: &Module<'_>) -> Option<Diagnostic> {
  validate(module).map(|violation| Diagnostic::new(module, violation))
}

/// A violation with its code frame, ready to print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
  pub file_path: PathBuf,
  pub kind: ViolationKind,
  pub message: &'static str,
  pub span: Span,
  pub frame: String,
}

impl Diagnostic {
  pub fn new(module: &Module<'_>, violation: Violation) -> Self {
    Self {
      file_path: module.file_path.to_path_buf(),
      kind: violation.kind,
      message: violation.message,
      span: violation.span,
      frame: frame::render_frame(module.source_text, violation.span),
    }
  }
}

impl fmt::Display for Diagnostic {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}\n\n{}", self.message, self.frame)
  }
}
