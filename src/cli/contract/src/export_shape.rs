/* src/cli/contract/src/export_shape.rs */

// Default-export shape: a route module exports either a literal object
// (legacy style) or a direct call to a tracked binding.

use crate::ast::{Node, NodeKind, Program};
use crate::binding::{Aliases, TrackedBinding};
use crate::span::Span;
use crate::violation::{Violation, ViolationKind};

/// The `export default <callee>(...)` call, ready for contract checks.
#[derive(Debug, Clone, PartialEq)]
pub struct CallSite<'p> {
  pub binding: &'p TrackedBinding,
  pub span: Span,
  pub callee_span: Span,
  pub arguments: &'p [Node],
}

impl CallSite<'_> {
  pub fn argument_spans(&self) -> impl Iterator<Item = Span> + '_ {
    self.arguments.iter().map(|arg| arg.span)
  }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExportShape<'p> {
  /// No `export default` at all.
  Missing,
  ObjectLiteral,
  RouteCall(CallSite<'p>),
  Invalid(Span),
}

impl ExportShape<'_> {
  pub fn violation(&self) -> Option<Violation> {
    match self {
      Self::Invalid(span) => Some(Violation::new(ViolationKind::InvalidDefaultExport, *span)),
      _ => None,
    }
  }
}

pub fn classify_default_export<'p>(program: &'p Program, aliases: &Aliases<'p>) -> ExportShape<'p> {
  let Some(decl) = program.default_export() else {
    return ExportShape::Missing;
  };
  match &decl.kind {
    NodeKind::Object(_) => ExportShape::ObjectLiteral,
    NodeKind::Call { callee, arguments } => match &callee.kind {
      NodeKind::Identifier(name) => match aliases.get(name) {
        Some(binding) => ExportShape::RouteCall(CallSite {
          binding,
          span: decl.span,
          callee_span: callee.span,
          arguments,
        }),
        None => ExportShape::Invalid(decl.span),
      },
      _ => ExportShape::Invalid(decl.span),
    },
    _ => ExportShape::Invalid(decl.span),
  }
}
