/* src/cli/contract/src/reference.rs */

// Reference locator: every expression-position use of a tracked alias,
// in source order, tagged with whether it is the callee of the
// `export default` call.

use crate::ast::{Node, NodeKind, Program};
use crate::binding::{Aliases, TrackedBinding};
use crate::span::Span;
use crate::violation::{Violation, ViolationKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
  DefaultExportCallee,
  Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference<'a> {
  pub binding: &'a TrackedBinding,
  pub span: Span,
  pub role: Role,
}

pub fn locate_references<'a>(program: &Program, aliases: &Aliases<'a>) -> Vec<Reference<'a>> {
  let mut found = Vec::new();
  if aliases.is_empty() {
    return found;
  }
  for node in &program.body {
    match &node.kind {
      NodeKind::Import(_) => {}
      NodeKind::ExportDefault(decl) => match &decl.kind {
        NodeKind::Call { callee, arguments } => {
          visit(callee, aliases, Role::DefaultExportCallee, &mut found);
          for arg in arguments {
            visit(arg, aliases, Role::Other, &mut found);
          }
        }
        _ => visit(decl, aliases, Role::Other, &mut found),
      },
      _ => visit(node, aliases, Role::Other, &mut found),
    }
  }
  found
}

fn visit<'a>(node: &Node, aliases: &Aliases<'a>, role: Role, found: &mut Vec<Reference<'a>>) {
  if let NodeKind::Identifier(name) = &node.kind {
    if let Some(binding) = aliases.get(name) {
      found.push(Reference { binding, span: node.span, role });
    }
    return;
  }
  // only the callee identifier itself keeps the callee role
  node.for_each_child(&mut |child| visit(child, aliases, Role::Other, found));
}

/// First reference that is not the direct callee of the default export.
pub fn check_references(references: &[Reference<'_>]) -> Option<Violation> {
  references
    .iter()
    .find(|r| r.role == Role::Other)
    .map(|r| Violation::new(ViolationKind::NotCalledAtDefaultExport, r.span))
}
