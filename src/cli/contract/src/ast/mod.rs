/* src/cli/contract/src/ast/mod.rs */

// Typed view over the externally produced module AST.
// Only the node shapes the route-module checks look at get their own
// variant; everything else is kept as `Other` with its children so
// references can still be found anywhere in the module.

mod lower;

pub use lower::{lower_program, parse_program_json};

use crate::span::Span;

#[derive(Debug, Clone, PartialEq)]
pub struct Program {
  pub body: Vec<Node>,
}

impl Program {
  /// Top-level import declarations, in source order.
  pub fn imports(&self) -> impl Iterator<Item = &ImportDecl> {
    self.body.iter().filter_map(|node| match &node.kind {
      NodeKind::Import(decl) => Some(decl),
      _ => None,
    })
  }

  /// The declaration or expression following the first `export default`.
  pub fn default_export(&self) -> Option<&Node> {
    self.body.iter().find_map(|node| match &node.kind {
      NodeKind::ExportDefault(decl) => Some(decl.as_ref()),
      _ => None,
    })
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
  pub span: Span,
  pub kind: NodeKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
  Import(ImportDecl),
  ExportDefault(Box<Node>),
  /// Identifier in expression (reference) position.
  Identifier(String),
  /// Identifier in declaration position: declarator ids, params, patterns.
  Binding(String),
  Call { callee: Box<Node>, arguments: Vec<Node> },
  Object(Vec<Node>),
  Property { key: Box<Node>, value: Box<Node>, computed: bool },
  /// `children` covers params and body, plus the key when computed.
  Method { key: Box<Node>, computed: bool, children: Vec<Node> },
  Spread(Box<Node>),
  /// `None` marks an elision (`[a, , b]`).
  Array(Vec<Option<Node>>),
  Str(String),
  Member { object: Box<Node>, property: Box<Node>, computed: bool },
  Other { ty: String, children: Vec<Node> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportDecl {
  pub source: String,
  pub specifiers: Vec<ImportSpecifier>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportSpecifier {
  /// Exported name on the source module; `None` for default and namespace imports.
  pub imported: Option<String>,
  pub local: String,
  pub span: Span,
}

impl Node {
  pub fn new(span: Span, kind: NodeKind) -> Self {
    Self { span, kind }
  }

  /// Visit the children that sit in expression position, left to right.
  /// Non-computed property keys, member properties and import
  /// specifiers are not visited.
  pub fn for_each_child<'a>(&'a self, f: &mut impl FnMut(&'a Node)) {
    match &self.kind {
      NodeKind::Import(_) | NodeKind::Identifier(_) | NodeKind::Binding(_) | NodeKind::Str(_) => {}
      NodeKind::ExportDefault(decl) => f(decl),
      NodeKind::Call { callee, arguments } => {
        f(callee);
        arguments.iter().for_each(|arg| f(arg));
      }
      NodeKind::Object(properties) => properties.iter().for_each(|prop| f(prop)),
      NodeKind::Property { key, value, computed } => {
        if *computed {
          f(key);
        }
        f(value);
      }
      NodeKind::Method { children, .. } => children.iter().for_each(|child| f(child)),
      NodeKind::Spread(argument) => f(argument),
      NodeKind::Array(elements) => elements.iter().flatten().for_each(|el| f(el)),
      NodeKind::Member { object, property, computed } => {
        f(object);
        if *computed {
          f(property);
        }
      }
      NodeKind::Other { children, .. } => children.iter().for_each(|child| f(child)),
    }
  }

  /// Static name of a property key: identifiers and string literals.
  pub fn key_name(&self) -> Option<&str> {
    match &self.kind {
      NodeKind::Identifier(name) | NodeKind::Str(name) => Some(name),
      _ => None,
    }
  }
}
