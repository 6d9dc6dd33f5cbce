/* src/cli/contract/src/tests/fixture.rs */

// Build AST nodes whose spans are found by searching the source text,
// so fixtures stay readable and positions cannot drift from the code.

use crate::ast::{ImportDecl, ImportSpecifier, Node, NodeKind, Program};
use crate::span::{Position, Span};

pub(crate) struct Src {
  text: String,
}

impl Src {
  pub(crate) fn new(text: impl Into<String>) -> Self {
    Self { text: text.into() }
  }

  pub(crate) fn text(&self) -> &str {
    &self.text
  }

  /// Span of the first occurrence of `needle`.
  pub(crate) fn span(&self, needle: &str) -> Span {
    self.span_nth(needle, 0)
  }

  /// Span of the `n`th (0-based) occurrence of `needle`.
  pub(crate) fn span_nth(&self, needle: &str, n: usize) -> Span {
    let offset = self
      .text
      .match_indices(needle)
      .nth(n)
      .map(|(offset, _)| offset)
      .unwrap_or_else(|| panic!("occurrence {n} of `{needle}` not found"));
    self.span_at(offset, needle.len())
  }

  /// Like `span_nth`, but only counts whole-word matches.
  pub(crate) fn word_nth(&self, word: &str, n: usize) -> Span {
    let is_ident = |c: char| c.is_alphanumeric() || c == '_' || c == '$';
    let offset = self
      .text
      .match_indices(word)
      .filter(|(offset, _)| {
        let before = self.text[..*offset].chars().next_back();
        let after = self.text[offset + word.len()..].chars().next();
        !before.is_some_and(is_ident) && !after.is_some_and(is_ident)
      })
      .nth(n)
      .map(|(offset, _)| offset)
      .unwrap_or_else(|| panic!("word occurrence {n} of `{word}` not found"));
    self.span_at(offset, word.len())
  }

  fn span_at(&self, offset: usize, len: usize) -> Span {
    Span::new(self.position(offset), self.position(offset + len))
  }

  fn position(&self, offset: usize) -> Position {
    let before = &self.text[..offset];
    let line = before.matches('\n').count() + 1;
    // parsers count columns in UTF-16 code units
    let column = before.rsplit('\n').next().unwrap_or("").encode_utf16().count();
    Position::new(line, column)
  }

  pub(crate) fn ident(&self, name: &str, n: usize) -> Node {
    Node::new(self.word_nth(name, n), NodeKind::Identifier(name.to_string()))
  }

  pub(crate) fn binding(&self, name: &str, n: usize) -> Node {
    Node::new(self.word_nth(name, n), NodeKind::Binding(name.to_string()))
  }

  /// String literal from its quoted source form.
  pub(crate) fn string(&self, quoted: &str, n: usize) -> Node {
    let value = quoted.trim_matches(|c: char| c == '"' || c == '\'');
    Node::new(self.span_nth(quoted, n), NodeKind::Str(value.to_string()))
  }

  /// Leaf node of an arbitrary type.
  pub(crate) fn other(&self, needle: &str, n: usize, ty: &str) -> Node {
    other(self.span_nth(needle, n), ty, vec![])
  }

  /// Named imports: `(imported, local, specifier source text)`.
  pub(crate) fn import(&self, statement: &str, source: &str, specs: &[(&str, &str, &str)]) -> Node {
    let specifiers = specs
      .iter()
      .map(|(imported, local, text)| ImportSpecifier {
        imported: Some((*imported).to_string()),
        local: (*local).to_string(),
        span: self.span(text),
      })
      .collect();
    Node::new(
      self.span(statement),
      NodeKind::Import(ImportDecl { source: source.to_string(), specifiers }),
    )
  }

  /// Default or namespace import; the local name is the last word of `text`.
  pub(crate) fn import_default(&self, statement: &str, source: &str, text: &str) -> Node {
    let local = text.split_whitespace().last().unwrap_or(text).to_string();
    let span = self.span(statement);
    let spec_start = self
      .text
      .find(statement)
      .and_then(|at| statement.find(text).map(|inner| at + inner))
      .unwrap_or_else(|| panic!("`{text}` not found in `{statement}`"));
    let specifiers =
      vec![ImportSpecifier { imported: None, local, span: self.span_at(spec_start, text.len()) }];
    Node::new(span, NodeKind::Import(ImportDecl { source: source.to_string(), specifiers }))
  }
}

pub(crate) fn program(body: Vec<Node>) -> Program {
  Program { body }
}

pub(crate) fn export_default(span: Span, declaration: Node) -> Node {
  Node::new(span, NodeKind::ExportDefault(Box::new(declaration)))
}

pub(crate) fn call(span: Span, callee: Node, arguments: Vec<Node>) -> Node {
  Node::new(span, NodeKind::Call { callee: Box::new(callee), arguments })
}

pub(crate) fn object(span: Span, properties: Vec<Node>) -> Node {
  Node::new(span, NodeKind::Object(properties))
}

pub(crate) fn prop(span: Span, key: Node, value: Node) -> Node {
  Node::new(span, NodeKind::Property { key: Box::new(key), value: Box::new(value), computed: false })
}

pub(crate) fn computed_prop(span: Span, key: Node, value: Node) -> Node {
  Node::new(span, NodeKind::Property { key: Box::new(key), value: Box::new(value), computed: true })
}

pub(crate) fn method(span: Span, key: Node, computed: bool) -> Node {
  Node::new(span, NodeKind::Method { key: Box::new(key), computed, children: vec![] })
}

pub(crate) fn spread(span: Span, argument: Node) -> Node {
  Node::new(span, NodeKind::Spread(Box::new(argument)))
}

pub(crate) fn array(span: Span, elements: Vec<Option<Node>>) -> Node {
  Node::new(span, NodeKind::Array(elements))
}

pub(crate) fn other(span: Span, ty: &str, children: Vec<Node>) -> Node {
  Node::new(span, NodeKind::Other { ty: ty.to_string(), children })
}
