/* src/cli/contract/src/span.rs */

use serde::Serialize;

/// A point in source text: 1-based line, 0-based column (in characters).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
  pub line: usize,
  pub column: usize,
}

impl Position {
  pub fn new(line: usize, column: usize) -> Self {
    Self { line, column }
  }
}

/// Source range of an AST node. `end` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
  pub start: Position,
  pub end: Position,
}

impl Span {
  pub fn new(start: Position, end: Position) -> Self {
    Self { start, end }
  }

  /// Smallest span covering both `self` and `other`.
  pub fn to(self, other: Span) -> Span {
    Span { start: self.start.min(other.start), end: self.end.max(other.end) }
  }

  pub fn is_single_line(&self) -> bool {
    self.start.line == self.end.line
  }
}
