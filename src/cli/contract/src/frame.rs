/* src/cli/contract/src/frame.rs */

// Two-line code frame under a span:
//
//   > 3 | export default thing
//       |                ^^^^^
//
// Only the first line of a span is shown; multi-line spans underline
// from the start column to the end of that line.

use crate::span::Span;

pub fn render_frame(source: &str, span: Span) -> String {
  let line_number = span.start.line;
  let line = source_line(source, line_number);
  let line_width = line.chars().count();

  let start = char_column(line, span.start.column);
  let end = if span.is_single_line() { char_column(line, span.end.column) } else { line_width };
  let width = end.min(line_width).saturating_sub(start.min(line_width)).max(1);

  let number = line_number.to_string();
  let gutter = " ".repeat(number.len() + 3);
  format!(
    "> {number} | {line}\n{gutter}| {pad}{carets}",
    pad = " ".repeat(start),
    carets = "^".repeat(width),
  )
}

/// Map a UTF-16 column, as parsers report it, to a `char` column.
/// Columns past the end of the line keep their overshoot.
fn char_column(line: &str, utf16_column: usize) -> usize {
  let mut units = 0;
  for (index, c) in line.chars().enumerate() {
    if units >= utf16_column {
      return index;
    }
    units += c.len_utf16();
  }
  line.chars().count() + utf16_column.saturating_sub(units)
}

/// 1-based physical line without its terminator; empty when out of range.
fn source_line(source: &str, line_number: usize) -> &str {
  line_number
    .checked_sub(1)
    .and_then(|index| source.split('\n').nth(index))
    .map(|line| line.strip_suffix('\r').unwrap_or(line))
    .unwrap_or("")
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::span::Position;

  fn span(l1: usize, c1: usize, l2: usize, c2: usize) -> Span {
    Span::new(Position::new(l1, c1), Position::new(l2, c2))
  }

  #[test]
  fn underlines_import_specifier() {
    let source = "import { defineRoute } from \"react-router\"\nexport const planet = \"world\"";
    let frame = render_frame(source, span(1, 9, 1, 20));
    assert_eq!(
      frame,
      "> 1 | import { defineRoute } from \"react-router\"\n    |          ^^^^^^^^^^^"
    );
  }

  #[test]
  fn gutter_widens_with_line_number() {
    let mut source = String::new();
    for i in 1..=12 {
      source.push_str(&format!("const v{i} = {i}\n"));
    }
    let frame = render_frame(&source, span(12, 6, 12, 9));
    assert_eq!(frame, "> 12 | const v12 = 12\n     |       ^^^");
  }

  #[test]
  fn multi_line_span_runs_to_end_of_first_line() {
    let source = "export default defineRoute({\n  ...dynamic,\n})";
    let frame = render_frame(source, span(1, 15, 3, 2));
    assert_eq!(
      frame,
      "> 1 | export default defineRoute({\n    |                ^^^^^^^^^^^^^"
    );
  }

  #[test]
  fn crlf_is_trimmed() {
    let source = "let x = 1\r\nexport default thing\r\n";
    let frame = render_frame(source, span(2, 15, 2, 20));
    assert_eq!(frame, "> 2 | export default thing\n    |                ^^^^^");
  }

  #[test]
  fn empty_span_still_gets_a_caret() {
    let frame = render_frame("abc", span(1, 1, 1, 1));
    assert_eq!(frame, "> 1 | abc\n    |  ^");
  }

  #[test]
  fn astral_characters_count_two_columns() {
    // the emoji is two UTF-16 units wide
    let source = "let s = \"\u{1F600}\"; thing";
    let frame = render_frame(source, span(1, 14, 1, 19));
    assert_eq!(frame, "> 1 | let s = \"\u{1F600}\"; thing\n    |              ^^^^^");
  }

  #[test]
  fn out_of_range_line_renders_empty() {
    let frame = render_frame("abc", span(5, 0, 5, 2));
    assert_eq!(frame, "> 5 | \n    | ^");
  }
}
