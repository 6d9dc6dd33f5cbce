/* src/cli/core/src/check/report.rs */

use std::io::Write;

use anyhow::{Context, Result};
use route_contract::Diagnostic;

use crate::ui::{BOLD, RED, RESET};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
  Pretty,
  Json,
}

/// Plain diagnostic block: path header, message, blank line, code frame.
pub fn format_diagnostic(diagnostic: &Diagnostic) -> String {
  format!("{}\n{diagnostic}\n", diagnostic.file_path.display())
}

pub fn report_diagnostic(diagnostic: &Diagnostic, format: OutputFormat) -> Result<()> {
  match format {
    OutputFormat::Pretty => {
      let mut stderr = std::io::stderr().lock();
      write!(stderr, "\n{RED}{BOLD}error{RESET} ")?;
      writeln!(stderr, "{}", format_diagnostic(diagnostic))?;
    }
    OutputFormat::Json => {
      let line = serde_json::to_string(diagnostic).context("failed to serialize diagnostic")?;
      println!("{line}");
    }
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use std::path::Path;

  use route_contract::{Module, Program};

  use super::*;

  fn diagnostic() -> Diagnostic {
    let source = "import { defineRoute } from \"react-router\"\n";
    let json = r#"{
      "type": "Program",
      "body": [{
        "type": "ImportDeclaration",
        "loc": { "start": { "line": 1, "column": 0 }, "end": { "line": 1, "column": 42 } },
        "source": { "type": "StringLiteral", "value": "react-router",
          "loc": { "start": { "line": 1, "column": 28 }, "end": { "line": 1, "column": 42 } } },
        "specifiers": [{
          "type": "ImportSpecifier",
          "loc": { "start": { "line": 1, "column": 9 }, "end": { "line": 1, "column": 20 } },
          "imported": { "type": "Identifier", "name": "defineRoute",
            "loc": { "start": { "line": 1, "column": 9 }, "end": { "line": 1, "column": 20 } } },
          "local": { "type": "Identifier", "name": "defineRoute",
            "loc": { "start": { "line": 1, "column": 9 }, "end": { "line": 1, "column": 20 } } }
        }]
      }]
    }"#;
    let program: Program = route_contract::parse_program_json(json).unwrap();
    let module = Module {
      file_path: Path::new("app/utils.ts"),
      source_text: source,
      program: &program,
      is_route_module: false,
    };
    route_contract::check(&module).unwrap()
  }

  #[test]
  fn pretty_block_has_path_header() {
    assert_eq!(
      format_diagnostic(&diagnostic()),
      "app/utils.ts\n\
       `defineRoute` cannot be used outside of route modules\n\
       \n\
       > 1 | import { defineRoute } from \"react-router\"\n\
       \x20   |          ^^^^^^^^^^^\n"
    );
  }

  #[test]
  fn json_line_is_one_object() {
    let line = serde_json::to_string(&diagnostic()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&line).unwrap();
    assert_eq!(value["file_path"], "app/utils.ts");
    assert_eq!(value["kind"], "used-outside-route-module");
    assert_eq!(value["span"]["start"]["column"], 9);
    assert!(!line.contains('\n'));
  }
}
