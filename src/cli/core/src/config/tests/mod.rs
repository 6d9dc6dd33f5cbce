/* src/cli/core/src/config/tests/mod.rs */

use super::*;


#[test]
fn minimal_config_gets_defaults() {
  let config = parse_contract_config(
    r#"
[project]
name = "demo"

[parser]
command = "node scripts/parse-module.mjs"
"#,
  )
  .unwrap();
  assert_eq!(config.project.name, "demo");
  assert_eq!(config.routes.app_dir, "app");
  assert!(config.routes.manifest.is_none());
  assert_eq!(config.check.extensions, vec!["ts", "tsx", "js", "jsx", "mjs"]);
  assert!(config.check.prefilter);
  assert!(config.worker_count() >= 1);
}

#[test]
fn explicit_sections_override_defaults() {
  let config = parse_contract_config(
    r#"
[project]
name = "demo"

[routes]
app_dir = "src/app"
manifest = "routes.json"
root = "layout.tsx"

[parser]
command = "bun parse.ts"

[check]
extensions = ["tsx"]
prefilter = false
jobs = 3
"#,
  )
  .unwrap();
  assert_eq!(config.routes.app_dir, "src/app");
  assert_eq!(config.routes.manifest.as_deref(), Some("routes.json"));
  assert_eq!(config.routes.root.as_deref(), Some("layout.tsx"));
  assert_eq!(config.check.extensions, vec!["tsx"]);
  assert!(!config.check.prefilter);
  assert_eq!(config.worker_count(), 3);
}

#[test]
fn empty_parser_command_is_rejected() {
  let err = parse_contract_config(
    r#"
[project]
name = "demo"

[parser]
command = "  "
"#,
  )
  .unwrap_err();
  assert!(err.to_string().contains("parser.command"), "error: {err}");
}

#[test]
fn dotted_extensions_are_rejected() {
  let err = parse_contract_config(
    r#"
[project]
name = "demo"

[parser]
command = "parse"

[check]
extensions = [".tsx"]
"#,
  )
  .unwrap_err();
  assert!(err.to_string().contains(".tsx"), "error: {err}");
}

#[test]
fn missing_parser_section_is_a_parse_error() {
  let err = parse_contract_config("[project]\nname = \"demo\"\n").unwrap_err();
  assert!(format!("{err:#}").contains("parser"), "error: {err:#}");
}
