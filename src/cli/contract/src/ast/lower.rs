/* src/cli/contract/src/ast/lower.rs */

// Lower a Babel-compatible JSON AST (or the ESTree flavour with `loc`)
// into the typed `Node` tree. Children of untyped nodes are sorted by
// span so traversal order never depends on JSON key order.

use anyhow::{Context, Result, bail};
use serde_json::Value;

use super::{ImportDecl, ImportSpecifier, Node, NodeKind, Program};
use crate::span::{Position, Span};

/// Fields that never hold expression-position nodes.
const SKIPPED_FIELDS: &[&str] = &[
  "type",
  "loc",
  "range",
  "start",
  "end",
  "extra",
  "comments",
  "tokens",
  "errors",
  "leadingComments",
  "trailingComments",
  "innerComments",
  "label",
  "exported",
  "meta",
  "typeAnnotation",
  "returnType",
  "typeParameters",
  "typeArguments",
  "superTypeParameters",
  "predicate",
];

/// Fields whose direct identifiers declare rather than reference a name.
const DECLARATION_FIELDS: &[&str] = &["id", "params", "param"];

/// Node types that keep the declaration position of their parent.
const PATTERN_TYPES: &[&str] = &[
  "Identifier",
  "ObjectPattern",
  "ArrayPattern",
  "RestElement",
  "AssignmentPattern",
  "ObjectProperty",
  "Property",
  "TSParameterProperty",
];

/// TypeScript nodes that wrap or declare runtime values; all other `TS*`
/// nodes are type-level and contribute no references.
const TS_VALUE_TYPES: &[&str] = &[
  "TSAsExpression",
  "TSSatisfiesExpression",
  "TSNonNullExpression",
  "TSTypeAssertion",
  "TSInstantiationExpression",
  "TSParameterProperty",
  "TSExportAssignment",
  "TSEnumDeclaration",
  "TSEnumMember",
];

pub fn parse_program_json(json: &str) -> Result<Program> {
  let root: Value = serde_json::from_str(json).context("AST is not valid JSON")?;
  lower_program(&root)
}

/// Accepts a Babel `File` root or a bare `Program`.
pub fn lower_program(root: &Value) -> Result<Program> {
  let program = match node_type(root)? {
    "File" => root.get("program").context("`File` node has no `program`")?,
    "Program" => root,
    other => bail!("expected a `File` or `Program` root, found `{other}`"),
  };
  let body = program
    .get("body")
    .and_then(Value::as_array)
    .context("`Program` node has no `body` array")?;
  let body = body.iter().map(lower_node).collect::<Result<Vec<_>>>()?;
  Ok(Program { body })
}

fn lower_node(value: &Value) -> Result<Node> {
  lower(value, false)
}

fn lower(value: &Value, declaration: bool) -> Result<Node> {
  let ty = node_type(value)?;
  let span = span_of(value).with_context(|| format!("`{ty}` node has no usable `loc`"))?;
  let declaration = declaration && PATTERN_TYPES.contains(&ty);

  let kind = match ty {
    "Identifier" => {
      let name = str_field(value, "name", ty)?.to_string();
      if declaration { NodeKind::Binding(name) } else { NodeKind::Identifier(name) }
    }
    "ImportDeclaration" => NodeKind::Import(lower_import(value)?),
    "ExportDefaultDeclaration" => {
      NodeKind::ExportDefault(Box::new(lower_node(field(value, "declaration", ty)?)?))
    }
    "CallExpression" => NodeKind::Call {
      callee: Box::new(lower_node(field(value, "callee", ty)?)?),
      arguments: lower_list(value, "arguments", ty)?,
    },
    "ObjectExpression" => NodeKind::Object(lower_list(value, "properties", ty)?),
    "ObjectProperty" | "Property" => NodeKind::Property {
      key: Box::new(lower_node(field(value, "key", ty)?)?),
      value: Box::new(lower(field(value, "value", ty)?, declaration)?),
      computed: is_computed(value),
    },
    "ObjectMethod" => NodeKind::Method {
      key: Box::new(lower_node(field(value, "key", ty)?)?),
      computed: is_computed(value),
      children: generic_children(value, ty, false)?,
    },
    "SpreadElement" | "SpreadProperty" => {
      NodeKind::Spread(Box::new(lower_node(field(value, "argument", ty)?)?))
    }
    "ArrayExpression" => {
      let elements = value
        .get("elements")
        .and_then(Value::as_array)
        .context("`ArrayExpression` node has no `elements` array")?;
      let elements = elements
        .iter()
        .map(|el| if el.is_null() { Ok(None) } else { lower_node(el).map(Some) })
        .collect::<Result<Vec<_>>>()?;
      NodeKind::Array(elements)
    }
    "StringLiteral" => NodeKind::Str(str_field(value, "value", ty)?.to_string()),
    "Literal" if value.get("value").is_some_and(Value::is_string) => {
      NodeKind::Str(str_field(value, "value", ty)?.to_string())
    }
    "MemberExpression" | "OptionalMemberExpression" => NodeKind::Member {
      object: Box::new(lower_node(field(value, "object", ty)?)?),
      property: Box::new(lower_node(field(value, "property", ty)?)?),
      computed: is_computed(value),
    },
    // `export { x } from "m"` names bindings of another module
    "ExportNamedDeclaration" | "ExportAllDeclaration"
      if value.get("source").is_some_and(|s| !s.is_null()) =>
    {
      NodeKind::Other { ty: ty.to_string(), children: Vec::new() }
    }
    _ if ty.starts_with("TS") && !TS_VALUE_TYPES.contains(&ty) => {
      NodeKind::Other { ty: ty.to_string(), children: Vec::new() }
    }
    _ => NodeKind::Other { ty: ty.to_string(), children: generic_children(value, ty, declaration)? },
  };

  Ok(Node::new(span, kind))
}

fn lower_import(value: &Value) -> Result<ImportDecl> {
  let source = value
    .get("source")
    .and_then(|s| s.get("value"))
    .and_then(Value::as_str)
    .unwrap_or_default()
    .to_string();
  let mut specifiers = Vec::new();
  for spec in value.get("specifiers").and_then(Value::as_array).into_iter().flatten() {
    let ty = node_type(spec)?;
    let span = span_of(spec).with_context(|| format!("`{ty}` node has no usable `loc`"))?;
    let local = export_name(field(spec, "local", ty)?)?;
    let imported = match ty {
      "ImportSpecifier" => Some(export_name(field(spec, "imported", ty)?)?),
      _ => None,
    };
    specifiers.push(ImportSpecifier { imported, local, span });
  }
  Ok(ImportDecl { source, specifiers })
}

/// Module export names are identifiers or, since ES2022, string literals.
fn export_name(value: &Value) -> Result<String> {
  let ty = node_type(value)?;
  let key = if ty == "Identifier" { "name" } else { "value" };
  Ok(str_field(value, key, ty)?.to_string())
}

fn lower_list(value: &Value, name: &str, ty: &str) -> Result<Vec<Node>> {
  let items = value
    .get(name)
    .and_then(Value::as_array)
    .with_context(|| format!("`{ty}` node has no `{name}` array"))?;
  items.iter().map(lower_node).collect()
}

fn generic_children(value: &Value, ty: &str, declaration: bool) -> Result<Vec<Node>> {
  let Some(object) = value.as_object() else { return Ok(Vec::new()) };
  let computed = is_computed(value);
  let mut children = Vec::new();

  for (key, child) in object {
    if SKIPPED_FIELDS.contains(&key.as_str()) {
      continue;
    }
    if matches!(key.as_str(), "key" | "property") && !computed {
      continue;
    }
    let child_declaration = if declaration {
      !(ty == "AssignmentPattern" && key == "right")
    } else {
      DECLARATION_FIELDS.contains(&key.as_str())
    };
    match child {
      Value::Array(items) => {
        for item in items.iter().filter(|item| is_node(item)) {
          children.push(lower(item, child_declaration)?);
        }
      }
      Value::Object(_) if is_node(child) => children.push(lower(child, child_declaration)?),
      _ => {}
    }
  }

  children.sort_by_key(|node| node.span.start);
  Ok(children)
}

fn is_node(value: &Value) -> bool {
  value.get("type").is_some_and(Value::is_string)
}

fn is_computed(value: &Value) -> bool {
  value.get("computed").and_then(Value::as_bool).unwrap_or(false)
}

fn node_type(value: &Value) -> Result<&str> {
  value.get("type").and_then(Value::as_str).context("AST node has no `type`")
}

fn field<'a>(value: &'a Value, name: &str, ty: &str) -> Result<&'a Value> {
  match value.get(name) {
    Some(child) if !child.is_null() => Ok(child),
    _ => bail!("`{ty}` node has no `{name}`"),
  }
}

fn str_field<'a>(value: &'a Value, name: &str, ty: &str) -> Result<&'a str> {
  field(value, name, ty)?.as_str().with_context(|| format!("`{ty}`.`{name}` is not a string"))
}

fn span_of(value: &Value) -> Result<Span> {
  let loc = value.get("loc").context("missing `loc`")?;
  Ok(Span::new(position(loc, "start")?, position(loc, "end")?))
}

fn position(loc: &Value, which: &str) -> Result<Position> {
  let point = loc.get(which).with_context(|| format!("missing `loc.{which}`"))?;
  let line = point.get("line").and_then(Value::as_u64);
  let column = point.get("column").and_then(Value::as_u64);
  match (line, column) {
    (Some(line), Some(column)) => Ok(Position::new(line as usize, column as usize)),
    _ => bail!("`loc.{which}` needs numeric `line` and `column`"),
  }
}
