/* src/cli/contract/src/contract.rs */

// Call contract for `defineRoute(...)`: one literal object argument,
// no spreads, no computed keys, and `params` as a literal string array.

use crate::ast::{Node, NodeKind};
use crate::export_shape::CallSite;
use crate::violation::{Violation, ViolationKind, first_in_source};

pub fn check_call(site: &CallSite<'_>) -> Option<Violation> {
  let argument = match site.arguments {
    [argument] => argument,
    [] => return Some(Violation::new(ViolationKind::WrongArgumentCount, site.span)),
    [first, .., last] => {
      return Some(Violation::new(ViolationKind::WrongArgumentCount, first.span.to(last.span)));
    }
  };

  let NodeKind::Object(properties) = &argument.kind else {
    return Some(Violation::new(ViolationKind::ArgumentNotObjectLiteral, argument.span));
  };

  first_in_source(check_properties(properties), check_params(properties))
}

/// Spreads and computed keys, whichever comes first in the literal.
fn check_properties(properties: &[Node]) -> Option<Violation> {
  properties.iter().find_map(|prop| match &prop.kind {
    NodeKind::Spread(_) => Some(Violation::new(ViolationKind::SpreadNotAllowed, prop.span)),
    NodeKind::Property { computed: true, .. } | NodeKind::Method { computed: true, .. } => {
      Some(Violation::new(ViolationKind::ComputedKeyNotAllowed, prop.span))
    }
    _ => None,
  })
}

fn check_params(properties: &[Node]) -> Option<Violation> {
  let prop = properties.iter().find(|prop| property_key(prop) == Some("params"))?;
  let NodeKind::Property { value, .. } = &prop.kind else {
    return Some(Violation::new(ViolationKind::ParamsNotArrayLiteral, prop.span));
  };
  let NodeKind::Array(elements) = &value.kind else {
    return Some(Violation::new(ViolationKind::ParamsNotArrayLiteral, prop.span));
  };

  elements.iter().find_map(|element| match element {
    Some(Node { kind: NodeKind::Str(_), .. }) => None,
    Some(other) => Some(Violation::new(ViolationKind::ParamNotStringLiteral, other.span)),
    // elisions have no node of their own
    None => Some(Violation::new(ViolationKind::ParamNotStringLiteral, value.span)),
  })
}

fn property_key(prop: &Node) -> Option<&str> {
  match &prop.kind {
    NodeKind::Property { key, computed: false, .. } | NodeKind::Method { key, computed: false, .. } => {
      key.key_name()
    }
    _ => None,
  }
}
