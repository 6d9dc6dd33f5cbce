/* src/cli/contract/src/gate.rs */

use crate::binding::TrackedBinding;
use crate::violation::{Violation, ViolationKind};

/// Outside route modules, importing a tracked name is itself the violation,
/// whether or not the binding is ever referenced.
pub fn check_route_module_gate(
  bindings: &[TrackedBinding],
  is_route_module: bool,
) -> Option<Violation> {
  if is_route_module {
    return None;
  }
  let first = bindings.first()?;
  Some(Violation::new(ViolationKind::UsedOutsideRouteModule, first.specifier_span))
}
