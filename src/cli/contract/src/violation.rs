/* src/cli/contract/src/violation.rs */

use serde::Serialize;

use crate::span::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViolationKind {
  UsedOutsideRouteModule,
  NotCalledAtDefaultExport,
  InvalidDefaultExport,
  WrongArgumentCount,
  ArgumentNotObjectLiteral,
  SpreadNotAllowed,
  ComputedKeyNotAllowed,
  ParamsNotArrayLiteral,
  ParamNotStringLiteral,
}

impl ViolationKind {
  pub const ALL: [ViolationKind; 9] = [
    Self::UsedOutsideRouteModule,
    Self::NotCalledAtDefaultExport,
    Self::InvalidDefaultExport,
    Self::WrongArgumentCount,
    Self::ArgumentNotObjectLiteral,
    Self::SpreadNotAllowed,
    Self::ComputedKeyNotAllowed,
    Self::ParamsNotArrayLiteral,
    Self::ParamNotStringLiteral,
  ];

  /// User-facing message; snapshot tooling matches these verbatim.
  pub fn message(self) -> &'static str {
    match self {
      Self::UsedOutsideRouteModule => "`defineRoute` cannot be used outside of route modules",
      Self::NotCalledAtDefaultExport => {
        "`defineRoute` must be a function call immediately after `export default`"
      }
      Self::InvalidDefaultExport => {
        "Default export of a route module must be either a literal object or a call to `defineRoute`"
      }
      Self::WrongArgumentCount => "`defineRoute` must take exactly one argument",
      Self::ArgumentNotObjectLiteral => "`defineRoute` argument must be a literal object",
      Self::SpreadNotAllowed => "Properties cannot be spread into route",
      Self::ComputedKeyNotAllowed => "Route cannot have computed keys",
      Self::ParamsNotArrayLiteral => "Route params must be a literal array",
      Self::ParamNotStringLiteral => "Route param must be a literal string",
    }
  }

  /// Stable identifier for machine-readable output.
  pub fn code(self) -> &'static str {
    match self {
      Self::UsedOutsideRouteModule => "used-outside-route-module",
      Self::NotCalledAtDefaultExport => "not-called-at-default-export",
      Self::InvalidDefaultExport => "invalid-default-export",
      Self::WrongArgumentCount => "wrong-argument-count",
      Self::ArgumentNotObjectLiteral => "argument-not-object-literal",
      Self::SpreadNotAllowed => "spread-not-allowed",
      Self::ComputedKeyNotAllowed => "computed-key-not-allowed",
      Self::ParamsNotArrayLiteral => "params-not-array-literal",
      Self::ParamNotStringLiteral => "param-not-string-literal",
    }
  }
}

impl std::fmt::Display for ViolationKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.code())
  }
}

/// A single contract violation, anchored at the offending source range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
  pub kind: ViolationKind,
  pub span: Span,
  pub message: &'static str,
}

impl Violation {
  pub fn new(kind: ViolationKind, span: Span) -> Self {
    Self { kind, span, message: kind.message() }
  }
}

/// Whichever violation starts first in the source; `a` on a tie.
pub fn first_in_source(a: Option<Violation>, b: Option<Violation>) -> Option<Violation> {
  match (a, b) {
    (Some(a), Some(b)) if b.span.start < a.span.start => Some(b),
    (a, b) => a.or(b),
  }
}
