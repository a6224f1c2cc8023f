//! Default-resolution policies.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::meta::{Bypass, Noop, Substitute, Unimplemented};
use crate::{Action, HandlerKind, SharedHandler, Subject};


/// Chooses the strategy seeded into every cell at construction, split by
/// whether the cell's subject kind is a base or a decoration kind.
///
/// | Policy    | Base          | Decoration    |
/// |-----------|---------------|---------------|
/// | `Strict`  | Unimplemented | Unimplemented |
/// | `Ignore`  | No-op         | No-op         |
/// | `Default` | No-op         | Substitute    |
/// | `Bypass`  | No-op         | Bypass        |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Policy {
	/// Every cell must be bound explicitly before it is dispatched through.
	Strict,
	/// Unbound cells silently do nothing.
	Ignore,
	/// Unbound decoration cells fall through to their decoratee's strategy,
	/// applied to the decoration.
	#[default]
	Default,
	/// Unbound decoration cells dispatch straight to the base subject.
	Bypass,
}

/// A policy name did not match any known policy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown policy `{0}` (expected one of: strict, ignore, default, bypass)")]
pub struct UnknownPolicy(pub String);

impl Policy {
	pub const ALL: [Policy; 4] = [Policy::Strict, Policy::Ignore, Policy::Default, Policy::Bypass];

	pub const fn name(self) -> &'static str {
		match self {
			Policy::Strict => "strict",
			Policy::Ignore => "ignore",
			Policy::Default => "default",
			Policy::Bypass => "bypass",
		}
	}

	/// Kind of the strategy seeded for base subject kinds.
	pub const fn base_handler_kind(self) -> HandlerKind {
		match self {
			Policy::Strict => HandlerKind::Unimplemented,
			Policy::Ignore | Policy::Default | Policy::Bypass => HandlerKind::Noop,
		}
	}

	/// Kind of the strategy seeded for decoration subject kinds.
	pub const fn decoration_handler_kind(self) -> HandlerKind {
		match self {
			Policy::Strict => HandlerKind::Unimplemented,
			Policy::Ignore => HandlerKind::Noop,
			Policy::Default => HandlerKind::Substitute,
			Policy::Bypass => HandlerKind::Bypass,
		}
	}

	pub fn default_base_handler<S: Subject, A: Action>(self) -> SharedHandler<S, A> {
		match self {
			Policy::Strict => Arc::new(Unimplemented),
			Policy::Ignore | Policy::Default | Policy::Bypass => Arc::new(Noop),
		}
	}

	pub fn default_decoration_handler<S: Subject, A: Action>(self) -> SharedHandler<S, A> {
		match self {
			Policy::Strict => Arc::new(Unimplemented),
			Policy::Ignore => Arc::new(Noop),
			Policy::Default => Arc::new(Substitute),
			Policy::Bypass => Arc::new(Bypass),
		}
	}
}

impl fmt::Display for Policy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Policy {
	type Err = UnknownPolicy;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"strict" => Ok(Policy::Strict),
			"ignore" | "no-defer" => Ok(Policy::Ignore),
			"default" => Ok(Policy::Default),
			"bypass" => Ok(Policy::Bypass),
			_ => Err(UnknownPolicy(s.to_string())),
		}
	}
}
