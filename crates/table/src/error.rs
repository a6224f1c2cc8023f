use std::fmt;

use crate::Axis;
use crate::subject::InvalidLevel;

/// Errors raised while configuring a strategy table or dispatching through it.
///
/// A bind rejected because its cell is locked is not an error: the `bind*`
/// operations report it as `Ok(false)`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
	/// The declared kind sets cannot form a table.
	#[error("invalid configuration: {0}")]
	InvalidConfiguration(String),
	/// A kind that was never declared to the table was referenced.
	#[error("unknown {axis} kind `{kind}`")]
	UnknownKind { axis: Axis, kind: String },
	/// A decoration-only operation was used with a base kind.
	#[error("`{kind}` is not a decoration kind")]
	NotADecoration { kind: String },
	/// The unimplemented strategy was executed.
	#[error("no strategy configured for applying `{action}` to `{subject}`")]
	UnsupportedDispatch { action: String, subject: String },
	/// A subject was asked for a decoration level it does not have.
	#[error(transparent)]
	InvalidLevel(#[from] InvalidLevel),
}

impl RegistryError {
	pub(crate) fn unknown(axis: Axis, kind: impl fmt::Display) -> Self {
		Self::UnknownKind {
			axis,
			kind: kind.to_string(),
		}
	}

	pub(crate) fn not_a_decoration(kind: impl fmt::Display) -> Self {
		Self::NotADecoration { kind: kind.to_string() }
	}

	pub(crate) fn unsupported(action: impl fmt::Display, subject: impl fmt::Display) -> Self {
		Self::UnsupportedDispatch {
			action: action.to_string(),
			subject: subject.to_string(),
		}
	}
}
