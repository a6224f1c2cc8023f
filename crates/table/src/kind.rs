//! Identifiers for the two dispatch axes.

use std::fmt;
use std::hash::Hash;

/// Identifier of a concrete subject or action variant.
///
/// Kinds are small closed enums in practice. They key the strategy table, so
/// they must be cheap to copy and hash, and they must render a readable name
/// for diagnostics and error messages.
pub trait Kind: Copy + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static {}

impl<T> Kind for T where T: Copy + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static {}

/// One of the two axes of a strategy table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
	/// Rows: the kinds of subjects dispatched upon.
	Subject,
	/// Columns: the kinds of actions applied to subjects.
	Action,
}

impl fmt::Display for Axis {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Axis::Subject => "subject",
			Axis::Action => "action",
		})
	}
}
