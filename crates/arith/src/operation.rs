//! Accumulating operations: the action family of the demonstration table.

use std::fmt;
use std::str::FromStr;

use strata_table::Action;

use crate::UnknownKindName;

/// Runtime kind of an [`Operation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OperationKind {
	Total,
	Count,
}

impl OperationKind {
	pub const ALL: [OperationKind; 2] = [OperationKind::Total, OperationKind::Count];

	pub const fn name(self) -> &'static str {
		match self {
			OperationKind::Total => "Total",
			OperationKind::Count => "Count",
		}
	}
}

impl fmt::Display for OperationKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for OperationKind {
	type Err = UnknownKindName;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		OperationKind::ALL
			.into_iter()
			.find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
			.ok_or_else(|| UnknownKindName(s.to_string()))
	}
}

/// Running arithmetic total. Retrieves 0 before the first store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Total(i64);

impl Action for Total {
	type Kind = OperationKind;
	type Input = i64;
	type Output = i64;

	fn kind(&self) -> OperationKind {
		OperationKind::Total
	}

	fn store(&mut self, input: i64) {
		self.0 = input;
	}

	fn retrieve(&self) -> i64 {
		self.0
	}
}

/// Number of elements that took part. Retrieves 0 before the first store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Count(i64);

impl Action for Count {
	type Kind = OperationKind;
	type Input = i64;
	type Output = i64;

	fn kind(&self) -> OperationKind {
		OperationKind::Count
	}

	fn store(&mut self, input: i64) {
		self.0 = input;
	}

	fn retrieve(&self) -> i64 {
		self.0
	}
}

/// Either operation, so both can share one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
	Total(Total),
	Count(Count),
}

impl Operation {
	pub fn total() -> Self {
		Operation::Total(Total::default())
	}

	pub fn count() -> Self {
		Operation::Count(Count::default())
	}

	/// A fresh operation of `kind`.
	pub fn of_kind(kind: OperationKind) -> Self {
		match kind {
			OperationKind::Total => Self::total(),
			OperationKind::Count => Self::count(),
		}
	}
}

impl Action for Operation {
	type Kind = OperationKind;
	type Input = i64;
	type Output = i64;

	fn kind(&self) -> OperationKind {
		match self {
			Operation::Total(op) => op.kind(),
			Operation::Count(op) => op.kind(),
		}
	}

	fn store(&mut self, input: i64) {
		match self {
			Operation::Total(op) => op.store(input),
			Operation::Count(op) => op.store(input),
		}
	}

	fn retrieve(&self) -> i64 {
		match self {
			Operation::Total(op) => op.retrieve(),
			Operation::Count(op) => op.retrieve(),
		}
	}
}
