//! Small subject and action families used by the unit tests.

use std::fmt;

use crate::{Action, FnHandler, Policy, Registry, RegistryError, Subject};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum NodeKind {
	Lit,
	Scale,
	Quiet,
	Flip,
	/// Never declared to any test table.
	Stray,
}

impl fmt::Display for NodeKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(self, f)
	}
}

/// `Quiet` keeps its decoratee's value, `Flip` negates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Node {
	Lit(i64),
	Scale(i64),
	Quiet(Box<Node>),
	Flip(Box<Node>),
	Stray(i64),
}

impl Node {
	pub(crate) fn quiet(self) -> Self {
		Node::Quiet(Box::new(self))
	}

	pub(crate) fn flip(self) -> Self {
		Node::Flip(Box::new(self))
	}
}

impl Subject for Node {
	type Kind = NodeKind;

	fn kind(&self) -> NodeKind {
		match self {
			Node::Lit(_) => NodeKind::Lit,
			Node::Scale(_) => NodeKind::Scale,
			Node::Quiet(_) => NodeKind::Quiet,
			Node::Flip(_) => NodeKind::Flip,
			Node::Stray(_) => NodeKind::Stray,
		}
	}

	fn value(&self) -> i64 {
		match self {
			Node::Lit(v) | Node::Scale(v) | Node::Stray(v) => *v,
			Node::Quiet(inner) => inner.value(),
			Node::Flip(inner) => -inner.value(),
		}
	}

	fn decoratee(&self) -> Option<&Self> {
		match self {
			Node::Quiet(inner) | Node::Flip(inner) => Some(inner),
			Node::Lit(_) | Node::Scale(_) | Node::Stray(_) => None,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum TallyKind {
	Sum,
	Count,
	/// Never declared to any test table.
	Stray,
}

impl fmt::Display for TallyKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(self, f)
	}
}

/// Integer accumulator; starts at 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Tally {
	kind: TallyKind,
	value: i64,
}

impl Tally {
	pub(crate) fn new(kind: TallyKind) -> Self {
		Self { kind, value: 0 }
	}
}

impl Action for Tally {
	type Kind = TallyKind;
	type Input = i64;
	type Output = i64;

	fn kind(&self) -> TallyKind {
		self.kind
	}

	fn store(&mut self, input: i64) {
		self.value = input;
	}

	fn retrieve(&self) -> i64 {
		self.value
	}
}

pub(crate) type TestRegistry = Registry<Node, Tally>;

type TallyFn = fn(&mut Tally, &Node) -> Result<(), RegistryError>;

pub(crate) type TestHandler = FnHandler<TallyFn>;

/// Adds the subject's observable value to the tally.
pub(crate) fn add_value() -> TestHandler {
	let f: TallyFn = |tally, node| {
		tally.store(tally.retrieve() + node.value());
		Ok(())
	};
	FnHandler::new("add-value", f)
}

/// Multiplies the tally by the subject's observable value.
pub(crate) fn mul_value() -> TestHandler {
	let f: TallyFn = |tally, node| {
		tally.store(tally.retrieve() * node.value());
		Ok(())
	};
	FnHandler::new("mul-value", f)
}

pub(crate) fn count() -> TestHandler {
	let f: TallyFn = |tally, _| {
		tally.store(tally.retrieve() + 1);
		Ok(())
	};
	FnHandler::new("count", f)
}

pub(crate) const BASE: [NodeKind; 2] = [NodeKind::Lit, NodeKind::Scale];
pub(crate) const DECORATIONS: [NodeKind; 2] = [NodeKind::Quiet, NodeKind::Flip];
pub(crate) const ACTIONS: [TallyKind; 2] = [TallyKind::Sum, TallyKind::Count];

pub(crate) fn table(policy: Policy) -> TestRegistry {
	Registry::new(BASE, DECORATIONS, ACTIONS, policy).expect("test kind sets are disjoint")
}

/// A table under `policy` with `Lit` summing, `Scale` multiplying and every
/// subject counted.
pub(crate) fn configured(policy: Policy) -> TestRegistry {
	let mut table = table(policy);
	assert!(table.bind(TallyKind::Sum, NodeKind::Lit, add_value()).unwrap());
	assert!(table.bind(TallyKind::Sum, NodeKind::Scale, mul_value()).unwrap());
	assert!(table.bind_across_subjects(TallyKind::Count, count()).unwrap());
	table
}
