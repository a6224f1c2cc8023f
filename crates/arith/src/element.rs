//! Arithmetic elements: the subject family of the demonstration table.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use strata_table::Subject;

#[cfg(test)]
mod tests;

/// Runtime kind of an [`Element`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementKind {
	Add,
	Mult,
	Ignore,
	Reverse,
}

impl ElementKind {
	pub const BASE: [ElementKind; 2] = [ElementKind::Add, ElementKind::Mult];
	pub const DECORATIONS: [ElementKind; 2] = [ElementKind::Ignore, ElementKind::Reverse];
	pub const ALL: [ElementKind; 4] = [ElementKind::Add, ElementKind::Mult, ElementKind::Ignore, ElementKind::Reverse];

	pub const fn name(self) -> &'static str {
		match self {
			ElementKind::Add => "Add",
			ElementKind::Mult => "Mult",
			ElementKind::Ignore => "Ignore",
			ElementKind::Reverse => "Reverse",
		}
	}

	pub const fn is_decoration(self) -> bool {
		matches!(self, ElementKind::Ignore | ElementKind::Reverse)
	}
}

impl fmt::Display for ElementKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// A name that is not an element or operation kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown kind `{0}`")]
pub struct UnknownKindName(pub String);

impl FromStr for ElementKind {
	type Err = UnknownKindName;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		ElementKind::ALL
			.into_iter()
			.find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
			.ok_or_else(|| UnknownKindName(s.to_string()))
	}
}

/// Immutable value carried by a base element. Shared between elements handed
/// out by an [`ElementCache`](crate::ElementCache).
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct BaseValue(i64);

impl BaseValue {
	pub fn new(value: i64) -> Self {
		Self(value)
	}

	pub fn get(&self) -> i64 {
		self.0
	}
}

/// An immutable arithmetic element.
///
/// `Ignore` keeps its decoratee's value and `Reverse` negates it; how either
/// takes part in an operation is decided by the strategy table, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
	Add(Arc<BaseValue>),
	Mult(Arc<BaseValue>),
	Ignore(Box<Element>),
	Reverse(Box<Element>),
}

impl Element {
	/// An uncached `Add` element. Use an [`ElementFactory`](crate::ElementFactory)
	/// to share base values.
	pub fn add(value: i64) -> Self {
		Element::Add(Arc::new(BaseValue::new(value)))
	}

	/// An uncached `Mult` element.
	pub fn mult(value: i64) -> Self {
		Element::Mult(Arc::new(BaseValue::new(value)))
	}

	pub fn ignored(self) -> Self {
		Element::Ignore(Box::new(self))
	}

	pub fn reversed(self) -> Self {
		Element::Reverse(Box::new(self))
	}

	/// Shared value of the terminal base element.
	pub fn base_value(&self) -> &Arc<BaseValue> {
		match self.base() {
			Element::Add(value) | Element::Mult(value) => value,
			// `base` never stops on a decoration.
			Element::Ignore(inner) | Element::Reverse(inner) => inner.base_value(),
		}
	}

	/// Whether both chains end in the very same base value instance.
	pub fn shares_base_with(&self, other: &Element) -> bool {
		Arc::ptr_eq(self.base_value(), other.base_value())
	}
}

impl Subject for Element {
	type Kind = ElementKind;

	fn kind(&self) -> ElementKind {
		match self {
			Element::Add(_) => ElementKind::Add,
			Element::Mult(_) => ElementKind::Mult,
			Element::Ignore(_) => ElementKind::Ignore,
			Element::Reverse(_) => ElementKind::Reverse,
		}
	}

	fn value(&self) -> i64 {
		match self {
			Element::Add(value) | Element::Mult(value) => value.get(),
			Element::Ignore(inner) => inner.value(),
			Element::Reverse(inner) => inner.value().wrapping_neg(),
		}
	}

	fn decoratee(&self) -> Option<&Self> {
		match self {
			Element::Ignore(inner) | Element::Reverse(inner) => Some(inner),
			Element::Add(_) | Element::Mult(_) => None,
		}
	}
}

impl fmt::Display for Element {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Element::Add(value) => write!(f, "Add({})", value.get()),
			Element::Mult(value) => write!(f, "Mult({})", value.get()),
			Element::Ignore(inner) => write!(f, "[Ignore] {inner}"),
			Element::Reverse(inner) => write!(f, "[Reverse] {inner}"),
		}
	}
}
