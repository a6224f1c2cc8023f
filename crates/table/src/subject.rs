//! Subject model.
//!
//! A subject is either a *base* value holder or a *decoration* wrapping exactly
//! one other subject. Decorations form a chain that always terminates in a
//! single base subject; the chain is acyclic because a decoration can only be
//! built around a subject that already exists.

use crate::Kind;

/// A decoration level beyond what the subject actually has was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("subject at decoration level {level} cannot be viewed at level {requested}")]
pub struct InvalidLevel {
	/// Level that was asked for.
	pub requested: usize,
	/// Decoration level of the subject that was asked.
	pub level: usize,
}

/// Capability contract of every subject variant.
///
/// Implementors provide [`kind`](Subject::kind), [`value`](Subject::value) and
/// [`decoratee`](Subject::decoratee); the level walking operations are derived
/// from the decoratee chain. Implementations with a cheaper way to compute the
/// level may override [`decoration_level`](Subject::decoration_level).
pub trait Subject {
	/// Runtime kind reported by instances of this family.
	type Kind: Kind;

	/// Runtime kind of this instance. Dispatch is keyed on this, never on a
	/// statically declared type.
	fn kind(&self) -> Self::Kind;

	/// Observable value of this subject, including any decoration transform.
	fn value(&self) -> i64;

	/// The subject this one decorates, or `None` for a base subject.
	fn decoratee(&self) -> Option<&Self>;

	/// Whether this subject wraps another one.
	fn is_decoration(&self) -> bool {
		self.decoratee().is_some()
	}

	/// Number of decoration layers between this subject and its base (0 for a base).
	fn decoration_level(&self) -> usize {
		let mut level = 0;
		let mut current = self;
		while let Some(inner) = current.decoratee() {
			level += 1;
			current = inner;
		}
		level
	}

	/// Returns the member of this subject's chain at decoration `level`.
	///
	/// Level 0 is the terminal base subject, and the subject's own level returns
	/// the subject itself.
	///
	/// # Errors
	///
	/// Returns [`InvalidLevel`] when `level` exceeds [`decoration_level`](Subject::decoration_level).
	fn as_decoration_at_level(&self, level: usize) -> Result<&Self, InvalidLevel> {
		let own = self.decoration_level();
		if level > own {
			return Err(InvalidLevel { requested: level, level: own });
		}

		let mut current = self;
		for _ in level..own {
			match current.decoratee() {
				Some(inner) => current = inner,
				None => break,
			}
		}
		Ok(current)
	}

	/// The innermost base subject of this chain.
	fn base(&self) -> &Self {
		let mut current = self;
		while let Some(inner) = current.decoratee() {
			current = inner;
		}
		current
	}
}

#[cfg(test)]
mod tests;
