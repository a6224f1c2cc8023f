//! Action contract.

use crate::Kind;

/// A stateful accumulator applied across subjects.
///
/// The contract is a minimal get/set pair: handlers read the current value with
/// [`retrieve`](Action::retrieve) and write the next one with
/// [`store`](Action::store). A store always overwrites. Every implementation
/// documents the value returned before its first store.
pub trait Action {
	/// Runtime kind reported by instances of this family.
	type Kind: Kind;
	/// Value accepted by [`store`](Action::store).
	type Input;
	/// Value produced by [`retrieve`](Action::retrieve).
	type Output;

	/// Runtime kind of this instance.
	fn kind(&self) -> Self::Kind;

	/// Replaces the current value.
	fn store(&mut self, input: Self::Input);

	/// Returns the current value.
	fn retrieve(&self) -> Self::Output;
}
