//! Arithmetic strategies bound into the table.
//!
//! Each one is generic over any subject and any action that stores and
//! retrieves an `i64`, so the same strategy can back several operations.
//! Arithmetic wraps on overflow.

use strata_table::{Action, Handler, HandlerKind, Registry, RegistryError, Subject};

/// Adds the subject's value to the running total.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddTotal;

/// Multiplies the running total by the subject's value.
#[derive(Debug, Clone, Copy, Default)]
pub struct MultTotal;

/// Counts the subject, ignoring its value.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountElement;

impl<S, A> Handler<S, A> for AddTotal
where
	S: Subject,
	A: Action<Input = i64, Output = i64>,
{
	fn kind(&self) -> HandlerKind {
		HandlerKind::Custom("add-total")
	}

	fn execute(&self, action: &mut A, subject: &S, _registry: &Registry<S, A>) -> Result<(), RegistryError> {
		action.store(action.retrieve().wrapping_add(subject.value()));
		Ok(())
	}
}

impl<S, A> Handler<S, A> for MultTotal
where
	S: Subject,
	A: Action<Input = i64, Output = i64>,
{
	fn kind(&self) -> HandlerKind {
		HandlerKind::Custom("mult-total")
	}

	fn execute(&self, action: &mut A, subject: &S, _registry: &Registry<S, A>) -> Result<(), RegistryError> {
		action.store(action.retrieve().wrapping_mul(subject.value()));
		Ok(())
	}
}

impl<S, A> Handler<S, A> for CountElement
where
	S: Subject,
	A: Action<Input = i64, Output = i64>,
{
	fn kind(&self) -> HandlerKind {
		HandlerKind::Custom("count-element")
	}

	fn execute(&self, action: &mut A, _subject: &S, _registry: &Registry<S, A>) -> Result<(), RegistryError> {
		action.store(action.retrieve().wrapping_add(1));
		Ok(())
	}
}
