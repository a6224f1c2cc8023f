//! Handler (strategy) contract.

use std::fmt;
use std::sync::Arc;

use crate::{Action, Registry, RegistryError, Subject};

/// Shared handle to a bound strategy.
///
/// Broadcast binds install the same handle in every affected cell.
pub type SharedHandler<S, A> = Arc<dyn Handler<S, A>>;

/// Unit of behavior bound to one (subject kind, action kind) cell.
///
/// The registry is passed back in so that delegating strategies can dispatch
/// again on a different member of the subject's decoration chain.
pub trait Handler<S: Subject, A: Action>: Send + Sync {
	/// Which strategy variant this is, for introspection and table dumps.
	fn kind(&self) -> HandlerKind;

	/// Performs `action` on `subject`.
	fn execute(&self, action: &mut A, subject: &S, registry: &Registry<S, A>) -> Result<(), RegistryError>;
}

/// Introspectable identity of a bound strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandlerKind {
	/// Does nothing.
	Noop,
	/// Re-dispatches on the immediate decoratee.
	Defer,
	/// Re-dispatches on the innermost base subject.
	Bypass,
	/// Runs the decoratee's strategy against the decorated subject.
	Substitute,
	/// Fails with [`RegistryError::UnsupportedDispatch`].
	Unimplemented,
	/// A domain strategy, identified by name.
	Custom(&'static str),
}

impl fmt::Display for HandlerKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			HandlerKind::Noop => "no-op",
			HandlerKind::Defer => "defer",
			HandlerKind::Bypass => "bypass",
			HandlerKind::Substitute => "substitute",
			HandlerKind::Unimplemented => "unimplemented",
			HandlerKind::Custom(name) => *name,
		})
	}
}

/// Adapts a closure into a named [`Handler`].
///
/// The closure does not see the registry, so it cannot delegate; use a
/// dedicated type for strategies that need to re-dispatch.
///
/// ```ignore
/// let count = FnHandler::new("count", |op: &mut Count, _: &Element| {
/// 	op.store(op.retrieve() + 1);
/// 	Ok(())
/// });
/// registry.bind_across_subjects(CountKind, count)?;
/// ```
pub struct FnHandler<F> {
	name: &'static str,
	f: F,
}

impl<F> FnHandler<F> {
	/// Wraps `f`, reporting it as [`HandlerKind::Custom`] with `name`.
	pub const fn new(name: &'static str, f: F) -> Self {
		Self { name, f }
	}
}

impl<F> fmt::Debug for FnHandler<F> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FnHandler").field("name", &self.name).finish_non_exhaustive()
	}
}

impl<S, A, F> Handler<S, A> for FnHandler<F>
where
	S: Subject,
	A: Action,
	F: Fn(&mut A, &S) -> Result<(), RegistryError> + Send + Sync,
{
	fn kind(&self) -> HandlerKind {
		HandlerKind::Custom(self.name)
	}

	fn execute(&self, action: &mut A, subject: &S, _registry: &Registry<S, A>) -> Result<(), RegistryError> {
		(self.f)(action, subject)
	}
}
