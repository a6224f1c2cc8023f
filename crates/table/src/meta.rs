//! Meta strategies.
//!
//! These are the building blocks of the resolution policies. The three
//! decoration strategies differ in how a decoration takes part in dispatch:
//!
//! - [`Defer`]: act as if the decoration were absent, one layer at a time.
//! - [`Bypass`]: act as if every decoration were absent, jumping to the base.
//! - [`Substitute`]: reuse the decoratee's strategy but keep the decoration's
//!   own observable value.

use crate::{Action, Handler, HandlerKind, Registry, RegistryError, Subject};


/// Performs no mutation and always succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct Noop;

impl<S: Subject, A: Action> Handler<S, A> for Noop {
	fn kind(&self) -> HandlerKind {
		HandlerKind::Noop
	}

	fn execute(&self, _action: &mut A, _subject: &S, _registry: &Registry<S, A>) -> Result<(), RegistryError> {
		Ok(())
	}
}

/// Dispatches again on the immediate decoratee.
#[derive(Debug, Clone, Copy, Default)]
pub struct Defer;

impl<S: Subject, A: Action> Handler<S, A> for Defer {
	fn kind(&self) -> HandlerKind {
		HandlerKind::Defer
	}

	fn execute(&self, action: &mut A, subject: &S, registry: &Registry<S, A>) -> Result<(), RegistryError> {
		let level = require_decoration(subject)?;
		let decoratee = subject.as_decoration_at_level(level - 1)?;
		registry.apply(action, decoratee)
	}
}

/// Dispatches again on the innermost base subject, skipping the strategies of
/// every intermediate decoration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bypass;

impl<S: Subject, A: Action> Handler<S, A> for Bypass {
	fn kind(&self) -> HandlerKind {
		HandlerKind::Bypass
	}

	fn execute(&self, action: &mut A, subject: &S, registry: &Registry<S, A>) -> Result<(), RegistryError> {
		require_decoration(subject)?;
		let base = subject.as_decoration_at_level(0)?;
		registry.apply(action, base)
	}
}

/// Executes the strategy bound for the decoratee's kind, passing the decorated
/// subject itself.
///
/// When the decoratee's cell is itself a substitute, resolution continues one
/// level further down the chain. The subject handed to the resolved strategy is
/// always the one this strategy was invoked with.
#[derive(Debug, Clone, Copy, Default)]
pub struct Substitute;

impl<S: Subject, A: Action> Handler<S, A> for Substitute {
	fn kind(&self) -> HandlerKind {
		HandlerKind::Substitute
	}

	fn execute(&self, action: &mut A, subject: &S, registry: &Registry<S, A>) -> Result<(), RegistryError> {
		let level = require_decoration(subject)?;
		let action_kind = action.kind();

		for below in (0..level).rev() {
			let kind = subject.as_decoration_at_level(below)?.kind();
			let handler = registry.handler(action_kind, kind)?;
			if handler.kind() != HandlerKind::Substitute {
				tracing::trace!(
					subject = %subject.kind(),
					action = %action_kind,
					resolved = %kind,
					handler = %handler.kind(),
					"substituting strategy",
				);
				return handler.execute(action, subject, registry);
			}
		}

		Err(RegistryError::not_a_decoration(subject.base().kind()))
	}
}

/// Always fails, naming the action and subject kinds involved.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unimplemented;

impl<S: Subject, A: Action> Handler<S, A> for Unimplemented {
	fn kind(&self) -> HandlerKind {
		HandlerKind::Unimplemented
	}

	fn execute(&self, action: &mut A, subject: &S, _registry: &Registry<S, A>) -> Result<(), RegistryError> {
		Err(RegistryError::unsupported(action.kind(), subject.kind()))
	}
}

fn require_decoration<S: Subject>(subject: &S) -> Result<usize, RegistryError> {
	match subject.decoration_level() {
		0 => Err(RegistryError::not_a_decoration(subject.kind())),
		level => Ok(level),
	}
}
