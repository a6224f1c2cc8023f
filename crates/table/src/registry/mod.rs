//! The strategy table.
//!
//! # Role
//!
//! Owns the (subject kind x action kind) -> strategy mapping, the per-kind lock
//! state of both axes, and dispatch.
//!
//! # Invariants
//!
//! - Base and decoration subject kinds are disjoint (checked in [`Registry::new`]).
//! - Every declared (subject kind, action kind) cell holds exactly one strategy.
//! - A cell is rebound only while neither its subject kind nor its action kind
//!   is locked.
//! - Every kind argument is validated before anything is mutated, so a call
//!   that fails with an error leaves the table as it was.

use std::fmt;
use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHashMap as HashMap;

use crate::meta::{Bypass, Defer, Noop, Substitute};
use crate::{Action, Axis, Handler, HandlerKind, Policy, RegistryError, SharedHandler, Subject};

mod builder;

pub use builder::RegistryBuilder;

type Row<S, A> = IndexMap<<A as Action>::Kind, SharedHandler<S, A>>;

/// Two-axis strategy table resolving which handler performs an action on a
/// subject.
///
/// Mutation takes `&mut self` and dispatch takes `&self`: a table is configured
/// first and then dispatched through. Callers that need to share a table across
/// threads while still rebinding it must guard the whole table with one lock.
pub struct Registry<S: Subject, A: Action> {
	policy: Policy,
	decorations: IndexSet<S::Kind>,
	actions: IndexSet<A::Kind>,
	table: IndexMap<S::Kind, Row<S, A>>,
	subject_locks: HashMap<S::Kind, bool>,
	action_locks: HashMap<A::Kind, bool>,
}

impl<S: Subject, A: Action> Registry<S, A> {
	/// Builds a table over the given closed kind sets, seeding every cell from
	/// `policy`.
	///
	/// Duplicate kinds inside one set collapse to a single entry; declaration
	/// order is kept for iteration and dumps.
	///
	/// # Errors
	///
	/// [`RegistryError::InvalidConfiguration`] when a kind is declared both as
	/// base and as decoration, or when action kinds are declared while the base
	/// or the decoration kind set is empty.
	pub fn new(
		base_kinds: impl IntoIterator<Item = S::Kind>,
		decoration_kinds: impl IntoIterator<Item = S::Kind>,
		action_kinds: impl IntoIterator<Item = A::Kind>,
		policy: Policy,
	) -> Result<Self, RegistryError> {
		let base: IndexSet<S::Kind> = base_kinds.into_iter().collect();
		let decorations: IndexSet<S::Kind> = decoration_kinds.into_iter().collect();
		let actions: IndexSet<A::Kind> = action_kinds.into_iter().collect();

		if let Some(kind) = base.intersection(&decorations).next() {
			return Err(RegistryError::InvalidConfiguration(format!(
				"subject kind `{kind}` cannot be both base and decoration"
			)));
		}
		if !actions.is_empty() {
			if base.is_empty() {
				return Err(RegistryError::InvalidConfiguration(
					"at least one base subject kind is required when action kinds are declared".to_string(),
				));
			}
			if decorations.is_empty() {
				return Err(RegistryError::InvalidConfiguration(
					"at least one decoration subject kind is required when action kinds are declared".to_string(),
				));
			}
		}

		let base_default = policy.default_base_handler::<S, A>();
		let decoration_default = policy.default_decoration_handler::<S, A>();
		let seed = |handler: &SharedHandler<S, A>| -> Row<S, A> { actions.iter().map(|&action| (action, Arc::clone(handler))).collect() };

		let mut table = IndexMap::with_capacity(base.len() + decorations.len());
		for &kind in &base {
			table.insert(kind, seed(&base_default));
		}
		for &kind in &decorations {
			table.insert(kind, seed(&decoration_default));
		}

		let subject_locks = table.keys().map(|&kind| (kind, false)).collect();
		let action_locks = actions.iter().map(|&kind| (kind, false)).collect();

		tracing::debug!(
			%policy,
			base = base.len(),
			decorations = decorations.len(),
			actions = actions.len(),
			"seeded strategy table",
		);

		Ok(Self {
			policy,
			decorations,
			actions,
			table,
			subject_locks,
			action_locks,
		})
	}

	/// Starts a [`RegistryBuilder`].
	pub fn builder() -> RegistryBuilder<S, A> {
		RegistryBuilder::new()
	}

	/// Policy the table was seeded with.
	pub fn policy(&self) -> Policy {
		self.policy
	}

	/// All declared subject kinds, base kinds first, in declaration order.
	pub fn subject_kinds(&self) -> impl Iterator<Item = S::Kind> + '_ {
		self.table.keys().copied()
	}

	/// All declared action kinds in declaration order.
	pub fn action_kinds(&self) -> impl Iterator<Item = A::Kind> + '_ {
		self.actions.iter().copied()
	}

	pub fn is_base_kind(&self, kind: S::Kind) -> bool {
		self.table.contains_key(&kind) && !self.decorations.contains(&kind)
	}

	pub fn is_decoration_kind(&self, kind: S::Kind) -> bool {
		self.decorations.contains(&kind)
	}

	// ---------------------------------------------------------------------
	// Locks
	// ---------------------------------------------------------------------

	/// Whether the cell (`action`, `subject`) is locked on either axis.
	pub fn is_locked(&self, action: A::Kind, subject: S::Kind) -> Result<bool, RegistryError> {
		let action_locked = self.is_action_locked(action)?;
		let subject_locked = self.is_subject_locked(subject)?;
		Ok(action_locked || subject_locked)
	}

	pub fn is_subject_locked(&self, kind: S::Kind) -> Result<bool, RegistryError> {
		self.subject_locks
			.get(&kind)
			.copied()
			.ok_or_else(|| RegistryError::unknown(Axis::Subject, kind))
	}

	pub fn is_action_locked(&self, kind: A::Kind) -> Result<bool, RegistryError> {
		self.action_locks
			.get(&kind)
			.copied()
			.ok_or_else(|| RegistryError::unknown(Axis::Action, kind))
	}

	/// Locks or unlocks every cell in the row of subject `kind`. Idempotent.
	pub fn set_subject_locked(&mut self, kind: S::Kind, locked: bool) -> Result<(), RegistryError> {
		let slot = self
			.subject_locks
			.get_mut(&kind)
			.ok_or_else(|| RegistryError::unknown(Axis::Subject, kind))?;
		*slot = locked;
		tracing::debug!(axis = %Axis::Subject, %kind, locked, "set strategy lock");
		Ok(())
	}

	/// Locks or unlocks every cell in the column of action `kind`. Idempotent.
	pub fn set_action_locked(&mut self, kind: A::Kind, locked: bool) -> Result<(), RegistryError> {
		let slot = self
			.action_locks
			.get_mut(&kind)
			.ok_or_else(|| RegistryError::unknown(Axis::Action, kind))?;
		*slot = locked;
		tracing::debug!(axis = %Axis::Action, %kind, locked, "set strategy lock");
		Ok(())
	}

	// ---------------------------------------------------------------------
	// Binding
	// ---------------------------------------------------------------------

	/// Binds `handler` to the cell (`action`, `subject`).
	///
	/// Returns `Ok(false)` without touching the cell if it is locked.
	///
	/// # Errors
	///
	/// [`RegistryError::UnknownKind`] if either kind was not declared.
	pub fn bind<H>(&mut self, action: A::Kind, subject: S::Kind, handler: H) -> Result<bool, RegistryError>
	where
		H: Handler<S, A> + 'static,
	{
		self.bind_shared(action, subject, Arc::new(handler))
	}

	/// [`bind`](Self::bind) for an already shared handler.
	pub fn bind_shared(&mut self, action: A::Kind, subject: S::Kind, handler: SharedHandler<S, A>) -> Result<bool, RegistryError> {
		self.put(action, subject, &handler)
	}

	/// Binds `handler` for `action` against every declared subject kind.
	///
	/// Locks are per cell: locked cells are skipped while the unlocked ones are
	/// still rebound. Returns `true` only if every cell was rebound.
	pub fn bind_across_subjects<H>(&mut self, action: A::Kind, handler: H) -> Result<bool, RegistryError>
	where
		H: Handler<S, A> + 'static,
	{
		self.broadcast_column(action, Arc::new(handler))
	}

	/// Binds `handler` for every declared action kind against `subject`.
	///
	/// Same partial semantics as [`bind_across_subjects`](Self::bind_across_subjects).
	pub fn bind_across_actions<H>(&mut self, subject: S::Kind, handler: H) -> Result<bool, RegistryError>
	where
		H: Handler<S, A> + 'static,
	{
		self.broadcast_row(subject, Arc::new(handler))
	}

	/// Installs the no-op strategy in one cell.
	pub fn bind_null(&mut self, action: A::Kind, subject: S::Kind) -> Result<bool, RegistryError> {
		self.bind(action, subject, Noop)
	}

	/// Installs the no-op strategy for `action` against every subject kind.
	pub fn bind_null_across_subjects(&mut self, action: A::Kind) -> Result<bool, RegistryError> {
		self.bind_across_subjects(action, Noop)
	}

	/// Installs the no-op strategy for every action kind against `subject`.
	pub fn bind_null_across_actions(&mut self, subject: S::Kind) -> Result<bool, RegistryError> {
		self.bind_across_actions(subject, Noop)
	}

	/// Makes decoration kind `decoration` defer every action to its decoratee.
	///
	/// # Errors
	///
	/// [`RegistryError::NotADecoration`] for a base kind,
	/// [`RegistryError::UnknownKind`] for an undeclared kind.
	pub fn bind_defer_across_actions(&mut self, decoration: S::Kind) -> Result<bool, RegistryError> {
		self.require_decoration_kind(decoration)?;
		self.bind_across_actions(decoration, Defer)
	}

	/// Makes decoration kind `decoration` bypass straight to the base subject
	/// for every action. Same errors as
	/// [`bind_defer_across_actions`](Self::bind_defer_across_actions).
	pub fn bind_bypass_across_actions(&mut self, decoration: S::Kind) -> Result<bool, RegistryError> {
		self.require_decoration_kind(decoration)?;
		self.bind_across_actions(decoration, Bypass)
	}

	/// Makes decoration kind `decoration` substitute its decoratee's strategy
	/// for every action. Same errors as
	/// [`bind_defer_across_actions`](Self::bind_defer_across_actions).
	pub fn bind_substitute_across_actions(&mut self, decoration: S::Kind) -> Result<bool, RegistryError> {
		self.require_decoration_kind(decoration)?;
		self.bind_across_actions(decoration, Substitute)
	}

	fn broadcast_column(&mut self, action: A::Kind, handler: SharedHandler<S, A>) -> Result<bool, RegistryError> {
		self.require_action_kind(action)?;
		let subjects: Vec<S::Kind> = self.table.keys().copied().collect();

		let mut all_bound = true;
		for subject in subjects {
			all_bound &= self.put(action, subject, &handler)?;
		}
		Ok(all_bound)
	}

	fn broadcast_row(&mut self, subject: S::Kind, handler: SharedHandler<S, A>) -> Result<bool, RegistryError> {
		self.require_subject_kind(subject)?;
		let actions: Vec<A::Kind> = self.actions.iter().copied().collect();

		let mut all_bound = true;
		for action in actions {
			all_bound &= self.put(action, subject, &handler)?;
		}
		Ok(all_bound)
	}

	fn put(&mut self, action: A::Kind, subject: S::Kind, handler: &SharedHandler<S, A>) -> Result<bool, RegistryError> {
		if self.is_locked(action, subject)? {
			tracing::debug!(%subject, %action, handler = %handler.kind(), "strategy cell locked; bind rejected");
			return Ok(false);
		}

		let slot = self
			.table
			.get_mut(&subject)
			.and_then(|row| row.get_mut(&action))
			.ok_or_else(|| RegistryError::unknown(Axis::Action, action))?;
		*slot = Arc::clone(handler);

		tracing::debug!(%subject, %action, handler = %handler.kind(), "bound strategy");
		Ok(true)
	}

	fn require_subject_kind(&self, kind: S::Kind) -> Result<(), RegistryError> {
		if self.table.contains_key(&kind) {
			Ok(())
		} else {
			Err(RegistryError::unknown(Axis::Subject, kind))
		}
	}

	fn require_action_kind(&self, kind: A::Kind) -> Result<(), RegistryError> {
		if self.actions.contains(&kind) {
			Ok(())
		} else {
			Err(RegistryError::unknown(Axis::Action, kind))
		}
	}

	fn require_decoration_kind(&self, kind: S::Kind) -> Result<(), RegistryError> {
		self.require_subject_kind(kind)?;
		if self.decorations.contains(&kind) {
			Ok(())
		} else {
			Err(RegistryError::not_a_decoration(kind))
		}
	}

	// ---------------------------------------------------------------------
	// Lookup and dispatch
	// ---------------------------------------------------------------------

	/// The strategy currently bound to the cell (`action`, `subject`).
	pub fn handler(&self, action: A::Kind, subject: S::Kind) -> Result<&SharedHandler<S, A>, RegistryError> {
		let row = self
			.table
			.get(&subject)
			.ok_or_else(|| RegistryError::unknown(Axis::Subject, subject))?;
		row.get(&action).ok_or_else(|| RegistryError::unknown(Axis::Action, action))
	}

	/// Which strategy variant is bound to the cell (`action`, `subject`).
	pub fn strategy_kind_for(&self, action: A::Kind, subject: S::Kind) -> Result<HandlerKind, RegistryError> {
		Ok(self.handler(action, subject)?.kind())
	}

	/// Performs `action` on `subject` through the strategy bound for their
	/// runtime kinds.
	///
	/// # Errors
	///
	/// [`RegistryError::UnknownKind`] if either runtime kind was never declared,
	/// otherwise whatever the resolved strategy returns.
	pub fn apply(&self, action: &mut A, subject: &S) -> Result<(), RegistryError> {
		let action_kind = action.kind();
		let subject_kind = subject.kind();
		let handler = self.handler(action_kind, subject_kind)?;

		tracing::trace!(
			subject = %subject_kind,
			action = %action_kind,
			level = subject.decoration_level(),
			handler = %handler.kind(),
			"dispatch",
		);
		handler.execute(action, subject, self)
	}

	/// Applies `action` to each subject in order.
	///
	/// Stops at the first failure. Accumulation is not transactional: the action
	/// keeps whatever the subjects before the failing one contributed.
	pub fn apply_to_all<'s, I>(&self, action: &mut A, subjects: I) -> Result<(), RegistryError>
	where
		I: IntoIterator<Item = &'s S>,
		S: 's,
	{
		for (index, subject) in subjects.into_iter().enumerate() {
			if let Err(error) = self.apply(action, subject) {
				tracing::debug!(index, %error, "dispatch aborted");
				return Err(error);
			}
		}
		Ok(())
	}
}

impl<S: Subject, A: Action> fmt::Display for Registry<S, A> {
	/// Renders one block per subject kind listing each action's strategy.
	/// Locked cells are marked.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "Strategy table (policy: {})", self.policy)?;
		for (subject, row) in &self.table {
			let role = if self.decorations.contains(subject) { "decoration" } else { "base" };
			write!(f, "\nSubject kind: {subject} ({role})\n")?;
			for (action, handler) in row {
				let locked = self.subject_locks.get(subject).copied().unwrap_or(false)
					|| self.action_locks.get(action).copied().unwrap_or(false);
				write!(f, "\t* {action} -> {}", handler.kind())?;
				if locked {
					f.write_str(" [locked]")?;
				}
				f.write_str("\n")?;
			}
		}
		Ok(())
	}
}

impl<S: Subject, A: Action> fmt::Debug for Registry<S, A> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Registry")
			.field("policy", &self.policy)
			.field("subjects", &self.table.keys().collect::<Vec<_>>())
			.field("decorations", &self.decorations)
			.field("actions", &self.actions)
			.finish_non_exhaustive()
	}
}
