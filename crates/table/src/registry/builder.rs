use super::Registry;
use crate::{Action, Policy, RegistryError, Subject};

/// Collects kind declarations before building a [`Registry`].
///
/// ```ignore
/// let registry = Registry::<Element, Operation>::builder()
/// 	.base_kinds([ElementKind::Add, ElementKind::Mult])
/// 	.decoration_kind(ElementKind::Ignore)
/// 	.action_kinds([OperationKind::Total, OperationKind::Count])
/// 	.policy(Policy::Bypass)
/// 	.build()?;
/// ```
pub struct RegistryBuilder<S: Subject, A: Action> {
	base: Vec<S::Kind>,
	decorations: Vec<S::Kind>,
	actions: Vec<A::Kind>,
	policy: Policy,
}

impl<S: Subject, A: Action> RegistryBuilder<S, A> {
	pub fn new() -> Self {
		Self {
			base: Vec::new(),
			decorations: Vec::new(),
			actions: Vec::new(),
			policy: Policy::default(),
		}
	}

	pub fn base_kind(mut self, kind: S::Kind) -> Self {
		self.base.push(kind);
		self
	}

	pub fn base_kinds(mut self, kinds: impl IntoIterator<Item = S::Kind>) -> Self {
		self.base.extend(kinds);
		self
	}

	pub fn decoration_kind(mut self, kind: S::Kind) -> Self {
		self.decorations.push(kind);
		self
	}

	pub fn decoration_kinds(mut self, kinds: impl IntoIterator<Item = S::Kind>) -> Self {
		self.decorations.extend(kinds);
		self
	}

	pub fn action_kind(mut self, kind: A::Kind) -> Self {
		self.actions.push(kind);
		self
	}

	pub fn action_kinds(mut self, kinds: impl IntoIterator<Item = A::Kind>) -> Self {
		self.actions.extend(kinds);
		self
	}

	/// Policy used to seed every cell. Defaults to [`Policy::Default`].
	pub fn policy(mut self, policy: Policy) -> Self {
		self.policy = policy;
		self
	}

	/// Validates the declarations and seeds the table. See [`Registry::new`].
	pub fn build(self) -> Result<Registry<S, A>, RegistryError> {
		Registry::new(self.base, self.decorations, self.actions, self.policy)
	}
}

impl<S: Subject, A: Action> Default for RegistryBuilder<S, A> {
	fn default() -> Self {
		Self::new()
	}
}
