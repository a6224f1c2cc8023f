//! Demonstration presets for the arithmetic table.
//!
//! Every preset binds `Total` to [`AddTotal`] on `Add` and [`MultTotal`] on
//! `Mult`, broadcasts [`CountElement`] for `Count`, and locks both decoration
//! rows so that their behavior comes from the policy (or an explicit bind made
//! before locking).

use std::fmt;
use std::str::FromStr;

use strata_table::{Policy, Registry, RegistryError, UnknownPolicy};

use crate::{AddTotal, CountElement, Element, ElementKind, MultTotal, Operation, OperationKind, UnknownKindName};

#[cfg(test)]
mod tests;

/// Table over the arithmetic families.
pub type ArithRegistry = Registry<Element, Operation>;

/// Preset table configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Setup {
	/// Decorations are left unbound under the strict policy, so dispatching
	/// on one fails.
	Strict,
	/// Decorations are left unbound and silently skipped.
	Ignore,
	/// `Ignore` is bound to no-op; `Reverse` substitutes its decoratee's
	/// strategy.
	#[default]
	Default,
	/// Decorations dispatch straight to their base element.
	Bypass,
}

impl Setup {
	pub const ALL: [Setup; 4] = [Setup::Strict, Setup::Ignore, Setup::Default, Setup::Bypass];

	/// Policy the preset seeds its table with.
	pub const fn policy(self) -> Policy {
		match self {
			Setup::Strict => Policy::Strict,
			Setup::Ignore => Policy::Ignore,
			Setup::Default => Policy::Default,
			Setup::Bypass => Policy::Bypass,
		}
	}

	pub const fn name(self) -> &'static str {
		self.policy().name()
	}
}

impl From<Policy> for Setup {
	fn from(policy: Policy) -> Self {
		match policy {
			Policy::Strict => Setup::Strict,
			Policy::Ignore => Setup::Ignore,
			Policy::Default => Setup::Default,
			Policy::Bypass => Setup::Bypass,
		}
	}
}

impl fmt::Display for Setup {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Setup {
	type Err = UnknownPolicy;

	/// Accepts every policy name plus the legacy preset names `illegal` and
	/// `null`.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"illegal" => Ok(Setup::Strict),
			"null" => Ok(Setup::Ignore),
			_ => s.parse::<Policy>().map(Setup::from),
		}
	}
}

/// A kind on either axis, named by a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KindLock {
	Element(ElementKind),
	Operation(OperationKind),
}

impl fmt::Display for KindLock {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			KindLock::Element(kind) => fmt::Display::fmt(kind, f),
			KindLock::Operation(kind) => fmt::Display::fmt(kind, f),
		}
	}
}

impl FromStr for KindLock {
	type Err = UnknownKindName;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		s.parse::<ElementKind>()
			.map(KindLock::Element)
			.or_else(|_| s.parse::<OperationKind>().map(KindLock::Operation))
	}
}

/// Builds the preset table for `setup`.
///
/// # Errors
///
/// Only fails if the kind declarations themselves are rejected, which the
/// fixed arithmetic families never are.
pub fn standard_registry(setup: Setup) -> Result<ArithRegistry, RegistryError> {
	standard_registry_with_locks(setup, std::iter::empty())
}

/// Builds the preset table for `setup` with `locks` applied right after
/// seeding, so the preset's own binds cannot touch those cells.
pub fn standard_registry_with_locks(
	setup: Setup,
	locks: impl IntoIterator<Item = KindLock>,
) -> Result<ArithRegistry, RegistryError> {
	let mut registry = Registry::new(ElementKind::BASE, ElementKind::DECORATIONS, OperationKind::ALL, setup.policy())?;
	for lock in locks {
		match lock {
			KindLock::Element(kind) => registry.set_subject_locked(kind, true)?,
			KindLock::Operation(kind) => registry.set_action_locked(kind, true)?,
		}
		tracing::debug!(%lock, "locked before preset binds");
	}

	if setup == Setup::Default {
		registry.bind_null_across_actions(ElementKind::Ignore)?;
	}
	for decoration in ElementKind::DECORATIONS {
		registry.set_subject_locked(decoration, true)?;
	}

	registry.bind(OperationKind::Total, ElementKind::Add, AddTotal)?;
	registry.bind(OperationKind::Total, ElementKind::Mult, MultTotal)?;
	let counted_everywhere = registry.bind_across_subjects(OperationKind::Count, CountElement)?;

	tracing::debug!(%setup, counted_everywhere, "built standard table");
	Ok(registry)
}
