//! Arithmetic families for the strata table.
//!
//! [`Element`]s are the subjects: `Add` and `Mult` hold a value, while
//! `Ignore` and `Reverse` decorate another element. [`Operation`]s are the
//! actions: a running `Total` and an element `Count`. The strategies in this
//! crate connect the two through a [`strata_table::Registry`], and
//! [`standard_registry`] builds the preset tables used by the `strata` binary.

mod element;
mod factory;
mod operation;
mod setup;
mod strategy;

pub use element::{BaseValue, Element, ElementKind, UnknownKindName};
pub use factory::{ElementCache, ElementFactory};
pub use operation::{Count, Operation, OperationKind, Total};
pub use setup::{ArithRegistry, KindLock, Setup, standard_registry, standard_registry_with_locks};
pub use strategy::{AddTotal, CountElement, MultTotal};
