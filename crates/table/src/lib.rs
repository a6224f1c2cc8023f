//! Two-axis strategy table.
//!
//! A [`Registry`] resolves which [`Handler`] performs an [`Action`] on a
//! [`Subject`], keyed by the runtime kinds of both. Neither family knows about
//! the other: new subject kinds or new action kinds are added by declaring them
//! to the table and binding strategies for the new cells.
//!
//! Subjects are either base values or decorations wrapping another subject.
//! Cells that are not bound explicitly are seeded by a [`Policy`], which picks
//! separate defaults for base and decoration kinds from the meta strategies in
//! [`meta`].
//!
//! # Example
//!
//! ```ignore
//! let mut table = Registry::new(
//! 	[ElementKind::Add, ElementKind::Mult],
//! 	[ElementKind::Reverse],
//! 	[OperationKind::Total],
//! 	Policy::Default,
//! )?;
//! table.bind(OperationKind::Total, ElementKind::Add, AddTotal)?;
//!
//! let mut total = Operation::total();
//! table.apply(&mut total, &Element::add(5).reversed())?;
//! assert_eq!(total.retrieve(), -5);
//! ```

mod action;
mod error;
mod handler;
mod kind;
pub mod meta;
mod policy;
mod registry;
mod subject;

#[cfg(test)]
mod testing;

pub use action::Action;
pub use error::RegistryError;
pub use handler::{FnHandler, Handler, HandlerKind, SharedHandler};
pub use kind::{Axis, Kind};
pub use policy::{Policy, UnknownPolicy};
pub use registry::{Registry, RegistryBuilder};
pub use subject::{InvalidLevel, Subject};
