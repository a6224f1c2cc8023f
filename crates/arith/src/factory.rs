//! Element construction with optional sharing of base values.
//!
//! # Role
//!
//! Base values are immutable, so elements built from the same (kind, value)
//! pair may share one [`BaseValue`] instance. The cache holds weak handles
//! only; an entry lives exactly as long as some element still refers to it.
//!
//! # Invariants
//!
//! - A disabled cache never stores or returns shared instances.
//! - `hits + misses` counts every cached lookup made while enabled.

use std::sync::{Arc, Weak};

use rustc_hash::FxHashMap as HashMap;

use crate::{BaseValue, Element, ElementKind};


/// Weakly-held interning table for base element values.
#[derive(Debug, Default)]
pub struct ElementCache {
	disabled: bool,
	entries: HashMap<(ElementKind, i64), Weak<BaseValue>>,
	hits: u64,
	misses: u64,
}

impl ElementCache {
	pub fn new() -> Self {
		Self::default()
	}

	/// A cache that hands out a fresh value on every request.
	pub fn disabled() -> Self {
		Self {
			disabled: true,
			..Self::default()
		}
	}

	pub fn is_enabled(&self) -> bool {
		!self.disabled
	}

	/// Turns sharing on or off. Existing entries are kept and become visible
	/// again once the cache is re-enabled.
	pub fn set_enabled(&mut self, enabled: bool) {
		self.disabled = !enabled;
		tracing::debug!(enabled, "element cache toggled");
	}

	/// Returns the shared value for `(kind, value)`, creating it on a miss.
	pub fn intern(&mut self, kind: ElementKind, value: i64) -> Arc<BaseValue> {
		if self.disabled {
			return Arc::new(BaseValue::new(value));
		}

		if let Some(shared) = self.entries.get(&(kind, value)).and_then(Weak::upgrade) {
			self.hits += 1;
			tracing::trace!(%kind, value, "element cache hit");
			return shared;
		}

		self.misses += 1;
		let fresh = Arc::new(BaseValue::new(value));
		self.entries.insert((kind, value), Arc::downgrade(&fresh));
		fresh
	}

	pub fn hits(&self) -> u64 {
		self.hits
	}

	pub fn misses(&self) -> u64 {
		self.misses
	}

	/// Number of entries whose value is still referenced by some element.
	pub fn len(&self) -> usize {
		self.entries.values().filter(|entry| entry.strong_count() > 0).count()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Drops entries whose value is no longer referenced.
	pub fn purge(&mut self) -> usize {
		let before = self.entries.len();
		self.entries.retain(|_, entry| entry.strong_count() > 0);
		before - self.entries.len()
	}

	/// Forgets every entry and resets the counters.
	pub fn clear(&mut self) {
		self.entries.clear();
		self.hits = 0;
		self.misses = 0;
	}
}

/// Builds elements, routing base values through an [`ElementCache`].
#[derive(Debug, Default)]
pub struct ElementFactory {
	cache: ElementCache,
}

impl ElementFactory {
	pub fn new(cache: ElementCache) -> Self {
		Self { cache }
	}

	pub fn add(&mut self, value: i64) -> Element {
		Element::Add(self.cache.intern(ElementKind::Add, value))
	}

	pub fn mult(&mut self, value: i64) -> Element {
		Element::Mult(self.cache.intern(ElementKind::Mult, value))
	}

	pub fn ignore(&self, element: Element) -> Element {
		element.ignored()
	}

	pub fn reverse(&self, element: Element) -> Element {
		element.reversed()
	}

	pub fn cache(&self) -> &ElementCache {
		&self.cache
	}

	pub fn cache_mut(&mut self) -> &mut ElementCache {
		&mut self.cache
	}
}
