//! Interactive session: the element list, the chosen setup and extra locks.

use std::io::{self, BufRead, Write};

use strata_arith::{ArithRegistry, Element, ElementFactory, ElementKind, KindLock, Operation, Setup, standard_registry_with_locks};
use strata_table::{Action, RegistryError};

use crate::command::Command;

pub const INTRO: &str = "Strategy table demonstration. Type 'help' for the list of commands.";

pub const HELP: &str = "\
Commands (case insensitive):
	add <n>          append an Add element with value n
	mult <n>         append a Mult element with value n
	ignore <i>       decorate the element at index i with Ignore
	reverse <i>      decorate the element at index i with Reverse
	st <setup>       choose the table setup: strict, ignore (no-defer), default, bypass
	lock <kind>      lock an element or operation kind before the setup binds
	unlock <kind>    remove a lock added with 'lock'
	info             print the elements and the current setup
	table            print the strategy table for the current setup
	go               run Total and Count over the elements
	clear            remove every element
	help             print this message
	quit             leave";

/// Whether the session should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
	Continue,
	Quit,
}

pub struct Session {
	factory: ElementFactory,
	elements: Vec<Element>,
	setup: Setup,
	locks: Vec<KindLock>,
}

impl Session {
	pub fn new(factory: ElementFactory, setup: Setup) -> Self {
		Self {
			factory,
			elements: Vec::new(),
			setup,
			locks: Vec::new(),
		}
	}

	pub fn elements(&self) -> &[Element] {
		&self.elements
	}

	pub fn setup(&self) -> Setup {
		self.setup
	}

	/// Reads commands from `input` until it is exhausted or a quit command.
	pub fn run(&mut self, input: impl BufRead, mut out: impl Write) -> io::Result<()> {
		writeln!(out, "{INTRO}")?;
		for line in input.lines() {
			if self.handle(&line?, &mut out)? == Flow::Quit {
				break;
			}
		}
		out.flush()
	}

	/// Handles one input line. Blank lines are skipped; malformed ones are
	/// reported and the session continues.
	pub fn handle(&mut self, line: &str, out: &mut impl Write) -> io::Result<Flow> {
		if line.trim().is_empty() {
			return Ok(Flow::Continue);
		}

		let command = match line.parse::<Command>() {
			Ok(command) => command,
			Err(error) => {
				tracing::debug!(%error, input = line, "rejected input");
				writeln!(out, "{error}")?;
				return Ok(Flow::Continue);
			}
		};
		tracing::debug!(?command, "handling command");

		match command {
			Command::Add(value) => {
				let element = self.factory.add(value);
				self.push(element, out)?;
			}
			Command::Mult(value) => {
				let element = self.factory.mult(value);
				self.push(element, out)?;
			}
			Command::Ignore(index) => self.decorate(index, ElementKind::Ignore, out)?,
			Command::Reverse(index) => self.decorate(index, ElementKind::Reverse, out)?,
			Command::Setup(setup) => {
				self.setup = setup;
				writeln!(out, "Setting strategy table: {setup}")?;
			}
			Command::Lock(kind) => {
				if self.locks.contains(&kind) {
					writeln!(out, "{kind} is already locked")?;
				} else {
					self.locks.push(kind);
					writeln!(out, "Locked {kind}")?;
				}
			}
			Command::Unlock(kind) => match self.locks.iter().position(|lock| *lock == kind) {
				Some(position) => {
					self.locks.remove(position);
					writeln!(out, "Unlocked {kind}")?;
				}
				None => writeln!(out, "{kind} is not locked")?,
			},
			Command::Info => self.print_info(out)?,
			Command::Table => match self.build_table() {
				Ok(table) => write!(out, "{table}")?,
				Err(error) => writeln!(out, "Error: {error}")?,
			},
			Command::Go => self.execute(out)?,
			Command::Clear => {
				self.elements.clear();
				writeln!(out, "Cleared all elements")?;
			}
			Command::Help => writeln!(out, "{HELP}")?,
			Command::Quit => {
				writeln!(out, "Exiting...")?;
				return Ok(Flow::Quit);
			}
		}
		Ok(Flow::Continue)
	}

	fn push(&mut self, element: Element, out: &mut impl Write) -> io::Result<()> {
		writeln!(out, "Added {element}")?;
		self.elements.push(element);
		writeln!(out, "New elements: {}", list(&self.elements))
	}

	fn decorate(&mut self, index: usize, decoration: ElementKind, out: &mut impl Write) -> io::Result<()> {
		if index >= self.elements.len() {
			return writeln!(out, "{index} is not a valid index (elements: {})", list(&self.elements));
		}

		let element = self.elements.remove(index);
		writeln!(out, "Added {} decoration to {element}", decoration.name().to_ascii_lowercase())?;
		let decorated = match decoration {
			ElementKind::Ignore => self.factory.ignore(element),
			_ => self.factory.reverse(element),
		};
		self.elements.insert(index, decorated);
		writeln!(out, "New elements: {}", list(&self.elements))
	}

	fn build_table(&self) -> Result<ArithRegistry, RegistryError> {
		standard_registry_with_locks(self.setup, self.locks.iter().copied())
	}

	fn print_info(&self, out: &mut impl Write) -> io::Result<()> {
		writeln!(out, "Element count: {}", self.elements.len())?;
		writeln!(out, "Elements: {}", list(&self.elements))?;
		writeln!(out, "Setup: {}", self.setup)?;
		if self.locks.is_empty() {
			writeln!(out, "Locks: none")?;
		} else {
			let locks: Vec<String> = self.locks.iter().map(ToString::to_string).collect();
			writeln!(out, "Locks: {}", locks.join(", "))?;
		}

		let cache = self.factory.cache();
		if cache.is_enabled() {
			writeln!(out, "Cache: {} live, {} hits, {} misses", cache.len(), cache.hits(), cache.misses())
		} else {
			writeln!(out, "Cache: disabled")
		}
	}

	fn execute(&self, out: &mut impl Write) -> io::Result<()> {
		writeln!(out, "Executing...")?;
		self.print_info(out)?;

		let table = match self.build_table() {
			Ok(table) => table,
			Err(error) => return writeln!(out, "Error: {error}"),
		};
		writeln!(out)?;
		write!(out, "{table}")?;

		writeln!(out, "\nOperation results")?;
		for (label, mut operation) in [("Total", Operation::total()), ("Element count", Operation::count())] {
			match table.apply_to_all(&mut operation, &self.elements) {
				Ok(()) => writeln!(out, "{label}: {}", operation.retrieve())?,
				Err(error) => {
					tracing::warn!(%error, setup = %self.setup, "operation failed");
					writeln!(out, "{label}: failed after {} ({error})", operation.retrieve())?;
				}
			}
		}
		Ok(())
	}
}

fn list(elements: &[Element]) -> String {
	let names: Vec<String> = elements.iter().map(ToString::to_string).collect();
	format!("[{}]", names.join(", "))
}
