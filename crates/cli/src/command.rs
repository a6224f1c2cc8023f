//! Parsing of interactive input lines.

use std::str::FromStr;

use strata_arith::{KindLock, Setup, UnknownKindName};
use strata_table::UnknownPolicy;

/// One line of interactive input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
	Add(i64),
	Mult(i64),
	/// Decorate the element at this index with `Ignore`.
	Ignore(usize),
	/// Decorate the element at this index with `Reverse`.
	Reverse(usize),
	Setup(Setup),
	Lock(KindLock),
	Unlock(KindLock),
	Info,
	Table,
	Go,
	Clear,
	Help,
	Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
	#[error("Unrecognised command: {0}")]
	Unrecognised(String),
	#[error(transparent)]
	Setup(#[from] UnknownPolicy),
	#[error(transparent)]
	Kind(#[from] UnknownKindName),
}

impl FromStr for Command {
	type Err = CommandError;

	/// Keywords are case-insensitive. The words after `st` are joined with
	/// `-`, so `st no defer` selects the `no-defer` setup.
	fn from_str(input: &str) -> Result<Self, Self::Err> {
		let unrecognised = || CommandError::Unrecognised(input.trim().to_string());
		let mut words = input.split_whitespace();
		let Some(head) = words.next() else {
			return Err(unrecognised());
		};
		let args: Vec<&str> = words.collect();

		let command = match (head.to_ascii_lowercase().as_str(), args.as_slice()) {
			("add", [value]) => Command::Add(value.parse().map_err(|_| unrecognised())?),
			("mult", [value]) => Command::Mult(value.parse().map_err(|_| unrecognised())?),
			("ignore", [index]) => Command::Ignore(index.parse().map_err(|_| unrecognised())?),
			("reverse", [index]) => Command::Reverse(index.parse().map_err(|_| unrecognised())?),
			("st", setup) if !setup.is_empty() => Command::Setup(setup.join("-").parse()?),
			("lock", [kind]) => Command::Lock(kind.parse()?),
			("unlock", [kind]) => Command::Unlock(kind.parse()?),
			("info", []) => Command::Info,
			("table", []) => Command::Table,
			("go", []) => Command::Go,
			("clear", []) => Command::Clear,
			("help", []) => Command::Help,
			("quit" | "exit", []) => Command::Quit,
			_ => return Err(unrecognised()),
		};
		Ok(command)
	}
}
