//! `strata`: interactive front end for the arithmetic strategy table.
//!
//! Elements are collected line by line, a table setup is chosen, and `go`
//! runs the Total and Count operations through the table.

mod cli;
mod command;
mod session;

use std::io;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use session::Session;
use strata_arith::{ElementCache, ElementFactory};

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	setup_tracing(cli.verbose);

	let cache = if cli.no_cache { ElementCache::disabled() } else { ElementCache::new() };
	tracing::info!(setup = %cli.policy, cache = !cli.no_cache, "starting session");

	let mut session = Session::new(ElementFactory::new(cache), cli.policy);
	session
		.run(io::stdin().lock(), io::stdout().lock())
		.context("interactive session failed")?;

	tracing::debug!(elements = session.elements().len(), setup = %session.setup(), "session ended");
	Ok(())
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	// STRATA_LOG takes precedence over RUST_LOG
	let filter = std::env::var("STRATA_LOG")
		.ok()
		.and_then(|directives| EnvFilter::try_new(directives).ok())
		.or_else(|| EnvFilter::try_from_default_env().ok())
		.unwrap_or_else(|| {
			if verbose {
				EnvFilter::new("strata=debug,strata_table=trace,strata_arith=debug,info")
			} else {
				EnvFilter::new("warn")
			}
		});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(io::stderr)
		.with_target(true)
		.init();
}
