use clap::Parser;
use strata_arith::Setup;

#[derive(Parser, Debug)]
#[command(name = "strata")]
#[command(about = "Interactive strategy table demonstration")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Initial table setup (strict, ignore, default, bypass)
	#[arg(long, short = 'p', value_name = "SETUP", default_value_t = Setup::Default)]
	pub policy: Setup,

	/// Give every element its own base value instead of sharing cached ones
	#[arg(long)]
	pub no_cache: bool,

	/// Verbose logging
	#[arg(short, long)]
	pub verbose: bool,
}
