mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Compute the area of every polygonal geometry in a GeoJSON file
	Area(tools::area::Subcommand),

	/// Show counts and validity of a GeoJSON file
	Probe(tools::probe::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	match &cli.command {
		Commands::Area(arguments) => tools::area::run(arguments),
		Commands::Probe(arguments) => tools::probe::run(arguments),
	}
}
