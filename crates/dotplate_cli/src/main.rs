#![allow(missing_docs)]

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cmd;

use cmd::{CliError, Config};

#[derive(Parser)]
#[command(name = "dotplate", about = "Render templates against JSON, YAML, TOML, CSV, XML or text data")]
struct Cli {
	#[command(flatten)]
	args: cmd::Args,
}

fn main() {
	init_tracing();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> Result<(), CliError> {
	let cli = Cli::parse();
	let config = Config::from_args(cli.args)?;
	cmd::render::run(config)
}

fn init_tracing() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
