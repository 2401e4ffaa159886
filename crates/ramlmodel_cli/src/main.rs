#![allow(missing_docs)]

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use log::{LevelFilter, debug};

mod cmd;
mod config;
mod error;

#[derive(Parser)]
#[command(name = "ramlmodel", about = "Typed RAML document model inspection")]
struct Cli {
	/// Path to a TOML configuration file.
	#[arg(long, global = true)]
	config: Option<PathBuf>,
	/// Log level (off, error, warn, info, debug, trace).
	#[arg(long = "log-level", global = true, default_value = "warn")]
	log_level: String,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// List element kinds and their declared fields.
	Kinds(cmd::kinds::Args),
	/// Project a document through an element kind and print every field.
	Show(cmd::show::Args),
	/// Print one field selected by path.
	Get(cmd::get::Args),
	/// Read every declared field and report those that fail.
	Check(cmd::check::Args),
}

fn main() {
	let cli = Cli::parse();
	init_logging(&cli.log_level);

	if let Err(err) = run(cli) {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn init_logging(level: &str) {
	let filter = LevelFilter::from_str(level).unwrap_or_else(|_| {
		eprintln!("invalid log level: {level}, using 'warn'");
		LevelFilter::Warn
	});
	env_logger::Builder::from_env(env_logger::Env::default()).filter_level(filter).init();
}

fn run(cli: Cli) -> error::Result<()> {
	let app_config = config::load_config(cli.config.as_deref())?;
	debug!(config:? = app_config; "loaded configuration");

	match cli.command {
		Commands::Kinds(args) => cmd::kinds::run(args, &app_config),
		Commands::Show(args) => cmd::show::run(args, &app_config),
		Commands::Get(args) => cmd::get::run(args, &app_config),
		Commands::Check(args) => cmd::check::run(args, &app_config),
	}
}
