#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use steamvdf::steam::ReaderConfig;
use tracing::Level;

mod cmd;

#[derive(Parser)]
#[command(name = "steamvdf", about = "Steam VDF and library inspection tools")]
struct Cli {
	/// Steam installation root; skips discovery.
	#[arg(long, global = true)]
	steam_path: Option<PathBuf>,
	/// Library index to read instead of `<root>/steamapps/libraryfolders.vdf`.
	#[arg(long, global = true)]
	library_vdf: Option<PathBuf>,
	/// Increase log verbosity (repeatable).
	#[arg(short, long, global = true, action = ArgAction::Count)]
	verbose: u8,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Parse a VDF file and print it back.
	Parse(cmd::parse::Args),
	/// Print the Steam installation root.
	Root,
	/// Print the library path holding an app.
	Find(cmd::find::Args),
	/// List installed apps.
	Apps(cmd::apps::Args),
	/// Show one installed app with its depots.
	App(cmd::app::Args),
	/// Print the most recently logged-in account.
	User,
}

fn main() {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	if let Err(err) = run(cli) {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn init_tracing(verbose: u8) {
	let level = match verbose {
		0 => Level::WARN,
		1 => Level::INFO,
		2 => Level::DEBUG,
		_ => Level::TRACE,
	};
	tracing_subscriber::fmt()
		.with_max_level(level)
		.with_writer(std::io::stderr)
		.with_target(true)
		.init();
}

fn run(cli: Cli) -> steamvdf::steam::Result<()> {
	let config = ReaderConfig {
		steam_path: cli.steam_path,
		library_vdf_path: cli.library_vdf,
	};

	match cli.command {
		Commands::Parse(args) => cmd::parse::run(args),
		Commands::Root => cmd::root::run(config),
		Commands::Find(args) => cmd::find::run(args, config),
		Commands::Apps(args) => cmd::apps::run(args, config),
		Commands::App(args) => cmd::app::run(args, config),
		Commands::User => cmd::user::run(config),
	}
}
