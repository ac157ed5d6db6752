use std::fs;
use std::path::PathBuf;

use steamvdf::steam::{Result, SteamError, parse_bytes, serialize};

use crate::cmd::util::{TreeJson, emit_json};

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// Parse a VDF file and print it re-serialized or as ordered JSON.
pub fn run(args: Args) -> Result<()> {
	let Args { file, json } = args;

	let bytes = fs::read(&file).map_err(|err| SteamError::Read {
		path: file.clone(),
		source: err,
	})?;
	let tree = parse_bytes(&bytes)?;

	if json {
		emit_json(&TreeJson(&tree));
		return Ok(());
	}

	print!("{}", serialize(&tree));
	Ok(())
}
