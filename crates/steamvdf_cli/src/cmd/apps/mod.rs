use serde::Serialize;
use steamvdf::steam::{ReaderConfig, Result, SteamReader};

use crate::cmd::util::{AppJson, emit_json, format_size};

#[derive(clap::Args)]
pub struct Args {
	#[arg(long)]
	pub json: bool,
}

#[derive(Serialize)]
struct AppsJson {
	steam_path: String,
	library_vdf: String,
	apps: Vec<AppJson>,
}

/// List every installed app whose manifest could be read.
pub fn run(args: Args, config: ReaderConfig) -> Result<()> {
	let Args { json } = args;

	let reader = SteamReader::open_local(config)?;
	let apps = reader.installed_apps()?;

	if json {
		let payload = AppsJson {
			steam_path: reader.steam_path().display().to_string(),
			library_vdf: reader.library_vdf_path().display().to_string(),
			apps: apps.into_iter().map(AppJson::from).collect(),
		};
		emit_json(&payload);
		return Ok(());
	}

	println!("apps: {}", apps.len());
	for app in &apps {
		println!(
			"{}\t{}\t{}\t{}",
			app.id,
			app.name,
			format_size(app.size_on_disk_bytes),
			app.full_path.display()
		);
	}

	Ok(())
}
