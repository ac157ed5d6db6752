use steamvdf::steam::{ReaderConfig, Result, SteamReader};

use crate::cmd::util::{AppJson, emit_json, format_size};

#[derive(clap::Args)]
pub struct Args {
	pub app_id: String,
	#[arg(long)]
	pub json: bool,
}

/// Show one installed app and its depots.
pub fn run(args: Args, config: ReaderConfig) -> Result<()> {
	let Args { app_id, json } = args;

	let reader = SteamReader::open_local(config)?;
	let app = reader.installed_app(&app_id)?;

	if json {
		emit_json(&AppJson::from(app));
		return Ok(());
	}

	println!("id: {}", app.id);
	println!("name: {}", app.name);
	println!("build: {}", app.build_id);
	println!("size: {}", format_size(app.size_on_disk_bytes));
	println!("last_updated: {}", app.last_updated_epoch);
	println!("last_played: {}", app.last_played_epoch);
	println!("library: {}", app.library_path);
	println!("path: {}", app.full_path.display());
	println!("depots: {}", app.depots.len());
	for depot in &app.depots {
		match &depot.dlc_owner_id {
			Some(owner) => println!("  {}\t{}\t{}\tdlc={owner}", depot.id, depot.manifest_id, format_size(depot.size_bytes)),
			None => println!("  {}\t{}\t{}", depot.id, depot.manifest_id, format_size(depot.size_bytes)),
		}
	}

	Ok(())
}
