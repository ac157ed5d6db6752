use std::path::{Path, PathBuf};

use crate::steam::{ExtractError, OrderedTree, Value};

/// Top-level key of an `appmanifest_<id>.acf` document.
pub const APP_STATE_KEY: &str = "AppState";

const DEPOTS_KEY: &str = "InstalledDepots";

/// One installed content depot of an app.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstalledDepot {
	/// Depot id (the key of its block).
	pub id: String,
	/// Installed manifest id.
	pub manifest_id: String,
	/// Installed size in bytes.
	pub size_bytes: i64,
	/// Owning DLC app id, present only when the manifest lists `dlcappid`.
	pub dlc_owner_id: Option<String>,
}

/// Snapshot of one installed app.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstalledApp {
	/// App id.
	pub id: String,
	/// Display name.
	pub name: String,
	/// Directory name under `steamapps/common`.
	pub install_dir: String,
	/// Full install location, empty when the manifest has no `installdir`.
	pub full_path: PathBuf,
	/// Installed build id.
	pub build_id: String,
	/// Size on disk in bytes.
	pub size_on_disk_bytes: i64,
	/// Last update time as a Unix timestamp.
	pub last_updated_epoch: i64,
	/// Last played time as a Unix timestamp.
	pub last_played_epoch: i64,
	/// Library root holding this app.
	pub library_path: String,
	/// Installed depots in manifest order.
	pub depots: Vec<InstalledDepot>,
}

/// Project a parsed manifest into an [`InstalledApp`].
///
/// Only the `AppState` block is mandatory. Absent or misshapen fields keep
/// their zero value and numbers that fail to parse become `0`.
pub fn extract(tree: &OrderedTree, library_path: &str) -> Result<InstalledApp, ExtractError> {
	let state = match tree.get(APP_STATE_KEY) {
		Some(Value::Block(state)) => state,
		Some(Value::Scalar(_)) => return Err(ExtractError::AppStateNotBlock),
		None => return Err(ExtractError::MissingAppState),
	};

	let text = |key: &str| state.get_scalar(key).unwrap_or_default().to_owned();
	let number = |key: &str| state.get_scalar(key).map(lenient_i64).unwrap_or_default();

	let mut app = InstalledApp {
		id: text("appid"),
		name: text("name"),
		build_id: text("buildid"),
		size_on_disk_bytes: number("SizeOnDisk"),
		last_updated_epoch: number("LastUpdated"),
		last_played_epoch: number("LastPlayed"),
		library_path: library_path.to_owned(),
		..InstalledApp::default()
	};

	if let Some(install_dir) = state.get_scalar("installdir") {
		app.install_dir = install_dir.to_owned();
		app.full_path = Path::new(library_path).join("steamapps").join("common").join(install_dir);
	}

	if let Some(depots) = state.get_block(DEPOTS_KEY) {
		app.depots = depots
			.iter()
			.filter_map(|(id, depot)| depot.as_block().map(|depot| extract_depot(id, depot)))
			.collect();
	}

	Ok(app)
}

fn extract_depot(id: &str, depot: &OrderedTree) -> InstalledDepot {
	InstalledDepot {
		id: id.to_owned(),
		manifest_id: depot.get_scalar("manifest").unwrap_or_default().to_owned(),
		size_bytes: depot.get_scalar("size").map(lenient_i64).unwrap_or_default(),
		dlc_owner_id: depot.get_scalar("dlcappid").map(str::to_owned),
	}
}

/// Read the leading decimal integer of `text`, yielding `0` when there is none.
///
/// Leading whitespace and an optional sign are accepted and anything after
/// the digits is ignored, so `"1.5"` reads as `1`. Out-of-range values are `0`.
pub fn lenient_i64(text: &str) -> i64 {
	let text = text.trim_start();
	let sign = usize::from(text.starts_with(['+', '-']));
	let digits = text[sign..].bytes().take_while(u8::is_ascii_digit).count();
	text[..sign + digits].parse().unwrap_or(0)
}

/// Location of the manifest for `app_id` inside a library.
pub fn manifest_path(library_path: impl AsRef<Path>, app_id: &str) -> PathBuf {
	library_path.as_ref().join("steamapps").join(format!("appmanifest_{app_id}.acf"))
}

#[cfg(test)]
mod tests;
