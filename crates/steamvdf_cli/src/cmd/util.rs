use serde::Serialize;
use serde::ser::SerializeMap;
use steamvdf::steam::{InstalledApp, InstalledDepot, OrderedTree, Value};

/// Print a JSON payload to stdout.
pub(crate) fn emit_json<T: Serialize>(payload: &T) {
	match serde_json::to_string_pretty(payload) {
		Ok(text) => println!("{text}"),
		Err(err) => eprintln!("error: json: {err}"),
	}
}

/// Serializes a tree as a JSON object keeping document order.
pub(crate) struct TreeJson<'a>(pub(crate) &'a OrderedTree);

impl Serialize for TreeJson<'_> {
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.0.len()))?;
		for (key, value) in self.0.iter() {
			match value {
				Value::Scalar(text) => map.serialize_entry(key, text)?,
				Value::Block(nested) => map.serialize_entry(key, &TreeJson(nested))?,
			}
		}
		map.end()
	}
}

#[derive(Serialize)]
pub(crate) struct AppJson {
	pub(crate) id: String,
	pub(crate) name: String,
	pub(crate) install_dir: String,
	pub(crate) full_path: String,
	pub(crate) build_id: String,
	pub(crate) size_on_disk: i64,
	pub(crate) last_updated: i64,
	pub(crate) last_played: i64,
	pub(crate) library_path: String,
	pub(crate) depots: Vec<DepotJson>,
}

impl From<InstalledApp> for AppJson {
	fn from(app: InstalledApp) -> Self {
		Self {
			id: app.id,
			name: app.name,
			install_dir: app.install_dir,
			full_path: app.full_path.display().to_string(),
			build_id: app.build_id,
			size_on_disk: app.size_on_disk_bytes,
			last_updated: app.last_updated_epoch,
			last_played: app.last_played_epoch,
			library_path: app.library_path,
			depots: app.depots.into_iter().map(DepotJson::from).collect(),
		}
	}
}

#[derive(Serialize)]
pub(crate) struct DepotJson {
	pub(crate) id: String,
	pub(crate) manifest: String,
	pub(crate) size: i64,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub(crate) dlc_app_id: Option<String>,
}

impl From<InstalledDepot> for DepotJson {
	fn from(depot: InstalledDepot) -> Self {
		Self {
			id: depot.id,
			manifest: depot.manifest_id,
			size: depot.size_bytes,
			dlc_app_id: depot.dlc_owner_id,
		}
	}
}

/// Human-readable byte count.
pub(crate) fn format_size(bytes: i64) -> String {
	const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];
	let mut value = bytes as f64;
	let mut unit = 0;
	while value >= 1024.0 && unit + 1 < UNITS.len() {
		value /= 1024.0;
		unit += 1;
	}
	if unit == 0 { format!("{bytes} B") } else { format!("{value:.1} {}", UNITS[unit]) }
}
