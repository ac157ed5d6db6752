use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::steam::{OrderedTree, Result, SteamError, Value, parse_bytes};

/// Environment variable that overrides install-root discovery.
pub const STEAM_PATH_ENV: &str = "STEAM_PATH";

/// Entries whose presence marks a directory as a Steam installation.
const MARKERS: [&str; 3] = ["steamapps", "userdata", "config"];

/// Locate the Steam installation root.
///
/// A non-empty `STEAM_PATH` wins; otherwise the platform's usual install
/// locations are probed in order.
pub fn find_install_root() -> Result<PathBuf> {
	let env_root = env::var_os(STEAM_PATH_ENV).filter(|value| !value.is_empty()).map(PathBuf::from);
	let home = home_dir();
	probe(env_root, &candidate_dirs(home.as_deref()), home.as_deref())
}

/// Whether `dir` contains one of the entries a Steam root always has.
pub fn looks_like_steam_dir(dir: &Path) -> bool {
	MARKERS.iter().any(|marker| dir.join(marker).exists())
}

fn probe(env_root: Option<PathBuf>, candidates: &[PathBuf], home: Option<&Path>) -> Result<PathBuf> {
	if let Some(root) = env_root {
		tracing::debug!(target: "steamvdf::locate", root = %root.display(), "using STEAM_PATH override");
		return Ok(root);
	}

	for candidate in candidates {
		let resolved = fs::canonicalize(candidate).unwrap_or_else(|_| candidate.clone());
		if looks_like_steam_dir(&resolved) {
			tracing::debug!(target: "steamvdf::locate", root = %resolved.display(), "found steam root");
			return Ok(resolved);
		}
		tracing::trace!(target: "steamvdf::locate", candidate = %candidate.display(), "not a steam root");
	}

	if cfg!(target_os = "linux")
		&& let Some(home) = home
		&& let Some(root) = root_from_registry_file(&home.join(".steam").join("registry.vdf"))
	{
		return Ok(root);
	}

	Err(SteamError::InstallNotFound {
		searched: candidates.to_vec(),
	})
}

fn home_dir() -> Option<PathBuf> {
	let var = if cfg!(windows) { "USERPROFILE" } else { "HOME" };
	env::var_os(var).filter(|value| !value.is_empty()).map(PathBuf::from)
}

#[cfg(target_os = "linux")]
fn candidate_dirs(home: Option<&Path>) -> Vec<PathBuf> {
	let mut dirs = Vec::new();
	if let Some(home) = home {
		let flatpak = home.join(".var").join("app").join("com.valvesoftware.Steam");
		let snap = home.join("snap").join("steam").join("common");
		dirs.extend([
			home.join(".steam").join("steam"),
			home.join(".local").join("share").join("Steam"),
			flatpak.join(".steam").join("steam"),
			flatpak.join(".local").join("share").join("Steam"),
			snap.join(".steam").join("steam"),
			snap.join(".local").join("share").join("Steam"),
			home.join(".steam").join("debian-installation"),
			home.join(".steam").join("root"),
		]);
	}
	dirs.push(PathBuf::from("/usr/share/steam"));
	dirs.push(PathBuf::from("/usr/local/share/steam"));
	dirs
}

#[cfg(target_os = "macos")]
fn candidate_dirs(home: Option<&Path>) -> Vec<PathBuf> {
	let Some(home) = home else {
		return Vec::new();
	};
	let support = home.join("Library").join("Application Support");
	vec![support.join("Steam"), support.join("steam")]
}

#[cfg(windows)]
fn candidate_dirs(_home: Option<&Path>) -> Vec<PathBuf> {
	vec![PathBuf::from(r"C:\Program Files (x86)\Steam"), PathBuf::from(r"C:\Program Files\Steam")]
}

#[cfg(not(any(target_os = "linux", target_os = "macos", windows)))]
fn candidate_dirs(_home: Option<&Path>) -> Vec<PathBuf> {
	Vec::new()
}

/// Read `SteamPath`/`InstallPath` from a Linux `registry.vdf`.
fn root_from_registry_file(path: &Path) -> Option<PathBuf> {
	let bytes = fs::read(path).ok()?;
	let tree = match parse_bytes(&bytes) {
		Ok(tree) => tree,
		Err(err) => {
			tracing::debug!(target: "steamvdf::locate", path = %path.display(), error = %err, "unparseable registry.vdf");
			return None;
		}
	};

	let mut found = None;
	find_scalars(&tree, &["SteamPath", "InstallPath"], &mut |value: &str| {
		if found.is_none() && Path::new(value).exists() {
			found = Some(PathBuf::from(value));
		}
	});
	found
}

fn find_scalars(tree: &OrderedTree, keys: &[&str], visit: &mut dyn FnMut(&str)) {
	for (key, value) in tree.iter() {
		match value {
			Value::Scalar(text) => {
				if keys.contains(&key) {
					visit(text);
				}
			}
			Value::Block(nested) => find_scalars(nested, keys, visit),
		}
	}
}
