//! Shared test helpers for workspace crates.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve a fixture path under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// Read a fixture file as text.
pub fn fixture_text(name: &str) -> String {
	let path = fixture_path(name);
	fs::read_to_string(&path).unwrap_or_else(|err| panic!("fixture {} unreadable: {err}", path.display()))
}

/// Resolve the workspace target directory.
pub fn target_dir() -> PathBuf {
	std::env::var_os("CARGO_TARGET_DIR")
		.map(PathBuf::from)
		.unwrap_or_else(|| workspace_root().join("target"))
}

/// Create a fresh temporary directory, removed on drop.
pub fn temp_dir() -> TempDir {
	tempfile::tempdir().expect("temporary directory is creatable")
}

/// Temporary Steam installation laid out on disk.
///
/// The root doubles as library `"0"`; extra libraries live next to it.
pub struct FakeSteam {
	dir: TempDir,
	libraries: Vec<(PathBuf, Vec<String>)>,
}

impl FakeSteam {
	/// Create an empty installation with `steamapps` and `config` directories.
	pub fn new() -> Self {
		let dir = temp_dir();
		let root = dir.path().join("Steam");
		fs::create_dir_all(root.join("steamapps")).expect("create steamapps");
		fs::create_dir_all(root.join("config")).expect("create config");
		let mut steam = Self { dir, libraries: Vec::new() };
		steam.libraries.push((root, Vec::new()));
		steam
	}

	/// Installation with the fixture manifests: `228980` in the root library,
	/// `667970` in a second library, and `1070560` listed without a manifest.
	pub fn with_fixture_apps() -> Self {
		let mut steam = Self::new();
		let second = steam.add_library("SteamLibrary");
		let root = steam.root().to_path_buf();

		steam.install(&root, "228980", &fixture_text("appmanifest_228980.acf"));
		steam.list_app(&root, "1070560");
		steam.install(&second, "667970", &fixture_text("appmanifest_667970.acf"));
		steam.write_config("loginusers.vdf", &fixture_text("loginusers.vdf"));
		steam.write_library_folders();
		steam
	}

	/// Installation root directory.
	pub fn root(&self) -> &Path {
		&self.libraries[0].0
	}

	/// Path of `steamapps/libraryfolders.vdf` under the root.
	pub fn library_vdf(&self) -> PathBuf {
		self.root().join("steamapps").join("libraryfolders.vdf")
	}

	/// Create another library directory and return its path.
	pub fn add_library(&mut self, name: &str) -> PathBuf {
		let path = self.dir.path().join(name);
		fs::create_dir_all(path.join("steamapps")).expect("create library steamapps");
		self.libraries.push((path.clone(), Vec::new()));
		path
	}

	/// List `app_id` under `library` without writing a manifest.
	pub fn list_app(&mut self, library: &Path, app_id: &str) {
		let entry = self
			.libraries
			.iter_mut()
			.find(|(path, _)| path.as_path() == library)
			.unwrap_or_else(|| panic!("unknown library {}", library.display()));
		entry.1.push(app_id.to_owned());
	}

	/// List `app_id` under `library` and write its manifest text.
	pub fn install(&mut self, library: &Path, app_id: &str, manifest: &str) {
		self.list_app(library, app_id);
		let path = library.join("steamapps").join(format!("appmanifest_{app_id}.acf"));
		fs::write(path, manifest).expect("write manifest");
	}

	/// Write a file under `<root>/config`.
	pub fn write_config(&self, name: &str, text: &str) {
		fs::write(self.root().join("config").join(name), text).expect("write config file");
	}

	/// Render and write `libraryfolders.vdf` for the current libraries.
	///
	/// Backslashes in paths are doubled the way Steam stores them.
	pub fn write_library_folders(&self) {
		let mut text = String::from("\"libraryfolders\"\n{\n");
		for (index, (path, apps)) in self.libraries.iter().enumerate() {
			let stored = path.display().to_string().replace('\\', "\\\\");
			text.push_str(&format!("\t\"{index}\"\n\t{{\n\t\t\"path\"\t\t\"{stored}\"\n\t\t\"apps\"\n\t\t{{\n"));
			for app in apps {
				text.push_str(&format!("\t\t\t\"{app}\"\t\t\"0\"\n"));
			}
			text.push_str("\t\t}\n\t}\n");
		}
		text.push_str("}\n");
		fs::write(self.library_vdf(), text).expect("write libraryfolders.vdf");
	}
}

impl Default for FakeSteam {
	fn default() -> Self {
		Self::new()
	}
}
