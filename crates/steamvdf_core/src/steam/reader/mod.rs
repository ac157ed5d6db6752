use std::path::{Path, PathBuf};

use crate::steam::{
	InstalledApp, LocalSource, OrderedTree, Result, SteamError, SteamSource, auto_login_user, extract, find_path_for_item, list_all_items,
	manifest_path, parse_bytes,
};

/// Overrides for where the reader looks.
#[derive(Debug, Clone, Default)]
pub struct ReaderConfig {
	/// Steam root to use instead of asking the source.
	pub steam_path: Option<PathBuf>,
	/// Library index to read instead of `<root>/steamapps/libraryfolders.vdf`.
	pub library_vdf_path: Option<PathBuf>,
}

/// Library index loaded once from a source, with app queries on top.
pub struct SteamReader<S = LocalSource> {
	source: S,
	steam_path: PathBuf,
	library_vdf_path: PathBuf,
	folders: OrderedTree,
}

impl SteamReader<LocalSource> {
	/// Open the local Steam installation.
	pub fn open_local(config: ReaderConfig) -> Result<Self> {
		Self::open(LocalSource::new(), config)
	}
}

impl<S: SteamSource> SteamReader<S> {
	/// Resolve the root and library index, then read and parse the index.
	pub fn open(source: S, config: ReaderConfig) -> Result<Self> {
		let ReaderConfig {
			steam_path,
			library_vdf_path,
		} = config;

		let steam_path = match steam_path {
			Some(path) => path,
			None => source.install_root()?,
		};
		let library_vdf_path = library_vdf_path.unwrap_or_else(|| steam_path.join("steamapps").join("libraryfolders.vdf"));

		let folders = read_tree(&source, &library_vdf_path)?;
		tracing::debug!(
			target: "steamvdf::reader",
			steam_path = %steam_path.display(),
			library_vdf = %library_vdf_path.display(),
			"opened library index"
		);

		Ok(Self {
			source,
			steam_path,
			library_vdf_path,
			folders,
		})
	}

	/// Steam installation root.
	pub fn steam_path(&self) -> &Path {
		&self.steam_path
	}

	/// Path the library index was read from.
	pub fn library_vdf_path(&self) -> &Path {
		&self.library_vdf_path
	}

	/// Parsed library index.
	pub fn library_folders(&self) -> &OrderedTree {
		&self.folders
	}

	/// Library path holding `app_id`.
	pub fn find_app_path(&self, app_id: &str) -> Result<String> {
		Ok(find_path_for_item(&self.folders, app_id)?)
	}

	/// Every installed app whose manifest loads.
	pub fn installed_apps(&self) -> Result<Vec<InstalledApp>> {
		Ok(list_all_items(&self.folders, |library, app_id| self.load_manifest(library, app_id))?)
	}

	/// One installed app by id.
	pub fn installed_app(&self, app_id: &str) -> Result<InstalledApp> {
		let library = self.find_app_path(app_id)?;
		self.load_manifest(&library, app_id)
	}

	/// Installed build id of `app_id`, empty when the manifest has none.
	pub fn build_id(&self, app_id: &str) -> Result<String> {
		Ok(self.installed_app(app_id)?.build_id)
	}

	/// Read, parse, and extract `<library>/steamapps/appmanifest_<id>.acf`.
	pub fn load_manifest(&self, library_path: &str, app_id: &str) -> Result<InstalledApp> {
		let tree = read_tree(&self.source, &manifest_path(library_path, app_id))?;
		let mut app = extract(&tree, library_path)?;
		app.id = app_id.to_owned();
		Ok(app)
	}

	/// Account name of the most recent login from `<root>/config/loginusers.vdf`.
	pub fn auto_login_user(&self) -> Result<Option<String>> {
		let path = self.steam_path.join("config").join("loginusers.vdf");
		Ok(auto_login_user(&read_tree(&self.source, &path)?))
	}
}

fn read_tree<S: SteamSource>(source: &S, path: &Path) -> Result<OrderedTree> {
	let bytes = source.read_file(path).map_err(|err| SteamError::Read {
		path: path.to_path_buf(),
		source: err,
	})?;
	Ok(parse_bytes(&bytes)?)
}
