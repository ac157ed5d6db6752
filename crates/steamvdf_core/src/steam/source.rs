use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::steam::{Result, find_install_root};

/// The two outside capabilities the library core consumes.
pub trait SteamSource {
	/// Return the Steam installation root.
	fn install_root(&self) -> Result<PathBuf>;

	/// Return the raw bytes of the file at `path`.
	fn read_file(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// Filesystem-backed source.
#[derive(Debug, Clone, Default)]
pub struct LocalSource {
	root: Option<PathBuf>,
}

impl LocalSource {
	/// Discover the install root on demand with [`find_install_root`].
	pub fn new() -> Self {
		Self::default()
	}

	/// Use a fixed install root instead of discovery.
	pub fn with_root(root: impl Into<PathBuf>) -> Self {
		Self { root: Some(root.into()) }
	}
}

impl SteamSource for LocalSource {
	fn install_root(&self) -> Result<PathBuf> {
		match &self.root {
			Some(root) => Ok(root.clone()),
			None => find_install_root(),
		}
	}

	fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
		fs::read(path)
	}
}

/// In-memory source with a fixed root and a path-to-bytes table.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
	root: PathBuf,
	files: HashMap<PathBuf, Vec<u8>>,
}

impl MemorySource {
	/// Create an empty source rooted at `root`.
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self {
			root: root.into(),
			files: HashMap::new(),
		}
	}

	/// Add or replace a file, builder style.
	pub fn with_file(mut self, path: impl Into<PathBuf>, bytes: impl Into<Vec<u8>>) -> Self {
		self.insert(path, bytes);
		self
	}

	/// Add or replace a file.
	pub fn insert(&mut self, path: impl Into<PathBuf>, bytes: impl Into<Vec<u8>>) {
		self.files.insert(path.into(), bytes.into());
	}
}

impl SteamSource for MemorySource {
	fn install_root(&self) -> Result<PathBuf> {
		Ok(self.root.clone())
	}

	fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
		self.files
			.get(path)
			.cloned()
			.ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("{} not in memory source", path.display())))
	}
}

impl<S: SteamSource + ?Sized> SteamSource for &S {
	fn install_root(&self) -> Result<PathBuf> {
		(**self).install_root()
	}

	fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
		(**self).read_file(path)
	}
}
