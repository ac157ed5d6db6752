use crate::steam::{InstalledApp, LookupError, OrderedTree, Value};

/// Top-level key of a `libraryfolders.vdf` document.
pub const LIBRARY_FOLDERS_KEY: &str = "libraryfolders";

const PATH_KEY: &str = "path";
const APPS_KEY: &str = "apps";

/// Find the library path holding `item_id`.
///
/// Libraries are scanned in document order and the first one whose `apps`
/// block lists the id wins. Libraries that are not blocks or carry no `apps`
/// block are skipped.
pub fn find_path_for_item(tree: &OrderedTree, item_id: &str) -> Result<String, LookupError> {
	let folders = library_folders(tree)?;

	for (index, library, apps) in libraries(folders) {
		if apps.contains_key(item_id) {
			return library_path(index, library);
		}
	}

	Err(LookupError::ItemNotFound {
		item_id: item_id.to_owned(),
	})
}

/// Enumerate every installed app across all libraries.
///
/// `loader` is called with the normalized library path and the app id for
/// each entry of each library's `apps` block, in document order. Apps whose
/// manifest fails to load are skipped; only a missing or misshapen
/// `libraryfolders` key is an error.
pub fn list_all_items<F, E>(tree: &OrderedTree, mut loader: F) -> Result<Vec<InstalledApp>, LookupError>
where
	F: FnMut(&str, &str) -> Result<InstalledApp, E>,
	E: std::fmt::Display,
{
	let folders = library_folders(tree)?;
	let mut apps_out = Vec::new();
	let mut skipped = 0_usize;

	for (index, library, apps) in libraries(folders) {
		let path = match library_path(index, library) {
			Ok(path) => path,
			Err(err) => {
				tracing::debug!(target: "steamvdf::library", library = %index, error = %err, "skipping library without path");
				continue;
			}
		};

		for app_id in apps.keys() {
			match loader(&path, app_id) {
				Ok(mut app) => {
					app.library_path = path.clone();
					apps_out.push(app);
				}
				Err(err) => {
					skipped += 1;
					tracing::warn!(
						target: "steamvdf::library",
						library = %path,
						app_id,
						error = %err,
						"skipping app with unreadable manifest"
					);
				}
			}
		}
	}

	tracing::debug!(target: "steamvdf::library", listed = apps_out.len(), skipped, "listed installed apps");
	Ok(apps_out)
}

/// Collapse every doubled backslash into a single one.
pub fn normalize_library_path(raw: &str) -> String {
	raw.replace("\\\\", "\\")
}

fn library_folders(tree: &OrderedTree) -> Result<&OrderedTree, LookupError> {
	match tree.get(LIBRARY_FOLDERS_KEY) {
		Some(Value::Block(folders)) => Ok(folders),
		Some(other) => Err(LookupError::WrongShape {
			key: LIBRARY_FOLDERS_KEY,
			context: "document root".to_owned(),
			expected: "block",
			got: other.kind(),
		}),
		None => Err(LookupError::MissingKey {
			key: LIBRARY_FOLDERS_KEY,
			context: "document root".to_owned(),
		}),
	}
}

/// Yield `(index, library, apps)` for every well-shaped library in order.
fn libraries(folders: &OrderedTree) -> impl Iterator<Item = (&str, &OrderedTree, &OrderedTree)> {
	folders.iter().filter_map(|(index, library)| {
		let Value::Block(library) = library else {
			tracing::debug!(target: "steamvdf::library", library = %index, "skipping scalar library entry");
			return None;
		};
		let Some(apps) = library.get_block(APPS_KEY) else {
			tracing::debug!(target: "steamvdf::library", library = %index, "skipping library without apps block");
			return None;
		};
		Some((index, library, apps))
	})
}

fn library_path(index: &str, library: &OrderedTree) -> Result<String, LookupError> {
	match library.get(PATH_KEY) {
		Some(Value::Scalar(path)) => Ok(normalize_library_path(path)),
		Some(other) => Err(LookupError::WrongShape {
			key: PATH_KEY,
			context: format!("library {index}"),
			expected: "scalar",
			got: other.kind(),
		}),
		None => Err(LookupError::MissingKey {
			key: PATH_KEY,
			context: format!("library {index}"),
		}),
	}
}
