mod error;
mod library;
mod locate;
mod login;
mod manifest;
mod parse;
mod reader;
mod serialize;
mod source;
mod tree;

/// Error and result aliases.
pub use error::{ExtractError, LookupError, ParseError, Result, SteamError};
/// Library index lookups over a parsed `libraryfolders.vdf` tree.
pub use library::{LIBRARY_FOLDERS_KEY, find_path_for_item, list_all_items, normalize_library_path};
/// Install-root discovery.
pub use locate::{STEAM_PATH_ENV, find_install_root, looks_like_steam_dir};
/// Auto-login account lookup over a parsed `loginusers.vdf` tree.
pub use login::{LoginUser, auto_login_user, login_users};
/// Manifest extraction types and entry points.
pub use manifest::{APP_STATE_KEY, InstalledApp, InstalledDepot, extract, lenient_i64, manifest_path};
/// VDF text parser entry points.
pub use parse::{parse, parse_bytes};
/// Library reader facade and its configuration.
pub use reader::{ReaderConfig, SteamReader};
/// VDF text serializer entry points.
pub use serialize::{serialize, write_tree};
/// Injected install-root and byte-source capabilities.
pub use source::{LocalSource, MemorySource, SteamSource};
/// Parsed value tree types.
pub use tree::{OrderedTree, Value};
