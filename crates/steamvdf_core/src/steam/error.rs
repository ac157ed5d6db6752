use std::path::PathBuf;

use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, SteamError>;

/// Grammar violations reported by the VDF parser.
///
/// Every variant is fatal to the parse call. A block left open at end of
/// input is not an error and never produces one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
	/// A key or quoted value did not start with `"`.
	#[error("expected '\"' at offset {at}")]
	ExpectedQuote {
		/// Byte offset of the offending character.
		at: usize,
	},
	/// Input ended before a closing quote.
	#[error("unterminated string starting at offset {at}")]
	UnterminatedString {
		/// Byte offset of the opening quote.
		at: usize,
	},
	/// A value position held something other than `{` or `"`.
	#[error("unexpected character {found:?} at offset {at}, expected '{{' or '\"'")]
	UnexpectedChar {
		/// Character found at the value position.
		found: char,
		/// Byte offset of the character.
		at: usize,
	},
	/// Input ended right after a key.
	#[error("unexpected end of input after key {key:?}")]
	MissingValue {
		/// Key that has no value.
		key: String,
	},
}

/// Failures of a single library index query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
	/// A key the query depends on is absent.
	#[error("required key {key:?} missing in {context}")]
	MissingKey {
		/// Missing key name.
		key: &'static str,
		/// Where the key was expected.
		context: String,
	},
	/// A key is present with the wrong shape.
	#[error("key {key:?} in {context} is a {got}, expected a {expected}")]
	WrongShape {
		/// Offending key name.
		key: &'static str,
		/// Where the key was found.
		context: String,
		/// Expected value kind.
		expected: &'static str,
		/// Actual value kind.
		got: &'static str,
	},
	/// No library lists the requested item.
	#[error("app {item_id} not found in any library")]
	ItemNotFound {
		/// Requested item id.
		item_id: String,
	},
}

/// Failures of manifest extraction.
///
/// Only the mandatory top-level wrapper is checked; every other field
/// degrades to its zero value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
	/// The manifest has no top-level `AppState` key.
	#[error("AppState not found in manifest")]
	MissingAppState,
	/// The top-level `AppState` key holds a scalar.
	#[error("AppState is a scalar, expected a block")]
	AppStateNotBlock,
}

/// Errors produced while locating, reading, and interpreting Steam data.
#[derive(Debug, Error)]
pub enum SteamError {
	/// Filesystem failure on a known path.
	#[error("failed to read {path}: {source}")]
	Read {
		/// Path that could not be read.
		path: PathBuf,
		/// Underlying IO error.
		source: std::io::Error,
	},
	/// VDF grammar violation.
	#[error("parse: {0}")]
	Parse(#[from] ParseError),
	/// Library index query failure.
	#[error("lookup: {0}")]
	Lookup(#[from] LookupError),
	/// Manifest extraction failure.
	#[error("manifest: {0}")]
	Extract(#[from] ExtractError),
	/// No candidate directory looked like a Steam installation.
	#[error("steam installation not found (searched {} locations)", .searched.len())]
	InstallNotFound {
		/// Candidate directories that were probed.
		searched: Vec<PathBuf>,
	},
}
