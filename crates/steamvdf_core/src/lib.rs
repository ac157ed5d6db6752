//! Public library API for reading Steam VDF documents and library indexes.

/// VDF parsing and serialization, library index lookups, and manifest extraction.
pub mod steam;
