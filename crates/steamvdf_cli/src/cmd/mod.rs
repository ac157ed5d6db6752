/// Single installed app command.
pub mod app;
/// Installed app listing command.
pub mod apps;
/// App library lookup command.
pub mod find;
/// VDF parse and re-print command.
pub mod parse;
/// Install root discovery command.
pub mod root;
/// Auto-login account command.
pub mod user;

pub(crate) mod util;

#[cfg(test)]
pub(crate) mod test_support;
