use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::OnceLock;

static STEAMVDF_BIN: OnceLock<PathBuf> = OnceLock::new();

pub(crate) fn fixture_path(name: &str) -> PathBuf {
	steamvdf_testkit::fixture_path(name)
}

pub(crate) fn run_steamvdf(args: &[&str]) -> Output {
	Command::new(steamvdf_bin())
		.args(args)
		.env_remove("STEAM_PATH")
		.output()
		.expect("steamvdf command executes")
}

pub(crate) fn run_steamvdf_json(args: &[&str]) -> serde_json::Value {
	let output = run_steamvdf(args);
	assert!(
		output.status.success(),
		"steamvdf command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

/// Run with `--steam-path` pointing at `root`, followed by `args`.
pub(crate) fn run_against(root: &std::path::Path, args: &[&str]) -> Output {
	let root = root.to_string_lossy().into_owned();
	let mut full = vec!["--steam-path", root.as_str()];
	full.extend_from_slice(args);
	run_steamvdf(&full)
}

fn steamvdf_bin() -> &'static PathBuf {
	STEAMVDF_BIN.get_or_init(resolve_steamvdf_bin)
}

fn resolve_steamvdf_bin() -> PathBuf {
	if let Ok(path) = std::env::var("CARGO_BIN_EXE_steamvdf") {
		return PathBuf::from(path);
	}

	let workspace_root = steamvdf_testkit::workspace_root();
	let mut bin = steamvdf_testkit::target_dir().join("debug");
	bin.push(if cfg!(windows) { "steamvdf.exe" } else { "steamvdf" });

	let status = Command::new("cargo")
		.current_dir(&workspace_root)
		.args(["build", "--quiet", "--bin", "steamvdf"])
		.status()
		.expect("cargo build executes");
	assert!(status.success(), "failed to build steamvdf binary at {}", bin.display());

	bin
}
