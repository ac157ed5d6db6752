use steamvdf::steam::{LocalSource, ReaderConfig, Result, SteamSource};

/// Print the install root, preferring `--steam-path` over discovery.
pub fn run(config: ReaderConfig) -> Result<()> {
	let source = match config.steam_path {
		Some(root) => LocalSource::with_root(root),
		None => LocalSource::new(),
	};
	println!("{}", source.install_root()?.display());
	Ok(())
}

#[cfg(test)]
mod tests {
	use steamvdf_testkit::FakeSteam;

	use crate::cmd::test_support::run_against;

	#[test]
	fn root_echoes_explicit_steam_path() {
		let steam = FakeSteam::new();
		let output = run_against(steam.root(), &["root"]);

		assert!(output.status.success(), "root should succeed");
		assert_eq!(String::from_utf8_lossy(&output.stdout).trim_end(), steam.root().to_string_lossy());
	}
}
