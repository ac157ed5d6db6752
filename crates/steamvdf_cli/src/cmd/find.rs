use steamvdf::steam::{ReaderConfig, Result, SteamReader};

#[derive(clap::Args)]
pub struct Args {
	pub app_id: String,
}

/// Print the library path that holds an app.
pub fn run(args: Args, config: ReaderConfig) -> Result<()> {
	let Args { app_id } = args;

	let reader = SteamReader::open_local(config)?;
	println!("{}", reader.find_app_path(&app_id)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use std::path::Path;

	use steamvdf_testkit::FakeSteam;

	use crate::cmd::test_support::run_against;

	#[test]
	fn find_prints_owning_library() {
		let steam = FakeSteam::with_fixture_apps();
		let output = run_against(steam.root(), &["find", "667970"]);

		assert!(output.status.success(), "find should succeed");
		let stdout = String::from_utf8_lossy(&output.stdout);
		let library = steam.root().parent().expect("temp parent").join("SteamLibrary");
		assert_eq!(Path::new(stdout.trim_end()), library);
	}

	#[test]
	fn find_honors_library_vdf_override() {
		let steam = FakeSteam::with_fixture_apps();
		let fixture = steamvdf_testkit::fixture_path("libraryfolders.vdf");
		let fixture = fixture.to_string_lossy().into_owned();
		let output = run_against(steam.root(), &["--library-vdf", &fixture, "find", "667970"]);

		assert!(output.status.success(), "find should succeed");
		assert_eq!(String::from_utf8_lossy(&output.stdout), "D:\\SteamLibrary\n");
	}
}
