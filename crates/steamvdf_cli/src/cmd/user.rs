use steamvdf::steam::{ReaderConfig, Result, SteamReader};

/// Print the most recently logged-in account name.
pub fn run(config: ReaderConfig) -> Result<()> {
	let reader = SteamReader::open_local(config)?;
	match reader.auto_login_user()? {
		Some(name) => println!("{name}"),
		None => println!("-"),
	}
	Ok(())
}
