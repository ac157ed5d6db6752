use std::path::{Path, PathBuf};

use crate::steam::{ExtractError, InstalledDepot, extract, lenient_i64, manifest_path, parse};

const VTOL_MANIFEST: &str = r#""AppState"
{
	"appid"		"667970"
	"universe"		"1"
	"name"		"VTOL VR"
	"StateFlags"		"4"
	"installdir"		"VTOL VR"
	"LastUpdated"		"1739823340"
	"LastPlayed"		"1740083412"
	"SizeOnDisk"		"3606612198"
	"buildid"		"20275350"
	"InstalledDepots"
	{
		"667971"
		{
			"manifest"		"809774009354886606"
			"size"		"3488450479"
		}
		"1770481"
		{
			"manifest"		"4625979481897414804"
			"size"		"57120063"
			"dlcappid"		"1770480"
		}
	}
}"#;

#[test]
fn extracts_scalar_fields() {
	let tree = parse(VTOL_MANIFEST).expect("manifest parses");
	let app = extract(&tree, "/games").expect("manifest extracts");

	assert_eq!(app.id, "667970");
	assert_eq!(app.name, "VTOL VR");
	assert_eq!(app.install_dir, "VTOL VR");
	assert_eq!(app.build_id, "20275350");
	assert_eq!(app.size_on_disk_bytes, 3_606_612_198);
	assert_eq!(app.last_updated_epoch, 1_739_823_340);
	assert_eq!(app.last_played_epoch, 1_740_083_412);
	assert_eq!(app.library_path, "/games");
}

#[test]
fn joins_full_path_under_steamapps_common() {
	let tree = parse(VTOL_MANIFEST).expect("manifest parses");
	let app = extract(&tree, "/games").expect("manifest extracts");
	assert_eq!(app.full_path, Path::new("/games").join("steamapps").join("common").join("VTOL VR"));
}

#[test]
fn extracts_depots_in_order_with_optional_dlc_owner() {
	let tree = parse(VTOL_MANIFEST).expect("manifest parses");
	let app = extract(&tree, "/games").expect("manifest extracts");

	assert_eq!(
		app.depots,
		[
			InstalledDepot {
				id: "667971".to_owned(),
				manifest_id: "809774009354886606".to_owned(),
				size_bytes: 3_488_450_479,
				dlc_owner_id: None,
			},
			InstalledDepot {
				id: "1770481".to_owned(),
				manifest_id: "4625979481897414804".to_owned(),
				size_bytes: 57_120_063,
				dlc_owner_id: Some("1770480".to_owned()),
			},
		]
	);
}

#[test]
fn missing_fields_default_to_zero_values() {
	let tree = parse("\"AppState\" { }").expect("manifest parses");
	let app = extract(&tree, "/games").expect("empty AppState extracts");

	assert_eq!(app.name, "");
	assert_eq!(app.install_dir, "");
	assert_eq!(app.full_path, PathBuf::new());
	assert_eq!(app.size_on_disk_bytes, 0);
	assert!(app.depots.is_empty());
}

#[test]
fn non_numeric_size_becomes_zero() {
	let tree = parse("\"AppState\" { \"SizeOnDisk\" \"lots\" \"LastPlayed\" { } }").expect("manifest parses");
	let app = extract(&tree, "/games").expect("manifest extracts");

	assert_eq!(app.size_on_disk_bytes, 0);
	assert_eq!(app.last_played_epoch, 0);
}

#[test]
fn misshapen_text_fields_are_ignored() {
	let tree = parse("\"AppState\" { \"name\" { } \"installdir\" { \"x\" \"y\" } }").expect("manifest parses");
	let app = extract(&tree, "/games").expect("manifest extracts");

	assert_eq!(app.name, "");
	assert_eq!(app.full_path, PathBuf::new());
}

#[test]
fn partial_depot_entries_are_kept() {
	let tree = parse("\"AppState\" { \"InstalledDepots\" { \"1\" { } \"2\" \"stray\" \"3\" { \"size\" \"x\" } } }").expect("manifest parses");
	let app = extract(&tree, "/games").expect("manifest extracts");

	let ids: Vec<_> = app.depots.iter().map(|depot| depot.id.as_str()).collect();
	assert_eq!(ids, ["1", "3"]);
	assert_eq!(app.depots[0], InstalledDepot { id: "1".to_owned(), ..InstalledDepot::default() });
	assert_eq!(app.depots[1].size_bytes, 0);
}

#[test]
fn requires_app_state_block() {
	let tree = parse("\"Other\" { }").expect("parses");
	assert_eq!(extract(&tree, "/games"), Err(ExtractError::MissingAppState));

	let tree = parse("\"AppState\" \"flat\"").expect("parses");
	assert_eq!(extract(&tree, "/games"), Err(ExtractError::AppStateNotBlock));
}

#[test]
fn lenient_numbers() {
	assert_eq!(lenient_i64("3606612198"), 3_606_612_198);
	assert_eq!(lenient_i64(" 42 "), 42);
	assert_eq!(lenient_i64(""), 0);
	assert_eq!(lenient_i64("99999999999999999999"), 0);
	assert_eq!(lenient_i64("abc"), 0);
	assert_eq!(lenient_i64("-"), 0);
}

#[test]
fn lenient_numbers_stop_at_first_non_digit() {
	assert_eq!(lenient_i64("1.5"), 1);
	assert_eq!(lenient_i64("12abc"), 12);
	assert_eq!(lenient_i64("-7 days"), -7);
	assert_eq!(lenient_i64("+3"), 3);
}

#[test]
fn manifest_path_uses_steamapps_layout() {
	assert_eq!(manifest_path("/games", "667970"), Path::new("/games").join("steamapps").join("appmanifest_667970.acf"));
}
