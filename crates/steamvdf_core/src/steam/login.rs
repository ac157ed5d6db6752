use crate::steam::{OrderedTree, lenient_i64};

const USERS_KEY: &str = "users";

/// One account entry of `config/loginusers.vdf`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginUser {
	/// 64-bit Steam id (the key of the account block).
	pub steam_id: String,
	/// Login account name.
	pub account_name: String,
	/// Community display name.
	pub persona_name: String,
	/// Last login time as a Unix timestamp.
	pub timestamp: i64,
	/// Whether Steam flagged this account as the most recent login.
	pub most_recent: bool,
}

/// List accounts that carry an `AccountName`, in document order.
pub fn login_users(tree: &OrderedTree) -> Vec<LoginUser> {
	let Some(users) = tree.get_block(USERS_KEY) else {
		return Vec::new();
	};

	users
		.iter()
		.filter_map(|(steam_id, user)| {
			let user = user.as_block()?;
			Some(LoginUser {
				steam_id: steam_id.to_owned(),
				account_name: user.get_scalar("AccountName")?.to_owned(),
				persona_name: user.get_scalar("PersonaName").unwrap_or_default().to_owned(),
				timestamp: user.get_scalar("Timestamp").map(lenient_i64).unwrap_or_default(),
				most_recent: user.get_scalar("MostRecent") == Some("1"),
			})
		})
		.collect()
}

/// Account name of the most recently logged-in user.
///
/// The greatest positive `Timestamp` wins; ties keep the earlier account.
/// Accounts with a missing or zero timestamp are never picked.
pub fn auto_login_user(tree: &OrderedTree) -> Option<String> {
	let mut best: Option<LoginUser> = None;
	let mut latest = 0;
	for user in login_users(tree) {
		if user.timestamp > latest {
			latest = user.timestamp;
			best = Some(user);
		}
	}
	best.map(|user| user.account_name)
}

#[cfg(test)]
mod tests {
	use crate::steam::{auto_login_user, login_users, parse};

	const LOGIN_USERS: &str = r#""users"
{
	"76561198000000001"
	{
		"AccountName"		"older"
		"PersonaName"		"Old"
		"MostRecent"		"0"
		"Timestamp"		"1700000000"
	}
	"76561198000000002"
	{
		"AccountName"		"newer"
		"PersonaName"		"New"
		"MostRecent"		"1"
		"Timestamp"		"1740000000"
	}
	"76561198000000003"
	{
		"PersonaName"		"Nameless"
		"Timestamp"		"1800000000"
	}
}"#;

	#[test]
	fn lists_named_accounts() {
		let tree = parse(LOGIN_USERS).expect("fixture parses");
		let users = login_users(&tree);

		assert_eq!(users.len(), 2);
		assert_eq!(users[1].steam_id, "76561198000000002");
		assert_eq!(users[1].persona_name, "New");
		assert!(users[1].most_recent);
		assert!(!users[0].most_recent);
	}

	#[test]
	fn picks_latest_timestamp() {
		let tree = parse(LOGIN_USERS).expect("fixture parses");
		assert_eq!(auto_login_user(&tree).as_deref(), Some("newer"));
	}

	#[test]
	fn ties_keep_first_account() {
		let tree = parse(
			"\"users\" { \"1\" { \"AccountName\" \"a\" \"Timestamp\" \"5\" } \"2\" { \"AccountName\" \"b\" \"Timestamp\" \"5\" } }",
		)
		.expect("parses");
		assert_eq!(auto_login_user(&tree).as_deref(), Some("a"));
	}

	#[test]
	fn accounts_without_timestamp_are_never_picked() {
		let tree = parse("\"users\" { \"1\" { \"AccountName\" \"a\" } \"2\" { \"AccountName\" \"b\" \"Timestamp\" \"0\" } }").expect("parses");
		assert_eq!(login_users(&tree).len(), 2);
		assert_eq!(auto_login_user(&tree), None);
	}

	#[test]
	fn no_users_block_means_no_user() {
		let tree = parse("\"other\" { }").expect("parses");
		assert_eq!(auto_login_user(&tree), None);
	}
}
