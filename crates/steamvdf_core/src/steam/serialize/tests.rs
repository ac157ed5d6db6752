use proptest::prelude::*;

use crate::steam::{OrderedTree, Value, parse, serialize};

fn manifest_tree() -> OrderedTree {
	let depot: OrderedTree = [("manifest", "809774009354886606"), ("size", "3488450479")].into_iter().collect();
	let mut depots = OrderedTree::new();
	depots.insert("667971", depot);

	let mut state = OrderedTree::new();
	state.insert("appid", "667970");
	state.insert("InstalledDepots", depots);

	let mut root = OrderedTree::new();
	root.insert("AppState", state);
	root
}

#[test]
fn writes_scalars_on_their_own_lines() {
	let tree: OrderedTree = [("appid", "667970"), ("name", "VTOL VR")].into_iter().collect();
	assert_eq!(serialize(&tree), "\"appid\"\n\"667970\"\n\"name\"\n\"VTOL VR\"\n");
}

#[test]
fn indents_nested_blocks_with_tabs() {
	let expected = concat!(
		"\"AppState\"\n",
		"{\n",
		"\t\"appid\"\n",
		"\t\"667970\"\n",
		"\t\"InstalledDepots\"\n",
		"\t{\n",
		"\t\t\"667971\"\n",
		"\t\t{\n",
		"\t\t\t\"manifest\"\n",
		"\t\t\t\"809774009354886606\"\n",
		"\t\t\t\"size\"\n",
		"\t\t\t\"3488450479\"\n",
		"\t\t}\n",
		"\t}\n",
		"}\n",
	);
	assert_eq!(serialize(&manifest_tree()), expected);
}

#[test]
fn empty_tree_serializes_to_nothing() {
	assert_eq!(serialize(&OrderedTree::new()), "");
}

#[test]
fn parsed_document_survives_round_trip() {
	let text = "\"AppState\"\n{\n\t\"appid\"\t\t\"667970\"\n\t\"name\"\t\t\"VTOL VR\"\n\t\"buildid\"\t\t\"20275350\"\n}";
	let tree = parse(text).expect("parses");
	let again = parse(&serialize(&tree)).expect("serialized output parses");

	assert_eq!(again, tree);
	let state = again.get_block("AppState").expect("AppState block");
	assert_eq!(state.keys().collect::<Vec<_>>(), ["appid", "name", "buildid"]);
}

#[test]
fn embedded_quote_is_not_escaped() {
	let tree: OrderedTree = [("name", "say \"hi\"")].into_iter().collect();
	let text = serialize(&tree);

	assert_eq!(text, "\"name\"\n\"say \"hi\"\"\n");
	assert_ne!(parse(&text).ok(), Some(tree));
}

fn text() -> impl Strategy<Value = String> {
	"[^\"]{0,12}"
}

fn value() -> impl Strategy<Value = Value> {
	text().prop_map(Value::Scalar).prop_recursive(4, 48, 6, |inner| {
		prop::collection::vec((text(), inner), 0..6).prop_map(|entries| Value::Block(entries.into_iter().collect()))
	})
}

fn tree() -> impl Strategy<Value = OrderedTree> {
	prop::collection::vec((text(), value()), 0..8).prop_map(|entries| entries.into_iter().collect())
}

proptest! {
	#[test]
	fn quote_free_trees_round_trip(tree in tree()) {
		let reparsed = parse(&serialize(&tree)).expect("serialized output parses");
		prop_assert_eq!(reparsed, tree);
	}
}
