use indexmap::IndexMap;

/// One parsed VDF value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
	/// Quoted leaf text.
	Scalar(String),
	/// Brace-delimited nested block.
	Block(OrderedTree),
}

impl Value {
	/// Return the text of a scalar value.
	pub fn as_scalar(&self) -> Option<&str> {
		match self {
			Self::Scalar(text) => Some(text),
			Self::Block(_) => None,
		}
	}

	/// Return the nested tree of a block value.
	pub fn as_block(&self) -> Option<&OrderedTree> {
		match self {
			Self::Scalar(_) => None,
			Self::Block(tree) => Some(tree),
		}
	}

	/// Stable lowercase label for the value shape.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Scalar(_) => "scalar",
			Self::Block(_) => "block",
		}
	}
}

impl From<&str> for Value {
	fn from(text: &str) -> Self {
		Self::Scalar(text.to_owned())
	}
}

impl From<String> for Value {
	fn from(text: String) -> Self {
		Self::Scalar(text)
	}
}

impl From<OrderedTree> for Value {
	fn from(tree: OrderedTree) -> Self {
		Self::Block(tree)
	}
}

/// Insertion-ordered mapping from keys to values.
///
/// Keys are unique. Re-inserting a key replaces its value in the original
/// slot, so iteration always follows first-insertion order. Equality is
/// order-sensitive.
#[derive(Debug, Clone, Default)]
pub struct OrderedTree {
	entries: IndexMap<String, Value>,
}

impl OrderedTree {
	/// Create an empty tree.
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of direct entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the tree has no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Set `key` to `value`, returning the replaced value if the key existed.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
		self.entries.insert(key.into(), value.into())
	}

	/// Look up a direct entry.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.entries.get(key)
	}

	/// Look up a direct entry that must be a scalar.
	pub fn get_scalar(&self, key: &str) -> Option<&str> {
		self.get(key).and_then(Value::as_scalar)
	}

	/// Look up a direct entry that must be a block.
	pub fn get_block(&self, key: &str) -> Option<&OrderedTree> {
		self.get(key).and_then(Value::as_block)
	}

	/// Whether a direct entry exists for `key`.
	pub fn contains_key(&self, key: &str) -> bool {
		self.entries.contains_key(key)
	}

	/// Iterate keys in insertion order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}

	/// Iterate entries in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.entries.iter().map(|(key, value)| (key.as_str(), value))
	}
}

impl PartialEq for OrderedTree {
	fn eq(&self, other: &Self) -> bool {
		self.entries.len() == other.entries.len() && self.entries.iter().eq(other.entries.iter())
	}
}

impl Eq for OrderedTree {}

impl Drop for OrderedTree {
	fn drop(&mut self) {
		// Nested blocks are detached onto a heap stack so dropping a deep tree
		// never recurses.
		let mut pending: Vec<OrderedTree> = detach_blocks(self);
		while let Some(mut tree) = pending.pop() {
			pending.extend(detach_blocks(&mut tree));
		}
	}
}

fn detach_blocks(tree: &mut OrderedTree) -> Vec<OrderedTree> {
	tree.entries
		.drain(..)
		.filter_map(|(_, value)| match value {
			Value::Block(nested) => Some(nested),
			Value::Scalar(_) => None,
		})
		.collect()
}

impl<'a> IntoIterator for &'a OrderedTree {
	type Item = (&'a String, &'a Value);
	type IntoIter = indexmap::map::Iter<'a, String, Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for OrderedTree {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut tree = Self::new();
		for (key, value) in iter {
			tree.insert(key, value);
		}
		tree
	}
}
