use std::fmt::{self, Write};

use crate::steam::{OrderedTree, Value};

/// Render a tree as VDF text.
///
/// Keys and scalars are written quoted on their own lines with one tab of
/// indentation per nesting level. Nothing is escaped, so a scalar holding
/// `"` does not parse back.
pub fn serialize(tree: &OrderedTree) -> String {
	let mut out = String::new();
	// Writing into a `String` cannot fail.
	let _ = write_tree(tree, &mut out);
	out
}

/// Stream a tree as VDF text into `out`.
pub fn write_tree<W: Write>(tree: &OrderedTree, out: &mut W) -> fmt::Result {
	let mut stack = vec![tree.into_iter()];

	loop {
		let depth = stack.len();
		let Some(entries) = stack.last_mut() else {
			return Ok(());
		};
		let Some((key, value)) = entries.next() else {
			stack.pop();
			if depth > 1 {
				indent(depth - 2, out)?;
				out.write_str("}\n")?;
			}
			continue;
		};

		indent(depth - 1, out)?;
		writeln!(out, "\"{key}\"")?;
		indent(depth - 1, out)?;
		match value {
			Value::Scalar(text) => writeln!(out, "\"{text}\"")?,
			Value::Block(nested) => {
				out.write_str("{\n")?;
				stack.push(nested.into_iter());
			}
		}
	}
}

const TABS: &str = "\t\t\t\t\t\t\t\t\t\t\t\t\t\t\t\t\t\t\t\t\t\t\t\t\t\t\t\t\t\t\t\t";

fn indent<W: Write>(depth: usize, out: &mut W) -> fmt::Result {
	let mut left = depth;
	while left > 0 {
		let run = left.min(TABS.len());
		out.write_str(&TABS[..run])?;
		left -= run;
	}
	Ok(())
}

#[cfg(test)]
mod tests;
