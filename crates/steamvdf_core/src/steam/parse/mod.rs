use crate::steam::{OrderedTree, ParseError, Value};

/// Parse VDF text into an ordered tree.
///
/// Strings have no escape sequences: a quoted string runs to the next `"`.
/// A block left open at end of input is returned as parsed so far, and a `}`
/// at the top level ends the document.
pub fn parse(text: &str) -> Result<OrderedTree, ParseError> {
	parse_bytes(text.as_bytes())
}

/// Parse raw VDF file bytes into an ordered tree.
///
/// Grammar tokens are ASCII; string contents that are not valid UTF-8 are
/// decoded lossily.
pub fn parse_bytes(bytes: &[u8]) -> Result<OrderedTree, ParseError> {
	Parser::new(bytes).document()
}

struct Parser<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Parser<'a> {
	fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	fn peek(&self) -> Option<u8> {
		self.bytes.get(self.pos).copied()
	}

	fn skip_whitespace(&mut self) {
		while let Some(byte) = self.peek() {
			if !is_space(byte) {
				break;
			}
			self.pos += 1;
		}
	}

	/// Parse the whole document.
	///
	/// Open blocks wait on an explicit stack, so nesting depth is bounded by
	/// memory rather than by the call stack.
	fn document(&mut self) -> Result<OrderedTree, ParseError> {
		let mut open: Vec<(String, OrderedTree)> = Vec::new();
		let mut tree = OrderedTree::new();

		loop {
			self.skip_whitespace();
			let Some(byte) = self.peek() else {
				break;
			};
			if byte == b'}' {
				self.pos += 1;
				let Some((key, mut parent)) = open.pop() else {
					return Ok(tree);
				};
				parent.insert(key, Value::Block(tree));
				tree = parent;
				continue;
			}

			let key = self.quoted()?;
			self.skip_whitespace();
			match self.peek() {
				None => return Err(ParseError::MissingValue { key }),
				Some(b'{') => {
					self.pos += 1;
					open.push((key, std::mem::take(&mut tree)));
				}
				Some(b'"') => {
					let value = self.quoted()?;
					tree.insert(key, Value::Scalar(value));
				}
				Some(_) => {
					return Err(ParseError::UnexpectedChar {
						found: self.char_at(self.pos),
						at: self.pos,
					});
				}
			}
		}

		// Blocks still open at end of input close with what they hold.
		while let Some((key, mut parent)) = open.pop() {
			parent.insert(key, Value::Block(tree));
			tree = parent;
		}
		Ok(tree)
	}

	fn quoted(&mut self) -> Result<String, ParseError> {
		let open = self.pos;
		if self.peek() != Some(b'"') {
			return Err(ParseError::ExpectedQuote { at: open });
		}

		let start = open + 1;
		let Some(len) = self.bytes[start..].iter().position(|byte| *byte == b'"') else {
			return Err(ParseError::UnterminatedString { at: open });
		};

		let end = start + len;
		self.pos = end + 1;
		Ok(String::from_utf8_lossy(&self.bytes[start..end]).into_owned())
	}

	fn char_at(&self, at: usize) -> char {
		let tail = &self.bytes[at..];
		let width = tail.len().min(4);
		let decoded = (1..=width).find_map(|len| std::str::from_utf8(&tail[..len]).ok());
		decoded.and_then(|text| text.chars().next()).unwrap_or(char::REPLACEMENT_CHARACTER)
	}
}

fn is_space(byte: u8) -> bool {
	matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}
