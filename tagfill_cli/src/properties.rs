//! Parser for the Java properties file format, covering the subset that
//! shows up in real property files: `#`/`!` comments, `key=value`,
//! `key: value`, and whitespace-separated pairs, backslash line
//! continuations, and the `\t \n \r \f \\ \uXXXX` escapes.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tagfill_core::Resolver;
use tagfill_core::TagfillResult;

/// A flat key/value table loaded from a properties file.
#[derive(Debug, Clone, Default)]
pub struct Properties {
	entries: HashMap<String, String>,
}

impl Properties {
	/// Parse properties from text.
	pub fn parse(text: &str) -> Self {
		let mut entries = HashMap::new();
		let mut lines = text.lines();

		while let Some(line) = lines.next() {
			let trimmed = line.trim_start_matches([' ', '\t', '\u{c}']);
			if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
				continue;
			}

			// A logical line continues while it ends with an odd number of
			// backslashes; the continuation's leading whitespace is dropped.
			let mut logical = trimmed.to_string();
			while ends_with_continuation(&logical) {
				logical.pop();
				let Some(next) = lines.next() else {
					break;
				};
				logical.push_str(next.trim_start_matches([' ', '\t', '\u{c}']));
			}

			let (key, value) = split_pair(&logical);
			entries.insert(unescape(key), unescape(value));
		}

		Self { entries }
	}

	/// Load and parse a properties file.
	pub fn load(path: &Path) -> TagfillResult<Self> {
		let text = fs::read_to_string(path)?;
		Ok(Self::parse(&text))
	}

	pub fn get(&self, key: &str) -> Option<&str> {
		self.entries.get(key).map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries
			.iter()
			.map(|(key, value)| (key.as_str(), value.as_str()))
	}
}

impl Resolver for Properties {
	fn resolve(&self, marker: &str) -> Option<Cow<'_, str>> {
		self.entries
			.get(marker)
			.map(|value| Cow::Borrowed(value.as_str()))
	}
}

fn ends_with_continuation(line: &str) -> bool {
	let trailing = line.chars().rev().take_while(|ch| *ch == '\\').count();
	trailing % 2 == 1
}

/// Split a logical line into key and value. The key ends at the first
/// unescaped `=`, `:`, or whitespace; a whitespace terminator may still be
/// followed by an `=` or `:` separator, which is consumed along with the
/// whitespace around it.
fn split_pair(line: &str) -> (&str, &str) {
	let mut escaped = false;
	let mut split = line.len();
	let mut separator_found = false;

	for (idx, ch) in line.char_indices() {
		if escaped {
			escaped = false;
			continue;
		}
		match ch {
			'\\' => escaped = true,
			'=' | ':' => {
				split = idx;
				separator_found = true;
				break;
			}
			' ' | '\t' | '\u{c}' => {
				split = idx;
				break;
			}
			_ => {}
		}
	}

	let key = &line[..split];
	if split == line.len() {
		return (key, "");
	}

	let mut value = &line[split..];
	if separator_found {
		value = &value[1..];
	} else {
		value = value.trim_start_matches([' ', '\t', '\u{c}']);
		if let Some(rest) = value.strip_prefix(['=', ':']) {
			value = rest;
		}
	}

	(key, value.trim_start_matches([' ', '\t', '\u{c}']))
}

fn unescape(text: &str) -> String {
	let mut result = String::with_capacity(text.len());
	let mut chars = text.chars();

	while let Some(ch) = chars.next() {
		if ch != '\\' {
			result.push(ch);
			continue;
		}
		match chars.next() {
			Some('t') => result.push('\t'),
			Some('n') => result.push('\n'),
			Some('r') => result.push('\r'),
			Some('f') => result.push('\u{c}'),
			Some('u') => {
				let code: String = chars.by_ref().take(4).collect();
				if let Some(decoded) = u32::from_str_radix(&code, 16)
					.ok()
					.and_then(char::from_u32)
				{
					result.push(decoded);
				}
			}
			// Any other escaped character stands for itself.
			Some(other) => result.push(other),
			None => {}
		}
	}

	result
}
