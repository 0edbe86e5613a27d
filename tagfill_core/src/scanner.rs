use crate::TagfillResult;
use crate::stream::CharSource;
use crate::stream::Sink;

/// A literal, non-empty tag delimiter.
///
/// Matching is per-character, so the text is kept alongside its decoded
/// characters. Invariant: at least one character; enforced by
/// [`EngineBuilder::build`](crate::EngineBuilder::build) before a `Tag` can
/// exist.
#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) struct Tag {
	text: String,
	chars: Vec<char>,
}

impl Tag {
	pub(crate) fn new(text: String) -> Self {
		debug_assert!(!text.is_empty());
		let chars = text.chars().collect();
		Self { text, chars }
	}

	pub(crate) fn as_str(&self) -> &str {
		&self.text
	}

	fn first(&self) -> char {
		self.chars[0]
	}
}

/// Scan `source` for a full literal occurrence of `tag`.
///
/// Every character that is not part of an in-progress match attempt is
/// appended to `sink` immediately. Returns `true` once a complete tag has
/// been consumed (the tag itself is not echoed), or `false` when the source
/// ends first.
///
/// When a partial match fails at position `n`, the already-matched prefix
/// `tag[0..n)` is written to the sink, followed by the differing character
/// (when the failure was not end-of-stream), and the scan resumes *after*
/// that character. The differing character is never reconsidered as a new
/// match start, so an occurrence of the tag that begins inside a failed
/// attempt goes undetected in that pass. This backtracking granularity is
/// part of the scanner's contract: callers depend on the exact output, and
/// re-scanning overlapping prefixes would change it.
pub(crate) fn scan<S, K>(source: &mut S, sink: &mut K, tag: &Tag) -> TagfillResult<bool>
where
	S: CharSource + ?Sized,
	K: Sink + ?Sized,
{
	'outer: loop {
		let Some(ch) = source.next_char()? else {
			return Ok(false);
		};

		if ch == tag.first() {
			let mut matched = 1;

			while matched < tag.chars.len() {
				let next = source.next_char()?;
				if next != Some(tag.chars[matched]) {
					// Failed partial match: the consumed prefix becomes
					// literal output, followed by the differing character.
					for prefix_ch in &tag.chars[..matched] {
						sink.push_char(*prefix_ch)?;
					}
					if let Some(next) = next {
						sink.push_char(next)?;
					}
					continue 'outer;
				}
				matched += 1;
			}

			return Ok(true);
		}

		sink.push_char(ch)?;
	}
}
