use std::io;
use std::io::BufRead;
use std::io::Write;

use crate::TagfillError;
use crate::TagfillResult;

/// A forward-only character source.
///
/// The engine reads one character at a time and never looks back, so any
/// byte or string stream can serve as input without buffering the whole
/// template in memory.
pub trait CharSource {
	/// Read the next character, or `None` at end of stream.
	fn next_char(&mut self) -> TagfillResult<Option<char>>;
}

/// An appendable output sink.
///
/// The same capability serves two roles during a scan: the final output,
/// and the in-progress marker buffer. [`String`] implements it infallibly;
/// [`WriteSink`] adapts any byte writer.
pub trait Sink {
	fn push_char(&mut self, ch: char) -> TagfillResult<()>;

	fn push_str(&mut self, text: &str) -> TagfillResult<()>;
}

/// Infallible character source over an in-memory string.
#[derive(Debug)]
pub struct StrSource<'a> {
	chars: std::str::Chars<'a>,
}

impl<'a> StrSource<'a> {
	pub fn new(input: &'a str) -> Self {
		Self {
			chars: input.chars(),
		}
	}
}

impl CharSource for StrSource<'_> {
	fn next_char(&mut self) -> TagfillResult<Option<char>> {
		Ok(self.chars.next())
	}
}

/// Streaming character source that decodes UTF-8 incrementally from a byte
/// reader. Invalid UTF-8 surfaces as an [`io::ErrorKind::InvalidData`]
/// error.
#[derive(Debug)]
pub struct ReadSource<R> {
	reader: R,
}

impl<R: BufRead> ReadSource<R> {
	pub fn new(reader: R) -> Self {
		Self { reader }
	}

	fn next_byte(&mut self) -> io::Result<Option<u8>> {
		let mut byte = [0u8; 1];
		loop {
			match self.reader.read(&mut byte) {
				Ok(0) => return Ok(None),
				Ok(_) => return Ok(Some(byte[0])),
				Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
				Err(e) => return Err(e),
			}
		}
	}
}

impl<R: BufRead> CharSource for ReadSource<R> {
	fn next_char(&mut self) -> TagfillResult<Option<char>> {
		let Some(first) = self.next_byte()? else {
			return Ok(None);
		};

		let len = utf8_sequence_len(first).ok_or_else(invalid_utf8)?;

		let mut buf = [first, 0, 0, 0];
		for slot in buf.iter_mut().take(len).skip(1) {
			*slot = self.next_byte()?.ok_or_else(invalid_utf8)?;
		}

		let decoded = std::str::from_utf8(&buf[..len]).map_err(|_| invalid_utf8())?;
		Ok(decoded.chars().next())
	}
}

/// Expected length of a UTF-8 sequence given its leading byte.
fn utf8_sequence_len(byte: u8) -> Option<usize> {
	match byte {
		0x00..=0x7f => Some(1),
		0xc2..=0xdf => Some(2),
		0xe0..=0xef => Some(3),
		0xf0..=0xf4 => Some(4),
		_ => None,
	}
}

fn invalid_utf8() -> TagfillError {
	TagfillError::Io(io::Error::new(
		io::ErrorKind::InvalidData,
		"stream did not contain valid UTF-8",
	))
}

impl Sink for String {
	fn push_char(&mut self, ch: char) -> TagfillResult<()> {
		self.push(ch);
		Ok(())
	}

	fn push_str(&mut self, text: &str) -> TagfillResult<()> {
		String::push_str(self, text);
		Ok(())
	}
}

/// Sink that encodes characters as UTF-8 into a byte writer.
#[derive(Debug)]
pub struct WriteSink<W> {
	writer: W,
}

impl<W: Write> WriteSink<W> {
	pub fn new(writer: W) -> Self {
		Self { writer }
	}

	/// Flush the underlying writer.
	pub fn flush(&mut self) -> TagfillResult<()> {
		self.writer.flush()?;
		Ok(())
	}

	/// Consume the sink and return the writer.
	pub fn into_inner(self) -> W {
		self.writer
	}
}

impl<W: Write> Sink for WriteSink<W> {
	fn push_char(&mut self, ch: char) -> TagfillResult<()> {
		let mut buf = [0u8; 4];
		self.writer.write_all(ch.encode_utf8(&mut buf).as_bytes())?;
		Ok(())
	}

	fn push_str(&mut self, text: &str) -> TagfillResult<()> {
		self.writer.write_all(text.as_bytes())?;
		Ok(())
	}
}
