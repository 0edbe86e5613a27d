use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

use crate::EngineBuilder;
use crate::ErrorMode;
use crate::TagfillError;
use crate::TagfillResult;
use crate::config::DEFAULT_BEGIN_TAG;
use crate::config::DEFAULT_END_TAG;
use crate::resolver::Resolver;
use crate::scanner::Tag;
use crate::scanner::scan;
use crate::stream::CharSource;
use crate::stream::ReadSource;
use crate::stream::Sink;
use crate::stream::StrSource;
use crate::stream::WriteSink;

/// An immutable substitution engine: begin tag, end tag, and error mode.
///
/// Engines are cheap to build, reusable across many scans, and safe to
/// share between threads: every scan keeps its transient state (the marker
/// buffer) on its own call stack, never on the engine. Concurrent calls
/// just need their own source/sink pairs.
#[derive(Debug, Clone)]
pub struct Engine {
	begin_tag: Tag,
	end_tag: Tag,
	error_mode: ErrorMode,
}

impl Default for Engine {
	/// The `${` / `}` engine with [`ErrorMode::Throw`].
	fn default() -> Self {
		Self::new(
			Tag::new(DEFAULT_BEGIN_TAG.to_string()),
			Tag::new(DEFAULT_END_TAG.to_string()),
			ErrorMode::default(),
		)
	}
}

impl Engine {
	pub(crate) fn new(begin_tag: Tag, end_tag: Tag, error_mode: ErrorMode) -> Self {
		Self {
			begin_tag,
			end_tag,
			error_mode,
		}
	}

	/// Start building a custom engine.
	pub fn builder() -> EngineBuilder {
		EngineBuilder::new()
	}

	pub fn begin_tag(&self) -> &str {
		self.begin_tag.as_str()
	}

	pub fn end_tag(&self) -> &str {
		self.end_tag.as_str()
	}

	pub fn error_mode(&self) -> ErrorMode {
		self.error_mode
	}

	/// The core entry point: read the template from `source` and write the
	/// generated text to `sink`, resolving each marker through `resolver`.
	///
	/// Processing is streaming — literal text is echoed as soon as it is
	/// read, and output produced before a failure stays in the sink. A
	/// begin tag without a matching end tag fails with
	/// [`TagfillError::MissingEndTag`] under every error mode; an
	/// unresolved marker is handled according to [`ErrorMode`].
	pub fn process<S, K, R>(&self, source: &mut S, sink: &mut K, resolver: &R) -> TagfillResult<()>
	where
		S: CharSource + ?Sized,
		K: Sink + ?Sized,
		R: Resolver + ?Sized,
	{
		let mut marker = String::new();

		while scan(source, sink, &self.begin_tag)? {
			if !scan(source, &mut marker, &self.end_tag)? {
				return Err(TagfillError::MissingEndTag);
			}

			match resolver.resolve(&marker) {
				Some(value) => {
					tracing::trace!(marker = %marker, "marker resolved");
					sink.push_str(&value)?;
				}
				None => match self.error_mode {
					ErrorMode::Throw => {
						return Err(TagfillError::UnknownMarker(marker));
					}
					ErrorMode::Sanitize => {
						sink.push_str(self.begin_tag.as_str())?;
						sink.push_str(&marker)?;
						sink.push_str(self.end_tag.as_str())?;
					}
					ErrorMode::Strip => {}
				},
			}

			marker.clear();
		}

		Ok(())
	}

	/// Process an in-memory template and return the generated string.
	pub fn process_str<R>(&self, input: &str, resolver: &R) -> TagfillResult<String>
	where
		R: Resolver + ?Sized,
	{
		let mut output = String::new();
		self.process(&mut StrSource::new(input), &mut output, resolver)?;
		Ok(output)
	}

	/// Process from a byte reader to a byte writer, decoding and encoding
	/// UTF-8 on the fly. The handles belong to the caller; the writer is
	/// flushed on success.
	pub fn process_reader<R, W, M>(&self, reader: R, writer: W, resolver: &M) -> TagfillResult<()>
	where
		R: BufRead,
		W: Write,
		M: Resolver + ?Sized,
	{
		let mut source = ReadSource::new(reader);
		let mut sink = WriteSink::new(writer);
		self.process(&mut source, &mut sink, resolver)?;
		sink.flush()
	}

	/// Process `input` into `output`, opening buffered file streams
	/// internally. Both handles are released on every exit path, including
	/// failures.
	pub fn process_path<R>(&self, input: &Path, output: &Path, resolver: &R) -> TagfillResult<()>
	where
		R: Resolver + ?Sized,
	{
		tracing::debug!(input = %input.display(), output = %output.display(), "processing file");
		let reader = BufReader::new(File::open(input)?);
		let writer = BufWriter::new(File::create(output)?);
		self.process_reader(reader, writer, resolver)
	}
}
