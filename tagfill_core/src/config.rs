use crate::TagfillError;
use crate::TagfillResult;
use crate::engine::Engine;
use crate::scanner::Tag;

/// Begin tag used by [`Engine::default`].
pub const DEFAULT_BEGIN_TAG: &str = "${";

/// End tag used by [`Engine::default`].
pub const DEFAULT_END_TAG: &str = "}";

/// Behavior when a marker has no value.
///
/// Fixed at engine construction time; a missing end tag is always fatal
/// regardless of the mode.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum ErrorMode {
	/// Abort the scan with [`TagfillError::UnknownMarker`].
	#[default]
	Throw,
	/// Re-emit the begin tag, marker, and end tag verbatim.
	Sanitize,
	/// Drop the marker and its tags from the output.
	Strip,
}

/// Validating builder for [`Engine`].
///
/// Empty tags are rejected by [`build`](Self::build) — at build time, never
/// during a scan.
///
/// ```rust
/// use tagfill_core::Engine;
/// use tagfill_core::ErrorMode;
///
/// let engine = Engine::builder()
/// 	.tags("{%", "%}")
/// 	.error_mode(ErrorMode::Strip)
/// 	.build()
/// 	.unwrap();
/// assert_eq!(engine.begin_tag(), "{%");
/// ```
#[derive(Debug, Clone)]
pub struct EngineBuilder {
	begin_tag: String,
	end_tag: String,
	error_mode: ErrorMode,
}

impl Default for EngineBuilder {
	fn default() -> Self {
		Self {
			begin_tag: DEFAULT_BEGIN_TAG.to_string(),
			end_tag: DEFAULT_END_TAG.to_string(),
			error_mode: ErrorMode::default(),
		}
	}
}

impl EngineBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Set the begin tag.
	pub fn begin_tag(mut self, tag: impl Into<String>) -> Self {
		self.begin_tag = tag.into();
		self
	}

	/// Set the end tag.
	pub fn end_tag(mut self, tag: impl Into<String>) -> Self {
		self.end_tag = tag.into();
		self
	}

	/// Set both tags at once.
	pub fn tags(mut self, begin_tag: impl Into<String>, end_tag: impl Into<String>) -> Self {
		self.begin_tag = begin_tag.into();
		self.end_tag = end_tag.into();
		self
	}

	/// Set the behavior for markers that fail to resolve.
	pub fn error_mode(mut self, error_mode: ErrorMode) -> Self {
		self.error_mode = error_mode;
		self
	}

	/// Validate the configuration and build the engine.
	pub fn build(self) -> TagfillResult<Engine> {
		if self.begin_tag.is_empty() || self.end_tag.is_empty() {
			return Err(TagfillError::EmptyTag);
		}

		Ok(Engine::new(
			Tag::new(self.begin_tag),
			Tag::new(self.end_tag),
			self.error_mode,
		))
	}
}
