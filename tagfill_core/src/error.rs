use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum TagfillError {
	#[error(transparent)]
	#[diagnostic(code(tagfill::io_error))]
	Io(#[from] std::io::Error),

	#[error("tag cannot be empty")]
	#[diagnostic(
		code(tagfill::empty_tag),
		help("begin and end tags must contain at least one character")
	)]
	EmptyTag,

	#[error("missing the end tag")]
	#[diagnostic(
		code(tagfill::missing_end_tag),
		help("every begin tag must be followed by a matching end tag before the input ends")
	)]
	MissingEndTag,

	#[error("unknown marker: `{0}`")]
	#[diagnostic(
		code(tagfill::unknown_marker),
		help("define a value for this marker, or relax the error mode to `sanitize` or `strip`")
	)]
	UnknownMarker(String),
}

pub type TagfillResult<T> = Result<T, TagfillError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
