use std::borrow::Cow;
use std::collections::HashMap;
use std::path::PathBuf;

use clap::Parser;
use clap::ValueEnum;
use tagfill_core::ErrorMode;
use tagfill_core::Resolver;

pub mod properties;

#[derive(Parser)]
#[command(
	name = "tagfill",
	version,
	about = "Replace ${marker} tags in a text stream with values from defines, properties files, \
	         and the environment.",
	long_about = "tagfill reads a template from a file or standard input, replaces every \
	              tag-delimited marker with its resolved value, and writes the result to a file \
	              or standard output. The whole process is streaming; the template is never read \
	              into memory.\n\nMarkers resolve from explicit -D defines first (with values \
	              from --properties-file beneath them), then built-in system properties such as \
	              os.name and user.dir, then environment variables. The first hit wins.\n\nWhen \
	              --stdin or --stdout is set, the corresponding positional file argument is \
	              omitted."
)]
#[allow(clippy::struct_excessive_bools)]
pub struct TagfillCli {
	/// Input file to read the template from, or the output file when
	/// `--stdin` is set.
	#[arg(value_name = "input-file")]
	pub input: Option<PathBuf>,

	/// Output file to write the generated text to.
	#[arg(value_name = "output-file")]
	pub output: Option<PathBuf>,

	/// Read the template from standard input instead of an input file.
	#[arg(long)]
	pub stdin: bool,

	/// Write the generated text to standard output instead of an output
	/// file.
	#[arg(long)]
	pub stdout: bool,

	/// The literal begin tag.
	#[arg(long, value_name = "tag", default_value = tagfill_core::DEFAULT_BEGIN_TAG)]
	pub begin_tag: String,

	/// The literal end tag.
	#[arg(long, value_name = "tag", default_value = tagfill_core::DEFAULT_END_TAG)]
	pub end_tag: String,

	/// Behavior when a marker has no value.
	#[arg(long, value_enum, default_value_t = ErrorModeArg::Throw)]
	pub error_mode: ErrorModeArg,

	/// Define a marker value. Repeatable; a bare name defines the empty
	/// string.
	#[arg(short = 'D', value_name = "name=value")]
	pub defines: Vec<String>,

	/// Load marker values from a properties file. Repeatable; later files
	/// override earlier ones, and explicit -D defines override them all.
	#[arg(short = 'p', long, value_name = "path")]
	pub properties_file: Vec<PathBuf>,

	/// Do not fall back to built-in system properties (os.name, user.dir,
	/// ...).
	#[arg(long)]
	pub no_system_properties: bool,

	/// Do not fall back to environment variables.
	#[arg(long)]
	pub no_environment_variables: bool,

	/// Character encoding of the input file.
	#[arg(long, value_name = "encoding")]
	pub input_encoding: Option<String>,

	/// Character encoding of the output file.
	#[arg(long, value_name = "encoding")]
	pub output_encoding: Option<String>,

	/// Character encoding of properties files.
	#[arg(long, value_name = "encoding")]
	pub properties_encoding: Option<String>,

	/// Character encoding for the input, output, and properties files at
	/// once.
	#[arg(short = 'e', long, value_name = "encoding")]
	pub encoding: Option<String>,
}

/// Command-line face of [`ErrorMode`].
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ErrorModeArg {
	/// Fail the run when a marker has no value.
	Throw,
	/// Copy the unresolved marker and its tags through to the output.
	Sanitize,
	/// Remove the unresolved marker from the output.
	Strip,
}

impl From<ErrorModeArg> for ErrorMode {
	fn from(value: ErrorModeArg) -> Self {
		match value {
			ErrorModeArg::Throw => Self::Throw,
			ErrorModeArg::Sanitize => Self::Sanitize,
			ErrorModeArg::Strip => Self::Strip,
		}
	}
}

/// Split a `-D` define into name and value. A missing `=` defines the
/// empty string.
pub fn parse_define(raw: &str) -> (String, String) {
	match raw.split_once('=') {
		Some((name, value)) => (name.to_string(), value.to_string()),
		None => (raw.to_string(), String::new()),
	}
}

/// Encoding names this build can read and write. The engine streams UTF-8;
/// ASCII is accepted as a strict subset. The flags exist for command-line
/// compatibility with other tag substitutors.
pub fn supported_encoding(name: &str) -> bool {
	matches!(
		name.to_ascii_lowercase().as_str(),
		"utf-8" | "utf8" | "ascii" | "us-ascii"
	)
}

/// The CLI's marker resolution chain: explicit defines first, then
/// built-in system properties, then environment variables. The first hit
/// wins; a marker absent from every enabled stage is unresolved.
#[derive(Debug)]
pub struct LookupChain {
	pub defines: HashMap<String, String>,
	pub use_system_properties: bool,
	pub use_environment_variables: bool,
}

impl Resolver for LookupChain {
	fn resolve(&self, marker: &str) -> Option<Cow<'_, str>> {
		if let Some(value) = self.defines.get(marker) {
			return Some(Cow::Borrowed(value));
		}
		if self.use_system_properties {
			if let Some(value) = system_property(marker) {
				return Some(Cow::Owned(value));
			}
		}
		if self.use_environment_variables {
			if let Ok(value) = std::env::var(marker) {
				return Some(Cow::Owned(value));
			}
		}
		None
	}
}

/// Built-in process and platform properties, the closest analogue of JVM
/// system properties this port can offer.
pub fn system_property(key: &str) -> Option<String> {
	match key {
		"os.name" => Some(std::env::consts::OS.to_string()),
		"os.arch" => Some(std::env::consts::ARCH.to_string()),
		"os.family" => Some(std::env::consts::FAMILY.to_string()),
		"file.separator" => Some(std::path::MAIN_SEPARATOR.to_string()),
		"path.separator" => Some(if cfg!(windows) { ";" } else { ":" }.to_string()),
		"line.separator" => Some(if cfg!(windows) { "\r\n" } else { "\n" }.to_string()),
		"user.dir" => std::env::current_dir()
			.ok()
			.map(|dir| dir.display().to_string()),
		"user.home" => std::env::var("HOME")
			.or_else(|_| std::env::var("USERPROFILE"))
			.ok(),
		"user.name" => std::env::var("USER")
			.or_else(|_| std::env::var("USERNAME"))
			.ok(),
		_ => None,
	}
}
