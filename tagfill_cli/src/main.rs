use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::io::BufRead;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Write;
use std::process;

use clap::CommandFactory;
use clap::Parser;
use owo_colors::OwoColorize;
use tagfill_cli::LookupChain;
use tagfill_cli::TagfillCli;
use tagfill_cli::parse_define;
use tagfill_cli::properties::Properties;
use tagfill_cli::supported_encoding;
use tagfill_core::AnyEmptyResult;
use tagfill_core::Engine;
use tagfill_core::TagfillError;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	// With no arguments at all, print the usage message and fail.
	if std::env::args_os().len() <= 1 {
		eprintln!("{}", TagfillCli::command().render_help());
		process::exit(1);
	}

	// try_parse so usage errors exit with code 1; help and version still
	// exit 0.
	let args = match TagfillCli::try_parse() {
		Ok(args) => args,
		Err(e) => {
			let code = i32::from(e.use_stderr());
			let _ = e.print();
			process::exit(code);
		}
	};

	// Respect the NO_COLOR env var.
	let use_color = std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	let _ = tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_writer(io::stderr)
		.try_init();

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	if let Err(e) = run(&args) {
		// Output is streamed, so anything generated before the failure must
		// still reach stdout.
		let _ = io::stdout().flush();

		// Substitution errors render through miette for diagnostic codes
		// and help text; everything else prints as a plain error line.
		match e.downcast::<TagfillError>() {
			Ok(tagfill_err) => {
				let report: miette::Report = (*tagfill_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(1);
	}
}

fn run(args: &TagfillCli) -> AnyEmptyResult {
	validate_encodings(args)?;

	// `--stdin` shifts the positional file arguments: the first positional
	// becomes the output file.
	let mut positional = args.input.iter().chain(&args.output);
	let input_file = if args.stdin {
		None
	} else {
		Some(positional.next().ok_or("missing input file")?)
	};
	let output_file = if args.stdout {
		None
	} else {
		Some(positional.next().ok_or("missing output file")?)
	};
	if positional.next().is_some() {
		return Err("too many file arguments".into());
	}

	let mut defines: HashMap<String, String> = HashMap::new();
	for path in &args.properties_file {
		if !path.is_file() {
			return Err(format!("properties file '{}' not exists", path.display()).into());
		}
		let properties = Properties::load(path)?;
		tracing::debug!(path = %path.display(), entries = properties.len(), "loaded properties file");
		for (key, value) in properties.iter() {
			defines.insert(key.to_string(), value.to_string());
		}
	}
	for define in &args.defines {
		let (name, value) = parse_define(define);
		defines.insert(name, value);
	}

	let resolver = LookupChain {
		defines,
		use_system_properties: !args.no_system_properties,
		use_environment_variables: !args.no_environment_variables,
	};

	let engine = Engine::builder()
		.tags(args.begin_tag.as_str(), args.end_tag.as_str())
		.error_mode(args.error_mode.into())
		.build()?;

	let reader: Box<dyn BufRead> = match input_file {
		Some(path) => {
			if !path.is_file() {
				return Err(format!("input file '{}' not exists", path.display()).into());
			}
			Box::new(BufReader::new(File::open(path)?))
		}
		None => Box::new(io::stdin().lock()),
	};

	let writer: Box<dyn Write> = match output_file {
		Some(path) => Box::new(BufWriter::new(File::create(path)?)),
		None => Box::new(io::stdout().lock()),
	};

	engine.process_reader(reader, writer, &resolver)?;

	Ok(())
}

fn validate_encodings(args: &TagfillCli) -> AnyEmptyResult {
	let flags = [
		&args.encoding,
		&args.input_encoding,
		&args.output_encoding,
		&args.properties_encoding,
	];

	for name in flags.into_iter().flatten() {
		if !supported_encoding(name) {
			return Err(
				format!("unsupported encoding '{name}' (this build reads and writes UTF-8)").into(),
			);
		}
	}

	Ok(())
}
