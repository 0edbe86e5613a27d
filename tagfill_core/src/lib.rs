//! `tagfill_core` is the core library for the [tagfill](https://github.com/tagfill/tagfill)
//! substitution engine. It scans a character stream for tag-delimited markers (`${name}` by
//! default) and replaces each one with a caller-supplied value. The whole process is streaming:
//! the input is read one character at a time and the output is appended incrementally, so the
//! template is never buffered in memory.
//!
//! ## Processing pipeline
//!
//! ```text
//! character source
//!   → scanner (echoes literal text to the sink until the begin tag matches)
//!   → scanner (accumulates the marker until the end tag matches)
//!   → resolver (maps the marker to an optional value)
//!   → sink (resolved value, or the error-mode output)
//!   → repeat until the source is exhausted
//! ```
//!
//! ## Modules
//!
//! - [`config`] — engine configuration: the default tags, [`ErrorMode`], and the validating
//!   [`EngineBuilder`].
//! - [`stream`] — character sources and appendable sinks: [`StrSource`], [`ReadSource`],
//!   [`WriteSink`], plus the infallible [`String`] sink.
//!
//! ## Key types
//!
//! - [`Engine`] — an immutable `(begin tag, end tag, error mode)` triple exposing the `process*`
//!   entry points. Safe to reuse across scans and threads.
//! - [`Resolver`] — maps a marker to an optional replacement value. Implemented for `HashMap`
//!   and `BTreeMap` lookup tables; [`FnResolver`] adapts closures.
//! - [`ErrorMode`] — what to do with a marker that has no value: fail, re-emit verbatim, or
//!   drop it.
//! - [`TagfillError`] — the error taxonomy; I/O errors pass through unchanged.
//!
//! ## Quick start
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! use tagfill_core::Engine;
//! use tagfill_core::TagfillResult;
//!
//! fn main() -> TagfillResult<()> {
//! 	let mut markers = HashMap::new();
//! 	markers.insert("name".to_string(), "world".to_string());
//!
//! 	let engine = Engine::default();
//! 	let output = engine.process_str("Hello, ${name}!", &markers)?;
//! 	assert_eq!(output, "Hello, world!");
//! 	Ok(())
//! }
//! ```

pub use config::*;
pub use engine::*;
pub use error::*;
pub use resolver::*;
pub use stream::*;

pub mod config;
mod engine;
mod error;
mod resolver;
pub(crate) mod scanner;
pub mod stream;
