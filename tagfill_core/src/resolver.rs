use std::borrow::Borrow;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::BuildHasher;
use std::hash::Hash;

/// Maps a marker to an optional replacement value.
///
/// Lookup tables implement this directly; closures go through
/// [`FnResolver`]. `Some("")` is a present empty value and substitutes an
/// empty string — only `None` counts as unresolved.
pub trait Resolver {
	fn resolve(&self, marker: &str) -> Option<Cow<'_, str>>;
}

impl<R: Resolver + ?Sized> Resolver for &R {
	fn resolve(&self, marker: &str) -> Option<Cow<'_, str>> {
		(**self).resolve(marker)
	}
}

impl<K, V, S> Resolver for HashMap<K, V, S>
where
	K: Borrow<str> + Eq + Hash,
	V: Display,
	S: BuildHasher,
{
	fn resolve(&self, marker: &str) -> Option<Cow<'_, str>> {
		self.get(marker).map(|value| Cow::Owned(value.to_string()))
	}
}

impl<K, V> Resolver for BTreeMap<K, V>
where
	K: Borrow<str> + Ord,
	V: Display,
{
	fn resolve(&self, marker: &str) -> Option<Cow<'_, str>> {
		self.get(marker).map(|value| Cow::Owned(value.to_string()))
	}
}

/// Adapter that lets any `Fn(&str) -> Option<String>` closure serve as a
/// [`Resolver`].
///
/// ```rust
/// use tagfill_core::Engine;
/// use tagfill_core::FnResolver;
///
/// let resolver = FnResolver(|marker: &str| Some(marker.to_uppercase()));
/// let output = Engine::default().process_str("${loud}!", &resolver).unwrap();
/// assert_eq!(output, "LOUD!");
/// ```
#[derive(Debug, Clone)]
pub struct FnResolver<F>(pub F);

impl<F> Resolver for FnResolver<F>
where
	F: Fn(&str) -> Option<String>,
{
	fn resolve(&self, marker: &str) -> Option<Cow<'_, str>> {
		(self.0)(marker).map(Cow::Owned)
	}
}
