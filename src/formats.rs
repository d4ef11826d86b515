use super::component::NameComponents;
use super::error::{Error, Result};
use super::{format, FormatOptions};
use std::collections::BTreeMap;
use tracing::debug;

static BUILTIN_FORMATS: phf::Map<&'static str, &'static str> =
    include!(concat!(env!("OUT_DIR"), "/builtin_formats.rs"));

static TOKEN_DESCRIPTIONS: phf::Map<&'static str, &'static str> =
    include!(concat!(env!("OUT_DIR"), "/token_descriptions.rs"));

/// Every pattern character with a description, in documentation order.
pub static TOKEN_LEGEND: &[(&str, &str)] = include!(concat!(env!("OUT_DIR"), "/token_legend.rs"));

/// The pattern of a format shipped with the crate.
pub fn builtin(name: &str) -> Option<&'static str> {
    BUILTIN_FORMATS.get(name).copied()
}

/// What a pattern character does, if it does anything.
pub fn describe(c: char) -> Option<&'static str> {
    let mut buf = [0; 4];
    TOKEN_DESCRIPTIONS.get(&*c.encode_utf8(&mut buf)).copied()
}

/// Named patterns: the built-in formats plus any the caller registers,
/// which take precedence.
///
/// # Examples
/// ```
/// use name_format::{Component, FormatOptions, FormatRegistry, NameComponents};
///
/// let name = NameComponents::new()
///     .with(Component::Title, "Dr")
///     .with(Component::Given, "Grace")
///     .with(Component::Family, "Hopper");
///
/// let mut registry = FormatRegistry::new();
/// registry.insert("sortable", "f, g");
///
/// let options = FormatOptions::default();
/// assert_eq!("Dr Grace Hopper", registry.format_named(&name, "default", &options).unwrap());
/// assert_eq!("Hopper, Grace", registry.format_named(&name, "sortable", &options).unwrap());
/// assert!(registry.format_named(&name, "missing", &options).is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormatRegistry {
    custom: BTreeMap<String, String>,
}

impl FormatRegistry {
    pub fn new() -> FormatRegistry {
        FormatRegistry::default()
    }

    /// Registers a pattern, returning the custom pattern it replaced.
    pub fn insert(&mut self, name: &str, pattern: &str) -> Option<String> {
        if builtin(name).is_some() {
            debug!(name = %name, "overriding built-in name format");
        }
        self.custom.insert(name.to_string(), pattern.to_string())
    }

    pub fn pattern(&self, name: &str) -> Option<&str> {
        self.custom
            .get(name)
            .map(String::as_str)
            .or_else(|| builtin(name))
    }

    /// All known format names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = BUILTIN_FORMATS
            .keys()
            .copied()
            .chain(self.custom.keys().map(String::as_str))
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    pub fn format_named(
        &self,
        components: &NameComponents,
        name: &str,
        options: &FormatOptions,
    ) -> Result<String> {
        let pattern = self
            .pattern(name)
            .ok_or_else(|| Error::UnknownFormat(name.to_string()))?;
        Ok(format(components, pattern, options))
    }
}

impl<K: AsRef<str>, V: AsRef<str>> Extend<(K, V)> for FormatRegistry {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, pattern) in iter {
            self.insert(name.as_ref(), pattern.as_ref());
        }
    }
}
