use super::component::NameComponents;
use super::tokens::TokenTable;
use super::FormatOptions;
use std::collections::HashMap;

/// Token tables memoized across a rendering pass, e.g. one list of names
/// rendered with several patterns.
///
/// Owned by the caller and keyed by both the name and the options, so a
/// table is never reused for different input.
///
/// # Examples
/// ```
/// use name_format::{format_cached, Component, FormatOptions, NameComponents, TokenCache};
///
/// let name = NameComponents::new()
///     .with(Component::Given, "Ada")
///     .with(Component::Family, "Lovelace");
/// let options = FormatOptions::default();
/// let mut cache = TokenCache::new();
///
/// assert_eq!("Ada Lovelace", format_cached(&mut cache, &name, "g+if", &options));
/// assert_eq!("Lovelace, A.", format_cached(&mut cache, &name, "f, x.", &options));
/// assert_eq!(1, cache.len());
/// ```
#[derive(Debug, Default)]
pub struct TokenCache {
    tables: HashMap<(NameComponents, FormatOptions), TokenTable>,
}

impl TokenCache {
    pub fn new() -> TokenCache {
        TokenCache::default()
    }

    pub fn table(&mut self, components: &NameComponents, options: &FormatOptions) -> &TokenTable {
        self.tables
            .entry((components.clone(), options.clone()))
            .or_insert_with(|| TokenTable::new(components, options))
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn clear(&mut self) {
        self.tables.clear();
    }
}
