//! Formats human names from their components (title, given, family and so
//! on) using a compact pattern language.
//!
//! A pattern mixes token letters, which expand to a component or a value
//! derived from components, with literal text, modifiers (`U`, `L`, `F`, …)
//! that transform the next token, conditions (`+`, `-`, `=`, …) that keep or
//! drop a piece depending on whether its neighbors are empty, and
//! parenthesized groups. See [`TOKEN_LEGEND`] for the full table.
//!
//! ```
//! use name_format::{format, Component, FormatOptions, NameComponents};
//!
//! let name = NameComponents::new()
//!     .with(Component::Title, "Dr")
//!     .with(Component::Given, "John")
//!     .with(Component::Family, "Smith");
//! let options = FormatOptions::default();
//!
//! assert_eq!("John Smith", format(&name, "g f", &options));
//! assert_eq!("J. Smith", format(&name, "x. f", &options));
//! assert_eq!("SMITH, Dr", format(&name, "Uf, t", &options));
//!
//! // `+` keeps a separator only if both neighbors are non-empty, and groups
//! // let each separator judge a whole preceding run
//! assert_eq!("Dr John Smith", format(&name, "((t+ig)+im)+if", &options));
//! ```
//!
//! Formatting never fails: unbalanced parentheses read as literals, stray
//! modifiers and conditions are ignored, and missing components are empty.

use compact_str::CompactString;

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

mod cache;
mod case;
mod component;
mod condition;
mod error;
mod formats;
mod initials;
mod list;
mod markup;
mod modifier;
mod normalize;
mod scan;
mod tokens;

#[cfg(feature = "serialization")]
mod serialization;

#[cfg(feature = "ffi")]
pub mod external;

pub use cache::TokenCache;
pub use component::{Component, NameComponents};
pub use error::{Error, Result};
pub use formats::{builtin, describe, FormatRegistry, TOKEN_LEGEND};
pub use list::{format_list, join_names, AndStyle, DelimiterPrecedesLast, ListOptions};
pub use markup::MarkupStyle;
pub use tokens::TokenTable;

#[cfg(feature = "serialization")]
pub use serialization::Config;

/// Caller settings for a format call.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(default))]
pub struct FormatOptions {
    /// Expanded by the `i` token; a space when empty.
    pub sep1: CompactString,
    /// Expanded by the `j` token; a space when empty.
    pub sep2: CompactString,
    /// Expanded by the `k` token; a space when empty.
    pub sep3: CompactString,
    pub markup: MarkupStyle,
}

impl Default for FormatOptions {
    fn default() -> FormatOptions {
        FormatOptions {
            sep1: CompactString::from(" "),
            sep2: CompactString::from(" "),
            sep3: CompactString::from(" "),
            markup: MarkupStyle::None,
        }
    }
}

/// Formats one name according to a pattern.
///
/// # Examples
/// ```
/// use name_format::{format, Component, FormatOptions, MarkupStyle, NameComponents};
///
/// let name = NameComponents::new()
///     .with(Component::Given, "John")
///     .with(Component::Family, "Smith");
/// let options = FormatOptions {
///     markup: MarkupStyle::Simple,
///     ..FormatOptions::default()
/// };
///
/// assert_eq!(
///     r#"<span class="given">John</span> <span class="family">Smith</span>"#,
///     format(&name, "g f", &options)
/// );
/// ```
pub fn format(components: &NameComponents, pattern: &str, options: &FormatOptions) -> String {
    let table = TokenTable::new(components, options);
    format_with_table(&table, pattern)
}

/// As [`format`], reusing token tables from `cache`.
pub fn format_cached(
    cache: &mut TokenCache,
    components: &NameComponents,
    pattern: &str,
    options: &FormatOptions,
) -> String {
    let table = cache.table(components, options);
    format_with_table(table, pattern)
}

/// Formats against an already built table, in the markup style it was built
/// with.
pub fn format_with_table(table: &TokenTable, pattern: &str) -> String {
    table.markup().wrap_person(scan::format_pattern(pattern, table))
}
