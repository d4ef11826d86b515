use super::cache::TokenCache;
use super::component::NameComponents;
use super::markup::MarkupStyle;
use super::{format_cached, FormatOptions};
use smallvec::SmallVec;

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// The conjunction placed before the last name of a list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(rename_all = "lowercase"))]
pub enum AndStyle {
    /// "and"
    #[default]
    Text,
    /// "&"
    Symbol,
    /// No conjunction; the delimiter is used throughout.
    Inherit,
}

/// Whether the delimiter also goes before the conjunction ("A, B, and C").
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(rename_all = "lowercase"))]
pub enum DelimiterPrecedesLast {
    Never,
    Always,
    /// Only with three or more names.
    #[default]
    Contextual,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(default))]
pub struct ListOptions {
    pub delimiter: String,
    pub and: AndStyle,
    pub delimiter_precedes_last: DelimiterPrecedesLast,
    /// Truncate to "et al." once a list has this many names; 0 never does.
    pub et_al_min: usize,
    /// How many names to keep before "et al.".
    pub et_al_first: usize,
}

impl Default for ListOptions {
    fn default() -> ListOptions {
        ListOptions {
            delimiter: ", ".to_string(),
            and: AndStyle::Text,
            delimiter_precedes_last: DelimiterPrecedesLast::Contextual,
            et_al_min: 0,
            et_al_first: 1,
        }
    }
}

/// Joins already formatted names. Empty names are skipped.
pub fn join_names<S: AsRef<str>>(names: &[S], list: &ListOptions, markup: MarkupStyle) -> String {
    let names: SmallVec<[&str; 8]> = names
        .iter()
        .map(|n| n.as_ref())
        .filter(|n| !n.is_empty())
        .collect();
    let count = names.len();

    match count {
        0 => return String::new(),
        1 => return names[0].to_string(),
        _ => {}
    }

    if list.et_al_min > 0 && count >= list.et_al_min {
        let shown = list.et_al_first.clamp(1, count);
        let mut out = names[..shown].join(list.delimiter.as_str());
        out.push_str(" et al.");
        return out;
    }

    let conjunction = match list.and {
        AndStyle::Text => Some("and".to_string()),
        AndStyle::Symbol => Some(markup.render_derived("&")),
        AndStyle::Inherit => None,
    };
    let delimiter_before_last = match list.delimiter_precedes_last {
        DelimiterPrecedesLast::Never => false,
        DelimiterPrecedesLast::Always => true,
        DelimiterPrecedesLast::Contextual => count > 2,
    };

    let mut out = names[..count - 1].join(list.delimiter.as_str());
    match conjunction {
        Some(and) => {
            if delimiter_before_last {
                out.push_str(list.delimiter.trim_end());
            }
            out.push(' ');
            out.push_str(&and);
            out.push(' ');
        }
        None => out.push_str(&list.delimiter),
    }
    out.push_str(names[count - 1]);
    out
}

/// Formats every name with the same pattern and joins the results.
///
/// # Examples
/// ```
/// use name_format::{
///     format_list, Component, FormatOptions, ListOptions, NameComponents, TokenCache,
/// };
///
/// let pairs = [("Ada", "Lovelace"), ("Charles", "Babbage"), ("Alan", "Turing")];
/// let names: Vec<NameComponents> = pairs
///     .iter()
///     .map(|(g, f)| NameComponents::new().with(Component::Given, g).with(Component::Family, f))
///     .collect();
/// let mut cache = TokenCache::new();
///
/// assert_eq!(
///     "A. Lovelace, C. Babbage, and A. Turing",
///     format_list(&names, "x.+if", &FormatOptions::default(), &ListOptions::default(), &mut cache)
/// );
/// ```
pub fn format_list(
    names: &[NameComponents],
    pattern: &str,
    options: &FormatOptions,
    list: &ListOptions,
    cache: &mut TokenCache,
) -> String {
    let formatted: SmallVec<[String; 8]> = names
        .iter()
        .map(|name| format_cached(cache, name, pattern, options))
        .collect();
    join_names(&formatted, list, options.markup)
}
