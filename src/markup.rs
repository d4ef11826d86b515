use super::component::Component;
use super::Error;
use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

const PERSON_ITEMSCOPE: &str = r#"<span itemscope itemtype="http://schema.org/Person">"#;
const PERSON_RDFA: &str = r#"<span typeof="schema:Person">"#;

/// How component values are rendered into the output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(rename_all = "lowercase"))]
pub enum MarkupStyle {
    /// Plain text, HTML-escaped.
    #[default]
    None,
    /// Component values verbatim. Unsafe for display of untrusted input.
    Raw,
    /// Each component in a `<span>` with its key as class.
    Simple,
    /// As `Simple`, plus a schema.org `itemprop`.
    Microdata,
    /// As `Simple`, plus a schema.org RDFa `property`.
    Rdfa,
}

impl MarkupStyle {
    pub fn key(self) -> &'static str {
        match self {
            MarkupStyle::None => "none",
            MarkupStyle::Raw => "raw",
            MarkupStyle::Simple => "simple",
            MarkupStyle::Microdata => "microdata",
            MarkupStyle::Rdfa => "rdfa",
        }
    }

    /// Renders a component's text as it should appear in a token value.
    pub fn render_component(self, component: Component, text: &str) -> String {
        match self {
            MarkupStyle::Raw => text.to_string(),
            MarkupStyle::None => escape(text).into_owned(),
            MarkupStyle::Simple => format!(
                r#"<span class="{}">{}</span>"#,
                component.key(),
                escape(text)
            ),
            MarkupStyle::Microdata => format!(
                r#"<span class="{}" itemprop="{}">{}</span>"#,
                component.key(),
                component.schema_property(),
                escape(text)
            ),
            MarkupStyle::Rdfa => format!(
                r#"<span class="{}" property="schema:{}">{}</span>"#,
                component.key(),
                component.schema_property(),
                escape(text)
            ),
        }
    }

    /// Renders derived text (initials and the like), which is escaped like a
    /// component but never wrapped.
    pub fn render_derived(self, text: &str) -> String {
        match self {
            MarkupStyle::Raw => text.to_string(),
            _ => escape(text).into_owned(),
        }
    }

    /// Wraps a finished, non-empty name in the container its style calls for.
    pub fn wrap_person(self, formatted: String) -> String {
        if formatted.is_empty() {
            return formatted;
        }

        match self {
            MarkupStyle::Microdata => format!("{}{}</span>", PERSON_ITEMSCOPE, formatted),
            MarkupStyle::Rdfa => format!("{}{}</span>", PERSON_RDFA, formatted),
            _ => formatted,
        }
    }
}

impl fmt::Display for MarkupStyle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for MarkupStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" | "" => Ok(MarkupStyle::None),
            "raw" => Ok(MarkupStyle::Raw),
            "simple" => Ok(MarkupStyle::Simple),
            "microdata" => Ok(MarkupStyle::Microdata),
            "rdfa" => Ok(MarkupStyle::Rdfa),
            _ => Err(Error::UnknownMarkup(s.to_string())),
        }
    }
}

pub fn escape(text: &str) -> Cow<str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// A piece of a rendered value, as seen by text transforms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    /// An opening or closing `span` tag
    Tag(&'a str),
    /// A character reference such as `&amp;` or `&#39;`
    Entity(&'a str),
}

/// Splits a rendered value into text runs and the tags and character
/// references around them, which transforms must pass through unchanged.
pub fn segments(value: &str) -> SmallVec<[Segment; 8]> {
    let bytes = value.as_bytes();
    let mut out = SmallVec::new();
    let mut text_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let len = match bytes[i] {
            b'<' => tag_len(&value[i..]),
            b'&' => entity_len(&value[i..]),
            _ => None,
        };

        match len {
            Some(len) => {
                if text_start < i {
                    out.push(Segment::Text(&value[text_start..i]));
                }
                let raw = &value[i..i + len];
                out.push(if bytes[i] == b'<' {
                    Segment::Tag(raw)
                } else {
                    Segment::Entity(raw)
                });
                i += len;
                text_start = i;
            }
            None => i += 1,
        }
    }

    if text_start < value.len() {
        out.push(Segment::Text(&value[text_start..]));
    }
    out
}

fn tag_len(rest: &str) -> Option<usize> {
    let after_name = rest
        .strip_prefix("</span")
        .or_else(|| rest.strip_prefix("<span"))?;
    if after_name.starts_with('>') || after_name.starts_with(' ') {
        rest.find('>').map(|end| end + 1)
    } else {
        None
    }
}

fn entity_len(rest: &str) -> Option<usize> {
    let end = rest[1..].find(';')?;
    let body = &rest[1..1 + end];
    let valid = match body.strip_prefix('#') {
        Some(digits) => !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()),
        None => !body.is_empty() && body.bytes().all(|b| b.is_ascii_alphanumeric()),
    };

    if valid && body.len() <= 10 {
        Some(end + 2)
    } else {
        None
    }
}
