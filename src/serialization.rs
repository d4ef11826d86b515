use super::component::NameComponents;
use super::error::Result;
use super::formats::FormatRegistry;
use super::list::ListOptions;
use super::FormatOptions;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Everything a caller can configure, as read from JSON.
///
/// # Examples
/// ```
/// use name_format::{Config, MarkupStyle};
///
/// let config = Config::from_json(r#"{
///     "formats": { "sortable": "f, g" },
///     "options": { "sep1": ", ", "markup": "simple" }
/// }"#).unwrap();
///
/// assert_eq!(MarkupStyle::Simple, config.options.markup);
/// assert_eq!(" ", config.options.sep2.as_str());
/// assert_eq!(Some("f, g"), config.registry().pattern("sortable"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub formats: BTreeMap<String, String>,
    pub options: FormatOptions,
    pub list: ListOptions,
}

impl Config {
    pub fn from_json(json: &str) -> Result<Config> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading name format config");
        let json = fs::read_to_string(path)?;
        Config::from_json(&json)
    }

    pub fn registry(&self) -> FormatRegistry {
        let mut registry = FormatRegistry::new();
        registry.extend(self.formats.iter());
        registry
    }
}

impl NameComponents {
    /// Reads components from a JSON object keyed by component name; missing
    /// keys are empty.
    pub fn from_json(json: &str) -> Result<NameComponents> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
