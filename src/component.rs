use super::Error;
use compact_str::CompactString;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// One named part of a personal name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Component {
    Title,
    Given,
    Middle,
    Family,
    Credentials,
    Generational,
    Preferred,
    Alternative,
}

impl Component {
    pub const ALL: [Component; 8] = [
        Component::Title,
        Component::Given,
        Component::Middle,
        Component::Family,
        Component::Credentials,
        Component::Generational,
        Component::Preferred,
        Component::Alternative,
    ];

    /// The key used for this component in configuration, input records and
    /// markup class names.
    pub fn key(self) -> &'static str {
        match self {
            Component::Title => "title",
            Component::Given => "given",
            Component::Middle => "middle",
            Component::Family => "family",
            Component::Credentials => "credentials",
            Component::Generational => "generational",
            Component::Preferred => "preferred",
            Component::Alternative => "alternative",
        }
    }

    /// The schema.org `Person` property this component maps to.
    pub fn schema_property(self) -> &'static str {
        match self {
            Component::Title => "honorificPrefix",
            Component::Given => "givenName",
            Component::Middle => "additionalName",
            Component::Family => "familyName",
            Component::Credentials | Component::Generational => "honorificSuffix",
            Component::Preferred | Component::Alternative => "alternateName",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Component {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Component::ALL
            .iter()
            .copied()
            .find(|c| c.key() == s)
            .ok_or_else(|| Error::UnknownComponent(s.to_string()))
    }
}

/// The components of a single personal name. Any component may be empty.
///
/// # Examples
/// ```
/// use name_format::{Component, NameComponents};
///
/// let name = NameComponents::new()
///     .with(Component::Given, "John")
///     .with(Component::Family, "Smith");
///
/// assert_eq!("John", name.get(Component::Given));
/// assert_eq!("", name.get(Component::Middle));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(default))]
pub struct NameComponents {
    pub title: CompactString,
    pub given: CompactString,
    pub middle: CompactString,
    pub family: CompactString,
    pub credentials: CompactString,
    pub generational: CompactString,
    pub preferred: CompactString,
    pub alternative: CompactString,
}

impl NameComponents {
    pub fn new() -> NameComponents {
        NameComponents::default()
    }

    #[inline]
    pub fn get(&self, component: Component) -> &str {
        match component {
            Component::Title => &self.title,
            Component::Given => &self.given,
            Component::Middle => &self.middle,
            Component::Family => &self.family,
            Component::Credentials => &self.credentials,
            Component::Generational => &self.generational,
            Component::Preferred => &self.preferred,
            Component::Alternative => &self.alternative,
        }
    }

    pub fn set(&mut self, component: Component, value: &str) {
        let slot = match component {
            Component::Title => &mut self.title,
            Component::Given => &mut self.given,
            Component::Middle => &mut self.middle,
            Component::Family => &mut self.family,
            Component::Credentials => &mut self.credentials,
            Component::Generational => &mut self.generational,
            Component::Preferred => &mut self.preferred,
            Component::Alternative => &mut self.alternative,
        };
        *slot = CompactString::from(value);
    }

    pub fn with(mut self, component: Component, value: &str) -> NameComponents {
        self.set(component, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        Component::ALL.iter().all(|c| self.get(*c).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        for component in Component::ALL.iter() {
            assert_eq!(*component, component.key().parse::<Component>().unwrap());
        }
    }

    #[test]
    fn unknown_key() {
        assert!(matches!(
            "surname".parse::<Component>(),
            Err(Error::UnknownComponent(ref k)) if k == "surname"
        ));
    }

    #[test]
    fn set_and_get() {
        let mut name = NameComponents::new();
        assert!(name.is_empty());

        name.set(Component::Credentials, "PhD");
        assert_eq!("PhD", name.get(Component::Credentials));
        assert_eq!("PhD", name.credentials.as_str());
        assert!(!name.is_empty());
    }
}
