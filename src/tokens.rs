use super::component::{Component, NameComponents};
use super::initials::{first_letter, initials};
use super::markup::MarkupStyle;
use super::normalize::normalize_nfc_whitespace;
use super::FormatOptions;
use std::borrow::Cow;

// Index order of `TokenTable::values`
const TOKENS: &str = "tgmfcsqpavwxyzAIJKMdDeEijk";
const TOKEN_COUNT: usize = 26;

/// The letter → value table a pattern is expanded against.
///
/// A token whose value would be empty is stored as `None`; it expands to the
/// empty string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenTable {
    values: [Option<String>; TOKEN_COUNT],
    markup: MarkupStyle,
}

#[inline]
fn token_index(c: char) -> Option<usize> {
    if c.is_ascii_alphabetic() {
        TOKENS.find(c)
    } else {
        None
    }
}

struct Builder<'a> {
    components: [Cow<'a, str>; 8],
    markup: MarkupStyle,
}

impl<'a> Builder<'a> {
    fn text(&self, component: Component) -> &str {
        &self.components[component as usize]
    }

    fn component(&self, component: Component) -> Option<String> {
        let text = self.text(component);
        if text.is_empty() {
            None
        } else {
            Some(self.markup.render_component(component, text))
        }
    }

    // The first non-empty of the given components, rendered under its own key
    fn first_of(&self, candidates: &[Component]) -> Option<String> {
        candidates
            .iter()
            .find(|c| !self.text(**c).is_empty())
            .and_then(|c| self.component(*c))
    }

    fn first_letter_of(&self, candidates: &[Component]) -> Option<String> {
        candidates
            .iter()
            .find_map(|c| first_letter(self.text(*c)))
            .map(|letter| self.markup.render_derived(letter))
    }

    fn initials_of(&self, sources: &[Component]) -> Option<String> {
        let joined = initials(sources.iter().map(|c| self.text(*c)));
        if joined.is_empty() {
            None
        } else {
            Some(self.markup.render_derived(&joined))
        }
    }
}

fn separator(value: &str) -> Option<String> {
    if value.is_empty() {
        Some(" ".to_string())
    } else {
        Some(value.to_string())
    }
}

impl TokenTable {
    /// Builds the table for one name.
    ///
    /// # Examples
    /// ```
    /// use name_format::{Component, FormatOptions, NameComponents, TokenTable};
    ///
    /// let name = NameComponents::new()
    ///     .with(Component::Given, "John Quincy")
    ///     .with(Component::Family, "Public");
    /// let table = TokenTable::new(&name, &FormatOptions::default());
    ///
    /// assert_eq!(Some(Some("John Quincy")), table.get('g'));
    /// assert_eq!(Some(Some("J")), table.get('x'));
    /// assert_eq!(Some(Some("JQP")), table.get('I'));
    /// assert_eq!(Some(None), table.get('m'));
    /// assert_eq!(None, table.get('r'));
    /// ```
    pub fn new(components: &NameComponents, options: &FormatOptions) -> TokenTable {
        use Component::*;

        let builder = Builder {
            components: Component::ALL.map(|c| normalize_nfc_whitespace(components.get(c))),
            markup: options.markup,
        };

        let values = [
            builder.component(Title),
            builder.component(Given),
            builder.component(Middle),
            builder.component(Family),
            builder.component(Credentials),
            builder.component(Generational),
            builder.component(Preferred),
            builder.first_of(&[Preferred, Given]),
            builder.component(Alternative),
            builder.first_letter_of(&[Preferred]),
            builder.first_letter_of(&[Preferred, Given]),
            builder.first_letter_of(&[Given]),
            builder.first_letter_of(&[Middle]),
            builder.first_letter_of(&[Family]),
            builder.first_letter_of(&[Alternative]),
            builder.initials_of(&[Given, Family]),
            builder.initials_of(&[Given, Middle, Family]),
            builder.initials_of(&[Given]),
            builder.initials_of(&[Given, Middle]),
            builder.first_of(&[Preferred, Family]),
            builder.first_of(&[Family, Preferred]),
            builder.first_of(&[Given, Family]),
            builder.first_of(&[Family, Given]),
            separator(&options.sep1),
            separator(&options.sep2),
            separator(&options.sep3),
        ];

        TokenTable {
            values,
            markup: options.markup,
        }
    }

    /// `None` if `c` is not a token letter; otherwise the token's value,
    /// which is `None` when empty.
    #[inline]
    pub fn get(&self, c: char) -> Option<Option<&str>> {
        token_index(c).map(|i| self.values[i].as_deref())
    }

    /// The style the values were rendered in.
    pub fn markup(&self) -> MarkupStyle {
        self.markup
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(name: &NameComponents) -> TokenTable {
        TokenTable::new(name, &FormatOptions::default())
    }

    fn value<'a>(table: &'a TokenTable, c: char) -> &'a str {
        table.get(c).unwrap().unwrap_or("")
    }

    #[test]
    fn token_letters_line_up() {
        assert_eq!(TOKEN_COUNT, TOKENS.chars().count());
        assert_eq!(Some(0), token_index('t'));
        assert_eq!(Some(TOKEN_COUNT - 1), token_index('k'));
        assert_eq!(None, token_index('l'));
        assert_eq!(None, token_index('L'));
        assert_eq!(None, token_index('('));
        assert_eq!(None, token_index('é'));
    }

    #[test]
    fn components() {
        let name = NameComponents::new()
            .with(Component::Title, "Dr")
            .with(Component::Given, "John")
            .with(Component::Middle, "Quincy")
            .with(Component::Family, "Public")
            .with(Component::Credentials, "PhD")
            .with(Component::Generational, "Jr.")
            .with(Component::Alternative, "JQ");
        let t = table(&name);

        assert_eq!("Dr", value(&t, 't'));
        assert_eq!("John", value(&t, 'g'));
        assert_eq!("Quincy", value(&t, 'm'));
        assert_eq!("Public", value(&t, 'f'));
        assert_eq!("PhD", value(&t, 'c'));
        assert_eq!("Jr.", value(&t, 's'));
        assert_eq!("JQ", value(&t, 'a'));
        assert_eq!(Some(None), t.get('q'));
    }

    #[test]
    fn fallbacks() {
        let name = NameComponents::new()
            .with(Component::Given, "William")
            .with(Component::Family, "Gates");
        let t = table(&name);
        assert_eq!("William", value(&t, 'p'));
        assert_eq!("W", value(&t, 'w'));
        assert_eq!("Gates", value(&t, 'd'));
        assert_eq!("Gates", value(&t, 'D'));
        assert_eq!("William", value(&t, 'e'));
        assert_eq!("Gates", value(&t, 'E'));
        assert_eq!(Some(None), t.get('v'));

        let name = name.with(Component::Preferred, "Bill");
        let t = table(&name);
        assert_eq!("Bill", value(&t, 'p'));
        assert_eq!("Bill", value(&t, 'q'));
        assert_eq!("B", value(&t, 'v'));
        assert_eq!("B", value(&t, 'w'));
        assert_eq!("Bill", value(&t, 'd'));
        assert_eq!("Gates", value(&t, 'D'));
    }

    #[test]
    fn fallbacks_absent_when_both_empty() {
        let t = table(&NameComponents::new().with(Component::Title, "Dr"));
        for c in "pdDeEvwxyzAIJKM".chars() {
            assert_eq!(Some(None), t.get(c), "{}", c);
        }
    }

    #[test]
    fn derived() {
        let name = NameComponents::new()
            .with(Component::Given, "Mary Ann")
            .with(Component::Middle, "Louise")
            .with(Component::Family, "van Dyke");
        let t = table(&name);
        assert_eq!("M", value(&t, 'x'));
        assert_eq!("L", value(&t, 'y'));
        assert_eq!("v", value(&t, 'z'));
        assert_eq!("MAvD", value(&t, 'I'));
        assert_eq!("MALvD", value(&t, 'J'));
        assert_eq!("MA", value(&t, 'K'));
        assert_eq!("MAL", value(&t, 'M'));
    }

    #[test]
    fn separators() {
        let t = table(&NameComponents::new());
        assert_eq!(" ", value(&t, 'i'));
        assert_eq!(" ", value(&t, 'j'));
        assert_eq!(" ", value(&t, 'k'));

        let options = FormatOptions {
            sep1: ", ".into(),
            sep3: "-".into(),
            ..FormatOptions::default()
        };
        let t = TokenTable::new(&NameComponents::new(), &options);
        assert_eq!(", ", value(&t, 'i'));
        assert_eq!(" ", value(&t, 'j'));
        assert_eq!("-", value(&t, 'k'));
    }

    #[test]
    fn markup_applies_to_components_only() {
        let name = NameComponents::new()
            .with(Component::Preferred, "Bill")
            .with(Component::Family, "O'Neil");
        let options = FormatOptions {
            markup: MarkupStyle::Simple,
            ..FormatOptions::default()
        };
        let t = TokenTable::new(&name, &options);
        assert_eq!(r#"<span class="family">O&#39;Neil</span>"#, value(&t, 'f'));
        assert_eq!(r#"<span class="preferred">Bill</span>"#, value(&t, 'p'));
        assert_eq!("O", value(&t, 'z'));
    }

    #[test]
    fn normalizes_components() {
        let name = NameComponents::new().with(Component::Given, "E\u{301}mile");
        let t = table(&name);
        assert_eq!("\u{c9}mile", value(&t, 'g'));
        assert_eq!("\u{c9}", value(&t, 'x'));
    }
}
