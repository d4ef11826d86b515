#[derive(Debug)]
enum CaseMapping {
    Empty,
    Single(char),
    Double(char, char),
    Triple(char, char, char),
}

impl CaseMapping {
    #[inline]
    fn lowercase(c: char) -> CaseMapping {
        let [x, y] = unicode_case_mapping::to_lowercase(c);
        Self::chars_from_u32(x, y, 0)
    }

    #[inline]
    fn uppercase(c: char) -> CaseMapping {
        let [x, y, z] = unicode_case_mapping::to_uppercase(c);
        Self::chars_from_u32(x, y, z)
    }

    // Zero means "no further chars"; the crate only emits valid scalar values
    // otherwise, so anything that fails to convert is treated the same way
    #[inline]
    fn chars_from_u32(x: u32, y: u32, z: u32) -> CaseMapping {
        match (char::from_u32(x), char::from_u32(y), char::from_u32(z)) {
            (Some(x), Some(y), Some(z)) if x != '\0' && y != '\0' && z != '\0' => {
                CaseMapping::Triple(x, y, z)
            }
            (Some(x), Some(y), _) if x != '\0' && y != '\0' => CaseMapping::Double(x, y),
            (Some(x), _, _) if x != '\0' => CaseMapping::Single(x),
            _ => CaseMapping::Empty,
        }
    }

    // An empty mapping means the char maps to itself
    #[inline]
    fn or_self(self, c: char) -> CaseMapping {
        match self {
            CaseMapping::Empty => CaseMapping::Single(c),
            mapped => mapped,
        }
    }
}

impl Iterator for CaseMapping {
    type Item = char;

    #[inline]
    fn next(&mut self) -> Option<char> {
        match *self {
            CaseMapping::Triple(x, y, z) => {
                let _ = std::mem::replace(self, CaseMapping::Double(y, z));
                Some(x)
            }
            CaseMapping::Double(x, y) => {
                let _ = std::mem::replace(self, CaseMapping::Single(y));
                Some(x)
            }
            CaseMapping::Single(x) => {
                let _ = std::mem::replace(self, CaseMapping::Empty);
                Some(x)
            }
            CaseMapping::Empty => None,
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = match self {
            CaseMapping::Triple(_, _, _) => 3,
            CaseMapping::Double(_, _) => 2,
            CaseMapping::Single(_) => 1,
            CaseMapping::Empty => 0,
        };
        (size, Some(size))
    }
}

impl ExactSizeIterator for CaseMapping {}

pub fn lowercase(text: &str) -> String {
    if text.is_ascii() {
        return text.to_ascii_lowercase();
    }

    let mut result = String::with_capacity(text.len());
    result.extend(text.chars().flat_map(|c| CaseMapping::lowercase(c).or_self(c)));
    result
}

pub fn uppercase(text: &str) -> String {
    if text.is_ascii() {
        return text.to_ascii_uppercase();
    }

    let mut result = String::with_capacity(text.len());
    result.extend(text.chars().flat_map(|c| CaseMapping::uppercase(c).or_self(c)));
    result
}

/// Uppercases the first char, leaving the rest untouched.
pub fn uppercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => {
            let mut result = String::with_capacity(text.len());
            result.extend(CaseMapping::uppercase(first).or_self(first));
            result.push_str(chars.as_str());
            result
        }
        None => String::new(),
    }
}

/// Uppercases the first char of every whitespace-delimited word, leaving the
/// rest untouched.
pub fn uppercase_words(text: &str) -> String {
    uppercase_words_continued(text, &mut true)
}

/// As [`uppercase_words`], for text that continues an earlier run:
/// `capitalize_next` says whether the run starts a word, and is left saying
/// whether the next run does.
pub fn uppercase_words_continued(text: &str, capitalize_next: &mut bool) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        if *capitalize_next && !c.is_whitespace() {
            result.extend(CaseMapping::uppercase(c).or_self(c));
        } else {
            result.push(c);
        }
        *capitalize_next = c.is_whitespace();
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_and_upper() {
        assert_eq!("mcdonald", lowercase("McDonald"));
        assert_eq!("MCDONALD", uppercase("McDonald"));
        assert_eq!("élodie", lowercase("ÉLODIE"));
        assert_eq!("ÉLODIE", uppercase("élodie"));
        assert_eq!("STRASSE", uppercase("straße"));
        assert_eq!("", uppercase(""));
    }

    #[test]
    fn first_only() {
        assert_eq!("McDonald", uppercase_first("mcDonald"));
        assert_eq!("Élodie dupont", uppercase_first("élodie dupont"));
        assert_eq!(" john", uppercase_first(" john"));
        assert_eq!("", uppercase_first(""));
    }

    #[test]
    fn every_word() {
        assert_eq!("Van Der Berg", uppercase_words("van der berg"));
        assert_eq!("Jean-luc  Picard", uppercase_words("jean-luc  picard"));
        assert_eq!(" Ödön", uppercase_words(" ödön"));
    }

    #[test]
    fn every_word_across_runs() {
        let mut capitalize_next = true;
        assert_eq!("Mary", uppercase_words_continued("mary", &mut capitalize_next));
        assert_eq!("ann", uppercase_words_continued("ann", &mut capitalize_next));
        assert_eq!(" ", uppercase_words_continued(" ", &mut capitalize_next));
        assert_eq!("Lee", uppercase_words_continued("lee", &mut capitalize_next));
        assert!(!capitalize_next);
    }
}
