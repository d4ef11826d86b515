use unicode_segmentation::UnicodeSegmentation;

/// The first extended grapheme cluster of the text, so that a letter with
/// combining marks stays whole.
pub fn first_letter(text: &str) -> Option<&str> {
    text.trim_start().graphemes(true).next()
}

/// The first letter of every whitespace-delimited word, run together.
pub fn initials<'a, I>(texts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    texts
        .into_iter()
        .flat_map(str::split_whitespace)
        .filter_map(first_letter)
        .collect()
}
