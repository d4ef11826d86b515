use super::case;
use super::markup::{escape, segments, Segment};
use smallvec::SmallVec;

/// A pattern letter that transforms the text of the next token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Modifier {
    /// `L`
    Lowercase,
    /// `U`
    Uppercase,
    /// `F`
    UppercaseFirst,
    /// `G`
    UppercaseWords,
    /// `T`
    Trim,
    /// `S`
    Escape,
    /// `B`
    FirstWord,
    /// `b`
    LastWord,
}

pub type Modifiers = SmallVec<[Modifier; 4]>;

impl Modifier {
    pub fn from_char(c: char) -> Option<Modifier> {
        match c {
            'L' => Some(Modifier::Lowercase),
            'U' => Some(Modifier::Uppercase),
            'F' => Some(Modifier::UppercaseFirst),
            'G' => Some(Modifier::UppercaseWords),
            'T' => Some(Modifier::Trim),
            'S' => Some(Modifier::Escape),
            'B' => Some(Modifier::FirstWord),
            'b' => Some(Modifier::LastWord),
            _ => None,
        }
    }

    fn apply_to_text(self, text: &str) -> String {
        match self {
            Modifier::Lowercase => case::lowercase(text),
            Modifier::Uppercase => case::uppercase(text),
            Modifier::UppercaseFirst => case::uppercase_first(text),
            Modifier::UppercaseWords => case::uppercase_words(text),
            Modifier::Trim => text.split_whitespace().collect::<Vec<_>>().join(" "),
            Modifier::Escape => escape(text).into_owned(),
            Modifier::FirstWord => text.split_whitespace().next().unwrap_or("").to_string(),
            Modifier::LastWord => text.split_whitespace().next_back().unwrap_or("").to_string(),
        }
    }
}

/// Applies modifiers in order. Only text is transformed: the tags and
/// character references of rendered markup pass through, and `B`/`b` keep
/// the tags enclosing the word they pick.
pub fn apply(value: String, modifiers: &[Modifier]) -> String {
    if value.is_empty() || modifiers.is_empty() {
        return value;
    }

    modifiers.iter().fold(value, |value, modifier| {
        if value.contains(['<', '&']) {
            modifier.apply_to_markup(&segments(&value))
        } else {
            modifier.apply_to_text(&value)
        }
    })
}

impl Modifier {
    fn apply_to_markup(self, segments: &[Segment]) -> String {
        match self {
            Modifier::Lowercase => map_text(segments, case::lowercase),
            Modifier::Uppercase => map_text(segments, case::uppercase),
            Modifier::Escape => map_text(segments, |text| escape(text).into_owned()),
            Modifier::UppercaseFirst => {
                let mut started = false;
                let mut out = String::new();
                for segment in segments {
                    match *segment {
                        Segment::Text(text) if !started && !text.is_empty() => {
                            started = true;
                            out.push_str(&case::uppercase_first(text));
                        }
                        Segment::Entity(raw) => {
                            started = true;
                            out.push_str(raw);
                        }
                        Segment::Text(raw) | Segment::Tag(raw) => out.push_str(raw),
                    }
                }
                out
            }
            Modifier::UppercaseWords => {
                let mut capitalize_next = true;
                let mut out = String::new();
                for segment in segments {
                    match *segment {
                        Segment::Text(text) => out.push_str(&case::uppercase_words_continued(
                            text,
                            &mut capitalize_next,
                        )),
                        Segment::Entity(raw) => {
                            capitalize_next = false;
                            out.push_str(raw);
                        }
                        Segment::Tag(raw) => out.push_str(raw),
                    }
                }
                out
            }
            Modifier::Trim => trim(segments),
            Modifier::FirstWord => WordPicker::pick(segments, 0),
            Modifier::LastWord => match count_words(segments) {
                0 => String::new(),
                n => WordPicker::pick(segments, n - 1),
            },
        }
    }
}

fn map_text<F: Fn(&str) -> String>(segments: &[Segment], f: F) -> String {
    let mut out = String::new();
    for segment in segments {
        match *segment {
            Segment::Text(text) => out.push_str(&f(text)),
            Segment::Entity(raw) | Segment::Tag(raw) => out.push_str(raw),
        }
    }
    out
}

fn trim(segments: &[Segment]) -> String {
    let mut out = String::new();
    let mut seen_content = false;
    // Where a run of whitespace began; it becomes one space once more
    // content follows
    let mut space_at = None;

    for segment in segments {
        match *segment {
            Segment::Tag(raw) => out.push_str(raw),
            Segment::Entity(raw) => {
                push_content(&mut out, &mut space_at, raw);
                seen_content = true;
            }
            Segment::Text(text) => {
                for (i, c) in text.char_indices() {
                    if !c.is_whitespace() {
                        push_content(&mut out, &mut space_at, &text[i..i + c.len_utf8()]);
                        seen_content = true;
                    } else if seen_content && space_at.is_none() {
                        space_at = Some(out.len());
                    }
                }
            }
        }
    }

    out
}

fn push_content(out: &mut String, space_at: &mut Option<usize>, content: &str) {
    if let Some(i) = space_at.take() {
        out.insert(i, ' ');
    }
    out.push_str(content);
}

fn count_words(segments: &[Segment]) -> usize {
    let mut count = 0;
    let mut in_word = false;

    for segment in segments {
        match *segment {
            Segment::Text(text) => {
                for c in text.chars() {
                    if c.is_whitespace() {
                        in_word = false;
                    } else if !in_word {
                        in_word = true;
                        count += 1;
                    }
                }
            }
            Segment::Entity(_) => {
                if !in_word {
                    in_word = true;
                    count += 1;
                }
            }
            Segment::Tag(_) => {}
        }
    }

    count
}

/// Copies out one word of rendered markup, reopening the tags that enclose
/// it and closing whatever is still open after it.
struct WordPicker<'a> {
    target: usize,
    started: usize,
    in_word: bool,
    done: bool,
    open: SmallVec<[&'a str; 4]>,
    out: String,
}

impl<'a> WordPicker<'a> {
    fn pick(segments: &[Segment<'a>], target: usize) -> String {
        let mut picker = WordPicker {
            target,
            started: 0,
            in_word: false,
            done: false,
            open: SmallVec::new(),
            out: String::new(),
        };

        for segment in segments {
            match *segment {
                Segment::Tag(raw) => picker.tag(raw),
                Segment::Entity(raw) => picker.visible(raw, false),
                Segment::Text(text) => {
                    for (i, c) in text.char_indices() {
                        picker.visible(&text[i..i + c.len_utf8()], c.is_whitespace());
                    }
                }
            }
        }

        picker.finish();
        picker.out
    }

    fn picking(&self) -> bool {
        self.in_word && !self.done && self.started == self.target + 1
    }

    fn tag(&mut self, raw: &'a str) {
        if self.picking() {
            self.out.push_str(raw);
        }
        if raw.starts_with("</") {
            self.open.pop();
        } else {
            self.open.push(raw);
        }
    }

    fn visible(&mut self, unit: &str, whitespace: bool) {
        if whitespace {
            self.finish();
            self.in_word = false;
            return;
        }

        if !self.in_word {
            self.in_word = true;
            self.started += 1;
            if self.picking() {
                for tag in &self.open {
                    self.out.push_str(tag);
                }
            }
        }

        if self.picking() {
            self.out.push_str(unit);
        }
    }

    fn finish(&mut self) {
        if self.picking() {
            for _ in &self.open {
                self.out.push_str("</span>");
            }
            self.done = true;
        }
    }
}
