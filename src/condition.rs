/// The set of conditional operators attached to one piece.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Conditions {
    /// `+`: both neighbors non-empty
    pub both: bool,
    /// `-`: previous non-empty
    pub after_filled: bool,
    /// `~`: previous empty
    pub after_empty: bool,
    /// `^`: next empty
    pub before_empty: bool,
    /// `=`: next non-empty
    pub before_filled: bool,
    /// `|`: previous empty, and never otherwise
    pub fallback: bool,
}

impl Conditions {
    /// Records a condition operator, returning false if `c` isn't one.
    pub fn push(&mut self, c: char) -> bool {
        let flag = match c {
            '+' => &mut self.both,
            '-' => &mut self.after_filled,
            '~' => &mut self.after_empty,
            '^' => &mut self.before_empty,
            '=' => &mut self.before_filled,
            '|' => &mut self.fallback,
            _ => return false,
        };
        *flag = true;
        true
    }

    pub fn is_empty(&self) -> bool {
        *self == Conditions::default()
    }

    // Later rules can only add a keep, except `|`, which can also take one away
    fn keep(&self, last: &str, next: &str) -> bool {
        if self.is_empty() {
            return true;
        }

        let mut keep = false;
        if self.both && !last.is_empty() && !next.is_empty() {
            keep = true;
        }
        if self.after_filled && !last.is_empty() {
            keep = true;
        }
        if self.after_empty && last.is_empty() {
            keep = true;
        }
        if self.before_empty && next.is_empty() {
            keep = true;
        }
        if self.before_filled && !next.is_empty() {
            keep = true;
        }
        if self.fallback {
            keep = last.is_empty();
        }
        keep
    }
}

/// An intermediate (value, conditions) pair produced while scanning.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    pub value: String,
    pub conditions: Conditions,
}

/// Decides which pieces survive, judging each against its neighbors'
/// values (not against whether those neighbors survived), and joins the
/// survivors in order.
pub fn resolve(pieces: &[Piece]) -> String {
    let mut output = String::new();

    for (i, piece) in pieces.iter().enumerate() {
        let last = if i > 0 { pieces[i - 1].value.as_str() } else { "" };
        let next = pieces.get(i + 1).map(|p| p.value.as_str()).unwrap_or("");

        if piece.conditions.keep(last, next) {
            output.push_str(&piece.value);
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piece(value: &str, ops: &str) -> Piece {
        let mut conditions = Conditions::default();
        for c in ops.chars() {
            assert!(conditions.push(c));
        }
        Piece {
            value: value.to_string(),
            conditions,
        }
    }

    #[test]
    fn unconditional() {
        let pieces = [piece("", ""), piece(" ", ""), piece("Smith", "")];
        assert_eq!(" Smith", resolve(&pieces));
    }

    #[test]
    fn both_sides() {
        let filled = [piece("Dr", ""), piece(" ", "+"), piece("John", "")];
        assert_eq!("Dr John", resolve(&filled));

        let no_title = [piece("", ""), piece(" ", "+"), piece("John", "")];
        assert_eq!("John", resolve(&no_title));

        let no_given = [piece("Dr", ""), piece(" ", "+"), piece("", "")];
        assert_eq!("Dr", resolve(&no_given));
    }

    #[test]
    fn previous() {
        let pieces = [piece("", ""), piece(", ", "-"), piece("Smith", "")];
        assert_eq!("Smith", resolve(&pieces));

        let pieces = [piece("", ""), piece("n/a", "~")];
        assert_eq!("n/a", resolve(&pieces));

        let pieces = [piece("John", ""), piece("n/a", "~")];
        assert_eq!("John", resolve(&pieces));
    }

    #[test]
    fn next() {
        let pieces = [piece(",", "="), piece("PhD", "")];
        assert_eq!(",PhD", resolve(&pieces));

        let pieces = [piece(",", "="), piece("", "")];
        assert_eq!("", resolve(&pieces));

        let pieces = [piece("!", "^"), piece("", "")];
        assert_eq!("!", resolve(&pieces));
    }

    #[test]
    fn next_empty_or_filled() {
        // Either test passing keeps the piece
        let pieces = [piece("*", "^="), piece("x", "")];
        assert_eq!("*x", resolve(&pieces));

        let pieces = [piece("*", "^="), piece("", "")];
        assert_eq!("*", resolve(&pieces));
    }

    #[test]
    fn fallback() {
        let pieces = [piece("Jim", ""), piece("James", "|")];
        assert_eq!("Jim", resolve(&pieces));

        let pieces = [piece("", ""), piece("James", "|")];
        assert_eq!("James", resolve(&pieces));
    }

    #[test]
    fn fallback_overrides_earlier_keep() {
        let pieces = [piece("a", ""), piece("b", "+|"), piece("c", "")];
        assert_eq!("ac", resolve(&pieces));
    }

    #[test]
    fn neighbors_judged_by_value() {
        // The dropped middle piece still counts as a non-empty neighbor
        let pieces = [
            piece("", ""),
            piece("x", "-"),
            piece("y", "-"),
        ];
        assert_eq!("y", resolve(&pieces));
    }

    #[test]
    fn first_and_last_have_empty_neighbors() {
        let pieces = [piece("start", "~"), piece("end", "^")];
        assert_eq!("startend", resolve(&pieces));
        assert_eq!("", resolve(&[]));
    }

    #[test]
    fn unknown_operator() {
        assert!(!Conditions::default().push('x'));
    }
}
