use super::condition::{resolve, Conditions, Piece};
use super::modifier::{self, Modifier, Modifiers};
use super::tokens::TokenTable;
use smallvec::SmallVec;
use std::mem;
use tracing::trace;

/// The pieces of one group (or of the whole pattern) and the modifiers and
/// conditions waiting for its next piece.
#[derive(Debug, Default)]
struct Frame {
    pieces: SmallVec<[Piece; 8]>,
    modifiers: Modifiers,
    conditions: Conditions,
}

impl Frame {
    fn push_value(&mut self, value: String) {
        let modifiers = mem::take(&mut self.modifiers);
        let conditions = mem::take(&mut self.conditions);

        self.pieces.push(Piece {
            value: modifier::apply(value, &modifiers),
            conditions,
        });
    }

    fn has_dangling_operators(&self) -> bool {
        !self.modifiers.is_empty() || !self.conditions.is_empty()
    }
}

#[derive(Debug)]
struct ScanOp<'t> {
    table: &'t TokenTable,
    current: Frame,
    // Enclosing groups, innermost last
    parents: Vec<Frame>,
}

/// Expands a pattern against a token table and resolves its conditions.
pub fn format_pattern(pattern: &str, table: &TokenTable) -> String {
    if pattern.is_empty() {
        return String::new();
    }

    let mut op = ScanOp {
        table,
        current: Frame::default(),
        parents: Vec::new(),
    };
    op.run(pattern);
    resolve(&op.current.pieces)
}

impl<'t> ScanOp<'t> {
    fn run(&mut self, pattern: &str) {
        let opens = group_opens(pattern);
        let mut rest = pattern;

        while let Some(c) = rest.chars().next() {
            let offset = pattern.len() - rest.len();
            rest = &rest[c.len_utf8()..];

            if c == '\\' {
                let mut chars = rest.chars();
                if let Some(escaped) = chars.next() {
                    rest = chars.as_str();
                    self.push_literal(escaped);
                } else {
                    trace!(pattern = %pattern, "dropping trailing escape");
                }
            } else if let Some(modifier) = Modifier::from_char(c) {
                self.current.modifiers.push(modifier);
            } else if self.current.conditions.push(c) {
                // Recorded for the next piece
            } else if c == '(' && opens.binary_search(&offset).is_ok() {
                self.parents.push(mem::take(&mut self.current));
            } else if c == ')' && !self.parents.is_empty() {
                self.close_group(pattern);
            } else if let Some(value) = self.table.get(c) {
                self.current.push_value(value.unwrap_or("").to_string());
            } else {
                if c == '(' || c == ')' {
                    trace!(pattern = %pattern, paren = %c, "unmatched parenthesis read as literal");
                }
                self.push_literal(c);
            }
        }

        while !self.parents.is_empty() {
            self.close_group(pattern);
        }

        if self.current.has_dangling_operators() {
            trace!(pattern = %pattern, "ignoring trailing modifiers or conditions");
        }
    }

    // The group's resolved text becomes one piece of the enclosing frame,
    // taking the modifiers and conditions written before its `(`
    fn close_group(&mut self, pattern: &str) {
        if let Some(parent) = self.parents.pop() {
            let group = mem::replace(&mut self.current, parent);
            if group.has_dangling_operators() {
                trace!(pattern = %pattern, "ignoring trailing modifiers or conditions");
            }
            self.current.push_value(resolve(&group.pieces));
        }
    }

    fn push_literal(&mut self, c: char) {
        let mut buf = [0; 4];
        let literal = self.table.markup().render_derived(c.encode_utf8(&mut buf));
        self.current.push_value(literal);
    }
}

/// Byte offsets of the `(`s that have a matching `)`, in ascending order.
/// Escaped parentheses never match.
fn group_opens(pattern: &str) -> Vec<usize> {
    let mut opens = Vec::new();
    let mut pending = Vec::new();
    let mut escaped = false;

    for (i, c) in pattern.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }

        match c {
            '\\' => escaped = true,
            '(' => pending.push(i),
            ')' => {
                if let Some(open) = pending.pop() {
                    opens.push(open);
                }
            }
            _ => {}
        }
    }

    opens.sort_unstable();
    opens
}
