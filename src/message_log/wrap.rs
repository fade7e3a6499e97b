//! Line wrapping for incoming messages.
//!
//! A message is split on `\n` into parts, then each part becomes display
//! lines:
//! - parts longer than the line limit are greedily word-wrapped on single
//!   spaces;
//! - two adjacent short parts whose combined length is below the limit are
//!   merged into one line, separated by a space;
//! - anything else is emitted as-is.
//!
//! Words are never broken. A word longer than the limit ends up alone on an
//! over-long line.

use crate::model::DisplayLine;
use std::mem;

/// Convert one raw message into display lines, in order.
///
/// Lengths are counted in characters. Any input is accepted; an empty
/// message yields a single empty line.
pub fn wrap(message: &str, line_max_len: usize) -> Vec<DisplayLine> {
    let parts: Vec<&str> = message.split('\n').collect();
    let mut lines = Vec::with_capacity(parts.len());

    let mut i = 0;
    while i < parts.len() {
        let part = parts[i];
        let part_len = char_len(part);

        if part_len > line_max_len {
            word_wrap(part, line_max_len, &mut lines);
            i += 1;
        } else if let Some(next) = parts
            .get(i + 1)
            .filter(|next| part_len + char_len(next) < line_max_len)
        {
            lines.push(DisplayLine::new(format!("{part} {next}")));
            i += 2;
        } else {
            lines.push(DisplayLine::new(part));
            i += 1;
        }
    }

    lines
}

/// Greedy word wrap of a single newline-free part.
///
/// Always emits at least one line (the trailing accumulator).
fn word_wrap(part: &str, line_max_len: usize, out: &mut Vec<DisplayLine>) {
    let mut line = String::new();
    let mut line_len = 0;

    for word in part.split(' ') {
        let word_len = char_len(word);
        if line.is_empty() {
            line.push_str(word);
            line_len = word_len;
        } else if line_len + 1 + word_len > line_max_len {
            out.push(DisplayLine::new(mem::take(&mut line)));
            line.push_str(word);
            line_len = word_len;
        } else {
            line.push(' ');
            line.push_str(word);
            line_len += 1 + word_len;
        }
    }

    out.push(DisplayLine::new(line));
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}
