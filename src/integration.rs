//! Pure core integration functions.
//!
//! Glue between raw input lines and the message log, used by the main event
//! loop. Testable without any I/O.

use crate::message_log::MessageLog;
use crate::parser;

/// Parse each raw input line into a message and append it to `log`.
///
/// Returns the number of messages appended (one per input line).
pub fn ingest_lines(log: &mut MessageLog, lines: Vec<String>) -> usize {
    let count = lines.len();
    for line in lines {
        log.append(&parser::parse_message(&line));
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ingest_returns_line_count() {
        let mut log = MessageLog::default();
        let appended = ingest_lines(&mut log, vec!["a".into(), "b".into(), "c".into()]);
        assert_eq!(appended, 3);
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn ingest_empty_input_is_noop() {
        let mut log = MessageLog::default();
        assert_eq!(ingest_lines(&mut log, Vec::new()), 0);
        assert!(log.is_empty());
    }

    #[test]
    fn json_lines_with_newlines_are_wrapped_and_merged() {
        let mut log = MessageLog::default();
        ingest_lines(&mut log, vec![r#""short1\nshort2""#.to_string()]);
        assert_eq!(log.snapshot(), vec!["short1 short2"]);
    }

    #[test]
    fn plain_lines_do_not_merge_across_messages() {
        let mut log = MessageLog::default();
        ingest_lines(&mut log, vec!["short1".into(), "short2".into()]);
        assert_eq!(log.snapshot(), vec!["short1", "short2"]);
    }
}
