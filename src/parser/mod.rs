//! Input line parser.
//!
//! Each input line carries one message. Plain text is taken verbatim, but
//! JSON lets producers send messages with embedded newlines:
//! - a JSON string literal: `"first\nsecond"`
//! - a JSON object with a string `message` (or `msg`) field:
//!   `{"level":"info","message":"first\nsecond"}`
//!
//! When an object carries both fields, `message` wins. An object with
//! neither is taken verbatim.

use serde::Deserialize;

/// JSON shapes accepted as a message.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawMessage {
    Text(String),
    Object {
        message: Option<String>,
        msg: Option<String>,
    },
}

/// Extract the message carried by one input line.
///
/// Never fails: anything that is not one of the recognised JSON shapes is
/// returned unchanged.
pub fn parse_message(line: &str) -> String {
    let trimmed = line.trim_start();
    if !(trimmed.starts_with('"') || trimmed.starts_with('{')) {
        return line.to_string();
    }

    match serde_json::from_str::<RawMessage>(line) {
        Ok(RawMessage::Text(text)) => text,
        Ok(RawMessage::Object { message, msg }) => {
            message.or(msg).unwrap_or_else(|| line.to_string())
        }
        Err(_) => line.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_verbatim() {
        assert_eq!(parse_message("It's super effective!"), "It's super effective!");
    }

    #[test]
    fn empty_line_is_empty_message() {
        assert_eq!(parse_message(""), "");
    }

    #[test]
    fn json_string_is_decoded() {
        assert_eq!(parse_message(r#""short1\nshort2""#), "short1\nshort2");
    }

    #[test]
    fn json_object_message_field_is_extracted() {
        let line = r#"{"level":"info","message":"Foe fainted!\nYou gained 120 EXP."}"#;
        assert_eq!(parse_message(line), "Foe fainted!\nYou gained 120 EXP.");
    }

    #[test]
    fn json_object_msg_alias_is_accepted() {
        assert_eq!(parse_message(r#"{"msg":"hi"}"#), "hi");
    }

    #[test]
    fn json_object_with_message_and_msg_prefers_message() {
        let line = r#"{"message":"Go, Pikachu!","msg":"ignored"}"#;
        assert_eq!(parse_message(line), "Go, Pikachu!");
    }

    #[test]
    fn json_object_null_message_falls_back_to_msg() {
        assert_eq!(parse_message(r#"{"message":null,"msg":"hi"}"#), "hi");
    }

    #[test]
    fn json_object_without_message_is_verbatim() {
        let line = r#"{"level":"info"}"#;
        assert_eq!(parse_message(line), line);
    }

    #[test]
    fn malformed_json_is_verbatim() {
        let line = r#"{"message": "unterminated"#;
        assert_eq!(parse_message(line), line);
    }

    #[test]
    fn non_string_message_field_is_verbatim() {
        let line = r#"{"message": 42}"#;
        assert_eq!(parse_message(line), line);
    }
}
