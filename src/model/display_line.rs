//! A single wrapped row of the message log.

use std::fmt;

/// One line of text as shown in the message log viewer.
///
/// Produced only by the line wrapper. A display line is at most
/// `LogLimits::line_max_len` characters long, except when a single
/// space-free word is itself longer than that limit: such a word is
/// kept whole on its own line rather than being broken.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DisplayLine(String);

impl DisplayLine {
    /// Wrap already-laid-out text. Crate-internal: callers go through `wrap`.
    pub(crate) fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The text of this line.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters, the unit line limits are measured in.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    /// True for a blank row.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for DisplayLine {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for DisplayLine {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
