//! File-based message source (read once).

use super::decode_line;
use crate::model::error::InputError;
use std::fs;
use std::path::Path;

/// Reads a whole message file at construction and hands its lines out once.
#[derive(Debug)]
pub struct FileSource {
    /// Lines not yet drained; `None` after the first drain
    pending: Option<Vec<String>>,
}

impl FileSource {
    /// Load all lines of `path`.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD; the rest of
    /// the line and the file are kept.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the file does not exist.
    /// Returns `InputError::Io` for other I/O errors.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(InputError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let contents = fs::read(path)?;
        let lines = contents
            .split_inclusive(|&byte| byte == b'\n')
            .map(decode_line)
            .collect::<Vec<_>>();

        Ok(Self {
            pending: Some(lines),
        })
    }

    /// All lines on the first call, nothing afterwards.
    pub fn drain_lines(&mut self) -> Vec<String> {
        self.pending.take().unwrap_or_default()
    }
}
