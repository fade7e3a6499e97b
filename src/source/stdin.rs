//! Stdin-based message source for piped input.
//!
//! A background thread reads lines and sends them over a channel; the UI
//! loop drains the channel without blocking. Only the UI thread ever
//! touches the message log.

use super::decode_line;
use crate::model::error::InputError;
use std::io::{self, BufRead, BufReader, IsTerminal, Read};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use tracing::{debug, warn};

/// Stdin source for piped input.
///
/// Supports both streaming mode (`producer | msglog`) and complete mode
/// (EOF reached, e.g. `cat messages.log | msglog`).
#[derive(Debug)]
pub struct StdinSource {
    receiver: Receiver<io::Result<String>>,
    complete: bool,
    /// Read failure held back until the lines before it are handed out
    pending_error: Option<io::Error>,
}

impl StdinSource {
    /// Create a new StdinSource reading from the process's stdin.
    ///
    /// # Errors
    ///
    /// Returns `InputError::NoInput` if stdin is a TTY, so the viewer does
    /// not sit waiting for the user to type messages.
    pub fn new() -> Result<Self, InputError> {
        if io::stdin().is_terminal() {
            return Err(InputError::NoInput);
        }
        Ok(Self::from_reader(io::stdin()))
    }

    /// Create a StdinSource over any reader.
    pub fn from_reader<R>(reader: R) -> Self
    where
        R: Read + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel();

        thread::spawn(move || {
            let mut reader = BufReader::new(reader);
            let mut raw = Vec::new();
            loop {
                raw.clear();
                match reader.read_until(b'\n', &mut raw) {
                    Ok(0) => break,
                    Ok(_) => {
                        if sender.send(Ok(decode_line(&raw))).is_err() {
                            break;
                        }
                    }
                    Err(err) => {
                        warn!(error = %err, "Input reader failed");
                        let _ = sender.send(Err(err));
                        break;
                    }
                }
            }
            debug!("Input reader finished");
        });

        Self {
            receiver,
            complete: false,
            pending_error: None,
        }
    }

    /// Take every line that has arrived since the last poll.
    ///
    /// Non-blocking. Sets the `complete` flag once the reader has hit EOF
    /// and every line has been handed out.
    ///
    /// Invalid UTF-8 is not an error: the reader replaces bad bytes with
    /// U+FFFD and keeps going.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` if reading failed. Lines received before
    /// the failure are returned first; the error comes on the next poll.
    pub fn poll(&mut self) -> Result<Vec<String>, InputError> {
        if let Some(err) = self.pending_error.take() {
            return Err(InputError::Io(err));
        }

        let mut lines = Vec::new();
        if self.complete {
            return Ok(lines);
        }

        loop {
            match self.receiver.try_recv() {
                Ok(Ok(line)) => lines.push(line),
                Ok(Err(err)) => {
                    self.complete = true;
                    if lines.is_empty() {
                        return Err(InputError::Io(err));
                    }
                    self.pending_error = Some(err);
                    break;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.complete = true;
                    break;
                }
            }
        }

        Ok(lines)
    }

    /// Check if EOF has been reached (no more data will arrive).
    pub fn is_complete(&self) -> bool {
        self.complete
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    /// Poll until the reader thread is done, collecting everything.
    fn drain(source: &mut StdinSource) -> Result<Vec<String>, InputError> {
        let deadline = Instant::now() + Duration::from_secs(5);
        let mut all = Vec::new();
        while !source.is_complete() {
            all.extend(source.poll()?);
            assert!(Instant::now() < deadline, "reader thread did not finish");
            thread::sleep(Duration::from_millis(5));
        }
        Ok(all)
    }

    #[test]
    fn yields_lines_in_order() {
        let mut source = StdinSource::from_reader(&b"line1\nline2\nline3\n"[..]);
        assert_eq!(drain(&mut source).unwrap(), vec!["line1", "line2", "line3"]);
    }

    #[test]
    fn strips_newlines() {
        let mut source = StdinSource::from_reader(&b"with newline\r\n"[..]);
        let lines = drain(&mut source).unwrap();
        assert_eq!(lines, vec!["with newline"]);
    }

    #[test]
    fn keeps_final_partial_line() {
        let mut source = StdinSource::from_reader(&b"done\npartial"[..]);
        assert_eq!(drain(&mut source).unwrap(), vec!["done", "partial"]);
    }

    #[test]
    fn empty_input_completes() {
        let mut source = StdinSource::from_reader(&b""[..]);
        assert!(drain(&mut source).unwrap().is_empty());
        assert!(source.is_complete());
    }

    #[test]
    fn poll_after_complete_is_empty() {
        let mut source = StdinSource::from_reader(&b"x\n"[..]);
        drain(&mut source).unwrap();
        assert!(source.poll().unwrap().is_empty());
    }

    #[test]
    fn invalid_utf8_is_replaced_not_rejected() {
        let mut source =
            StdinSource::from_reader(&b"good one\ngood two\n\xff bad\nafter\n"[..]);
        assert_eq!(
            drain(&mut source).unwrap(),
            vec!["good one", "good two", "\u{FFFD} bad", "after"]
        );
    }

    /// Yields `data` on the first read, then fails.
    struct FailAfter {
        data: Option<&'static [u8]>,
    }

    impl Read for FailAfter {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.data.take() {
                Some(data) => {
                    let n = data.len().min(buf.len());
                    buf[..n].copy_from_slice(&data[..n]);
                    Ok(n)
                }
                None => Err(io::Error::other("device went away")),
            }
        }
    }

    #[test]
    fn read_error_comes_after_earlier_lines() {
        let mut source = StdinSource::from_reader(FailAfter {
            data: Some(&b"first\nsecond\n"[..]),
        });

        let deadline = Instant::now() + Duration::from_secs(5);
        let mut lines = Vec::new();
        let error = loop {
            match source.poll() {
                Ok(batch) => lines.extend(batch),
                Err(err) => break err,
            }
            assert!(Instant::now() < deadline, "read error never surfaced");
            thread::sleep(Duration::from_millis(5));
        };

        assert_eq!(lines, vec!["first", "second"]);
        assert!(matches!(error, InputError::Io(_)));
        assert!(source.is_complete());
        assert!(source.poll().unwrap().is_empty());
    }
}
