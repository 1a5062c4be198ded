//! Event stream reader.

use crate::errors::JournalError;
use crate::event::{is_valid_event_structure, EventJson};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read mode for handling damaged lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadMode {
    /// Strict mode: truncated or invalid lines are errors.
    Strict,
    /// Permissive mode: a truncated final line is treated as end-of-file and
    /// invalid lines are skipped with a warning.
    Permissive,
}

/// Reader over a JSON Lines event stream.
///
/// Blank lines are ignored in both modes. `\r\n` line endings are accepted.
///
/// # Example
///
/// ```rust
/// use semseal_journal::{EventStreamReader, EventStreamWriter, ReadMode, WriteOptions};
/// use serde_json::json;
///
/// let dir = tempfile::tempdir()?;
/// let path = dir.path().join("event-stream.jsonl");
/// EventStreamWriter::open(&path, WriteOptions::default())?
///     .append_event(&json!({"event_type": "note"}))?;
///
/// let mut reader = EventStreamReader::open(&path, ReadMode::Strict)?;
/// while let Some(event) = reader.read_event()? {
///     println!("{}", event["event_type"]);
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct EventStreamReader {
    reader: BufReader<File>,
    mode: ReadMode,
    line: u64,
    position: u64,
    buf: Vec<u8>,
}

enum LineError {
    Utf8,
    Invalid(String),
}

impl EventStreamReader {
    /// Opens an event stream for reading.
    pub fn open<P: AsRef<Path>>(path: P, mode: ReadMode) -> Result<Self, JournalError> {
        let file = File::open(path)?;
        Ok(Self {
            reader: BufReader::new(file),
            mode,
            line: 0,
            position: 0,
            buf: Vec::new(),
        })
    }

    /// Byte offset just past the last line consumed.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Number of lines consumed so far.
    pub fn line(&self) -> u64 {
        self.line
    }

    /// Reads the next event; `Ok(None)` at end-of-file.
    ///
    /// # Errors
    ///
    /// In [`ReadMode::Strict`], returns [`JournalError::TruncatedLine`] for a
    /// final line without a newline that does not parse, and
    /// [`JournalError::InvalidLine`] or [`JournalError::InvalidUtf8`] for a
    /// damaged complete line. I/O errors are returned in both modes.
    pub fn read_event(&mut self) -> Result<Option<EventJson>, JournalError> {
        loop {
            self.buf.clear();
            let n = self.reader.read_until(b'\n', &mut self.buf)?;
            if n == 0 {
                return Ok(None);
            }
            self.line += 1;
            self.position += n as u64;

            let terminated = self.buf.last() == Some(&b'\n');
            let mut content: &[u8] = &self.buf;
            if terminated {
                content = &content[..content.len() - 1];
                if content.last() == Some(&b'\r') {
                    content = &content[..content.len() - 1];
                }
            }
            if content.iter().all(u8::is_ascii_whitespace) {
                continue;
            }

            let err = match parse_line(content) {
                Ok(event) => return Ok(Some(event)),
                Err(err) => err,
            };
            let line = self.line;
            match (self.mode, terminated) {
                (ReadMode::Permissive, false) => {
                    tracing::warn!(line, "ignoring truncated final line");
                    return Ok(None);
                }
                (ReadMode::Permissive, true) => {
                    tracing::warn!(line, reason = %err.describe(), "skipping invalid line");
                    continue;
                }
                (ReadMode::Strict, false) => return Err(JournalError::TruncatedLine { line }),
                (ReadMode::Strict, true) => {
                    return Err(match err {
                        LineError::Utf8 => JournalError::InvalidUtf8 { line },
                        LineError::Invalid(reason) => JournalError::InvalidLine { line, reason },
                    })
                }
            }
        }
    }

    /// Reads the next event and deserializes it into `T`.
    pub fn read_as<T: DeserializeOwned>(&mut self) -> Result<Option<T>, JournalError> {
        match self.read_event()? {
            Some(event) => Ok(Some(serde_json::from_value(event)?)),
            None => Ok(None),
        }
    }

    /// Reads every remaining event.
    pub fn read_all(&mut self) -> Result<Vec<EventJson>, JournalError> {
        let mut events = Vec::new();
        while let Some(event) = self.read_event()? {
            events.push(event);
        }
        Ok(events)
    }
}

impl Iterator for EventStreamReader {
    type Item = Result<EventJson, JournalError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_event().transpose()
    }
}

impl LineError {
    fn describe(&self) -> String {
        match self {
            LineError::Utf8 => "invalid UTF-8".to_string(),
            LineError::Invalid(reason) => reason.clone(),
        }
    }
}

fn parse_line(content: &[u8]) -> Result<EventJson, LineError> {
    let text = std::str::from_utf8(content).map_err(|_| LineError::Utf8)?;
    let event: EventJson =
        serde_json::from_str(text).map_err(|err| LineError::Invalid(err.to_string()))?;
    if !is_valid_event_structure(&event) {
        return Err(LineError::Invalid(
            "expected an object with a string event_type".to_string(),
        ));
    }
    Ok(event)
}
