//! Event stream writer.

use crate::errors::JournalError;
use crate::event::is_valid_event_structure;
use serde::Serialize;
use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

/// Maximum serialized size of one event line, newline included (16 MiB).
pub const MAX_LINE_BYTES: usize = 16 * 1024 * 1024;

/// Options for event stream writing.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Whether to fsync after each append (default: false).
    pub sync: bool,
    /// Whether to create the file if it doesn't exist (default: true).
    pub create: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            sync: false,
            create: true,
        }
    }
}

/// One lock per stream file, shared by every writer in the process.
fn path_lock(path: &Path) -> Arc<Mutex<()>> {
    static LOCKS: OnceLock<Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>> = OnceLock::new();
    let mut locks = LOCKS
        .get_or_init(Default::default)
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    locks.entry(path.to_path_buf()).or_default().clone()
}

/// Append-only writer for a JSON Lines event stream.
///
/// Each event is serialized to a single line and written with one
/// `write_all` on a file opened in append mode. Writers for the same file in
/// one process serialize through a shared lock, so concurrent appends never
/// interleave. If the previous writer crashed mid-line, the partial line is
/// terminated before the next event is written so later lines stay parseable.
///
/// The lock is per process. Across processes there is no advisory lock;
/// ordering relies on `O_APPEND`, under which each line lands whole at the
/// current end of file. Lines up to [`MAX_LINE_BYTES`] are assumed to be
/// written by a single `write` on local filesystems. Network filesystems
/// that do not honour `O_APPEND` are not supported.
///
/// # Example
///
/// ```rust
/// use semseal_journal::{EventStreamWriter, WriteOptions};
/// use serde_json::json;
///
/// let dir = tempfile::tempdir()?;
/// let writer = EventStreamWriter::open(dir.path().join("event-stream.jsonl"), WriteOptions::default())?;
/// writer.append_event(&json!({"event_type": "note", "text": "hello"}))?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct EventStreamWriter {
    path: PathBuf,
    file: File,
    lock: Arc<Mutex<()>>,
    sync: bool,
}

impl EventStreamWriter {
    /// Opens or creates an event stream for appending.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::Io`] if the file cannot be opened, or does not
    /// exist and `options.create` is `false`.
    pub fn open<P: AsRef<Path>>(path: P, options: WriteOptions) -> Result<Self, JournalError> {
        let file = OpenOptions::new()
            .create(options.create)
            .append(true)
            .read(true)
            .open(path.as_ref())?;
        let path = fs::canonicalize(path.as_ref())?;
        let lock = path_lock(&path);
        Ok(Self {
            path,
            file,
            lock,
            sync: options.sync,
        })
    }

    /// Resolved path of the stream file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one event as a JSON line.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError`] if:
    /// - The event does not serialize to an object with a string `event_type`
    /// - The line exceeds [`MAX_LINE_BYTES`]
    /// - An I/O error occurs
    pub fn append_event<T: Serialize>(&self, event: &T) -> Result<(), JournalError> {
        let value = serde_json::to_value(event)?;
        if !is_valid_event_structure(&value) {
            return Err(JournalError::NotAnEvent);
        }
        let mut line = serde_json::to_vec(&value)?;
        line.push(b'\n');
        if line.len() > MAX_LINE_BYTES {
            return Err(JournalError::PayloadTooLarge {
                size: line.len(),
                max: MAX_LINE_BYTES,
            });
        }

        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.terminate_partial_line()?;
        (&self.file).write_all(&line)?;
        (&self.file).flush()?;
        if self.sync {
            self.file.sync_data()?;
        }
        Ok(())
    }

    fn terminate_partial_line(&self) -> Result<(), JournalError> {
        let len = self.file.metadata()?.len();
        if len == 0 {
            return Ok(());
        }
        let mut last = [0u8; 1];
        (&self.file).seek(SeekFrom::Start(len - 1))?;
        (&self.file).read_exact(&mut last)?;
        if last[0] != b'\n' {
            tracing::warn!(path = %self.path.display(), "terminating partial trailing line");
            (&self.file).write_all(b"\n")?;
        }
        Ok(())
    }

    /// Flushes and, when `sync` is set, fsyncs the stream.
    pub fn finish(self) -> Result<(), JournalError> {
        (&self.file).flush()?;
        if self.sync {
            self.file.sync_all()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn writers_for_one_file_share_a_lock() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("events.jsonl");
        let a = EventStreamWriter::open(&path, WriteOptions::default()).unwrap();
        let b = EventStreamWriter::open(dir.path().join(".").join("events.jsonl"), WriteOptions::default())
            .unwrap();
        assert!(Arc::ptr_eq(&a.lock, &b.lock));
    }

    #[test]
    fn rejects_non_events() {
        let dir = TempDir::new().unwrap();
        let writer =
            EventStreamWriter::open(dir.path().join("events.jsonl"), WriteOptions::default()).unwrap();
        assert!(matches!(
            writer.append_event(&json!({"kind": "x"})),
            Err(JournalError::NotAnEvent)
        ));
        assert!(matches!(
            writer.append_event(&json!("evidence_sealed")),
            Err(JournalError::NotAnEvent)
        ));
    }

    #[test]
    fn missing_file_without_create_is_an_error() {
        let dir = TempDir::new().unwrap();
        let options = WriteOptions {
            create: false,
            ..WriteOptions::default()
        };
        assert!(matches!(
            EventStreamWriter::open(dir.path().join("absent.jsonl"), options),
            Err(JournalError::Io(_))
        ));
    }
}
