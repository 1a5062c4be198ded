//! Event-stream-backed implementation of the store traits.

use crate::error::StoreError;
use crate::traits::{StoreReader, StoreWriter};
use semseal_journal::{EventJson, EventStreamReader, EventStreamWriter, ReadMode, WriteOptions};
use std::path::Path;

/// Writer backed by a JSON Lines event stream.
#[derive(Debug)]
pub struct JournalBackendWriter {
    inner: EventStreamWriter,
}

impl JournalBackendWriter {
    /// Opens or creates the stream at `path`.
    pub fn open<P: AsRef<Path>>(path: P, options: WriteOptions) -> Result<Self, StoreError> {
        Ok(Self {
            inner: EventStreamWriter::open(path, options)?,
        })
    }
}

impl StoreWriter for JournalBackendWriter {
    fn append(&mut self, event: &EventJson) -> Result<(), StoreError> {
        Ok(self.inner.append_event(event)?)
    }

    fn finish(self) -> Result<(), StoreError> {
        Ok(self.inner.finish()?)
    }
}

/// Reader backed by a JSON Lines event stream.
pub struct JournalBackendReader {
    inner: EventStreamReader,
}

impl JournalBackendReader {
    /// Opens the stream at `path`.
    pub fn open<P: AsRef<Path>>(path: P, mode: ReadMode) -> Result<Self, StoreError> {
        Ok(Self {
            inner: EventStreamReader::open(path, mode)?,
        })
    }
}

impl StoreReader for JournalBackendReader {
    fn read_next(&mut self) -> Result<Option<EventJson>, StoreError> {
        Ok(self.inner.read_event()?)
    }
}
