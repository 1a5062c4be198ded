//! Storage backend traits for the event stream.

use crate::error::StoreError;
use semseal_journal::EventJson;

/// Append-only sink for events.
pub trait StoreWriter {
    /// Appends one event.
    fn append(&mut self, event: &EventJson) -> Result<(), StoreError>;

    /// Flushes pending writes and releases the backend.
    fn finish(self) -> Result<(), StoreError>
    where
        Self: Sized;
}

/// Sequential source of events, oldest first.
pub trait StoreReader {
    /// Reads the next event; `Ok(None)` when exhausted.
    fn read_next(&mut self) -> Result<Option<EventJson>, StoreError>;
}
