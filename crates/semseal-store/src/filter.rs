//! Event filtering API for selective event iteration.

use crate::traits::StoreReader;
use crate::EventJson;
use chrono::{DateTime, Utc};
use semseal_canonical::{Language, SemanticFingerprint, Timestamp};

/// Trait for filtering events during iteration.
pub trait EventFilter {
    /// Returns true if the event matches the filter criteria.
    fn matches(&self, event: &EventJson) -> bool;
}

/// Filter by event type.
#[derive(Debug, Clone)]
pub struct EventTypeFilter {
    /// Event type to match (e.g., "evidence_sealed").
    pub event_type: String,
}

impl EventFilter for EventTypeFilter {
    fn matches(&self, event: &EventJson) -> bool {
        semseal_journal::event_type(event) == Some(self.event_type.as_str())
    }
}

/// Filter by sealed fingerprint.
#[derive(Debug, Clone)]
pub struct FingerprintFilter {
    /// Fingerprint to match.
    pub fingerprint: SemanticFingerprint,
}

impl EventFilter for FingerprintFilter {
    fn matches(&self, event: &EventJson) -> bool {
        event
            .get("fingerprint")
            .and_then(|v| v.as_str())
            .and_then(|s| SemanticFingerprint::parse(s).ok())
            .is_some_and(|fp| fp == self.fingerprint)
    }
}

/// Filter by a language among the sealed expressions.
#[derive(Debug, Clone)]
pub struct LanguageFilter {
    /// Language that must be present.
    pub language: Language,
}

impl EventFilter for LanguageFilter {
    fn matches(&self, event: &EventJson) -> bool {
        event
            .get("languages")
            .and_then(|v| v.as_array())
            .is_some_and(|langs| {
                langs
                    .iter()
                    .filter_map(|l| l.as_str())
                    .any(|l| l == self.language.tag())
            })
    }
}

/// Filter by time range over `sealed_at`.
#[derive(Debug, Clone)]
pub struct TimeRangeFilter {
    /// Include events at or after this timestamp.
    pub after: Option<Timestamp>,
    /// Include events at or before this timestamp.
    pub before: Option<Timestamp>,
}

fn instant(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

impl EventFilter for TimeRangeFilter {
    fn matches(&self, event: &EventJson) -> bool {
        let Some(sealed_at) = event
            .get("sealed_at")
            .and_then(|v| v.as_str())
            .and_then(instant)
        else {
            return false;
        };

        if let Some(after) = self.after.as_ref().and_then(|t| instant(t.as_str())) {
            if sealed_at < after {
                return false;
            }
        }
        if let Some(before) = self.before.as_ref().and_then(|t| instant(t.as_str())) {
            if sealed_at > before {
                return false;
            }
        }
        true
    }
}

/// Composite filter: all filters must match (AND).
pub struct AndFilter {
    /// Filters to combine with AND logic.
    pub filters: Vec<Box<dyn EventFilter>>,
}

impl EventFilter for AndFilter {
    fn matches(&self, event: &EventJson) -> bool {
        self.filters.iter().all(|f| f.matches(event))
    }
}

/// Composite filter: any filter must match (OR).
pub struct OrFilter {
    /// Filters to combine with OR logic.
    pub filters: Vec<Box<dyn EventFilter>>,
}

impl EventFilter for OrFilter {
    fn matches(&self, event: &EventJson) -> bool {
        self.filters.iter().any(|f| f.matches(event))
    }
}

/// Reader that filters events from an underlying reader.
pub struct FilteredReader<R: StoreReader, F: EventFilter> {
    reader: R,
    filter: F,
}

impl<R: StoreReader, F: EventFilter> FilteredReader<R, F> {
    /// Creates a new filtered reader.
    pub fn new(reader: R, filter: F) -> Self {
        Self { reader, filter }
    }
}

impl<R: StoreReader, F: EventFilter> StoreReader for FilteredReader<R, F> {
    fn read_next(&mut self) -> Result<Option<EventJson>, crate::error::StoreError> {
        loop {
            match self.reader.read_next()? {
                None => return Ok(None),
                Some(event) if self.filter.matches(&event) => return Ok(Some(event)),
                Some(_) => continue,
            }
        }
    }
}
