//! View API over seal events.

use crate::error::StoreError;
use crate::traits::StoreReader;
use crate::typed::{parse_event, TypedEvent};
use semseal_canonical::SemanticFingerprint;
use semseal_journal::{ReadMode, SealEvent};

/// Collects every seal of `fingerprint`, oldest first.
///
/// Re-sealing overwrites the evidence record, so this scan of the event
/// stream is the only record of earlier seals. Requires a full scan.
///
/// An `evidence_sealed` event with the wrong shape is an error in
/// [`ReadMode::Strict`] and is skipped with a warning in
/// [`ReadMode::Permissive`].
pub fn seal_history<R: StoreReader>(
    reader: &mut R,
    fingerprint: &SemanticFingerprint,
    mode: ReadMode,
) -> Result<Vec<SealEvent>, StoreError> {
    let mut seals = Vec::new();
    while let Some(event_json) = reader.read_next()? {
        let event = match (parse_event(&event_json), mode) {
            (Ok(event), _) => event,
            (Err(err), ReadMode::Strict) => return Err(err.into()),
            (Err(err), ReadMode::Permissive) => {
                tracing::warn!(error = %err, "skipping malformed seal event");
                continue;
            }
        };
        if let TypedEvent::Sealed(seal) = event {
            if seal.fingerprint == *fingerprint {
                seals.push(seal);
            }
        }
    }
    Ok(seals)
}

/// Most recent seal of `fingerprint`, if any.
pub fn latest_seal<R: StoreReader>(
    reader: &mut R,
    fingerprint: &SemanticFingerprint,
    mode: ReadMode,
) -> Result<Option<SealEvent>, StoreError> {
    Ok(seal_history(reader, fingerprint, mode)?.pop())
}
