use semseal_canonical::{EvidenceId, Language, SemanticFingerprint, Timestamp};
use semseal_journal::{
    EventJson, EventStreamReader, EventStreamWriter, ReadMode, SealEvent, WriteOptions,
};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

fn seal_event(id: &str) -> SealEvent {
    SealEvent::new(
        EvidenceId::parse(id).unwrap(),
        SemanticFingerprint::parse(&format!("sha256:{}", "1f".repeat(32))).unwrap(),
        vec![Language::En, Language::Ko],
        Timestamp::parse("2026-03-04T05:06:07.123456Z").unwrap(),
    )
}

#[test]
fn test_write_read_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("event-stream.jsonl");

    {
        let writer = EventStreamWriter::open(&path, WriteOptions::default()).unwrap();
        writer.append_event(&seal_event("ev-1")).unwrap();
        writer.append_event(&seal_event("ev-2")).unwrap();
        writer.finish().unwrap();
    }

    let mut reader = EventStreamReader::open(&path, ReadMode::Strict).unwrap();
    assert_eq!(reader.read_as::<SealEvent>().unwrap(), Some(seal_event("ev-1")));
    assert_eq!(reader.read_as::<SealEvent>().unwrap(), Some(seal_event("ev-2")));
    assert_eq!(reader.read_as::<SealEvent>().unwrap(), None);
}

#[test]
fn test_one_object_per_line() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("event-stream.jsonl");
    let writer = EventStreamWriter::open(&path, WriteOptions::default()).unwrap();
    writer
        .append_event(&json!({"event_type": "note", "text": "line\nbreak"}))
        .unwrap();
    writer.append_event(&seal_event("ev-1")).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(content.ends_with('\n'));
    for line in lines {
        let value: EventJson = serde_json::from_str(line).unwrap();
        assert!(value.is_object());
    }
}

#[test]
fn test_reopen_appends() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("event-stream.jsonl");

    for id in ["ev-1", "ev-2", "ev-3"] {
        let writer = EventStreamWriter::open(&path, WriteOptions::default()).unwrap();
        writer.append_event(&seal_event(id)).unwrap();
    }

    let events: Vec<SealEvent> = EventStreamReader::open(&path, ReadMode::Strict)
        .unwrap()
        .map(|event| SealEvent::from_event(&event.unwrap()).unwrap())
        .collect();
    let ids: Vec<&str> = events.iter().map(|e| e.evidence_id.as_str()).collect();
    assert_eq!(ids, ["ev-1", "ev-2", "ev-3"]);
}

#[test]
fn test_empty_stream() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("event-stream.jsonl");
    EventStreamWriter::open(&path, WriteOptions::default()).unwrap();

    let mut reader = EventStreamReader::open(&path, ReadMode::Strict).unwrap();
    assert!(reader.read_event().unwrap().is_none());
    assert_eq!(reader.position(), 0);
}

#[test]
fn test_sync_option() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("event-stream.jsonl");
    let options = WriteOptions {
        sync: true,
        create: true,
    };
    let writer = EventStreamWriter::open(&path, options).unwrap();
    writer.append_event(&seal_event("ev-1")).unwrap();
    writer.finish().unwrap();

    let mut reader = EventStreamReader::open(&path, ReadMode::Strict).unwrap();
    assert_eq!(reader.read_all().unwrap().len(), 1);
}
