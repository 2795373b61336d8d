//! Export envelope decoding
//!
//! The editor wraps the codelab several levels deep:
//! `data.value._snapshots.value._snapshot.json`. Only that path is
//! modelled; every other envelope field is ignored.

#[cfg(test)]
mod tests;

use crate::error::ParseError;
use crate::metadata::RawMetadata;
use crate::nullable::null_as_default;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::value::RawValue;
use std::time::Duration;

/// Decoded codelab snapshot
#[derive(Debug, Deserialize)]
pub struct Snapshot {
    #[serde(default, deserialize_with = "null_as_default")]
    pub codelab: RawCodelab,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Milliseconds since the Unix epoch
    #[serde(default, deserialize_with = "null_as_default")]
    pub time: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawCodelab {
    #[serde(default, deserialize_with = "null_as_default")]
    pub steps: Vec<RawStep>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: RawMetadata,
}

/// A step as exported, segments still undecoded
#[derive(Debug, Deserialize)]
pub struct RawStep {
    #[serde(default, deserialize_with = "null_as_default")]
    pub segments: Vec<SegmentContainer>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Minutes
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration: i64,
}

/// Type tag plus the raw payload it describes
///
/// A missing payload is an error; a `null` one decodes to the segment's
/// zero value.
#[derive(Debug, Deserialize)]
pub struct SegmentContainer {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(rename = "segment")]
    pub payload: Box<RawValue>,
}

impl SegmentContainer {
    pub fn new(kind: impl Into<String>, payload: Box<RawValue>) -> Self {
        Self {
            kind: kind.into(),
            payload,
        }
    }
}

impl RawStep {
    /// Duration as a `Duration`; negative minutes are rejected
    pub fn duration(&self) -> Result<Duration, ParseError> {
        let minutes = u64::try_from(self.duration).map_err(|_| ParseError::NegativeDuration {
            step: self.title.clone(),
            minutes: self.duration,
        })?;
        Ok(Duration::from_secs(minutes.saturating_mul(60)))
    }
}

impl Snapshot {
    /// Export time, `None` when `time` is outside chrono's range
    pub fn exported_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.time)
    }
}

#[derive(Deserialize)]
struct Envelope {
    data: RootContainer,
}

#[derive(Deserialize)]
struct RootContainer {
    value: Root,
}

#[derive(Deserialize)]
struct Root {
    #[serde(rename = "_snapshots")]
    snapshots: SnapshotsContainer,
}

#[derive(Deserialize)]
struct SnapshotsContainer {
    value: Snapshots,
}

#[derive(Deserialize)]
struct Snapshots {
    #[serde(rename = "_snapshot")]
    snapshot: SnapshotContainer,
}

#[derive(Deserialize)]
struct SnapshotContainer {
    json: Snapshot,
}

/// Extract the codelab snapshot from a complete export
pub fn decode_snapshot(bytes: &[u8]) -> Result<Snapshot, ParseError> {
    let envelope: Envelope = serde_json::from_slice(bytes)?;
    Ok(envelope.data.value.snapshots.value.snapshot.json)
}

/// Wrap a snapshot object in the editor's export envelope
#[cfg(test)]
pub(crate) fn wrap_in_envelope(snapshot: serde_json::Value) -> Vec<u8> {
    let envelope = serde_json::json!({
        "appId": "test",
        "serverRevision": 1,
        "data": {
            "id": "root",
            "type": "Map",
            "value": {
                "_snapshots": {
                    "id": "snapshots",
                    "type": "Snapshots",
                    "value": {
                        "_snapshot": { "json": snapshot }
                    }
                }
            }
        }
    });
    envelope.to_string().into_bytes()
}
