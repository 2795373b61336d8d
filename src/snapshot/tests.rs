use super::*;
use serde_json::json;

const SAMPLE_EXPORT: &str = include_str!("../../testdata/sample_export.json");

fn payload_value(container: &SegmentContainer) -> serde_json::Value {
    serde_json::from_str(container.payload.get()).unwrap()
}

// ========================================================================
// Envelope navigation
// ========================================================================

#[test]
fn test_decode_sample_export() {
    let snapshot = decode_snapshot(SAMPLE_EXPORT.as_bytes()).unwrap();

    assert_eq!(snapshot.title, "Untitled");
    assert_eq!(snapshot.author, "Joe Bloggs");
    assert_eq!(snapshot.time, 1518046576888);

    let steps = &snapshot.codelab.steps;
    assert_eq!(steps.len(), 3);
    assert_eq!(steps[0].title, "Step 1");
    assert_eq!(steps[0].duration, 6);
    assert_eq!(steps[0].segments.len(), 3);
    assert_eq!(steps[1].title, "Step 2");
    assert_eq!(steps[1].duration, 1);
    assert_eq!(steps[1].segments.len(), 2);
    assert_eq!(steps[2].title, "Step 3");
    assert_eq!(steps[2].duration, 0);
    assert!(steps[2].segments.is_empty());

    let metadata = &snapshot.codelab.metadata;
    assert_eq!(metadata.summary, "A sample codelab");
    assert_eq!(metadata.id, "sample2");
    assert_eq!(metadata.category, "Ads");
    assert_eq!(metadata.status, "Published");
    assert_eq!(metadata.environments, vec!["Web", "Kiosk"]);
}

#[test]
fn test_segment_payload_kept_raw() {
    let snapshot = decode_snapshot(SAMPLE_EXPORT.as_bytes()).unwrap();
    let first = &snapshot.codelab.steps[0].segments[0];

    assert_eq!(first.kind, "CodeSegment");
    assert_eq!(
        payload_value(first),
        json!({
            "selectedEnvironments": ["Kiosk"],
            "codeSnippet": "code 1",
            "caption": "file 1",
            "link": "link1"
        })
    );

    let image = &snapshot.codelab.steps[1].segments[1];
    assert_eq!(image.kind, "ImageSegment");
    assert_eq!(payload_value(image)["url"], "https://example.com/diagram.png");
}

#[test]
fn test_decode_no_steps() {
    let bytes = wrap_in_envelope(json!({
        "codelab": {
            "steps": [],
            "metadata": { "summary": "A sample codelab" }
        },
        "title": "Untitled",
        "author": "Joe Bloggs",
        "time": 1518046576888i64
    }));

    let snapshot = decode_snapshot(&bytes).unwrap();
    assert!(snapshot.codelab.steps.is_empty());
    assert_eq!(snapshot.codelab.metadata.summary, "A sample codelab");
}

#[test]
fn test_missing_leaf_fields_default() {
    let bytes = wrap_in_envelope(json!({
        "codelab": {
            "steps": [ { "segments": [ { "type": "CodeSegment", "segment": {} } ] } ]
        }
    }));

    let snapshot = decode_snapshot(&bytes).unwrap();
    assert_eq!(snapshot.title, "");
    assert_eq!(snapshot.author, "");
    assert_eq!(snapshot.time, 0);
    assert_eq!(snapshot.codelab.metadata, RawMetadata::default());

    let step = &snapshot.codelab.steps[0];
    assert_eq!(step.title, "");
    assert_eq!(step.duration, 0);
    assert_eq!(step.segments[0].kind, "CodeSegment");
}

#[test]
fn test_null_leaf_fields_default() {
    let bytes = wrap_in_envelope(json!({
        "codelab": {
            "steps": [
                { "segments": null, "title": null, "duration": null },
                { "segments": [ { "type": null, "segment": null } ], "title": "Null payload" }
            ],
            "metadata": null
        },
        "author": null,
        "title": null,
        "time": null
    }));

    let snapshot = decode_snapshot(&bytes).unwrap();
    assert_eq!(snapshot.title, "");
    assert_eq!(snapshot.author, "");
    assert_eq!(snapshot.time, 0);
    assert_eq!(snapshot.codelab.metadata, RawMetadata::default());

    let steps = &snapshot.codelab.steps;
    assert!(steps[0].segments.is_empty());
    assert_eq!(steps[0].title, "");
    assert_eq!(steps[0].duration, 0);
    assert_eq!(steps[1].segments[0].kind, "");
    assert_eq!(steps[1].segments[0].payload.get(), "null");
}

#[test]
fn test_null_codelab_and_metadata_fields() {
    let snapshot = decode_snapshot(&wrap_in_envelope(json!({ "codelab": null }))).unwrap();
    assert!(snapshot.codelab.steps.is_empty());

    let bytes = wrap_in_envelope(json!({
        "codelab": {
            "metadata": { "summary": null, "relativeURL": null, "environments": null, "status": "Draft" }
        }
    }));
    let metadata = decode_snapshot(&bytes).unwrap().codelab.metadata;
    assert_eq!(metadata.summary, "");
    assert_eq!(metadata.id, "");
    assert!(metadata.environments.is_empty());
    assert_eq!(metadata.status, "Draft");
}

#[test]
fn test_empty_snapshot_object() {
    let snapshot = decode_snapshot(&wrap_in_envelope(json!({}))).unwrap();
    assert!(snapshot.codelab.steps.is_empty());
}

// ========================================================================
// Structural failures
// ========================================================================

#[test]
fn test_invalid_json_fails() {
    let err = decode_snapshot(b"{ not json").unwrap_err();
    assert!(matches!(err, ParseError::Decode(_)));
}

#[test]
fn test_missing_envelope_path_fails() {
    let err = decode_snapshot(br#"{"data": {"value": {}}}"#).unwrap_err();
    assert!(matches!(err, ParseError::Decode(_)));
}

#[test]
fn test_null_snapshot_fails() {
    let err = decode_snapshot(&wrap_in_envelope(serde_json::Value::Null)).unwrap_err();
    assert!(matches!(err, ParseError::Decode(_)));
}

#[test]
fn test_wrong_shape_fails() {
    let cases = vec![
        json!({ "codelab": { "steps": {} } }),
        json!({ "codelab": { "steps": [ { "duration": "six" } ] } }),
        json!({ "title": 42 }),
        json!({ "time": "yesterday" }),
        json!({ "codelab": { "steps": [ { "segments": [ { "type": "CodeSegment" } ] } ] } }),
    ];

    for case in cases {
        let result = decode_snapshot(&wrap_in_envelope(case.clone()));
        assert!(result.is_err(), "expected failure for {}", case);
    }
}

// ========================================================================
// Timestamps
// ========================================================================

#[test]
fn test_exported_at() {
    let snapshot = decode_snapshot(SAMPLE_EXPORT.as_bytes()).unwrap();
    let exported = snapshot.exported_at().unwrap();
    assert_eq!(exported.timestamp_millis(), 1518046576888);
    assert_eq!(exported.to_rfc3339(), "2018-02-07T23:36:16.888+00:00");
}
