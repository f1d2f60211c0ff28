//! Snapshot tests.

use apiref_foundation::ErrorKind;
use apiref_index::{ModelIndex, snapshot};

use crate::fixture::{example_index, example_records};
use apiref_walker::WalkConfig;

#[test]
fn restored_index_resolves_like_the_original() {
    let index = example_index();
    let bytes = snapshot::to_bytes(&index).unwrap();
    let restored = snapshot::from_bytes(&bytes).unwrap();

    assert_eq!(restored.len(), index.len());
    assert!(restored.iter().eq(index.iter()));
    for query in ["myFunction", "MyClass.myMethod()", "(myFunction:function)", "MyExtendedEnum"] {
        assert_eq!(
            restored.resolve(query, None).map(|r| r.id.as_str()),
            index.resolve(query, None).map(|r| r.id.as_str()),
            "query {query}"
        );
    }
}

#[test]
fn records_round_trip_through_serde_json() {
    let records = example_records(WalkConfig::public());
    let json = serde_json::to_string(&records).unwrap();
    assert!(json.contains("\"parentId\""));
    let back: Vec<apiref_walker::RawRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, records);
}

#[test]
fn snapshot_with_repeated_ids_is_rejected() {
    let mut records = example_records(WalkConfig::public());
    records.push(records[0].clone());
    let index = ModelIndex::from_records(records.clone());
    assert_eq!(index.len(), records.len() - 1);

    let err = ModelIndex::try_from_records(records).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DuplicateId(ref id) if id == "(myclass:class)"));
}

#[test]
fn truncated_bytes_fail_to_decode() {
    let bytes = snapshot::to_bytes(&example_index()).unwrap();
    let err = snapshot::from_bytes(&bytes[..bytes.len() / 2]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Serialization(_)));
}
