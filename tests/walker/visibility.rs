//! Release tag filtering and walk error tests.

use apiref_foundation::{ErrorKind, ReleaseTag};
use apiref_model::ApiModel;
use apiref_walker::{WalkConfig, Walker, walk};

use crate::fixture::{example_model, example_records, ids};

#[test]
fn public_walk_skips_internal_and_beta_subtrees() {
    let model = example_model();
    let mut emitted = Vec::new();
    let stats = walk(model.root(), ReleaseTag::Public, |r| emitted.push(r.id)).unwrap();

    assert_eq!(stats.skipped, 2);
    assert_eq!(stats.records, emitted.len());
    assert!(!emitted.iter().any(|id| id.contains("myinternalmethod")));
    assert!(!emitted.iter().any(|id| id.contains("mybetaclass")));
}

#[test]
fn skipped_container_hides_its_public_members() {
    let records = example_records(WalkConfig::public());
    assert!(!ids(&records).iter().any(|id| id.contains("preview")));
}

#[test]
fn beta_minimum_keeps_beta_and_drops_internal() {
    let records = example_records(WalkConfig::default().with_minimum_release_tag(ReleaseTag::Beta));
    let ids = ids(&records);
    assert!(ids.contains(&"(mybetaclass:class)"));
    assert!(ids.contains(&"(mybetaclass:class).(preview:instance)"));
    assert!(ids.contains(&"(mybetaclass:class).(preview:instance).(flag:parameter)"));
    assert!(!ids.iter().any(|id| id.contains("myinternalmethod")));

    let beta = records.iter().find(|r| r.id == "(mybetaclass:class)").unwrap();
    assert_eq!(beta.release_tag, ReleaseTag::Beta);
    assert_eq!(beta.visibility, "beta");
}

#[test]
fn walking_everything_includes_internal_members() {
    let records = example_records(WalkConfig::all());
    let internal = records
        .iter()
        .find(|r| r.id == "(myclass:class).(myinternalmethod:instance,1)")
        .unwrap();
    assert_eq!(internal.release_tag, ReleaseTag::Internal);
    assert_eq!(internal.visibility, "internal");

    let param = records
        .iter()
        .find(|r| r.id == "(myclass:class).(myinternalmethod:instance,1).(secret:parameter)")
        .unwrap();
    assert_eq!(param.release_tag, ReleaseTag::Internal);
}

#[test]
fn stricter_minimums_never_add_records() {
    let mut previous = usize::MAX;
    for tag in ReleaseTag::ALL {
        let count = example_records(WalkConfig::default().with_minimum_release_tag(tag)).len();
        assert!(count <= previous, "{tag} produced more records than a looser minimum");
        previous = count;
    }
}

#[test]
fn walking_a_structural_root_is_the_same_as_walking_its_members() {
    let model = example_model();
    let walker = Walker::new(WalkConfig::public());
    let from_root = walker.collect(model.root()).unwrap();
    let from_entry = walker
        .collect(model.root().members().next().unwrap())
        .unwrap();
    assert_eq!(from_root, from_entry);
}

#[test]
fn unknown_kinds_abort_the_load() {
    let err = ApiModel::from_json_str(
        r#"{ "kind": "Package", "members": [{ "kind": "Decorator", "name": "x" }] }"#,
    )
    .unwrap_err();
    assert!(err.is_unsupported_kind());
}

#[test]
fn malformed_json_is_a_deserialize_error() {
    let err = ApiModel::from_json_str(r#"{ "kind": "Package", "members": 3 }"#).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Deserialize(_)));
}

#[test]
fn orphan_constructor_is_a_walk_error() {
    let model = ApiModel::from_json_str(r#"{ "kind": "Constructor", "name": "" }"#).unwrap();
    let err = Walker::new(WalkConfig::public())
        .collect(model.root())
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MissingOwner { .. }));
}
