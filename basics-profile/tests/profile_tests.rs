use basics_profile::{Profile, ProfileError, ProfilePatch, update_profile};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn base() -> Profile {
    Profile::new("A", 30, "a@x.com")
}

// ── Merging ──────────────────────────────────────────────────────

#[test]
fn update_single_field() {
    let updated = update_profile(&base(), &ProfilePatch::new().age(31));
    assert_eq!(updated, Profile::new("A", 31, "a@x.com"));
}

#[test]
fn update_all_fields() {
    let patch = ProfilePatch::new().name("B").age(40).email("b@y.org");
    let updated = update_profile(&base(), &patch);
    assert_eq!(updated, Profile::new("B", 40, "b@y.org"));
}

#[test]
fn empty_patch_is_identity() {
    let original = base();
    assert_eq!(update_profile(&original, &ProfilePatch::new()), original);
}

#[test]
fn base_is_not_mutated() {
    let original = base();
    let snapshot = original.clone();
    let _ = update_profile(&original, &ProfilePatch::new().name("Z").email("z@z.z"));
    assert_eq!(original, snapshot);
}

#[test]
fn with_updates_matches_free_function() {
    let patch = ProfilePatch::new().email("new@x.com");
    assert_eq!(base().with_updates(&patch), update_profile(&base(), &patch));
}

#[test]
fn patch_can_set_empty_string() {
    let updated = update_profile(&base(), &ProfilePatch::new().name(""));
    assert_eq!(updated.name, "");
    assert_eq!(updated.age, 30);
}

#[test]
fn full_patch_from_profile_replaces_everything() {
    let other = Profile::new("C", 5, "c@c.c");
    let updated = update_profile(&base(), &ProfilePatch::from(other.clone()));
    assert_eq!(updated, other);
}

// ── Patch construction ───────────────────────────────────────────

#[test]
fn new_patch_is_empty() {
    assert!(ProfilePatch::new().is_empty());
}

#[test]
fn patch_with_field_is_not_empty() {
    assert!(!ProfilePatch::new().age(1).is_empty());
}

#[test]
fn patch_from_json_partial_object() {
    let patch = ProfilePatch::from_json(r#"{"age": 31}"#).unwrap();
    assert_eq!(patch, ProfilePatch::new().age(31));
    assert_eq!(update_profile(&base(), &patch), Profile::new("A", 31, "a@x.com"));
}

#[test]
fn patch_from_empty_json_object() {
    let patch = ProfilePatch::from_json("{}").unwrap();
    assert!(patch.is_empty());
}

#[test]
fn patch_from_json_rejects_unknown_field() {
    let err = ProfilePatch::from_json(r#"{"phone": "1"}"#).unwrap_err();
    assert!(matches!(err, ProfileError::InvalidPatch(_)));
    assert!(err.to_string().contains("invalid profile patch"));
}

#[test]
fn patch_from_json_rejects_wrong_type() {
    assert!(ProfilePatch::from_json(r#"{"age": "old"}"#).is_err());
}

#[test]
fn patch_from_json_rejects_malformed_input() {
    assert!(ProfilePatch::from_json("{").is_err());
}

#[test]
fn patch_serialization_omits_absent_fields() {
    let json = serde_json::to_string(&ProfilePatch::new().age(31)).unwrap();
    assert_eq!(json, r#"{"age":31}"#);
}

#[test]
fn profile_serialization_roundtrip() {
    let json = serde_json::to_string(&base()).unwrap();
    let parsed: Profile = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, base());
}

#[test]
fn profile_requires_every_field() {
    assert!(serde_json::from_str::<Profile>(r#"{"name":"A","age":1}"#).is_err());
}

// ── Properties ───────────────────────────────────────────────────

fn profile_strategy() -> impl Strategy<Value = Profile> {
    ("[a-zA-Z ]{0,20}", any::<u32>(), "[a-z]{1,8}@[a-z]{1,8}\\.com")
        .prop_map(|(name, age, email)| Profile::new(name, age, email))
}

fn patch_strategy() -> impl Strategy<Value = ProfilePatch> {
    (
        proptest::option::of("[a-zA-Z ]{0,20}"),
        proptest::option::of(any::<u32>()),
        proptest::option::of("[a-z]{1,8}@[a-z]{1,8}\\.com"),
    )
        .prop_map(|(name, age, email)| ProfilePatch { name, age, email })
}

proptest! {
    #[test]
    fn merge_leaves_base_unchanged(p in profile_strategy(), u in patch_strategy()) {
        let snapshot = p.clone();
        let _ = update_profile(&p, &u);
        prop_assert_eq!(p, snapshot);
    }

    #[test]
    fn each_field_comes_from_patch_or_base(p in profile_strategy(), u in patch_strategy()) {
        let merged = update_profile(&p, &u);
        prop_assert_eq!(&merged.name, u.name.as_ref().unwrap_or(&p.name));
        prop_assert_eq!(merged.age, u.age.unwrap_or(p.age));
        prop_assert_eq!(&merged.email, u.email.as_ref().unwrap_or(&p.email));
    }

    #[test]
    fn empty_patch_is_identity_for_all(p in profile_strategy()) {
        prop_assert_eq!(update_profile(&p, &ProfilePatch::new()), p);
    }

    #[test]
    fn applying_same_patch_twice_is_idempotent(p in profile_strategy(), u in patch_strategy()) {
        let once = update_profile(&p, &u);
        let twice = update_profile(&once, &u);
        prop_assert_eq!(once, twice);
    }
}
