use serde_json::json;

use gpcase_core::fields;
use gpcase_core::models::{CollectionKind, Entry, FieldMap, FormState, ScalarSlice, SlicePatch, Step};

fn basics_patch() -> FieldMap {
    let mut map = FieldMap::new();
    map.insert(fields::SUBJECT.to_string(), json!("Initial consult"));
    map.insert(fields::DESCRIPTION.to_string(), json!("Referred by GP"));
    map
}

#[test]
fn every_slice_exists_on_a_default_form() {
    let form = FormState::default();
    for slice in ScalarSlice::ALL {
        assert!(form.scalar(slice).is_empty(), "{:?} should start empty", slice);
    }
    for kind in CollectionKind::ALL {
        assert!(form.collection(kind).is_empty(), "{kind} should start empty");
    }
}

#[test]
fn partial_snapshot_hydrates_with_all_slices_defaulted() {
    // A backend snapshot carrying only two slices must still produce a form
    // where every other slice exists and is empty.
    let form: FormState = serde_json::from_value(json!({
        "basics": { "Subject": "Test" },
        "medications": [{ "id": "med_sertraline", "catalog_name": "Sertraline" }],
    }))
    .unwrap();

    assert_eq!(form.text(ScalarSlice::Basics, fields::SUBJECT), Some("Test"));
    assert_eq!(form.collection(CollectionKind::Medications).len(), 1);
    assert!(form.collection(CollectionKind::Substances).is_empty());
    assert!(form.scalar(ScalarSlice::Cognition).is_empty());
}

#[test]
fn merge_scalar_is_idempotent() {
    let mut once = FormState::default();
    once.merge_scalar(ScalarSlice::Basics, basics_patch());

    let mut twice = once.clone();
    twice.merge_scalar(ScalarSlice::Basics, basics_patch());

    assert_eq!(once, twice);
}

#[test]
fn merge_scalar_keeps_unnamed_fields() {
    let mut form = FormState::default();
    form.merge_scalar(ScalarSlice::Basics, basics_patch());

    let mut update = FieldMap::new();
    update.insert(fields::SUBJECT.to_string(), json!("Updated subject"));
    form.merge_scalar(ScalarSlice::Basics, update);

    assert_eq!(
        form.text(ScalarSlice::Basics, fields::SUBJECT),
        Some("Updated subject")
    );
    assert_eq!(
        form.text(ScalarSlice::Basics, fields::DESCRIPTION),
        Some("Referred by GP")
    );
}

#[test]
fn collections_replace_wholesale() {
    let mut form = FormState::default();
    form.set_collection(
        CollectionKind::Screeners,
        vec![Entry::from_catalog("scr_phq9", "PHQ-9", "Depression")],
    );
    form.set_collection(
        CollectionKind::Screeners,
        vec![Entry::from_catalog("scr_gad7", "GAD-7", "Anxiety")],
    );

    let screeners = form.collection(CollectionKind::Screeners);
    assert_eq!(screeners.len(), 1);
    assert_eq!(screeners[0].catalog_name, "GAD-7");
}

#[test]
fn patches_route_to_their_owning_step() {
    let scalar = SlicePatch::Scalar {
        slice: ScalarSlice::MedicalFlags,
        fields: FieldMap::new(),
    };
    assert_eq!(scalar.owning_step(), Step::PriorDx);

    let supports = SlicePatch::Collection {
        kind: CollectionKind::Supports,
        entries: vec![],
    };
    assert_eq!(supports.owning_step(), Step::HomeSafety);

    let meds = SlicePatch::Collection {
        kind: CollectionKind::Medications,
        entries: vec![],
    };
    assert_eq!(meds.owning_step(), Step::Medications);
}

#[test]
fn patches_round_trip_through_their_tagged_wire_form() {
    let scalar = SlicePatch::Scalar {
        slice: ScalarSlice::Suicide,
        fields: basics_patch(),
    };
    let wire = serde_json::to_value(&scalar).unwrap();
    assert_eq!(wire.get("type"), Some(&json!("scalar")));
    assert_eq!(wire.get("slice"), Some(&json!("suicide")));
    assert_eq!(serde_json::from_value::<SlicePatch>(wire).unwrap(), scalar);

    let collection = SlicePatch::Collection {
        kind: CollectionKind::Medications,
        entries: vec![Entry::from_catalog("med_sertraline", "Sertraline", "SSRI")],
    };
    let wire = serde_json::to_value(&collection).unwrap();
    assert_eq!(wire.get("type"), Some(&json!("collection")));
    assert_eq!(wire.get("kind"), Some(&json!("medications")));
    assert_eq!(serde_json::from_value::<SlicePatch>(wire).unwrap(), collection);
}

#[test]
fn step_numbering_is_stable() {
    assert_eq!(Step::Basics.number(), 1);
    assert_eq!(Step::Concerns.number(), 13);
    assert_eq!(Step::Review.number(), 15);
    for step in Step::ALL {
        assert_eq!(Step::from_number(step.number()), Some(step));
    }
    assert_eq!(Step::from_number(0), None);
    assert_eq!(Step::from_number(16), None);
}

#[test]
fn text_ignores_blank_and_non_string_values() {
    let mut form = FormState::default();
    form.merge_scalar(ScalarSlice::Basics, {
        let mut f = FieldMap::new();
        f.insert(fields::SUBJECT.to_string(), json!("   "));
        f.insert(fields::PRIORITY.to_string(), json!(3));
        f
    });

    assert_eq!(form.text(ScalarSlice::Basics, fields::SUBJECT), None);
    assert_eq!(form.text(ScalarSlice::Basics, fields::PRIORITY), None);
    assert_eq!(form.number(ScalarSlice::Basics, fields::PRIORITY), Some(3.0));
}

#[test]
fn entry_identity_prefers_catalog_id() {
    let fresh = Entry::from_catalog("med_sertraline", "Sertraline", "SSRI");
    assert_eq!(fresh.identity(), "med_sertraline");

    let mut persisted = fresh.clone();
    persisted.id = "a0B5e00000KxYzQ".to_string();
    assert_eq!(persisted.identity(), "med_sertraline");
    assert!(persisted.matches(&fresh));
}
