//! The three-phase collection wizard: selection rules, the detail gate,
//! edit-mode seeding, and commit merge order.

use serde_json::json;

use gpcase_core::fields;
use gpcase_core::models::{CollectionKind, Entry};
use gpcase_wizard::collection::{remove_by_identity, CollectionWizard, Phase};
use gpcase_wizard::WizardError;

use gpcase_catalog::{builtin, for_collection, CatalogKind};

fn medication_catalog() -> gpcase_catalog::Catalog {
    builtin(CatalogKind::Medication).clone()
}

fn saved_medication(id: &str) -> Entry {
    let item = builtin(CatalogKind::Medication).by_id(id).unwrap();
    let mut entry = Entry::from_catalog(&item.id, &item.name, &item.category);
    entry.set_field(fields::MEDICATION_ACTION, json!("Continue"));
    entry
}

#[test]
fn collection_kinds_map_to_their_catalogs() {
    assert_eq!(for_collection(CollectionKind::Concerns), CatalogKind::ClinicalQuestionType);
    assert_eq!(for_collection(CollectionKind::Supports), CatalogKind::Support);
    assert_eq!(for_collection(CollectionKind::Medications), CatalogKind::Medication);
}

#[test]
fn add_mode_blocks_items_already_in_the_case() {
    let existing = vec![saved_medication("med_sertraline")];
    let mut wizard = CollectionWizard::add(CollectionKind::Medications, medication_catalog(), &existing);

    assert!(!wizard.selectable("med_sertraline"));
    assert!(wizard.selectable("med_fluoxetine"));

    let err = wizard.toggle("med_sertraline").unwrap_err();
    assert!(matches!(err, WizardError::AlreadyInCase(id) if id == "med_sertraline"));
}

#[test]
fn add_mode_requires_a_selection_to_advance() {
    let mut wizard = CollectionWizard::add(CollectionKind::Medications, medication_catalog(), &[]);
    assert!(matches!(wizard.advance(), Err(WizardError::EmptySelection)));
}

#[test]
fn toggle_flips_membership_and_rejects_unknown_ids() {
    let mut wizard = CollectionWizard::add(CollectionKind::Medications, medication_catalog(), &[]);

    assert!(wizard.toggle("med_fluoxetine").unwrap());
    assert!(!wizard.toggle("med_fluoxetine").unwrap());
    assert!(wizard.selection().is_empty());

    let err = wizard.toggle("not_a_medication").unwrap_err();
    assert!(matches!(err, WizardError::UnknownCatalogItem(_)));
}

#[test]
fn detail_gate_blocks_until_required_fields_are_filled() {
    let mut wizard = CollectionWizard::add(CollectionKind::Medications, medication_catalog(), &[]);
    wizard.toggle("med_fluoxetine").unwrap();
    assert_eq!(wizard.advance().unwrap(), Phase::Detail);

    // No action selected yet.
    let err = wizard.advance().unwrap_err();
    assert!(matches!(
        &err,
        WizardError::DraftInvalid { entry_id, path }
            if entry_id == "med_fluoxetine" && path == fields::MEDICATION_ACTION
    ));
    assert_eq!(wizard.phase(), Phase::Detail);
    assert!(!wizard.draft_issues("med_fluoxetine").is_empty());

    wizard
        .update_draft("med_fluoxetine", fields::MEDICATION_ACTION, json!("Start"))
        .unwrap();
    assert_eq!(wizard.advance().unwrap(), Phase::Review);
}

#[test]
fn dose_amount_without_a_unit_blocks_review() {
    let mut wizard = CollectionWizard::add(CollectionKind::Medications, medication_catalog(), &[]);
    wizard.toggle("med_sertraline").unwrap();
    wizard.advance().unwrap();
    wizard
        .update_draft("med_sertraline", fields::MEDICATION_ACTION, json!("Start"))
        .unwrap();
    wizard
        .update_draft("med_sertraline", fields::DOSE_AMOUNT, json!(50))
        .unwrap();

    let err = wizard.advance().unwrap_err();
    assert!(matches!(
        &err,
        WizardError::DraftInvalid { path, .. } if path == fields::DOSE_UNIT
    ));

    wizard
        .update_draft("med_sertraline", fields::DOSE_UNIT, json!("mg"))
        .unwrap();
    assert_eq!(wizard.advance().unwrap(), Phase::Review);
}

#[test]
fn edit_mode_seeds_selection_and_drafts_from_the_collection() {
    let existing = vec![saved_medication("med_sertraline"), saved_medication("med_lithium")];
    let mut wizard = CollectionWizard::edit(CollectionKind::Medications, medication_catalog(), &existing);

    assert_eq!(wizard.selection(), &["med_sertraline", "med_lithium"]);
    assert_eq!(wizard.advance().unwrap(), Phase::Detail);

    // Seeded drafts carry the saved detail fields, not blanks.
    let draft = &wizard.drafts()[0];
    assert_eq!(draft.text(fields::MEDICATION_ACTION), Some("Continue"));
}

#[test]
fn edit_mode_deselection_leaves_the_entry_in_place_on_commit() {
    let existing = vec![saved_medication("med_sertraline"), saved_medication("med_lithium")];
    let mut wizard = CollectionWizard::edit(CollectionKind::Medications, medication_catalog(), &existing);

    // Deselecting drops the draft, not the committed entry; removal is a
    // separate confirmed operation on the grid.
    wizard.toggle("med_lithium").unwrap();
    wizard.advance().unwrap();
    assert_eq!(wizard.drafts().len(), 1);
    wizard.advance().unwrap();

    let merged = wizard.commit().unwrap();
    assert_eq!(merged.len(), 2);
    assert_eq!(merged[1].identity(), "med_lithium");
}

#[test]
fn commit_keeps_existing_order_and_appends_new_entries() {
    let existing = vec![saved_medication("med_sertraline"), saved_medication("med_lithium")];
    let mut wizard = CollectionWizard::add(CollectionKind::Medications, medication_catalog(), &existing);
    wizard.toggle("med_fluoxetine").unwrap();
    wizard.advance().unwrap();
    wizard
        .update_draft("med_fluoxetine", fields::MEDICATION_ACTION, json!("Start"))
        .unwrap();
    wizard.advance().unwrap();

    let merged = wizard.commit().unwrap();
    let ids: Vec<&str> = merged.iter().map(Entry::identity).collect();
    assert_eq!(ids, ["med_sertraline", "med_lithium", "med_fluoxetine"]);
}

#[test]
fn editing_an_existing_entry_replaces_it_in_place() {
    let existing = vec![saved_medication("med_sertraline"), saved_medication("med_lithium")];
    let mut wizard = CollectionWizard::edit(CollectionKind::Medications, medication_catalog(), &existing);
    wizard.advance().unwrap();
    wizard
        .update_draft("med_sertraline", fields::MEDICATION_ACTION, json!("Discontinue"))
        .unwrap();
    wizard.advance().unwrap();

    let merged = wizard.commit().unwrap();
    assert_eq!(merged[0].identity(), "med_sertraline");
    assert_eq!(merged[0].text(fields::MEDICATION_ACTION), Some("Discontinue"));
    assert_eq!(merged[1].text(fields::MEDICATION_ACTION), Some("Continue"));
}

#[test]
fn phase_guards_reject_out_of_phase_operations() {
    let mut wizard = CollectionWizard::add(CollectionKind::Medications, medication_catalog(), &[]);

    // Detail edits are not available in the pick phase.
    let err = wizard
        .update_draft("med_sertraline", fields::MEDICATION_ACTION, json!("Start"))
        .unwrap_err();
    assert!(matches!(err, WizardError::Phase(Phase::Pick)));

    wizard.toggle("med_sertraline").unwrap();
    wizard.advance().unwrap();
    let err = wizard.toggle("med_fluoxetine").unwrap_err();
    assert!(matches!(err, WizardError::Phase(Phase::Detail)));

    // Commit requires reaching review.
    let err = wizard.commit().unwrap_err();
    assert!(matches!(err, WizardError::Phase(Phase::Detail)));
}

#[test]
fn back_walks_one_phase_and_bottoms_out_at_pick() {
    let mut wizard = CollectionWizard::add(CollectionKind::Substances, builtin(CatalogKind::Substance).clone(), &[]);
    wizard.toggle("sub_alcohol").unwrap();
    wizard.advance().unwrap();
    wizard
        .update_draft("sub_alcohol", fields::USE_FREQUENCY, json!("Daily"))
        .unwrap();
    wizard.advance().unwrap();
    assert_eq!(wizard.phase(), Phase::Review);

    wizard.back();
    assert_eq!(wizard.phase(), Phase::Detail);
    wizard.back();
    assert_eq!(wizard.phase(), Phase::Pick);
    wizard.back();
    assert_eq!(wizard.phase(), Phase::Pick);
}

#[test]
fn screener_draft_accepts_a_numeric_string_score() {
    let mut wizard = CollectionWizard::add(
        CollectionKind::Screeners,
        builtin(CatalogKind::Screener).clone(),
        &[],
    );
    wizard.toggle("scr_phq9").unwrap();
    wizard.advance().unwrap();
    wizard
        .update_draft("scr_phq9", fields::SCREENER_SCORE, json!("17"))
        .unwrap();
    assert_eq!(wizard.advance().unwrap(), Phase::Review);
}

#[test]
fn remove_by_identity_preserves_the_rest_in_order() {
    let entries = vec![
        saved_medication("med_sertraline"),
        saved_medication("med_lithium"),
        saved_medication("med_fluoxetine"),
    ];
    let remaining = remove_by_identity(&entries, "med_lithium");
    let ids: Vec<&str> = remaining.iter().map(Entry::identity).collect();
    assert_eq!(ids, ["med_sertraline", "med_fluoxetine"]);
}
