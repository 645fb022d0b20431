use gpcase_catalog::{builtin, for_collection, CatalogKind};
use gpcase_core::models::CollectionKind;

#[test]
fn every_builtin_catalog_is_populated() {
    for kind in [
        CatalogKind::Medication,
        CatalogKind::Substance,
        CatalogKind::Screener,
        CatalogKind::SafetyRisk,
        CatalogKind::Support,
        CatalogKind::ClinicalQuestionType,
    ] {
        let catalog = builtin(kind);
        assert!(!catalog.is_empty(), "{kind} catalog is empty");
        for item in catalog.items() {
            assert!(!item.id.is_empty());
            assert!(!item.name.is_empty());
            assert!(!item.category.is_empty());
        }
    }
}

#[test]
fn ids_are_unique_within_a_catalog() {
    for kind in [CatalogKind::Medication, CatalogKind::Screener, CatalogKind::SafetyRisk] {
        let catalog = builtin(kind);
        let mut ids: Vec<_> = catalog.items().iter().map(|i| i.id.as_str()).collect();
        let before = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), before, "duplicate ids in {kind} catalog");
    }
}

#[test]
fn reverse_lookup_resolves_every_display_name() {
    let catalog = builtin(CatalogKind::Medication);
    for item in catalog.items() {
        assert_eq!(catalog.id_for_name(&item.name), Some(item.id.as_str()));
    }
}

#[test]
fn reverse_lookup_is_case_insensitive() {
    let catalog = builtin(CatalogKind::Screener);
    assert_eq!(catalog.id_for_name("phq-9"), Some("scr_phq9"));
    assert_eq!(catalog.id_for_name("  PHQ-9 "), Some("scr_phq9"));
    assert_eq!(catalog.id_for_name("not a screener"), None);
}

#[test]
fn lookup_by_id_round_trips() {
    let catalog = builtin(CatalogKind::Substance);
    let item = catalog.by_id("sub_alcohol").expect("alcohol is built in");
    assert_eq!(item.name, "Alcohol");
    assert_eq!(catalog.name_for_id("sub_alcohol"), Some("Alcohol"));
    assert_eq!(catalog.name_for_id("sub_unknown"), None);
}

#[test]
fn every_collection_maps_to_a_catalog() {
    for kind in CollectionKind::ALL {
        let catalog = builtin(for_collection(kind));
        assert!(!catalog.is_empty());
    }
}
