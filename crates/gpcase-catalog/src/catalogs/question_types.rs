use std::sync::LazyLock;

use crate::item::{Catalog, CatalogItem, CatalogKind};

/// Primary clinical question types for the presenting step, and the backing
/// list for the concerns collection.
pub fn catalog() -> &'static Catalog {
    static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
        let rows = [
            ("pcqt_diagnostic", "Diagnostic clarification", "Assessment"),
            ("pcqt_medication", "Medication consultation", "Treatment"),
            ("pcqt_risk", "Risk assessment", "Safety"),
            ("pcqt_treatment_planning", "Treatment planning", "Treatment"),
            ("pcqt_level_of_care", "Level of care recommendation", "Disposition"),
            ("pcqt_second_opinion", "Second opinion", "Assessment"),
            ("pcqt_capacity", "Capacity evaluation", "Assessment"),
            ("pcqt_referral", "Specialist referral", "Disposition"),
        ];
        let items = rows
            .iter()
            .map(|(id, name, category)| CatalogItem::new(id, name, category))
            .collect();
        Catalog::new(CatalogKind::ClinicalQuestionType, items)
    });
    &CATALOG
}
