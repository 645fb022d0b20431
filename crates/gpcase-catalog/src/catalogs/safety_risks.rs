use std::sync::LazyLock;

use crate::item::{Catalog, CatalogItem, CatalogKind};

pub fn catalog() -> &'static Catalog {
    static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
        let rows = [
            ("risk_firearm", "Firearm in the home", "Lethal means"),
            ("risk_medication_stockpile", "Medication stockpile", "Lethal means"),
            ("risk_sharps", "Access to sharps", "Lethal means"),
            ("risk_vehicle", "Unsupervised vehicle access", "Lethal means"),
            ("risk_domestic_violence", "Domestic violence exposure", "Environment"),
            ("risk_unstable_housing", "Unstable housing", "Environment"),
            ("risk_isolation", "Social isolation", "Environment"),
            ("risk_caregiver_strain", "Caregiver strain", "Environment"),
            ("risk_financial_crisis", "Acute financial crisis", "Stressor"),
            ("risk_recent_loss", "Recent bereavement or loss", "Stressor"),
            ("risk_legal", "Pending legal issues", "Stressor"),
        ];
        let items = rows
            .iter()
            .map(|(id, name, category)| CatalogItem::new(id, name, category))
            .collect();
        Catalog::new(CatalogKind::SafetyRisk, items)
    });
    &CATALOG
}
