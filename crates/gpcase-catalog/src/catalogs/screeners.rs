use std::sync::LazyLock;

use crate::item::{Catalog, CatalogItem, CatalogKind};

/// Standard self-report and clinician-administered screening instruments.
pub fn catalog() -> &'static Catalog {
    static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
        let rows = [
            ("scr_phq9", "PHQ-9", "Depression"),
            ("scr_gad7", "GAD-7", "Anxiety"),
            ("scr_pcl5", "PCL-5", "Trauma"),
            ("scr_audit", "AUDIT", "Alcohol use"),
            ("scr_dast10", "DAST-10", "Drug use"),
            ("scr_asrs", "ASRS v1.1", "ADHD"),
            ("scr_mdq", "MDQ", "Bipolar"),
            ("scr_cssrs", "C-SSRS", "Suicide risk"),
            ("scr_ace", "ACE Questionnaire", "Trauma"),
            ("scr_moca", "MoCA", "Cognition"),
            ("scr_ybocs", "Y-BOCS", "OCD"),
        ];
        let items = rows
            .iter()
            .map(|(id, name, category)| CatalogItem::new(id, name, category))
            .collect();
        Catalog::new(CatalogKind::Screener, items)
    });
    &CATALOG
}
