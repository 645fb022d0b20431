use std::sync::LazyLock;

use crate::item::{Catalog, CatalogItem, CatalogKind};

pub fn catalog() -> &'static Catalog {
    static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
        let rows = [
            ("sub_alcohol", "Alcohol", "Depressant"),
            ("sub_cannabis", "Cannabis", "Cannabinoid"),
            ("sub_nicotine", "Nicotine", "Stimulant"),
            ("sub_caffeine", "Caffeine", "Stimulant"),
            ("sub_cocaine", "Cocaine", "Stimulant"),
            ("sub_methamphetamine", "Methamphetamine", "Stimulant"),
            ("sub_mdma", "MDMA", "Empathogen"),
            ("sub_opioids_rx", "Prescription opioids", "Opioid"),
            ("sub_heroin", "Heroin", "Opioid"),
            ("sub_benzos_nonrx", "Non-prescribed benzodiazepines", "Depressant"),
            ("sub_hallucinogens", "Hallucinogens", "Psychedelic"),
            ("sub_inhalants", "Inhalants", "Inhalant"),
            ("sub_kratom", "Kratom", "Opioid-like"),
        ];
        let items = rows
            .iter()
            .map(|(id, name, category)| CatalogItem::new(id, name, category))
            .collect();
        Catalog::new(CatalogKind::Substance, items)
    });
    &CATALOG
}
