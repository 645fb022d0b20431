use std::sync::LazyLock;

use crate::item::{Catalog, CatalogItem, CatalogKind};

/// Common psychotropic medications, grouped by drug class.
pub fn catalog() -> &'static Catalog {
    static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
        let rows = [
            ("med_sertraline", "Sertraline", "SSRI"),
            ("med_fluoxetine", "Fluoxetine", "SSRI"),
            ("med_escitalopram", "Escitalopram", "SSRI"),
            ("med_paroxetine", "Paroxetine", "SSRI"),
            ("med_venlafaxine", "Venlafaxine", "SNRI"),
            ("med_duloxetine", "Duloxetine", "SNRI"),
            ("med_bupropion", "Bupropion", "Atypical antidepressant"),
            ("med_mirtazapine", "Mirtazapine", "Atypical antidepressant"),
            ("med_trazodone", "Trazodone", "Atypical antidepressant"),
            ("med_quetiapine", "Quetiapine", "Antipsychotic"),
            ("med_risperidone", "Risperidone", "Antipsychotic"),
            ("med_olanzapine", "Olanzapine", "Antipsychotic"),
            ("med_aripiprazole", "Aripiprazole", "Antipsychotic"),
            ("med_lithium", "Lithium", "Mood stabilizer"),
            ("med_lamotrigine", "Lamotrigine", "Mood stabilizer"),
            ("med_valproate", "Valproate", "Mood stabilizer"),
            ("med_methylphenidate", "Methylphenidate", "Stimulant"),
            ("med_lisdexamfetamine", "Lisdexamfetamine", "Stimulant"),
            ("med_atomoxetine", "Atomoxetine", "Non-stimulant ADHD"),
            ("med_lorazepam", "Lorazepam", "Benzodiazepine"),
            ("med_diazepam", "Diazepam", "Benzodiazepine"),
            ("med_clonazepam", "Clonazepam", "Benzodiazepine"),
            ("med_zopiclone", "Zopiclone", "Hypnotic"),
            ("med_prazosin", "Prazosin", "Alpha blocker"),
            ("med_propranolol", "Propranolol", "Beta blocker"),
        ];
        let items = rows
            .iter()
            .map(|(id, name, category)| CatalogItem::new(id, name, category))
            .collect();
        Catalog::new(CatalogKind::Medication, items)
    });
    &CATALOG
}
