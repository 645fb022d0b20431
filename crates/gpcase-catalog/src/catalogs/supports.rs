use std::sync::LazyLock;

use crate::item::{Catalog, CatalogItem, CatalogKind};

pub fn catalog() -> &'static Catalog {
    static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
        let rows = [
            ("sup_partner", "Partner or spouse", "Family"),
            ("sup_parent", "Parent", "Family"),
            ("sup_sibling", "Sibling", "Family"),
            ("sup_adult_child", "Adult child", "Family"),
            ("sup_friend", "Close friend", "Community"),
            ("sup_neighbour", "Neighbour", "Community"),
            ("sup_faith_community", "Faith community", "Community"),
            ("sup_peer_group", "Peer support group", "Community"),
            ("sup_therapist", "Therapist or counsellor", "Professional"),
            ("sup_case_manager", "Case manager", "Professional"),
            ("sup_crisis_line", "Crisis line", "Professional"),
        ];
        let items = rows
            .iter()
            .map(|(id, name, category)| CatalogItem::new(id, name, category))
            .collect();
        Catalog::new(CatalogKind::Support, items)
    });
    &CATALOG
}
