use chrono::{TimeZone, Utc};
use modhub_catalog::*;

fn item(id: &str, slug: &str, variant: ItemVariant) -> CatalogItem {
    let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    CatalogItem {
        id: id.to_string(),
        slug: slug.to_string(),
        name: slug.to_string(),
        description: String::new(),
        long_description: None,
        image_url: None,
        banner_url: None,
        tags: vec![],
        created_at: ts,
        updated_at: ts,
        stats: ItemStats::default(),
        variant,
    }
}

fn game(id: &str, slug: &str) -> CatalogItem {
    item(
        id,
        slug,
        ItemVariant::Game {
            developer: None,
            platforms: vec![],
        },
    )
}

fn category(id: &str, slug: &str, item_id: &str, kind: ItemKind, order: i32) -> Category {
    Category {
        id: id.to_string(),
        name: slug.to_string(),
        slug: slug.to_string(),
        description: None,
        order,
        parent_item_id: item_id.to_string(),
        parent_item_type: kind,
    }
}

fn resource(id: &str, item_id: &str, category_id: &str) -> Resource {
    let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    Resource {
        id: id.to_string(),
        name: id.to_string(),
        description: String::new(),
        detailed_description: None,
        version: "1.0".to_string(),
        parent_item_id: item_id.to_string(),
        parent_item_type: ItemKind::Game,
        category_id: category_id.to_string(),
        tags: vec![],
        downloads: 0,
        followers: 0,
        rating: None,
        author: Author {
            id: "a".to_string(),
            name: "A".to_string(),
            avatar_url: None,
        },
        image_url: None,
        created_at: ts,
        updated_at: ts,
        files: vec![],
        changelog: vec![],
    }
}

fn fixture() -> MemoryCatalog {
    let data = CatalogData {
        tags: vec![],
        items: vec![
            game("g-mc", "minecraft"),
            game("g-sv", "stardew-valley"),
            item(
                "a-notes",
                "notes",
                ItemVariant::App {
                    publisher: None,
                    platforms: vec![],
                },
            ),
        ],
        categories: vec![
            category("c-mc-packs", "resource-packs", "g-mc", ItemKind::Game, 2),
            category("c-mc-mods", "mods", "g-mc", ItemKind::Game, 1),
            category("c-sv-mods", "mods", "g-sv", ItemKind::Game, 1),
        ],
        resources: vec![
            resource("r1", "g-mc", "c-mc-mods"),
            resource("r2", "g-mc", "c-mc-packs"),
            resource("r3", "g-sv", "c-sv-mods"),
            resource("r4", "g-mc", "c-mc-mods"),
        ],
    };
    MemoryCatalog::new(data).unwrap()
}

fn ids(resources: &[Resource]) -> Vec<&str> {
    resources.iter().map(|r| r.id.as_str()).collect()
}

#[test]
fn unscoped_listing_keeps_insertion_order() {
    let catalog = fixture();
    let all = catalog.list_resources(&ResourceScope::all()).unwrap();
    assert_eq!(ids(&all), vec!["r1", "r2", "r3", "r4"]);
}

#[test]
fn scope_by_item_slug() {
    let catalog = fixture();
    let mc = catalog
        .list_resources(&ResourceScope::item(ItemKind::Game, "minecraft"))
        .unwrap();
    assert_eq!(ids(&mc), vec!["r1", "r2", "r4"]);
}

#[test]
fn scope_by_item_and_category() {
    let catalog = fixture();
    let scope = ResourceScope::item(ItemKind::Game, "minecraft").with_category("mods");
    assert_eq!(ids(&catalog.list_resources(&scope).unwrap()), vec!["r1", "r4"]);
}

#[test]
fn category_slug_without_item_spans_items() {
    let catalog = fixture();
    let scope = ResourceScope {
        category_slug: Some("mods".to_string()),
        ..Default::default()
    };
    assert_eq!(
        ids(&catalog.list_resources(&scope).unwrap()),
        vec!["r1", "r3", "r4"]
    );
}

#[test]
fn unknown_scope_is_empty() {
    let catalog = fixture();
    let scope = ResourceScope::item(ItemKind::Game, "terraria");
    assert!(catalog.list_resources(&scope).unwrap().is_empty());
    let wrong_kind = ResourceScope::item(ItemKind::App, "minecraft");
    assert!(catalog.list_resources(&wrong_kind).unwrap().is_empty());
}

#[test]
fn items_filtered_by_kind() {
    let catalog = fixture();
    assert_eq!(catalog.list_items(None).unwrap().len(), 3);
    let apps = catalog.list_items(Some(ItemKind::App)).unwrap();
    assert_eq!(apps.len(), 1);
    assert_eq!(apps[0].slug, "notes");
}

#[test]
fn categories_sorted_by_order() {
    let catalog = fixture();
    let cats = catalog.list_categories("g-mc").unwrap();
    let slugs: Vec<&str> = cats.iter().map(|c| c.slug.as_str()).collect();
    assert_eq!(slugs, vec!["mods", "resource-packs"]);
}

#[test]
fn mismatched_category_kind_is_rejected() {
    let mut data = fixture().data().clone();
    data.categories
        .push(category("c-app", "plugins", "a-notes", ItemKind::App, 1));
    data.resources.push(resource("bad", "g-mc", "c-app"));

    let err = MemoryCatalog::new(data).unwrap_err();
    assert!(matches!(err, SourceError::Invariant(_)));
}

#[test]
fn unknown_category_is_rejected() {
    let mut data = fixture().data().clone();
    data.resources.push(resource("orphan", "g-mc", "c-missing"));
    assert!(matches!(
        MemoryCatalog::new(data),
        Err(SourceError::Invariant(_))
    ));
}

#[test]
fn bundled_sample_catalog_loads() {
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../catalog");
    let catalog = MemoryCatalog::load(&dir).unwrap();

    let mods = catalog
        .list_resources(&ResourceScope::item(ItemKind::Game, "minecraft").with_category("mods"))
        .unwrap();
    assert_eq!(mods.len(), 2);
    assert_eq!(catalog.list_items(Some(ItemKind::ArtMusic)).unwrap().len(), 1);
    assert!(!catalog.list_tags().unwrap().is_empty());
}
