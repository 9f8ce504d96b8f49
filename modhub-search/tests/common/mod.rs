#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use modhub_catalog::*;

pub fn at(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap()
}

pub fn tag(id: &str, name: &str, tag_type: TagType) -> Tag {
    Tag {
        id: id.to_string(),
        name: name.to_string(),
        tag_type,
        color: None,
    }
}

pub fn v1_20() -> Tag {
    tag("v1.20", "1.20", TagType::Version)
}

pub fn fabric() -> Tag {
    tag("fabric", "Fabric", TagType::Loader)
}

pub fn forge() -> Tag {
    tag("forge", "Forge", TagType::Loader)
}

pub fn utility() -> Tag {
    tag("utility", "Utility", TagType::Genre)
}

pub fn graphics() -> Tag {
    tag("graphics", "Graphics", TagType::Genre)
}

pub fn game(id: &str, slug: &str, name: &str) -> CatalogItem {
    CatalogItem {
        id: id.to_string(),
        slug: slug.to_string(),
        name: name.to_string(),
        description: String::new(),
        long_description: None,
        image_url: None,
        banner_url: None,
        tags: vec![],
        created_at: at(1),
        updated_at: at(1),
        stats: ItemStats::default(),
        variant: ItemVariant::Game {
            developer: None,
            platforms: vec![],
        },
    }
}

pub fn category(id: &str, slug: &str, item_id: &str) -> Category {
    Category {
        id: id.to_string(),
        name: slug.to_string(),
        slug: slug.to_string(),
        description: None,
        order: 0,
        parent_item_id: item_id.to_string(),
        parent_item_type: ItemKind::Game,
    }
}

pub fn resource(id: &str, name: &str, downloads: u64) -> Resource {
    Resource {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        detailed_description: None,
        version: "1.0.0".to_string(),
        parent_item_id: "g-mc".to_string(),
        parent_item_type: ItemKind::Game,
        category_id: "c-mc-mods".to_string(),
        tags: vec![],
        downloads,
        followers: 0,
        rating: None,
        author: Author {
            id: "author".to_string(),
            name: "Someone".to_string(),
            avatar_url: None,
        },
        image_url: None,
        created_at: at(1),
        updated_at: at(1),
        files: vec![],
        changelog: vec![],
    }
}

/// The two-resource dataset used by the listing scenarios.
pub fn scenario_catalog() -> MemoryCatalog {
    let mut sorter = resource("r-sorter", "Inventory Sorter", 25800);
    sorter.tags = vec![v1_20(), fabric(), utility()];
    let mut ultra = resource("r-ultra", "Ultra Graphics Mod", 15230);
    ultra.tags = vec![v1_20(), forge(), graphics()];

    MemoryCatalog::new(CatalogData {
        tags: vec![v1_20(), fabric(), forge(), utility(), graphics()],
        items: vec![game("g-mc", "minecraft", "Minecraft")],
        categories: vec![category("c-mc-mods", "mods", "g-mc")],
        resources: vec![sorter, ultra],
    })
    .unwrap()
}

/// A larger catalog spanning two games and several categories.
pub fn browse_catalog() -> MemoryCatalog {
    let names = [
        ("r01", "Sodium", 90_000, 5, "c-mc-mods"),
        ("r02", "Lithium", 70_000, 9, "c-mc-mods"),
        ("r03", "Map Atlas", 12_000, 2, "c-mc-mods"),
        ("r04", "Faithful 32x", 50_000, 7, "c-mc-packs"),
        ("r05", "Minimap Plus", 12_000, 4, "c-mc-mods"),
        ("r06", "Better Maps Pack", 3_000, 8, "c-mc-packs"),
        ("r07", "Roadmap Tools", 800, 3, "c-mc-mods"),
        ("r08", "Stardew Expanded", 60_000, 6, "c-sv-mods"),
    ];
    let resources = names
        .iter()
        .map(|&(id, name, downloads, day, cat)| {
            let mut r = resource(id, name, downloads);
            r.updated_at = at(day);
            r.category_id = cat.to_string();
            if cat == "c-sv-mods" {
                r.parent_item_id = "g-sv".to_string();
            }
            r
        })
        .collect();

    MemoryCatalog::new(CatalogData {
        tags: vec![],
        items: vec![
            game("g-mc", "minecraft", "Minecraft"),
            game("g-sv", "stardew-valley", "Stardew Valley"),
        ],
        categories: vec![
            category("c-mc-mods", "mods", "g-mc"),
            category("c-mc-packs", "resource-packs", "g-mc"),
            category("c-sv-mods", "mods", "g-sv"),
        ],
        resources,
    })
    .unwrap()
}

pub fn names(resources: &[Resource]) -> Vec<&str> {
    resources.iter().map(|r| r.name.as_str()).collect()
}
