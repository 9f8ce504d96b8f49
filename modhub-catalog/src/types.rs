//! Data model types for the content catalog.
//!
//! These types represent the catalog schema: items (games, web projects, apps,
//! art/music), their categories, resources, files, changelogs, and the tag
//! reference data shared between items and resources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ── Tags ────────────────────────────────────────────────────────────────────

/// The facet a tag belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TagType {
    Version,
    Loader,
    Genre,
    Platform,
    Channel,
    Framework,
    Tooling,
    AppCategory,
    ArtStyle,
    MusicGenre,
    Misc,
}

impl TagType {
    pub const ALL: [TagType; 11] = [
        Self::Version,
        Self::Loader,
        Self::Genre,
        Self::Platform,
        Self::Channel,
        Self::Framework,
        Self::Tooling,
        Self::AppCategory,
        Self::ArtStyle,
        Self::MusicGenre,
        Self::Misc,
    ];

    /// Query-parameter key for this facet (e.g. "versions", "loaders").
    pub fn facet_key(&self) -> &'static str {
        match self {
            Self::Version => "versions",
            Self::Loader => "loaders",
            Self::Genre => "genres",
            Self::Platform => "platforms",
            Self::Channel => "channels",
            Self::Framework => "frameworks",
            Self::Tooling => "tooling",
            Self::AppCategory => "app-categories",
            Self::ArtStyle => "art-styles",
            Self::MusicGenre => "music-genres",
            Self::Misc => "misc",
        }
    }

    pub fn from_facet_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.facet_key().eq_ignore_ascii_case(key))
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Version => "Versions",
            Self::Loader => "Loaders",
            Self::Genre => "Genres",
            Self::Platform => "Platforms",
            Self::Channel => "Channels",
            Self::Framework => "Frameworks",
            Self::Tooling => "Tooling",
            Self::AppCategory => "App Categories",
            Self::ArtStyle => "Art Styles",
            Self::MusicGenre => "Music Genres",
            Self::Misc => "Misc",
        }
    }
}

/// Immutable tag reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub tag_type: TagType,
    #[serde(default)]
    pub color: Option<String>,
}

// ── Catalog Items ───────────────────────────────────────────────────────────

/// Which kind of catalog item an entry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemKind {
    Game,
    WebProject,
    App,
    ArtMusic,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Game => "game",
            Self::WebProject => "web-project",
            Self::App => "app",
            Self::ArtMusic => "art-music",
        }
    }

    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "game" | "games" => Some(Self::Game),
            "web-project" | "web-projects" | "webproject" | "web" => Some(Self::WebProject),
            "app" | "apps" => Some(Self::App),
            "art-music" | "artmusic" | "art" | "music" => Some(Self::ArtMusic),
            _ => None,
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate counters for a catalog item. Absent values rank as 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStats {
    #[serde(default)]
    pub total_downloads: Option<u64>,
    #[serde(default)]
    pub total_views: Option<u64>,
    #[serde(default)]
    pub total_followers: Option<u64>,
    #[serde(default)]
    pub total_resources: Option<u64>,
}

/// Per-variant details of a catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ItemVariant {
    Game {
        #[serde(default)]
        developer: Option<String>,
        #[serde(default)]
        platforms: Vec<String>,
    },
    WebProject {
        #[serde(default)]
        url: Option<String>,
        #[serde(default)]
        repository: Option<String>,
        #[serde(default)]
        maintainer: Option<String>,
    },
    App {
        #[serde(default)]
        publisher: Option<String>,
        #[serde(default)]
        platforms: Vec<String>,
    },
    ArtMusic {
        #[serde(default)]
        artist: Option<String>,
        #[serde(default)]
        medium: Option<String>,
    },
}

/// A top-level catalog entry: a game, web project, app, or art/music piece.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    /// Unique within the item's kind.
    pub slug: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub long_description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub banner_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub stats: ItemStats,
    #[serde(flatten)]
    pub variant: ItemVariant,
}

impl CatalogItem {
    pub fn kind(&self) -> ItemKind {
        match self.variant {
            ItemVariant::Game { .. } => ItemKind::Game,
            ItemVariant::WebProject { .. } => ItemKind::WebProject,
            ItemVariant::App { .. } => ItemKind::App,
            ItemVariant::ArtMusic { .. } => ItemKind::ArtMusic,
        }
    }

    /// Developer, maintainer, publisher, or artist, depending on the variant.
    pub fn author_name(&self) -> Option<&str> {
        match &self.variant {
            ItemVariant::Game { developer, .. } => developer.as_deref(),
            ItemVariant::WebProject { maintainer, .. } => maintainer.as_deref(),
            ItemVariant::App { publisher, .. } => publisher.as_deref(),
            ItemVariant::ArtMusic { artist, .. } => artist.as_deref(),
        }
    }
}

// ── Categories ──────────────────────────────────────────────────────────────

/// A resource category owned by one catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Unique within the owning item.
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub order: i32,
    pub parent_item_id: String,
    pub parent_item_type: ItemKind,
}

// ── Resources ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// A downloadable file attached to a resource, with its compatibility tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceFile {
    pub id: String,
    pub file_name: String,
    #[serde(default)]
    pub size_bytes: Option<u64>,
    #[serde(default)]
    pub supported_versions: Vec<Tag>,
    #[serde(default)]
    pub supported_loaders: Vec<Tag>,
    #[serde(default)]
    pub channel: Option<Tag>,
    #[serde(default)]
    pub downloads: u64,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangelogEntry {
    pub version: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub changes: Vec<String>,
}

/// A mod, plugin, asset pack, or other contribution attached to a catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub detailed_description: Option<String>,
    pub version: String,
    pub parent_item_id: String,
    pub parent_item_type: ItemKind,
    pub category_id: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub downloads: u64,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub rating: Option<f32>,
    pub author: Author,
    #[serde(default)]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub files: Vec<ResourceFile>,
    #[serde(default)]
    pub changelog: Vec<ChangelogEntry>,
}
