//! Tag facet filtering.
//!
//! A [`FacetSelection`] records which tag IDs were selected under which facet
//! key (e.g. "versions", "loaders"). How a selection is applied is decided by
//! a [`FacetStrategy`]:
//!
//! - [`AllSelectedTags`] flattens the selection and requires every selected
//!   tag to be present on the item. This is the default.
//! - [`AnyWithinFacet`] requires at least one selected tag from each facet
//!   group to be present. IDs under [`UNGROUPED_KEY`] carry no facet, so
//!   each of them is still required.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use modhub_catalog::{CatalogItem, Resource, Tag, TagType};
use serde::{Deserialize, Serialize};

/// Facet key used for tag IDs that arrive without a facet.
pub const UNGROUPED_KEY: &str = "tags";

/// Anything carrying a tag set.
pub trait Tagged {
    fn tags(&self) -> &[Tag];

    fn tag_ids(&self) -> HashSet<&str> {
        self.tags().iter().map(|t| t.id.as_str()).collect()
    }
}

impl Tagged for Resource {
    fn tags(&self) -> &[Tag] {
        &self.tags
    }
}

impl Tagged for CatalogItem {
    fn tags(&self) -> &[Tag] {
        &self.tags
    }
}

/// Selected tag IDs grouped by facet key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetSelection {
    groups: BTreeMap<String, BTreeSet<String>>,
}

impl FacetSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// A selection with no facet grouping.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selection = Self::new();
        for id in ids {
            selection.insert(UNGROUPED_KEY, id);
        }
        selection
    }

    /// Build from `(facet_key, value)` pairs, where each value may hold
    /// several comma-separated tag IDs. Blank IDs are skipped.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut selection = Self::new();
        for (key, value) in pairs {
            for id in value.as_ref().split(',') {
                selection.insert(key.as_ref(), id);
            }
        }
        selection
    }

    pub fn insert(&mut self, facet_key: &str, tag_id: impl Into<String>) {
        let id = tag_id.into();
        let id = id.trim();
        if id.is_empty() {
            return;
        }
        self.groups
            .entry(facet_key.trim().to_string())
            .or_default()
            .insert(id.to_string());
    }

    pub fn with(mut self, facet_key: &str, tag_id: impl Into<String>) -> Self {
        self.insert(facet_key, tag_id);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.groups.values().all(|ids| ids.is_empty())
    }

    /// Every selected ID regardless of facet.
    pub fn flattened(&self) -> BTreeSet<&str> {
        self.groups
            .values()
            .flat_map(|ids| ids.iter().map(String::as_str))
            .collect()
    }

    pub fn groups(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Decides whether an item's tags satisfy a selection.
pub trait FacetStrategy: Send + Sync {
    fn matches(&self, item_tag_ids: &HashSet<&str>, selection: &FacetSelection) -> bool;
}

/// Every selected tag, across all facets, must be present.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllSelectedTags;

impl FacetStrategy for AllSelectedTags {
    fn matches(&self, item_tag_ids: &HashSet<&str>, selection: &FacetSelection) -> bool {
        selection
            .flattened()
            .iter()
            .all(|id| item_tag_ids.contains(id))
    }
}

/// At least one selected tag from each facet group must be present.
/// Ungrouped IDs must all be present.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyWithinFacet;

impl FacetStrategy for AnyWithinFacet {
    fn matches(&self, item_tag_ids: &HashSet<&str>, selection: &FacetSelection) -> bool {
        selection
            .groups()
            .filter(|(_, ids)| !ids.is_empty())
            .all(|(key, ids)| {
                let present = |id: &String| item_tag_ids.contains(id.as_str());
                if key == UNGROUPED_KEY {
                    ids.iter().all(present)
                } else {
                    ids.iter().any(present)
                }
            })
    }
}

/// Configurable choice of [`FacetStrategy`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacetMode {
    #[default]
    All,
    Grouped,
}

impl FacetMode {
    pub fn strategy(&self) -> Box<dyn FacetStrategy> {
        match self {
            Self::All => Box::new(AllSelectedTags),
            Self::Grouped => Box::new(AnyWithinFacet),
        }
    }
}

/// True if every selected tag ID is on `item`. An empty selection matches everything.
pub fn matches<T: Tagged + ?Sized>(item: &T, selection: &FacetSelection) -> bool {
    AllSelectedTags.matches(&item.tag_ids(), selection)
}

/// How many items in a result set carry a given tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetCount {
    pub tag: Tag,
    pub count: usize,
}

/// Tag counts over `items`, grouped by facet, most frequent first.
pub fn available_facets<T: Tagged>(items: &[T]) -> BTreeMap<TagType, Vec<FacetCount>> {
    let mut counts: HashMap<&str, FacetCount> = HashMap::new();
    for item in items {
        // A tag listed twice on one item still counts once.
        let mut seen = HashSet::new();
        for tag in item.tags() {
            if !seen.insert(tag.id.as_str()) {
                continue;
            }
            counts
                .entry(tag.id.as_str())
                .or_insert_with(|| FacetCount {
                    tag: tag.clone(),
                    count: 0,
                })
                .count += 1;
        }
    }

    let mut by_type: BTreeMap<TagType, Vec<FacetCount>> = BTreeMap::new();
    for fc in counts.into_values() {
        by_type.entry(fc.tag.tag_type).or_default().push(fc);
    }
    for group in by_type.values_mut() {
        group.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.tag.name.cmp(&b.tag.name))
        });
    }
    by_type
}

#[cfg(test)]
#[path = "tests/facet_tests.rs"]
mod tests;
