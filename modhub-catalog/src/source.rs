//! Read-only access to catalog data.
//!
//! [`CatalogSource`] is the seam between the search engine and whatever
//! stores the catalog. [`MemoryCatalog`] is an immutable in-memory snapshot,
//! typically built from a YAML catalog directory.

use std::collections::HashMap;

use thiserror::Error;

use crate::types::{CatalogItem, Category, ItemKind, Resource, Tag};
use crate::yaml::{CatalogData, YamlError};

#[derive(Debug, Error)]
pub enum SourceError {
    /// The backing store could not produce data.
    #[error("Catalog source unavailable: {0}")]
    Unavailable(String),

    /// The data violates a catalog invariant.
    #[error("Catalog invariant violated: {0}")]
    Invariant(String),

    #[error(transparent)]
    Yaml(#[from] YamlError),
}

impl SourceError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::Invariant(msg.into())
    }
}

/// Which resources a listing covers. `None` fields mean "all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceScope {
    pub parent_item_slug: Option<String>,
    pub parent_item_type: Option<ItemKind>,
    pub category_slug: Option<String>,
}

impl ResourceScope {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn item(kind: ItemKind, slug: impl Into<String>) -> Self {
        Self {
            parent_item_slug: Some(slug.into()),
            parent_item_type: Some(kind),
            category_slug: None,
        }
    }

    pub fn with_category(mut self, slug: impl Into<String>) -> Self {
        self.category_slug = Some(slug.into());
        self
    }

    pub fn is_unscoped(&self) -> bool {
        self.parent_item_slug.is_none()
            && self.parent_item_type.is_none()
            && self.category_slug.is_none()
    }
}

/// Read-only catalog storage.
///
/// Listings are unpaginated and preserve the store's insertion order; callers
/// rank and paginate on their own.
pub trait CatalogSource: Send + Sync {
    /// All items, optionally restricted to one kind.
    fn list_items(&self, kind: Option<ItemKind>) -> Result<Vec<CatalogItem>, SourceError>;

    /// Categories owned by an item, sorted by display order then name.
    fn list_categories(&self, item_id: &str) -> Result<Vec<Category>, SourceError>;

    /// Every resource inside `scope`.
    fn list_resources(&self, scope: &ResourceScope) -> Result<Vec<Resource>, SourceError>;

    fn list_tags(&self) -> Result<Vec<Tag>, SourceError>;
}

impl<T: CatalogSource + ?Sized> CatalogSource for &T {
    fn list_items(&self, kind: Option<ItemKind>) -> Result<Vec<CatalogItem>, SourceError> {
        (**self).list_items(kind)
    }

    fn list_categories(&self, item_id: &str) -> Result<Vec<Category>, SourceError> {
        (**self).list_categories(item_id)
    }

    fn list_resources(&self, scope: &ResourceScope) -> Result<Vec<Resource>, SourceError> {
        (**self).list_resources(scope)
    }

    fn list_tags(&self) -> Result<Vec<Tag>, SourceError> {
        (**self).list_tags()
    }
}

/// An immutable in-memory catalog snapshot.
#[derive(Debug, Clone)]
pub struct MemoryCatalog {
    data: CatalogData,
    item_index: HashMap<String, usize>,
    category_index: HashMap<String, usize>,
}

impl MemoryCatalog {
    /// Build a snapshot, checking that every resource's category belongs to
    /// an item of the same kind as the resource.
    pub fn new(data: CatalogData) -> Result<Self, SourceError> {
        let item_index = data
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| (item.id.clone(), i))
            .collect();
        let category_index: HashMap<String, usize> = data
            .categories
            .iter()
            .enumerate()
            .map(|(i, c)| (c.id.clone(), i))
            .collect();

        for resource in &data.resources {
            let Some(&ci) = category_index.get(&resource.category_id) else {
                return Err(SourceError::invariant(format!(
                    "resource '{}' references unknown category '{}'",
                    resource.id, resource.category_id
                )));
            };
            let category = &data.categories[ci];
            if category.parent_item_type != resource.parent_item_type {
                return Err(SourceError::invariant(format!(
                    "resource '{}' is a {} resource but category '{}' belongs to a {}",
                    resource.id, resource.parent_item_type, category.id, category.parent_item_type
                )));
            }
        }

        Ok(Self {
            data,
            item_index,
            category_index,
        })
    }

    /// Load a catalog directory and build a snapshot from it.
    pub fn load(catalog_dir: &std::path::Path) -> Result<Self, SourceError> {
        let data = crate::yaml::load_catalog(catalog_dir)?;
        Self::new(data)
    }

    pub fn data(&self) -> &CatalogData {
        &self.data
    }

    fn in_scope(&self, resource: &Resource, scope: &ResourceScope) -> bool {
        if let Some(kind) = scope.parent_item_type
            && resource.parent_item_type != kind
        {
            return false;
        }
        if let Some(slug) = &scope.parent_item_slug {
            let parent = self
                .item_index
                .get(&resource.parent_item_id)
                .map(|&i| &self.data.items[i]);
            if !parent.is_some_and(|p| &p.slug == slug) {
                return false;
            }
        }
        if let Some(slug) = &scope.category_slug {
            let category = self
                .category_index
                .get(&resource.category_id)
                .map(|&i| &self.data.categories[i]);
            if !category.is_some_and(|c| &c.slug == slug) {
                return false;
            }
        }
        true
    }
}

impl CatalogSource for MemoryCatalog {
    fn list_items(&self, kind: Option<ItemKind>) -> Result<Vec<CatalogItem>, SourceError> {
        Ok(self
            .data
            .items
            .iter()
            .filter(|item| kind.is_none_or(|k| item.kind() == k))
            .cloned()
            .collect())
    }

    fn list_categories(&self, item_id: &str) -> Result<Vec<Category>, SourceError> {
        let mut categories: Vec<Category> = self
            .data
            .categories
            .iter()
            .filter(|c| c.parent_item_id == item_id)
            .cloned()
            .collect();
        categories.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.name.cmp(&b.name)));
        Ok(categories)
    }

    fn list_resources(&self, scope: &ResourceScope) -> Result<Vec<Resource>, SourceError> {
        Ok(self
            .data
            .resources
            .iter()
            .filter(|r| self.in_scope(r, scope))
            .cloned()
            .collect())
    }

    fn list_tags(&self) -> Result<Vec<Tag>, SourceError> {
        Ok(self.data.tags.clone())
    }
}
