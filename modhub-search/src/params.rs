//! Query parameters and their permissive parsing.
//!
//! Parameters usually arrive as strings (URL query strings, CLI flags).
//! Unusable paging or sorting values never fail a query: a bad `page` becomes
//! 1, a bad `limit` becomes the configured default, and an unknown `sortBy`
//! falls back to the default ordering.

use modhub_catalog::{ItemKind, ResourceScope};

use crate::error::QueryError;
use crate::facet::{FacetSelection, UNGROUPED_KEY};

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 20;

/// Requested result ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    /// Descending text score. Only meaningful with a search query.
    Relevance,
    /// Descending download count.
    Downloads,
    /// Most recently updated first.
    UpdatedAt,
    /// Ascending by name.
    Name,
}

impl SortBy {
    pub fn parse(s: &str) -> Result<Self, QueryError> {
        match s.trim().to_lowercase().as_str() {
            "relevance" => Ok(Self::Relevance),
            "downloads" => Ok(Self::Downloads),
            "updatedat" | "updated_at" | "updated" => Ok(Self::UpdatedAt),
            "name" => Ok(Self::Name),
            _ => Err(QueryError::invalid_parameter("sortBy", s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::Downloads => "downloads",
            Self::UpdatedAt => "updatedAt",
            Self::Name => "name",
        }
    }
}

/// Parse a strictly positive integer parameter.
pub fn parse_positive(name: &'static str, raw: &str) -> Result<usize, QueryError> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(QueryError::invalid_parameter(name, raw)),
    }
}

fn positive_or(name: &'static str, raw: Option<&str>, default: usize) -> usize {
    let Some(raw) = raw else {
        return default;
    };
    parse_positive(name, raw).unwrap_or_else(|e| {
        log::debug!("{e}; using {default}");
        default
    })
}

fn sort_or_default(raw: Option<&str>) -> Option<SortBy> {
    let raw = raw.filter(|s| !s.trim().is_empty())?;
    SortBy::parse(raw)
        .inspect_err(|e| log::debug!("{e}; using default ordering"))
        .ok()
}

fn kind_or_any(raw: Option<&str>) -> Option<ItemKind> {
    let raw = raw.filter(|s| !s.trim().is_empty())?;
    let kind = ItemKind::from_str_loose(raw);
    if kind.is_none() {
        log::debug!("{}; matching all kinds", QueryError::invalid_parameter("parentItemType", raw));
    }
    kind
}

fn non_blank(raw: &Option<String>) -> Option<String> {
    raw.as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// String-typed parameters, as received from a request or the command line.
#[derive(Debug, Clone, Default)]
pub struct RawQueryParams {
    pub parent_item_slug: Option<String>,
    pub parent_item_type: Option<String>,
    pub category_slug: Option<String>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
    /// `(facet_key, comma-separated tag IDs)` pairs. The key `tags` holds
    /// IDs with no facet.
    pub facets: Vec<(String, String)>,
}

impl RawQueryParams {
    pub fn with_tags(mut self, ids: &str) -> Self {
        self.facets.push((UNGROUPED_KEY.to_string(), ids.to_string()));
        self
    }
}

/// A resource listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceQuery {
    pub scope: ResourceScope,
    pub tags: FacetSelection,
    pub search: Option<String>,
    pub sort: Option<SortBy>,
    pub page: usize,
    pub limit: usize,
}

impl Default for ResourceQuery {
    fn default() -> Self {
        Self {
            scope: ResourceScope::all(),
            tags: FacetSelection::new(),
            search: None,
            sort: None,
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl ResourceQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw parameters, substituting defaults for unusable values.
    pub fn from_raw(raw: &RawQueryParams, default_limit: usize) -> Self {
        Self {
            scope: ResourceScope {
                parent_item_slug: non_blank(&raw.parent_item_slug),
                parent_item_type: kind_or_any(raw.parent_item_type.as_deref()),
                category_slug: non_blank(&raw.category_slug),
            },
            tags: FacetSelection::from_pairs(raw.facets.iter().map(|(k, v)| (k, v))),
            search: non_blank(&raw.search),
            sort: sort_or_default(raw.sort_by.as_deref()),
            page: positive_or("page", raw.page.as_deref(), DEFAULT_PAGE),
            limit: positive_or("limit", raw.limit.as_deref(), default_limit),
        }
    }

    pub fn with_scope(mut self, scope: ResourceScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_tags(mut self, tags: FacetSelection) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_sort(mut self, sort: SortBy) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

/// A catalog item listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemQuery {
    pub kind: Option<ItemKind>,
    pub tags: FacetSelection,
    pub search: Option<String>,
    pub sort: Option<SortBy>,
    pub page: usize,
    pub limit: usize,
}

impl Default for ItemQuery {
    fn default() -> Self {
        Self {
            kind: None,
            tags: FacetSelection::new(),
            search: None,
            sort: None,
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl ItemQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw parameters. `parent_item_type` selects the item kind;
    /// the other scope fields are ignored.
    pub fn from_raw(raw: &RawQueryParams, default_limit: usize) -> Self {
        Self {
            kind: kind_or_any(raw.parent_item_type.as_deref()),
            tags: FacetSelection::from_pairs(raw.facets.iter().map(|(k, v)| (k, v))),
            search: non_blank(&raw.search),
            sort: sort_or_default(raw.sort_by.as_deref()),
            page: positive_or("page", raw.page.as_deref(), DEFAULT_PAGE),
            limit: positive_or("limit", raw.limit.as_deref(), default_limit),
        }
    }

    pub fn with_kind(mut self, kind: ItemKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_tags(mut self, tags: FacetSelection) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_sort(mut self, sort: SortBy) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

#[cfg(test)]
#[path = "tests/params_tests.rs"]
mod tests;
