//! Resource listing: scope → facets → text → sort → page.

use std::collections::{BTreeMap, HashSet};

use modhub_catalog::{CatalogSource, ItemKind, Resource, ResourceScope, TagType};
use serde::Serialize;

use crate::error::QueryError;
use crate::facet::{AllSelectedTags, FacetCount, FacetStrategy, available_facets};
use crate::params::ResourceQuery;
use crate::pipeline::{Page, RankRequest, rank};
use crate::score::ScoreEngine;
use crate::settings::Settings;

/// A page of resources.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResourcesResponse {
    pub resources: Vec<Resource>,
    pub total: usize,
    pub has_more: bool,
}

impl PaginatedResourcesResponse {
    pub fn empty() -> Self {
        Page::<Resource>::empty().into()
    }
}

impl From<Page<Resource>> for PaginatedResourcesResponse {
    fn from(page: Page<Resource>) -> Self {
        Self {
            resources: page.items,
            total: page.total,
            has_more: page.has_more,
        }
    }
}

/// A scope with slugs resolved to IDs.
#[derive(Debug, Default)]
struct ResolvedScope {
    item_type: Option<ItemKind>,
    item_ids: Option<HashSet<String>>,
    category_ids: Option<HashSet<String>>,
}

impl ResolvedScope {
    fn contains(&self, resource: &Resource) -> bool {
        self.item_type.is_none_or(|k| resource.parent_item_type == k)
            && self
                .item_ids
                .as_ref()
                .is_none_or(|ids| ids.contains(&resource.parent_item_id))
            && self
                .category_ids
                .as_ref()
                .is_none_or(|ids| ids.contains(&resource.category_id))
    }
}

/// Answers resource listing queries against a [`CatalogSource`].
pub struct ResourceQueryOrchestrator<S> {
    source: S,
    engine: ScoreEngine,
    strategy: Box<dyn FacetStrategy>,
}

impl<S: CatalogSource> ResourceQueryOrchestrator<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            engine: ScoreEngine::default(),
            strategy: Box::new(AllSelectedTags),
        }
    }

    pub fn from_settings(source: S, settings: &Settings) -> Self {
        Self {
            source,
            engine: ScoreEngine::new(settings.scoring),
            strategy: settings.query.facet_mode.strategy(),
        }
    }

    pub fn with_engine(mut self, engine: ScoreEngine) -> Self {
        self.engine = engine;
        self
    }

    pub fn with_facet_strategy(mut self, strategy: Box<dyn FacetStrategy>) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Run a listing query.
    ///
    /// An unknown item or category yields an empty page. Only a failing
    /// catalog source is an error.
    pub fn query(&self, query: &ResourceQuery) -> Result<PaginatedResourcesResponse, QueryError> {
        let Some(candidates) = self.scoped_resources(&query.scope)? else {
            return Ok(PaginatedResourcesResponse::empty());
        };

        let request = RankRequest {
            tags: &query.tags,
            search: query.search.as_deref(),
            sort: query.sort,
            page: query.page,
            limit: query.limit,
        };
        let page = rank(candidates, &request, &self.engine, self.strategy.as_ref());
        log::debug!(
            "Resource query matched {} (page {} of size {}, has_more={})",
            page.total,
            query.page,
            query.limit,
            page.has_more
        );
        Ok(page.into())
    }

    /// Tag counts per facet over every resource in `scope`.
    pub fn facets(
        &self,
        scope: &ResourceScope,
    ) -> Result<BTreeMap<TagType, Vec<FacetCount>>, QueryError> {
        let resources = self.scoped_resources(scope)?.unwrap_or_default();
        Ok(available_facets(&resources))
    }

    /// Resources inside `scope`, or `None` if the scope names something
    /// that does not exist.
    fn scoped_resources(&self, scope: &ResourceScope) -> Result<Option<Vec<Resource>>, QueryError> {
        let resolved = match self.resolve_scope(scope) {
            Ok(resolved) => resolved,
            Err(QueryError::ScopeNotFound(what)) => {
                log::warn!("No such {what}; returning no resources");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        let mut resources = self.source.list_resources(scope)?;
        resources.retain(|r| resolved.contains(r));
        Ok(Some(resources))
    }

    fn resolve_scope(&self, scope: &ResourceScope) -> Result<ResolvedScope, QueryError> {
        let mut resolved = ResolvedScope {
            item_type: scope.parent_item_type,
            ..Default::default()
        };
        if scope.parent_item_slug.is_none() && scope.category_slug.is_none() {
            return Ok(resolved);
        }

        let items = self.source.list_items(scope.parent_item_type)?;
        let items: Vec<_> = match &scope.parent_item_slug {
            Some(slug) => {
                let matching: Vec<_> = items.into_iter().filter(|i| &i.slug == slug).collect();
                if matching.is_empty() {
                    return Err(QueryError::scope_not_found(format!("item '{slug}'")));
                }
                resolved.item_ids = Some(matching.iter().map(|i| i.id.clone()).collect());
                matching
            }
            None => items,
        };

        if let Some(slug) = &scope.category_slug {
            let mut ids = HashSet::new();
            for item in &items {
                for category in self.source.list_categories(&item.id)? {
                    if &category.slug == slug {
                        ids.insert(category.id);
                    }
                }
            }
            if ids.is_empty() {
                return Err(QueryError::scope_not_found(format!("category '{slug}'")));
            }
            resolved.category_ids = Some(ids);
        }

        log::debug!("Resolved scope {:?} to {:?}", scope, resolved);
        Ok(resolved)
    }
}

#[cfg(test)]
#[path = "tests/resources_tests.rs"]
mod tests;
