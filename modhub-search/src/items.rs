//! Catalog item search for home and listing pages.

use modhub_catalog::{CatalogItem, CatalogSource, ItemKind};

use crate::error::QueryError;
use crate::facet::{AllSelectedTags, FacetStrategy};
use crate::params::ItemQuery;
use crate::pipeline::{Page, RankRequest, rank};
use crate::score::ScoreEngine;
use crate::settings::Settings;

/// Answers item listing queries against a [`CatalogSource`].
pub struct ItemSearch<S> {
    source: S,
    engine: ScoreEngine,
    strategy: Box<dyn FacetStrategy>,
}

impl<S: CatalogSource> ItemSearch<S> {
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

    pub fn search(&self, query: &ItemQuery) -> Result<Page<CatalogItem>, QueryError> {
        let items = self.source.list_items(query.kind)?;
        let request = RankRequest {
            tags: &query.tags,
            search: query.search.as_deref(),
            sort: query.sort,
            page: query.page,
            limit: query.limit,
        };
        Ok(rank(items, &request, &self.engine, self.strategy.as_ref()))
    }

    /// Look up a single item by kind and slug.
    pub fn find(
        &self,
        kind: Option<ItemKind>,
        slug: &str,
    ) -> Result<Option<CatalogItem>, QueryError> {
        Ok(self
            .source
            .list_items(kind)?
            .into_iter()
            .find(|item| item.slug == slug))
    }
}
