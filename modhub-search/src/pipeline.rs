//! The shared rank → sort → paginate pipeline.
//!
//! Given candidates that are already scope-filtered, the pipeline applies the
//! facet filter, the text filter, the requested ordering, and finally slices
//! out one page. All sorts are stable, so equal keys keep their input order.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use modhub_catalog::{CatalogItem, Resource};
use serde::Serialize;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::facet::{FacetSelection, FacetStrategy, Tagged};
use crate::params::{DEFAULT_LIMIT, SortBy};
use crate::score::{ScoreEngine, Scorable};

/// Sort keys for a ranked entity.
pub trait Rankable {
    fn updated_at(&self) -> DateTime<Utc>;

    /// Download count used by [`SortBy::Downloads`].
    fn downloads(&self) -> u64;

    /// Ordering key when no sort is requested and there is no search.
    fn popularity(&self) -> u64;
}

impl Rankable for Resource {
    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn downloads(&self) -> u64 {
        self.downloads
    }

    fn popularity(&self) -> u64 {
        self.downloads
    }
}

impl Rankable for CatalogItem {
    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn downloads(&self) -> u64 {
        self.stats.total_downloads.unwrap_or(0)
    }

    fn popularity(&self) -> u64 {
        self.stats
            .total_downloads
            .or(self.stats.total_views)
            .unwrap_or(0)
    }
}

/// One page of results.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Matches before pagination.
    pub total: usize,
    pub has_more: bool,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            has_more: false,
        }
    }
}

/// Everything the pipeline needs besides the candidates.
pub(crate) struct RankRequest<'a> {
    pub tags: &'a FacetSelection,
    pub search: Option<&'a str>,
    pub sort: Option<SortBy>,
    pub page: usize,
    pub limit: usize,
}

/// Primary collation key: decomposed, accents stripped, lowercased.
///
/// Latin letters with no canonical decomposition fold to their base letters.
fn collation_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    for c in name.nfd().filter(|c| !is_combining_mark(*c)) {
        match c {
            'ø' | 'Ø' => key.push('o'),
            'æ' | 'Æ' => key.push_str("ae"),
            'œ' | 'Œ' => key.push_str("oe"),
            'ß' => key.push_str("ss"),
            'đ' | 'Đ' | 'ð' | 'Ð' => key.push('d'),
            'ł' | 'Ł' => key.push('l'),
            'þ' | 'Þ' => key.push_str("th"),
            'ı' => key.push('i'),
            _ => key.extend(c.to_lowercase()),
        }
    }
    key
}

/// Name ordering, ascending.
///
/// Letters compare by base letter first, so "Élan" sorts between "apple"
/// and "ember". Ties fall back to accent and case, then to the exact text,
/// so the order is total.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

pub(crate) fn rank<T>(
    candidates: Vec<T>,
    request: &RankRequest<'_>,
    engine: &ScoreEngine,
    strategy: &dyn FacetStrategy,
) -> Page<T>
where
    T: Scorable + Rankable + Tagged,
{
    let faceted = candidates
        .into_iter()
        .filter(|c| strategy.matches(&c.tag_ids(), request.tags));

    let query = request.search.map(str::trim).filter(|q| !q.is_empty());

    let mut scored: Vec<(T, u32)> = match query {
        Some(q) => faceted
            .filter_map(|c| {
                let score = engine.score(&c, q);
                (score > 0).then_some((c, score))
            })
            .collect(),
        None => faceted.map(|c| (c, 0)).collect(),
    };
    let total = scored.len();

    // `sort_by` is stable: equal keys keep their pre-sort order.
    match (request.sort, query.is_some()) {
        (Some(SortBy::Relevance) | None, true) => {
            scored.sort_by(|a, b| b.1.cmp(&a.1));
        }
        (Some(SortBy::Relevance) | None, false) => {
            scored.sort_by(|a, b| b.0.popularity().cmp(&a.0.popularity()));
        }
        (Some(SortBy::Downloads), _) => {
            scored.sort_by(|a, b| b.0.downloads().cmp(&a.0.downloads()));
        }
        (Some(SortBy::UpdatedAt), _) => {
            scored.sort_by(|a, b| b.0.updated_at().cmp(&a.0.updated_at()));
        }
        (Some(SortBy::Name), _) => {
            scored.sort_by(|a, b| compare_names(a.0.name(), b.0.name()));
        }
    }

    let page = request.page.max(1);
    let limit = if request.limit == 0 {
        DEFAULT_LIMIT
    } else {
        request.limit
    };
    let start = (page - 1).saturating_mul(limit);
    let end = page.saturating_mul(limit);

    let items = scored
        .into_iter()
        .skip(start)
        .take(end - start)
        .map(|(c, _)| c)
        .collect();

    Page {
        items,
        total,
        has_more: end < total,
    }
}

#[cfg(test)]
#[path = "tests/pipeline_tests.rs"]
mod tests;
