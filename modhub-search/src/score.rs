//! Text relevance scoring for catalog items and resources.
//!
//! Matching is case-insensitive substring matching over a handful of weighted
//! fields. The whole query is matched as a single substring; there is no
//! tokenization, stemming, or term-frequency weighting.
//!
//! Scoring rules (default weights):
//! - Name equals the query: 100
//! - Name starts with the query: 50
//! - Name contains the query: 25
//! - Description contains the query: 10
//! - Each tag name containing the query: 5
//! - Author name contains the query: 5
//!
//! Only the strongest of the three name rules fires. All other rules add to
//! the total independently. A score of 0 means "no match".

use modhub_catalog::{CatalogItem, Resource};
use serde::{Deserialize, Serialize};

/// The fields the scorer looks at.
pub trait Scorable {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn tag_names(&self) -> Vec<&str> {
        Vec::new()
    }
    fn author_name(&self) -> Option<&str> {
        None
    }
}

impl Scorable for Resource {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn tag_names(&self) -> Vec<&str> {
        self.tags.iter().map(|t| t.name.as_str()).collect()
    }

    fn author_name(&self) -> Option<&str> {
        Some(&self.author.name)
    }
}

impl Scorable for CatalogItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn tag_names(&self) -> Vec<&str> {
        self.tags.iter().map(|t| t.name.as_str()).collect()
    }

    fn author_name(&self) -> Option<&str> {
        CatalogItem::author_name(self)
    }
}

/// Points awarded by each scoring rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub exact_name: u32,
    pub prefix_name: u32,
    pub substring_name: u32,
    pub description: u32,
    pub per_tag: u32,
    pub author: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            exact_name: 100,
            prefix_name: 50,
            substring_name: 25,
            description: 10,
            per_tag: 5,
            author: 5,
        }
    }
}

/// Stateless relevance scorer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreEngine {
    weights: ScoringWeights,
}

impl ScoreEngine {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score `item` against `query`. Higher is more relevant; 0 means no match.
    ///
    /// A blank query scores 0 for every item.
    pub fn score<T: Scorable + ?Sized>(&self, item: &T, query: &str) -> u32 {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return 0;
        }
        let w = &self.weights;
        let mut score: u32 = 0;

        let name = item.name().to_lowercase();
        if name == query {
            score = score.saturating_add(w.exact_name);
        } else if name.starts_with(&query) {
            score = score.saturating_add(w.prefix_name);
        } else if name.contains(&query) {
            score = score.saturating_add(w.substring_name);
        }

        if item.description().to_lowercase().contains(&query) {
            score = score.saturating_add(w.description);
        }

        for tag in item.tag_names() {
            if tag.to_lowercase().contains(&query) {
                score = score.saturating_add(w.per_tag);
            }
        }

        if let Some(author) = item.author_name()
            && author.to_lowercase().contains(&query)
        {
            score = score.saturating_add(w.author);
        }

        score
    }
}

/// Score with the default weights.
pub fn score<T: Scorable + ?Sized>(item: &T, query: &str) -> u32 {
    ScoreEngine::default().score(item, query)
}

#[cfg(test)]
#[path = "tests/score_tests.rs"]
mod tests;
