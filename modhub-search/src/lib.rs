//! Relevance scoring, facet filtering, and paginated listing for the
//! content catalog.
//!
//! The engine is a pure function of (catalog snapshot, query parameters).
//! Catalog data comes from any [`modhub_catalog::CatalogSource`]; nothing
//! here holds mutable state, so queries may run concurrently.

pub mod error;
pub mod facet;
pub mod items;
pub mod params;
pub mod pipeline;
pub mod resources;
pub mod score;
pub mod settings;

pub use error::QueryError;
pub use facet::{
    AllSelectedTags, AnyWithinFacet, FacetCount, FacetMode, FacetSelection, FacetStrategy, Tagged,
    available_facets, matches,
};
pub use items::ItemSearch;
pub use params::{ItemQuery, RawQueryParams, ResourceQuery, SortBy};
pub use pipeline::{Page, Rankable, compare_names};
pub use resources::{PaginatedResourcesResponse, ResourceQueryOrchestrator};
pub use score::{ScoreEngine, Scorable, ScoringWeights, score};
pub use settings::{Settings, SettingsError, settings_path};
