use modhub_catalog::SourceError;
use thiserror::Error;

/// Errors that can occur while answering a catalog query.
///
/// Only [`QueryError::UpstreamUnavailable`] ever escapes a query call; the
/// other variants are recovered inside the engine (defaults for bad
/// parameters, an empty page for an unknown scope).
#[derive(Debug, Error)]
pub enum QueryError {
    /// A paging or sorting parameter could not be used as given
    #[error("Invalid parameter {name}: {value:?}")]
    InvalidParameter { name: &'static str, value: String },

    /// The requested parent item or category does not exist
    #[error("Scope not found: {0}")]
    ScopeNotFound(String),

    /// The catalog source failed to return data
    #[error("Catalog source unavailable: {0}")]
    UpstreamUnavailable(#[from] SourceError),
}

impl QueryError {
    pub fn invalid_parameter(name: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            value: value.into(),
        }
    }

    pub fn scope_not_found(msg: impl Into<String>) -> Self {
        Self::ScopeNotFound(msg.into())
    }
}
