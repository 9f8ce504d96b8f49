pub(crate) mod categories;
pub(crate) mod config;
pub(crate) mod items;
pub(crate) mod search;
pub(crate) mod tags;

use std::io::Write;
use std::path::{Path, PathBuf};

use modhub_catalog::MemoryCatalog;
use modhub_search::{FacetMode, RawQueryParams, Settings};
use serde::Serialize;

use crate::CliError;
use crate::cli_types::ListingArgs;

/// Default catalog location: `./catalog`.
pub(crate) fn default_catalog_dir() -> PathBuf {
    PathBuf::from("catalog")
}

pub(crate) fn open_catalog(dir: Option<&Path>) -> Result<MemoryCatalog, CliError> {
    let dir = dir.map(Path::to_path_buf).unwrap_or_else(default_catalog_dir);
    if !dir.exists() {
        log::warn!("No catalog found at {}", dir.display());
    }
    MemoryCatalog::load(&dir)
        .map_err(|e| CliError::catalog(format!("Failed to load {}: {}", dir.display(), e)))
}

pub(crate) fn load_settings(listing: Option<&ListingArgs>) -> Result<Settings, CliError> {
    let mut settings = Settings::load().map_err(|e| CliError::config(e.to_string()))?;
    if listing.is_some_and(|l| l.grouped) {
        settings.query.facet_mode = FacetMode::Grouped;
    }
    Ok(settings)
}

/// Turn listing flags into raw query parameters.
pub(crate) fn raw_params(
    query: Option<String>,
    kind: Option<String>,
    listing: &ListingArgs,
) -> Result<RawQueryParams, CliError> {
    let mut facets = Vec::new();
    for ids in &listing.tag {
        facets.push((modhub_search::facet::UNGROUPED_KEY.to_string(), ids.clone()));
    }
    for pair in &listing.facet {
        let (key, ids) = pair
            .split_once('=')
            .ok_or_else(|| CliError::other(format!("--facet expects KEY=IDS, got '{pair}'")))?;
        facets.push((key.to_string(), ids.to_string()));
    }

    Ok(RawQueryParams {
        parent_item_type: kind,
        search: query,
        sort_by: listing.sort.clone(),
        page: listing.page.clone(),
        limit: listing.limit.clone(),
        facets,
        ..Default::default()
    })
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::other(format!("Failed to serialize output: {e}")))?;
    let mut out = std::io::stdout().lock();
    writeln!(out, "{json}")?;
    Ok(())
}

/// Truncate a string to a maximum width, appending "..." if needed.
pub(crate) fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 3 {
        let head: String = s.chars().take(max - 3).collect();
        format!("{head}...")
    } else {
        s.chars().take(max).collect()
    }
}

/// Format a count with thousands separators: 25800 → "25,800".
pub(crate) fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// "Showing 21-40 of 57" style summary for a page.
pub(crate) fn page_summary(page: usize, limit: usize, shown: usize, total: usize) -> String {
    if shown == 0 {
        return format!("No results on page {page} ({total} total)");
    }
    let first = (page - 1) * limit + 1;
    format!("Showing {}-{} of {}", first, first + shown - 1, total)
}
