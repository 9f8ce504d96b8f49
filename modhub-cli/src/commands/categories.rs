use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use modhub_catalog::{CatalogSource, ItemKind};
use modhub_search::ItemSearch;

use crate::CliError;

use super::open_catalog;

/// Entry point for `categories`.
pub(crate) fn run_categories(
    catalog_dir: Option<&Path>,
    item_slug: &str,
    kind: Option<String>,
) -> Result<(), CliError> {
    let catalog = open_catalog(catalog_dir)?;
    let kind = parse_kind(kind.as_deref())?;

    let Some(item) = ItemSearch::new(&catalog)
        .find(kind, item_slug)
        .map_err(|e| CliError::query(e.to_string()))?
    else {
        log::warn!("No item with slug '{}'", item_slug);
        return Ok(());
    };

    let categories = catalog
        .list_categories(&item.id)
        .map_err(|e| CliError::catalog(e.to_string()))?;

    log::info!(
        "{} {}",
        item.name.if_supports_color(Stdout, |t| t.bold()),
        format!("[{}]", item.kind()).if_supports_color(Stdout, |t| t.cyan()),
    );
    crate::log_blank();
    if categories.is_empty() {
        log::info!("  (no categories)");
    }
    for category in &categories {
        log::info!(
            "  {:<24} {}",
            category.slug,
            category.name.if_supports_color(Stdout, |t| t.dimmed()),
        );
        if let Some(desc) = &category.description {
            log::info!("  {:<24} {}", "", desc);
        }
    }
    Ok(())
}

pub(crate) fn parse_kind(kind: Option<&str>) -> Result<Option<ItemKind>, CliError> {
    match kind {
        None => Ok(None),
        Some(k) => ItemKind::from_str_loose(k)
            .map(Some)
            .ok_or_else(|| CliError::other(format!("Unknown item kind: {k}"))),
    }
}
