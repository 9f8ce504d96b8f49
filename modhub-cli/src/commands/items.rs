use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use modhub_search::{ItemQuery, ItemSearch};

use crate::CliError;
use crate::cli_types::ListingArgs;

use super::{
    format_count, load_settings, open_catalog, page_summary, print_json, raw_params, truncate_str,
};

/// Entry point for `items`.
pub(crate) fn run_items(
    catalog_dir: Option<&Path>,
    query: Option<String>,
    kind: Option<String>,
    listing: ListingArgs,
) -> Result<(), CliError> {
    let catalog = open_catalog(catalog_dir)?;
    let settings = load_settings(Some(&listing))?;

    let raw = raw_params(query, kind, &listing)?;
    let query = ItemQuery::from_raw(&raw, settings.query.default_limit);

    let search = ItemSearch::from_settings(&catalog, &settings);
    let page = search
        .search(&query)
        .map_err(|e| CliError::query(e.to_string()))?;

    if listing.json {
        return print_json(&page);
    }

    log::info!(
        "{}",
        "Catalog Items".if_supports_color(Stdout, |t| t.bold())
    );
    log::info!(
        "{}",
        page_summary(query.page, query.limit, page.items.len(), page.total)
            .if_supports_color(Stdout, |t| t.dimmed()),
    );
    crate::log_blank();

    for item in &page.items {
        log::info!(
            "  {} {} {}",
            truncate_str(&item.name, 40).if_supports_color(Stdout, |t| t.bold()),
            format!("[{}]", item.kind()).if_supports_color(Stdout, |t| t.cyan()),
            item.slug.if_supports_color(Stdout, |t| t.dimmed()),
        );
        let stats = &item.stats;
        log::info!(
            "      {} downloads, {} views, {} resources",
            format_count(stats.total_downloads.unwrap_or(0)),
            format_count(stats.total_views.unwrap_or(0)),
            format_count(stats.total_resources.unwrap_or(0)),
        );
        if !item.description.is_empty() {
            log::info!("      {}", truncate_str(&item.description, 72));
        }
    }

    if page.has_more {
        crate::log_blank();
        log::info!(
            "{}",
            format!("More results: --page {}", query.page + 1)
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    Ok(())
}
