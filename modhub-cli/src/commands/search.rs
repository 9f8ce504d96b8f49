use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use modhub_catalog::Resource;
use modhub_search::{ResourceQuery, ResourceQueryOrchestrator};

use crate::CliError;
use crate::cli_types::ListingArgs;

use super::{
    format_count, load_settings, open_catalog, page_summary, print_json, raw_params, truncate_str,
};

/// Entry point for `search`.
pub(crate) fn run_search(
    catalog_dir: Option<&Path>,
    query: Option<String>,
    item: Option<String>,
    kind: Option<String>,
    category: Option<String>,
    listing: ListingArgs,
) -> Result<(), CliError> {
    let catalog = open_catalog(catalog_dir)?;
    let settings = load_settings(Some(&listing))?;

    let mut raw = raw_params(query, kind, &listing)?;
    raw.parent_item_slug = item;
    raw.category_slug = category;
    let query = ResourceQuery::from_raw(&raw, settings.query.default_limit);

    let orchestrator = ResourceQueryOrchestrator::from_settings(&catalog, &settings);
    let page = orchestrator
        .query(&query)
        .map_err(|e| CliError::query(e.to_string()))?;

    if listing.json {
        return print_json(&page);
    }

    let heading = match &query.search {
        Some(q) => format!("Resources matching \"{q}\""),
        None => "Resources".to_string(),
    };
    log::info!("{}", heading.if_supports_color(Stdout, |t| t.bold()));
    log::info!(
        "{}",
        page_summary(query.page, query.limit, page.resources.len(), page.total)
            .if_supports_color(Stdout, |t| t.dimmed()),
    );
    crate::log_blank();

    for resource in &page.resources {
        print_resource(resource);
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

fn print_resource(resource: &Resource) {
    log::info!(
        "  {} {} {}",
        truncate_str(&resource.name, 40).if_supports_color(Stdout, |t| t.bold()),
        format!("v{}", resource.version).if_supports_color(Stdout, |t| t.dimmed()),
        format!("by {}", resource.author.name).if_supports_color(Stdout, |t| t.cyan()),
    );
    log::info!(
        "      {} downloads, updated {}",
        format_count(resource.downloads),
        resource.updated_at.format("%Y-%m-%d"),
    );
    if !resource.description.is_empty() {
        log::info!("      {}", truncate_str(&resource.description, 72));
    }
    if !resource.tags.is_empty() {
        let tags: Vec<&str> = resource.tags.iter().map(|t| t.name.as_str()).collect();
        log::info!(
            "      {}",
            tags.join(", ").if_supports_color(Stdout, |t| t.green())
        );
    }
}
