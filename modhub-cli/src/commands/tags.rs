use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use modhub_catalog::ResourceScope;
use modhub_search::ResourceQueryOrchestrator;

use crate::CliError;

use super::categories::parse_kind;
use super::open_catalog;

/// Entry point for `tags`.
pub(crate) fn run_tags(
    catalog_dir: Option<&Path>,
    item: Option<String>,
    kind: Option<String>,
    category: Option<String>,
) -> Result<(), CliError> {
    let catalog = open_catalog(catalog_dir)?;
    let scope = ResourceScope {
        parent_item_slug: item,
        parent_item_type: parse_kind(kind.as_deref())?,
        category_slug: category,
    };

    let facets = ResourceQueryOrchestrator::new(&catalog)
        .facets(&scope)
        .map_err(|e| CliError::query(e.to_string()))?;

    if facets.is_empty() {
        log::info!("No tagged resources in scope.");
        return Ok(());
    }

    for (tag_type, counts) in &facets {
        log::info!(
            "{} {}",
            tag_type.display_name().if_supports_color(Stdout, |t| t.bold()),
            format!("({})", tag_type.facet_key()).if_supports_color(Stdout, |t| t.dimmed()),
        );
        for fc in counts {
            log::info!(
                "  {:<20} {:>6}  {}",
                fc.tag.name,
                fc.count,
                fc.tag.id.if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
    }
    Ok(())
}
