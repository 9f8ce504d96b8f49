//! YAML loading for on-disk catalogs.
//!
//! Loads tag reference data, catalog items, categories, and resources
//! from a catalog directory.

use crate::types::{CatalogItem, Category, Resource, Tag};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum YamlError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("YAML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_yml::Error,
    },
    #[error("Directory not found: {0}")]
    DirNotFound(String),
}

/// Everything loaded from a catalog directory.
#[derive(Debug, Clone, Default)]
pub struct CatalogData {
    pub tags: Vec<Tag>,
    pub items: Vec<CatalogItem>,
    pub categories: Vec<Category>,
    pub resources: Vec<Resource>,
}

/// Load all catalog items from a directory. Each `.yaml` file holds one `CatalogItem`.
pub fn load_items(dir: &Path) -> Result<Vec<CatalogItem>, YamlError> {
    let mut items = Vec::new();
    for path in yaml_files(dir)? {
        items.push(parse_file(&path)?);
    }
    Ok(items)
}

/// Load all categories from a directory. Each `.yaml` file holds a list of `Category`.
pub fn load_categories(dir: &Path) -> Result<Vec<Category>, YamlError> {
    load_yaml_lists(dir)
}

/// Load all resources from a directory. Each `.yaml` file holds a list of `Resource`.
pub fn load_resources(dir: &Path) -> Result<Vec<Resource>, YamlError> {
    load_yaml_lists(dir)
}

/// Load the tag list from a single file. A missing file yields no tags.
pub fn load_tags(path: &Path) -> Result<Vec<Tag>, YamlError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    parse_file(path)
}

/// Load a whole catalog from the standard directory layout.
///
/// Expected structure:
/// ```text
/// catalog_dir/
///   tags.yaml
///   items/
///     minecraft.yaml
///     ...
///   categories/
///     minecraft.yaml
///     ...
///   resources/
///     minecraft-mods.yaml
///     ...
/// ```
pub fn load_catalog(catalog_dir: &Path) -> Result<CatalogData, YamlError> {
    if catalog_dir.exists() && !catalog_dir.is_dir() {
        return Err(YamlError::DirNotFound(catalog_dir.display().to_string()));
    }
    let tags = load_tags(&catalog_dir.join("tags.yaml"))?;
    let items = load_items(&catalog_dir.join("items"))?;
    let categories = load_categories(&catalog_dir.join("categories"))?;
    let resources = load_resources(&catalog_dir.join("resources"))?;
    log::debug!(
        "Loaded catalog from {}: {} tags, {} items, {} categories, {} resources",
        catalog_dir.display(),
        tags.len(),
        items.len(),
        categories.len(),
        resources.len(),
    );
    Ok(CatalogData {
        tags,
        items,
        categories,
        resources,
    })
}

fn load_yaml_lists<T: serde::de::DeserializeOwned>(dir: &Path) -> Result<Vec<T>, YamlError> {
    let mut all = Vec::new();
    for path in yaml_files(dir)? {
        let list: Vec<T> = parse_file(&path)?;
        all.extend(list);
    }
    Ok(all)
}

/// `.yaml`/`.yml` files in a directory, sorted by file name.
fn yaml_files(dir: &Path) -> Result<Vec<std::path::PathBuf>, YamlError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    if !dir.is_dir() {
        return Err(YamlError::DirNotFound(dir.display().to_string()));
    }

    let mut entries: Vec<_> = std::fs::read_dir(dir)
        .map_err(|e| YamlError::Io {
            path: dir.display().to_string(),
            source: e,
        })?
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.path()
                .extension()
                .is_some_and(|ext| ext == "yaml" || ext == "yml")
        })
        .collect();
    entries.sort_by_key(|e| e.file_name());

    Ok(entries.into_iter().map(|e| e.path()).collect())
}

fn parse_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, YamlError> {
    let contents = std::fs::read_to_string(path).map_err(|e| YamlError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    serde_yml::from_str(&contents).map_err(|e| YamlError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}
