//! Catalog loader.
//!
//! Builds the catalog from a metadata file and a directory of per-restaurant
//! menu files. Failures are isolated per file: a file that cannot be read,
//! parsed or validated is logged and left out, and loading carries on with
//! the rest.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{error, info, warn};

use crate::error::{Error, Result};
use crate::model::{MenuItem, MetadataRecord, Restaurant};
use crate::naming::normalize_name;
use crate::paths::DataPaths;
use crate::store::Catalog;

/// A menu file that was skipped.
#[derive(Debug)]
pub struct LoadFailure {
    /// Path of the skipped file.
    pub path: PathBuf,
    /// Why it was skipped.
    pub error: Error,
}

/// Outcome of a catalog load.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Number of restaurants loaded.
    pub loaded: usize,
    /// Menu files that were skipped.
    pub failures: Vec<LoadFailure>,
    /// Whether the metadata file was found and parsed.
    pub metadata_loaded: bool,
}

/// Load the catalog, logging and skipping any file that fails.
pub fn load_catalog(paths: &DataPaths) -> Catalog {
    load_catalog_with_report(paths).0
}

/// Load the catalog and also return what was skipped.
pub fn load_catalog_with_report(paths: &DataPaths) -> (Catalog, LoadReport) {
    let mut catalog = Catalog::new();
    let mut report = LoadReport::default();

    let metadata = match read_metadata(&paths.metadata_file) {
        Some(metadata) => {
            report.metadata_loaded = true;
            metadata
        }
        None => HashMap::new(),
    };

    let files = match menu_files(&paths.menu_dir) {
        Some(files) => files,
        None => {
            warn!(dir = %paths.menu_dir.display(), "Menu directory not found");
            return (catalog, report);
        }
    };

    for path in files {
        match load_restaurant(&path, &metadata) {
            Ok(restaurant) => {
                catalog.insert(normalize_name(&restaurant.name), restaurant);
            }
            Err(err) => {
                error!(file = %file_name(&path), error = %err, "Skipping menu file");
                report.failures.push(LoadFailure { path, error: err });
            }
        }
    }

    report.loaded = catalog.len();
    info!(count = report.loaded, "Loaded restaurants");
    (catalog, report)
}

/// Read the metadata file, indexed by normalized name.
///
/// Returns `None` when the file is missing or is not a JSON list; loading
/// continues without metadata in that case. Individual records that are
/// malformed or have no name are skipped.
fn read_metadata(path: &Path) -> Option<HashMap<String, MetadataRecord>> {
    if !path.exists() {
        warn!(file = %path.display(), "Metadata file not found");
        return None;
    }

    let raw_records: Vec<Value> = match read_json(path) {
        Ok(records) => records,
        Err(err) => {
            warn!(error = %err, "Ignoring unusable metadata file");
            return None;
        }
    };

    let mut metadata = HashMap::with_capacity(raw_records.len());
    for (index, raw) in raw_records.into_iter().enumerate() {
        let record: MetadataRecord = match serde_json::from_value(raw) {
            Ok(record) => record,
            Err(err) => {
                warn!(index, error = %err, "Skipping metadata record");
                continue;
            }
        };
        if record.name.trim().is_empty() {
            warn!(index, "Skipping metadata record without a name");
            continue;
        }
        metadata.insert(normalize_name(&record.name), record);
    }

    Some(metadata)
}

/// List `*.json` files in the menu directory, sorted by name.
fn menu_files(dir: &Path) -> Option<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).ok()?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    Some(files)
}

fn load_restaurant(path: &Path, metadata: &HashMap<String, MetadataRecord>) -> Result<Restaurant> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    let name = normalize_name(stem);

    let raw_items: Vec<Value> = read_json(path)?;
    let menu = raw_items
        .iter()
        .map(MenuItem::from_raw)
        .collect::<Result<Vec<_>>>()?;

    let restaurant = match metadata.get(&name) {
        Some(meta) => Restaurant::new(&meta.name)
            .with_category(meta.category.clone())
            .with_active(meta.active),
        None => Restaurant::new(&name),
    };

    Ok(restaurant.with_menu(menu))
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| {
        if source.is_data() {
            Error::Validation(format!("{}: {source}", file_name(path)))
        } else {
            Error::Parse {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
