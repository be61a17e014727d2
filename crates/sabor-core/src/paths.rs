//! Locations of the persisted data consumed by the loader.

use std::path::{Path, PathBuf};

/// Directory holding per-restaurant menu files, relative to the data root.
pub const MENU_DIR: &str = "data/restaurants";

/// Restaurant metadata file, relative to the data root.
pub const METADATA_FILE: &str = "data/restaurants_metadata.json";

/// Menu directory and metadata file paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    /// Directory of `<restaurant>.json` menu files.
    pub menu_dir: PathBuf,
    /// JSON list of restaurant metadata records.
    pub metadata_file: PathBuf,
}

impl DataPaths {
    /// Create paths from explicit locations.
    pub fn new(menu_dir: impl Into<PathBuf>, metadata_file: impl Into<PathBuf>) -> Self {
        Self {
            menu_dir: menu_dir.into(),
            metadata_file: metadata_file.into(),
        }
    }

    /// Derive the standard layout under a project root.
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self::new(root.join(MENU_DIR), root.join(METADATA_FILE))
    }

    /// Override the menu directory.
    pub fn with_menu_dir(mut self, menu_dir: impl Into<PathBuf>) -> Self {
        self.menu_dir = menu_dir.into();
        self
    }

    /// Override the metadata file.
    pub fn with_metadata_file(mut self, metadata_file: impl Into<PathBuf>) -> Self {
        self.metadata_file = metadata_file.into();
        self
    }
}

impl Default for DataPaths {
    fn default() -> Self {
        Self::from_root(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_root() {
        let paths = DataPaths::from_root("/srv/sabor");
        assert_eq!(paths.menu_dir, PathBuf::from("/srv/sabor/data/restaurants"));
        assert_eq!(
            paths.metadata_file,
            PathBuf::from("/srv/sabor/data/restaurants_metadata.json")
        );
    }

    #[test]
    fn test_overrides() {
        let paths = DataPaths::default()
            .with_menu_dir("/tmp/menus")
            .with_metadata_file("/tmp/meta.json");
        assert_eq!(paths.menu_dir, PathBuf::from("/tmp/menus"));
        assert_eq!(paths.metadata_file, PathBuf::from("/tmp/meta.json"));
    }
}
