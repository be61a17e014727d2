//! Sabor Express Core - Restaurant catalog, menu classifier and data loader.
//!
//! This crate holds everything the HTTP service and the console client share:
//! the record types, the keyword classifier that labels menu items, the
//! loader that builds the catalog from local files and the in-memory store.

pub mod classifier;
pub mod error;
pub mod loader;
pub mod model;
pub mod naming;
pub mod paths;
pub mod store;

pub use classifier::{classify, classify_name, Category};
pub use error::{Error, Result};
pub use loader::{load_catalog, load_catalog_with_report, LoadFailure, LoadReport};
pub use model::{
    MenuItem, MetadataRecord, NewMenuItem, NewRestaurant, Restaurant, Review, DEFAULT_CATEGORY,
};
pub use naming::{menu_file_stem, normalize_name};
pub use paths::DataPaths;
pub use store::{Catalog, CatalogStore, RestaurantFilter};
