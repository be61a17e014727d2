//! In-memory restaurant catalog.
//!
//! The store lives for the lifetime of the service process: it is filled
//! from the loader at startup and cleared on shutdown. Nothing is written
//! back to disk.

use std::collections::BTreeMap;

use parking_lot::RwLock;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::model::{NewRestaurant, Restaurant};
use crate::naming::normalize_name;

/// Restaurants keyed by normalized name.
pub type Catalog = BTreeMap<String, Restaurant>;

/// Optional list filters. Set fields are combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantFilter {
    /// Case-insensitive category equality.
    pub category: Option<String>,
    /// Exact active flag.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub active: Option<bool>,
    /// Case-insensitive substring of the name.
    pub name: Option<String>,
}

impl RestaurantFilter {
    /// Match every restaurant.
    pub fn all() -> Self {
        Self::default()
    }

    /// Filter by category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Filter by active flag.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    /// Filter by name substring.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Check whether a restaurant passes every set filter.
    pub fn matches(&self, restaurant: &Restaurant) -> bool {
        // Empty strings are treated as unset, like an absent query parameter.
        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
            if restaurant.category.to_lowercase() != category.to_lowercase() {
                return false;
            }
        }
        if let Some(active) = self.active {
            if restaurant.active != active {
                return false;
            }
        }
        if let Some(name) = self.name.as_deref().filter(|n| !n.is_empty()) {
            if !restaurant
                .name
                .to_lowercase()
                .contains(&name.to_lowercase())
            {
                return false;
            }
        }
        true
    }
}

/// Read an optional flag where an empty query value (`?active=`) means unset.
fn empty_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    match Option::<Flag>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Flag::Bool(value)) => Ok(Some(value)),
        Some(Flag::Text(text)) => match text.trim() {
            "" => Ok(None),
            "true" => Ok(Some(true)),
            "false" => Ok(Some(false)),
            other => Err(serde::de::Error::custom(format!(
                "expected `true` or `false` for `active`, got `{other}`"
            ))),
        },
    }
}

/// Shared, lock-protected catalog.
#[derive(Debug, Default)]
pub struct CatalogStore {
    restaurants: RwLock<Catalog>,
}

impl CatalogStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding an already loaded catalog.
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            restaurants: RwLock::new(catalog),
        }
    }

    /// Replace the whole catalog.
    pub fn replace_all(&self, catalog: Catalog) {
        *self.restaurants.write() = catalog;
    }

    /// Drop every restaurant.
    pub fn clear(&self) {
        self.restaurants.write().clear();
    }

    /// Number of restaurants.
    pub fn len(&self) -> usize {
        self.restaurants.read().len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.restaurants.read().is_empty()
    }

    /// List restaurants passing the filter, in name order.
    pub fn list(&self, filter: &RestaurantFilter) -> Vec<Restaurant> {
        self.restaurants
            .read()
            .values()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect()
    }

    /// Look up a restaurant by any spelling of its name.
    pub fn get(&self, name: &str) -> Result<Restaurant> {
        let key = normalize_name(name);
        self.restaurants
            .read()
            .get(&key)
            .cloned()
            .ok_or(Error::NotFound(key))
    }

    /// Register a new restaurant.
    pub fn create(&self, new: NewRestaurant) -> Result<Restaurant> {
        let restaurant = new.into_restaurant();
        let mut restaurants = self.restaurants.write();

        if restaurants.contains_key(&restaurant.name) {
            return Err(Error::Conflict(restaurant.name));
        }

        debug!(name = %restaurant.name, "Registered restaurant");
        restaurants.insert(restaurant.name.clone(), restaurant.clone());
        Ok(restaurant)
    }

    /// Flip a restaurant's active flag and return the updated record.
    pub fn toggle_active(&self, name: &str) -> Result<Restaurant> {
        let key = normalize_name(name);
        let mut restaurants = self.restaurants.write();
        let restaurant = restaurants.get_mut(&key).ok_or(Error::NotFound(key))?;

        restaurant.active = !restaurant.active;
        debug!(name = %restaurant.name, active = restaurant.active, "Toggled restaurant");
        Ok(restaurant.clone())
    }
}
