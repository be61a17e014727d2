//! Catalog record types.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::classifier::{classify, Category};
use crate::error::{Error, Result};
use crate::naming::normalize_name;

/// Category assigned to restaurants that do not declare one.
pub const DEFAULT_CATEGORY: &str = "Unspecified";

/// Highest allowed review rating.
pub const MAX_RATING: f64 = 5.0;

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// A menu item with its derived category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Display name of the item.
    pub item: String,
    /// Price as listed in the source data.
    pub price: f64,
    /// Optional free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Category computed from the item name.
    pub category: Category,
}

impl MenuItem {
    /// Build an item, classifying it from its name.
    pub fn new(item: impl Into<String>, price: f64, description: Option<String>) -> Self {
        let item = item.into();
        let category = classify(Some(&item));
        Self {
            item,
            price,
            description,
            category,
        }
    }

    /// Classify and validate one raw menu entry from a menu file.
    ///
    /// The category is computed from the `item` field first, then the entry
    /// is checked: `item` must be a string, `price` a number, and
    /// `description` a string or null when present.
    pub fn from_raw(raw: &Value) -> Result<Self> {
        let name = raw.get("item").and_then(Value::as_str);
        let category = classify(name);

        let obj = raw
            .as_object()
            .ok_or_else(|| Error::Validation(format!("menu entry is not an object: {raw}")))?;

        let item = name
            .ok_or_else(|| Error::Validation("field `item` must be a string".to_string()))?
            .to_string();

        let price = obj.get("price").and_then(parse_price).ok_or_else(|| {
            Error::Validation(format!("field `price` of `{item}` must be a number"))
        })?;

        let description = match obj.get("description") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                return Err(Error::Validation(format!(
                    "field `description` of `{item}` must be a string, got {other}"
                )))
            }
        };

        Ok(Self {
            item,
            price,
            description,
            category,
        })
    }
}

/// A JSON number, or a string holding one (`"5.99"`).
fn parse_price(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|p| p.is_finite()),
        _ => None,
    }
}

/// Menu item as submitted by clients, before classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMenuItem {
    pub item: String,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<NewMenuItem> for MenuItem {
    fn from(item: NewMenuItem) -> Self {
        MenuItem::new(item.item, item.price, item.description)
    }
}

/// A customer review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawReview")]
pub struct Review {
    pub customer: String,
    pub rating: f64,
}

#[derive(Deserialize)]
struct RawReview {
    customer: String,
    rating: f64,
}

impl TryFrom<RawReview> for Review {
    type Error = Error;

    fn try_from(raw: RawReview) -> Result<Self> {
        Review::new(raw.customer, raw.rating)
    }
}

impl Review {
    /// Create a review, rejecting ratings outside `0..=5`.
    pub fn new(customer: impl Into<String>, rating: f64) -> Result<Self> {
        if !(0.0..=MAX_RATING).contains(&rating) {
            return Err(Error::Validation(format!(
                "rating must be between 0 and {MAX_RATING}, got {rating}"
            )));
        }
        Ok(Self {
            customer: customer.into(),
            rating,
        })
    }
}

/// A restaurant with its menu and reviews.
///
/// Serializes with an extra derived `average_rating` field, which is ignored
/// when deserializing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Restaurant {
    /// Normalized display name, also the catalog key.
    pub name: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub menu: Vec<MenuItem>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl Serialize for Restaurant {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Restaurant", 6)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("category", &self.category)?;
        state.serialize_field("active", &self.active)?;
        state.serialize_field("menu", &self.menu)?;
        state.serialize_field("reviews", &self.reviews)?;
        state.serialize_field("average_rating", &self.average_rating())?;
        state.end()
    }
}

impl Restaurant {
    /// Create an inactive restaurant with no menu or reviews.
    pub fn new(name: &str) -> Self {
        Self {
            name: normalize_name(name),
            category: default_category(),
            active: false,
            menu: Vec::new(),
            reviews: Vec::new(),
        }
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the active flag.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Set the menu.
    pub fn with_menu(mut self, menu: Vec<MenuItem>) -> Self {
        self.menu = menu;
        self
    }

    /// Set the reviews.
    pub fn with_reviews(mut self, reviews: Vec<Review>) -> Self {
        self.reviews = reviews;
        self
    }

    /// Add a single review.
    pub fn add_review(&mut self, review: Review) {
        self.reviews.push(review);
    }

    /// Mean rating rounded to one decimal, or 0.0 without reviews.
    pub fn average_rating(&self) -> f64 {
        if self.reviews.is_empty() {
            return 0.0;
        }
        let total: f64 = self.reviews.iter().map(|r| r.rating).sum();
        let mean = total / self.reviews.len() as f64;
        (mean * 10.0).round() / 10.0
    }

    /// Distinct item categories present on the menu, sorted.
    pub fn menu_categories(&self) -> Vec<Category> {
        let mut categories: Vec<Category> = self.menu.iter().map(|i| i.category).collect();
        categories.sort();
        categories.dedup();
        categories
    }
}

/// Administrative fields for a restaurant, kept apart from its menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataRecord {
    pub name: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub active: bool,
}

/// Payload for registering a restaurant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRestaurant {
    pub name: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub menu: Vec<NewMenuItem>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl NewRestaurant {
    /// Create a payload with default category and `active = false`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: default_category(),
            active: false,
            menu: Vec::new(),
            reviews: Vec::new(),
        }
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the active flag.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Build the stored record, classifying any submitted menu items.
    pub fn into_restaurant(self) -> Restaurant {
        Restaurant::new(&self.name)
            .with_category(self.category)
            .with_active(self.active)
            .with_menu(self.menu.into_iter().map(MenuItem::from).collect())
            .with_reviews(self.reviews)
    }
}
