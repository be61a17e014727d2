//! Menu item classifier.
//!
//! Labels a menu item from its display name by keyword substring matching.
//! Categories are checked in a fixed order and the first one with any
//! matching keyword wins, so [`RULES`] is a slice rather than a map.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Menu item category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Beverage,
    Dessert,
    HealthyOption,
    SandwichMain,
    SideDish,
    Other,
}

impl Category {
    /// Label as exposed to clients.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Beverage => "BEVERAGE",
            Category::Dessert => "DESSERT",
            Category::HealthyOption => "HEALTHY_OPTION",
            Category::SandwichMain => "SANDWICH_MAIN",
            Category::SideDish => "SIDE_DISH",
            Category::Other => "OTHER",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered classification rules. Earlier entries take priority.
pub const RULES: &[(Category, &[&str])] = &[
    (
        Category::Beverage,
        &[
            "small",
            "medium",
            "large",
            "child",
            "fl oz",
            "oz cup",
            "cup",
            "liter",
            "l",
            "soda",
            "coca",
            "sprite",
            "fanta",
            "pepsi",
            "mountain dew",
            "shake",
            "latte",
            "coffee",
            "tea",
            "juice",
            "milk",
            "water",
            "mochaccino",
            "capuccino",
            "mccafe",
            "frappe",
        ],
    ),
    (
        Category::Dessert,
        &[
            "pie",
            "flurry",
            "ice cream",
            "parfait",
            "sundae",
            "cookie",
            "muffin",
            "apple slice",
            "cone",
            "dessert",
            "caramel",
            "chocolate chip",
            "m&m’s",
            "oreo",
        ],
    ),
    (
        Category::HealthyOption,
        &[
            "salad",
            "wrap",
            "grilled",
            "oatmeal",
            "yogurt",
            "fruit",
            "vinaigrette",
            "garden",
            "veggie",
            "light",
        ],
    ),
    (
        Category::SandwichMain,
        &[
            "burger",
            "sandwi",
            "mac",
            "whopper",
            "big n’ tasty",
            "mcdouble",
            "pizza",
            "taco",
            "burrito",
            "sandwich",
            "hotdog",
            "quarter pounder",
            "breakfast",
            "pancake",
            "hotcakes",
            "biscuit",
        ],
    ),
    (
        Category::SideDish,
        &[
            "fries",
            "ring",
            "nuggets",
            "pc",
            "piece",
            "side",
            "ketchup",
            "sauce",
            "dip",
            "strips",
            "gizzards",
            "livers",
            "chicken",
            "popcorn",
            "wings",
            "taco shell",
            "crispy",
        ],
    ),
];

/// Classify a menu item by name. Absent or empty names are [`Category::Other`].
pub fn classify(item_name: Option<&str>) -> Category {
    match item_name {
        Some(name) if !name.is_empty() => classify_name(name),
        _ => Category::Other,
    }
}

/// Classify a menu item by name.
pub fn classify_name(item_name: &str) -> Category {
    let lowered = item_name.to_lowercase();

    RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lowered.contains(kw)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_absent_are_other() {
        assert_eq!(classify(None), Category::Other);
        assert_eq!(classify(Some("")), Category::Other);
        assert_eq!(classify_name(""), Category::Other);
    }

    #[test]
    fn test_beverages() {
        assert_eq!(classify_name("Coca-Cola"), Category::Beverage);
        assert_eq!(classify_name("Sprite"), Category::Beverage);
        assert_eq!(classify_name("Iced Coffee"), Category::Beverage);
        assert_eq!(classify_name("SWEET TEA"), Category::Beverage);
    }

    #[test]
    fn test_each_category() {
        assert_eq!(classify_name("Oreo"), Category::Dessert);
        assert_eq!(classify_name("Sundae"), Category::Dessert);
        assert_eq!(classify_name("Garden Wrap"), Category::HealthyOption);
        assert_eq!(classify_name("Big Mac"), Category::SandwichMain);
        assert_eq!(classify_name("Whopper"), Category::SandwichMain);
        assert_eq!(classify_name("Onion Rings"), Category::SideDish);
        assert_eq!(classify_name("Nuggets"), Category::SideDish);
        assert_eq!(classify_name("Hash Browns"), Category::Other);
    }

    #[test]
    fn test_first_category_wins() {
        // "large" is a beverage keyword and "fries" a side keyword.
        assert_eq!(classify_name("Large Fries"), Category::Beverage);
        // "shake" beats "oreo".
        assert_eq!(classify_name("Oreo Shake"), Category::Beverage);
        // "pie" beats "chicken".
        assert_eq!(classify_name("Chicken Pot Pie"), Category::Dessert);
    }

    #[test]
    fn test_single_letter_keyword() {
        // Any "l" reaching the beverage check matches.
        assert_eq!(classify_name("Double Whopper"), Category::Beverage);
        assert_eq!(classify_name("Chicken Nuggets"), Category::SideDish);
    }

    #[test]
    fn test_deterministic() {
        for name in ["Big Mac", "Large Fries", "Apple Pie", "", "Xyz"] {
            assert_eq!(classify_name(name), classify_name(name));
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(Category::SandwichMain.to_string(), "SANDWICH_MAIN");
        assert_eq!(
            serde_json::to_string(&Category::HealthyOption).unwrap(),
            "\"HEALTHY_OPTION\""
        );
        let parsed: Category = serde_json::from_str("\"SIDE_DISH\"").unwrap();
        assert_eq!(parsed, Category::SideDish);
    }
}
