//! Integration tests for the catalog loader.

use std::fs;
use std::path::Path;

use sabor_core::{load_catalog, load_catalog_with_report, Category, DataPaths, Error};

struct TestData {
    dir: tempfile::TempDir,
}

impl TestData {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("data/restaurants")).unwrap();
        Self { dir }
    }

    fn paths(&self) -> DataPaths {
        DataPaths::from_root(self.dir.path())
    }

    fn root(&self) -> &Path {
        self.dir.path()
    }

    fn write_metadata(&self, contents: &str) {
        fs::write(self.root().join("data/restaurants_metadata.json"), contents).unwrap();
    }

    fn write_menu(&self, file_name: &str, contents: &str) {
        fs::write(self.root().join("data/restaurants").join(file_name), contents).unwrap();
    }
}

#[test]
fn test_metadata_merged_with_classified_menu() {
    let data = TestData::new();
    data.write_metadata(r#"[{"name": "Burger King", "category": "Fast Food", "active": true}]"#);
    data.write_menu("burger_king.json", r#"[{"item": "Big Mac", "price": 5.99}]"#);

    let catalog = load_catalog(&data.paths());
    assert_eq!(catalog.len(), 1);

    let restaurant = &catalog["Burger King"];
    assert_eq!(restaurant.name, "Burger King");
    assert!(restaurant.active);
    assert_eq!(restaurant.category, "Fast Food");
    assert_eq!(restaurant.menu.len(), 1);
    assert_eq!(restaurant.menu[0].item, "Big Mac");
    assert_eq!(restaurant.menu[0].price, 5.99);
    assert_eq!(restaurant.menu[0].category, Category::SandwichMain);
}

#[test]
fn test_metadata_lookup_is_case_insensitive() {
    let data = TestData::new();
    data.write_metadata(r#"[{"name": "TACO BELL", "category": "Mexican"}]"#);
    data.write_menu("taco_bell.json", "[]");

    let catalog = load_catalog(&data.paths());
    let restaurant = &catalog["Taco Bell"];
    assert_eq!(restaurant.category, "Mexican");
    assert!(!restaurant.active);
}

#[test]
fn test_malformed_file_is_skipped() {
    let data = TestData::new();
    data.write_menu("burger_king.json", r#"[{"item": "Whopper", "price": 4.5}]"#);
    data.write_menu("kfc.json", r#"[{"item": "Popcorn Chicken", "price": 3.0}]"#);
    data.write_menu("broken.json", r#"[{"item": "Fries", "price": "#);

    let (catalog, report) = load_catalog_with_report(&data.paths());
    assert_eq!(catalog.len(), 2);
    assert_eq!(report.loaded, 2);
    assert!(catalog.contains_key("Burger King"));
    assert!(catalog.contains_key("Kfc"));

    assert_eq!(report.failures.len(), 1);
    assert!(report.failures[0].path.ends_with("broken.json"));
    assert!(matches!(report.failures[0].error, Error::Parse { .. }));
}

#[test]
fn test_one_invalid_item_fails_whole_file() {
    let data = TestData::new();
    data.write_menu(
        "pizza_hut.json",
        r#"[{"item": "Pepperoni Pizza", "price": 9.99}, {"item": "Breadsticks", "price": "n/a"}]"#,
    );
    data.write_menu("subway.json", r#"[{"item": "Veggie Delite", "price": 5.0}]"#);

    let (catalog, report) = load_catalog_with_report(&data.paths());
    assert!(!catalog.contains_key("Pizza Hut"));
    assert!(catalog.contains_key("Subway"));
    assert_eq!(report.failures.len(), 1);
    assert!(matches!(report.failures[0].error, Error::Validation(_)));
}

#[test]
fn test_non_list_menu_is_a_validation_failure() {
    let data = TestData::new();
    data.write_menu("odd.json", r#"{"item": "Big Mac"}"#);

    let (catalog, report) = load_catalog_with_report(&data.paths());
    assert!(catalog.is_empty());
    assert!(matches!(report.failures[0].error, Error::Validation(_)));
}

#[test]
fn test_missing_metadata_uses_defaults() {
    let data = TestData::new();
    data.write_menu("wendys.json", r#"[{"item": "Frosty", "price": 1.0, "description": null}]"#);

    let (catalog, report) = load_catalog_with_report(&data.paths());
    assert!(!report.metadata_loaded);

    let restaurant = &catalog["Wendys"];
    assert_eq!(restaurant.category, "Unspecified");
    assert!(!restaurant.active);
    assert_eq!(restaurant.menu[0].description, None);
}

#[test]
fn test_malformed_metadata_is_ignored() {
    let data = TestData::new();
    data.write_metadata("not json");
    data.write_menu("wendys.json", "[]");

    let (catalog, report) = load_catalog_with_report(&data.paths());
    assert!(!report.metadata_loaded);
    assert_eq!(catalog.len(), 1);
}

#[test]
fn test_bad_metadata_records_are_skipped_individually() {
    let data = TestData::new();
    data.write_metadata(
        r#"[
            {"name": "Burger King", "category": "Fast Food", "active": true},
            {"category": "Orphan"},
            {"name": "", "category": "Blank"},
            {"name": "Kfc", "active": "yes"}
        ]"#,
    );
    data.write_menu("burger_king.json", r#"[{"item": "Whopper", "price": 6.19}]"#);
    data.write_menu("kfc.json", "[]");

    let (catalog, report) = load_catalog_with_report(&data.paths());
    assert!(report.metadata_loaded);
    assert_eq!(catalog.len(), 2);

    let burger_king = &catalog["Burger King"];
    assert!(burger_king.active);
    assert_eq!(burger_king.category, "Fast Food");

    let kfc = &catalog["Kfc"];
    assert_eq!(kfc.category, "Unspecified");
    assert!(!kfc.active);
}

#[test]
fn test_numeric_string_prices_are_accepted() {
    let data = TestData::new();
    data.write_menu("wendys.json", r#"[{"item": "Frosty", "price": "1.99"}]"#);

    let catalog = load_catalog(&data.paths());
    assert_eq!(catalog["Wendys"].menu[0].price, 1.99);
}

#[test]
fn test_missing_menu_dir_gives_empty_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = load_catalog(&DataPaths::from_root(dir.path()));
    assert!(catalog.is_empty());
}

#[test]
fn test_non_json_files_are_ignored() {
    let data = TestData::new();
    data.write_menu("notes.txt", "hello");
    data.write_menu("kfc.json", "[]");

    let (catalog, report) = load_catalog_with_report(&data.paths());
    assert_eq!(catalog.len(), 1);
    assert!(report.failures.is_empty());
}
