//! Dataset fetcher.
//!
//! Downloads the flat restaurant dataset, groups its rows by company and
//! writes one menu file per restaurant into the menu directory. File names
//! follow [`menu_file_stem`], so the loader maps them back to the same
//! normalized restaurant names.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use sabor_core::menu_file_stem;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::error::Error;

/// Public source of the raw restaurant dataset.
pub const DATASET_URL: &str = "https://raw.githubusercontent.com/YuriArduino/Estudos_Artificial_Intelligence/refs/heads/Dados/restaurantes.json";

/// Download timeout for the dataset.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// One row of the raw dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetRow {
    #[serde(rename = "Company", default)]
    pub company: Option<String>,
    #[serde(rename = "Item", default)]
    pub item: Value,
    #[serde(default)]
    pub price: Value,
    #[serde(default)]
    pub description: Value,
}

/// One entry of a menu file, copied verbatim from the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuFileEntry {
    pub item: Value,
    pub price: Value,
    pub description: Value,
}

/// Menu entries of one restaurant.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyMenu {
    pub company: String,
    pub entries: Vec<MenuFileEntry>,
}

/// Download and parse the dataset.
pub async fn download_dataset(url: &str, timeout: Duration) -> Result<Vec<DatasetRow>, Error> {
    info!(%url, "Downloading restaurant dataset");

    let http = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| Error::Config(e.to_string()))?;

    let response = http.get(url).send().await.map_err(Error::Connection)?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::Api {
            status: status.as_u16(),
            message: format!("dataset download failed from {url}"),
        });
    }

    let body = response.bytes().await.map_err(Error::Decode)?;
    let rows: Vec<DatasetRow> = serde_json::from_slice(&body)?;
    info!(rows = rows.len(), "Download complete");
    Ok(rows)
}

/// Group rows by company, in order of first appearance.
///
/// Rows without a company are dropped.
pub fn group_by_company(rows: Vec<DatasetRow>) -> Vec<CompanyMenu> {
    let mut menus: Vec<CompanyMenu> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let company = match row.company {
            Some(company) if !company.is_empty() => company,
            _ => continue,
        };

        let entry = MenuFileEntry {
            item: row.item,
            price: row.price,
            description: row.description,
        };

        match index.get(&company) {
            Some(&i) => menus[i].entries.push(entry),
            None => {
                index.insert(company.clone(), menus.len());
                menus.push(CompanyMenu {
                    company,
                    entries: vec![entry],
                });
            }
        }
    }

    menus
}

/// Write one `<stem>.json` file per company, creating the directory.
pub async fn write_menu_files(dir: &Path, menus: &[CompanyMenu]) -> Result<Vec<PathBuf>, Error> {
    tokio::fs::create_dir_all(dir).await?;
    info!(dir = %dir.display(), "Writing menu files");

    let mut written = Vec::with_capacity(menus.len());
    for menu in menus {
        let path = dir.join(format!("{}.json", menu_file_stem(&menu.company)));
        let contents = serde_json::to_string_pretty(&menu.entries)?;
        tokio::fs::write(&path, contents).await?;
        info!(company = %menu.company, file = %path.display(), "Saved menu");
        written.push(path);
    }

    Ok(written)
}

/// Download the dataset and save it as menu files under `dir`.
pub async fn fetch_and_save(url: &str, dir: &Path) -> Result<Vec<PathBuf>, Error> {
    let rows = download_dataset(url, FETCH_TIMEOUT).await?;
    let menus = group_by_company(rows);
    if menus.is_empty() {
        warn!("Dataset contained no restaurants");
    }
    write_menu_files(dir, &menus).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows(value: Value) -> Vec<DatasetRow> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_group_by_company_keeps_first_seen_order() {
        let menus = group_by_company(rows(json!([
            {"Company": "McDonald’s", "Item": "Big Mac", "price": 5.99, "description": "Two patties"},
            {"Company": "Burger King", "Item": "Whopper", "price": 6.19},
            {"Company": "McDonald’s", "Item": "Fries", "price": 1.99, "description": null},
        ])));

        assert_eq!(menus.len(), 2);
        assert_eq!(menus[0].company, "McDonald’s");
        assert_eq!(menus[0].entries.len(), 2);
        assert_eq!(menus[0].entries[1].item, json!("Fries"));
        assert_eq!(menus[1].company, "Burger King");
        assert_eq!(menus[1].entries[0].description, Value::Null);
    }

    #[test]
    fn test_group_by_company_skips_rows_without_company() {
        let menus = group_by_company(rows(json!([
            {"Item": "Mystery", "price": 1.0},
            {"Company": "", "Item": "Blank", "price": 1.0},
            {"Company": "Kfc", "Item": "Popcorn Chicken", "price": 3.0},
        ])));
        assert_eq!(menus.len(), 1);
        assert_eq!(menus[0].company, "Kfc");
    }

    #[tokio::test]
    async fn test_write_menu_files_round_trips_through_loader() {
        let dir = tempfile::tempdir().unwrap();
        let menu_dir = dir.path().join("data/restaurants");
        let menus = group_by_company(rows(json!([
            {"Company": "Burger King", "Item": "Whopper", "price": 6.19, "description": "Flame grilled"},
            {"Company": "Taco Bell", "Item": "Crunchy Taco", "price": 1.79},
        ])));

        let written = write_menu_files(&menu_dir, &menus).await.unwrap();
        assert_eq!(written.len(), 2);
        assert!(menu_dir.join("burger_king.json").exists());
        assert!(menu_dir.join("taco_bell.json").exists());

        let catalog = sabor_core::load_catalog(&sabor_core::DataPaths::from_root(dir.path()));
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog["Burger King"].menu[0].item, "Whopper");
        assert_eq!(
            catalog["Taco Bell"].menu[0].category,
            sabor_core::Category::SandwichMain
        );
    }
}
