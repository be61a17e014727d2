//! Sabor Express Client - HTTP client for the Sabor Express API.
//!
//! Also hosts the dataset fetcher that downloads the raw restaurant data and
//! writes the per-restaurant menu files the server loads at startup.
//!
//! # Quick Start
//!
//! ```ignore
//! use sabor_client::{Client, ClientConfig};
//! use sabor_core::RestaurantFilter;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new(ClientConfig::localhost())?;
//!
//!     for restaurant in client.list_restaurants(&RestaurantFilter::all()).await? {
//!         println!("{} ({})", restaurant.name, restaurant.category);
//!     }
//!
//!     let toggled = client.toggle_active("burger_king").await?;
//!     println!("active: {}", toggled.active);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod fetch;

pub use client::Client;
pub use config::ClientConfig;
pub use error::Error;
