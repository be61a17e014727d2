//! The API operations the console menu needs.

use sabor_client::{Client, Error};
use sabor_core::{Restaurant, RestaurantFilter};

/// Restaurant operations used by the console menu.
pub trait RestaurantApi {
    async fn list_restaurants(&self) -> Result<Vec<Restaurant>, Error>;

    async fn get_restaurant(&self, name: &str) -> Result<Restaurant, Error>;

    async fn create_restaurant(&self, name: &str, category: &str) -> Result<Restaurant, Error>;

    async fn toggle_active(&self, name: &str) -> Result<Restaurant, Error>;
}

impl RestaurantApi for Client {
    async fn list_restaurants(&self) -> Result<Vec<Restaurant>, Error> {
        Client::list_restaurants(self, &RestaurantFilter::all()).await
    }

    async fn get_restaurant(&self, name: &str) -> Result<Restaurant, Error> {
        Client::get_restaurant(self, name).await
    }

    async fn create_restaurant(&self, name: &str, category: &str) -> Result<Restaurant, Error> {
        Client::create_restaurant(self, name, category).await
    }

    async fn toggle_active(&self, name: &str) -> Result<Restaurant, Error> {
        Client::toggle_active(self, name).await
    }
}

/// User-facing text for a failed API call.
pub fn describe_error(err: &Error) -> String {
    match err {
        Error::Connection(e) => format!("Could not connect to the API: {e}"),
        Error::Api { message, .. } => format!("API error: {message}"),
        other => other.to_string(),
    }
}
