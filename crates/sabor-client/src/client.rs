//! Sabor Express API client.

use reqwest::{Method, RequestBuilder, Url};
use sabor_core::{NewRestaurant, Restaurant, RestaurantFilter};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::Error;

/// Error body returned by the API.
#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// A client for the restaurant endpoints of the Sabor Express API.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
}

impl Client {
    /// Create a client. No request is made until the first call.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| Error::Config(format!("bad base URL '{}': {e}", config.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Config(format!("bad base URL '{}'", config.base_url)));
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Config(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// List restaurants matching the filter.
    pub async fn list_restaurants(
        &self,
        filter: &RestaurantFilter,
    ) -> Result<Vec<Restaurant>, Error> {
        let request = self.request(Method::GET, &["restaurants"]).query(filter);
        self.send(request).await
    }

    /// Fetch one restaurant with its full menu.
    pub async fn get_restaurant(&self, name: &str) -> Result<Restaurant, Error> {
        self.send(self.request(Method::GET, &["restaurants", name]))
            .await
    }

    /// Register a new, inactive restaurant.
    pub async fn create_restaurant(&self, name: &str, category: &str) -> Result<Restaurant, Error> {
        let payload = NewRestaurant::new(name)
            .with_category(category)
            .with_active(false);
        self.create(&payload).await
    }

    /// Register a restaurant from a full payload.
    pub async fn create(&self, payload: &NewRestaurant) -> Result<Restaurant, Error> {
        let request = self.request(Method::POST, &["restaurants"]).json(payload);
        self.send(request).await
    }

    /// Flip a restaurant's active flag.
    pub async fn toggle_active(&self, name: &str) -> Result<Restaurant, Error> {
        self.send(self.request(Method::PATCH, &["restaurants", name, "toggle-active"]))
            .await
    }

    fn request(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        debug!(%method, %url, "API request");
        self.http.request(method, url)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, Error> {
        let response = request.send().await.map_err(Error::Connection)?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<ApiErrorBody>(&body) {
                Ok(parsed) => parsed.message,
                Err(_) if !body.trim().is_empty() => body.trim().to_string(),
                Err(_) => "Unknown server error".to_string(),
            };
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        response.json::<T>().await.map_err(Error::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_base_url() {
        assert!(matches!(
            Client::new(ClientConfig::new("not a url")),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            Client::new(ClientConfig::new("mailto:someone@example.com")),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_request_paths_are_encoded() {
        let client = Client::new(ClientConfig::new("http://localhost:8000/api/")).unwrap();
        let request = client
            .request(Method::GET, &["restaurants", "Burger King"])
            .build()
            .unwrap();
        assert_eq!(
            request.url().as_str(),
            "http://localhost:8000/api/restaurants/Burger%20King"
        );
    }
}
