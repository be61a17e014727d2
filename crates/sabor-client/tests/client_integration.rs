//! Client tests against an in-process API server.

use std::time::Duration;

use sabor_client::{Client, ClientConfig, Error};
use sabor_core::{Catalog, CatalogStore, MenuItem, NewRestaurant, Restaurant, RestaurantFilter};
use sabor_server::{create_router, AppState, ServerConfig};
use tokio::net::TcpListener;

async fn spawn_server() -> String {
    let mut catalog = Catalog::new();
    let restaurant = Restaurant::new("Burger King")
        .with_category("Fast Food")
        .with_active(true)
        .with_menu(vec![MenuItem::new("Whopper", 5.49, None)]);
    catalog.insert(restaurant.name.clone(), restaurant);

    let state = AppState::new(CatalogStore::with_catalog(catalog), ServerConfig::default());
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, create_router(state)).await.unwrap();
    });

    format!("http://{addr}")
}

async fn client() -> Client {
    Client::new(ClientConfig::new(spawn_server().await)).unwrap()
}

#[tokio::test]
async fn test_list_and_filter() {
    let client = client().await;

    let all = client.list_restaurants(&RestaurantFilter::all()).await.unwrap();
    assert_eq!(all.len(), 1);

    let none = client
        .list_restaurants(&RestaurantFilter::all().with_active(false))
        .await
        .unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_get_restaurant_with_spaces_in_name() {
    let client = client().await;
    let restaurant = client.get_restaurant("burger king").await.unwrap();
    assert_eq!(restaurant.name, "Burger King");
    assert_eq!(restaurant.menu.len(), 1);
}

#[tokio::test]
async fn test_get_missing_reports_server_message() {
    let client = client().await;
    let err = client.get_restaurant("Nowhere").await.unwrap_err();
    match err {
        Error::Api { status, message } => {
            assert_eq!(status, 404);
            assert!(message.contains("Nowhere"), "{message}");
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_create_then_conflict() {
    let client = client().await;

    let created = client.create_restaurant("taco bell", "Mexican").await.unwrap();
    assert_eq!(created.name, "Taco Bell");
    assert!(!created.active);

    let err = client.create_restaurant("Taco Bell", "Mexican").await.unwrap_err();
    assert_eq!(err.status(), Some(409));

    let payload = NewRestaurant::new("kfc").with_active(true);
    let created = client.create(&payload).await.unwrap();
    assert!(created.active);
}

#[tokio::test]
async fn test_toggle_active() {
    let client = client().await;
    assert!(!client.toggle_active("Burger_King").await.unwrap().active);
    assert!(client.toggle_active("Burger_King").await.unwrap().active);
    assert_eq!(
        client.toggle_active("ghost").await.unwrap_err().status(),
        Some(404)
    );
}

#[tokio::test]
async fn test_unreachable_server_is_connection_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = Client::new(
        ClientConfig::new(format!("http://{addr}")).with_timeout(Duration::from_secs(1)),
    )
    .unwrap();

    let err = client
        .list_restaurants(&RestaurantFilter::all())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Connection(_)), "{err:?}");
}
