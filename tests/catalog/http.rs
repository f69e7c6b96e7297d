//! HTTP transport integration tests.
//!
//! Starts an axum server and exercises it with reqwest.

use std::sync::Arc;

use item_catalog::http::{self, HttpOptions};
use item_catalog::{CatalogService, Decimal, InMemoryItemStore, ItemStore};
use serde_json::{json, Value};

/// Bind to port 0 and return the actual address.
async fn start_service(service: CatalogService<InMemoryItemStore>, options: HttpOptions) -> String {
    let app = http::router(Arc::new(service), &options);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn start_server(store: InMemoryItemStore, options: HttpOptions) -> String {
    start_service(CatalogService::new(store), options).await
}

async fn start_empty() -> String {
    start_server(InMemoryItemStore::empty(), HttpOptions::default()).await
}

fn needle() -> Value {
    json!({
        "name": "Arya's Needle",
        "category": "Weapon",
        "levelRequirement": 20,
        "price": 3000,
        "rarity": "Rare"
    })
}

#[tokio::test]
async fn list_seeded_items() {
    let base = start_server(InMemoryItemStore::new(), HttpOptions::default()).await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/items")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: Vec<Value> = resp.json().await.unwrap();
    assert_eq!(body.len(), 20);
    assert_eq!(body[0]["id"], 1);
    assert_eq!(body[0]["category"], "ValyrianSteel");
    assert!(body[0]["createdAt"].is_string());
    assert!(body[0].get("levelRequirement").is_some());
}

#[tokio::test]
async fn create_then_get() {
    let base = start_empty().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/items"))
        .json(&needle())
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Item created successfully" }));

    let resp = client.get(format!("{base}/items/1")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let item: Value = resp.json().await.unwrap();
    assert_eq!(item["id"], 1);
    assert_eq!(item["name"], "Arya's Needle");
    assert_eq!(item["rarity"], "Rare");
    assert_eq!(item["price"], 3000.0);
}

#[tokio::test]
async fn unknown_id_returns_404_for_get_put_delete() {
    let base = start_empty().await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/items/77")).send().await.unwrap();
    assert_eq!(resp.status(), 404);
    assert!(resp.bytes().await.unwrap().is_empty());

    let resp = client
        .put(format!("{base}/items/77"))
        .json(&needle())
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let resp = client.delete(format!("{base}/items/77")).send().await.unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn update_keeps_id_and_created_at() {
    let store = InMemoryItemStore::empty();
    let base = start_server(store.clone(), HttpOptions::default()).await;
    let client = reqwest::Client::new();

    client
        .post(format!("{base}/items"))
        .json(&needle())
        .send()
        .await
        .unwrap();
    let created_at = store.get_by_id(1).unwrap().unwrap().created_at;

    let resp = client
        .put(format!("{base}/items/1"))
        .json(&json!({
            "name": "Needle (reforged)",
            "category": "ValyrianSteel",
            "levelRequirement": 30,
            "price": 4500.5,
            "rarity": "Epic"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Item updated successfully");

    let item = store.get_by_id(1).unwrap().unwrap();
    assert_eq!(item.name, "Needle (reforged)");
    assert_eq!(item.price, Decimal::new(45005, 1));
    assert_eq!(item.created_at, created_at);
}

#[tokio::test]
async fn delete_twice_returns_404_second_time() {
    let base = start_empty().await;
    let client = reqwest::Client::new();

    client
        .post(format!("{base}/items"))
        .json(&needle())
        .send()
        .await
        .unwrap();

    let resp = client.delete(format!("{base}/items/1")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Item deleted successfully");

    let resp = client.delete(format!("{base}/items/1")).send().await.unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn generate_then_list() {
    let base = start_server(InMemoryItemStore::new(), HttpOptions::default()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/items/generate"))
        .json(&json!({ "count": 5 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Generated 5 items successfully");

    let items: Vec<Value> = client
        .get(format!("{base}/items"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(items.len(), 25);
}

#[tokio::test]
async fn generate_over_configured_limit_returns_400() {
    let service = CatalogService::new(InMemoryItemStore::empty()).with_max_generate(100);
    let base = start_service(service, HttpOptions::default()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/items/generate"))
        .json(&json!({ "count": 101 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("at most 100"));
}

#[tokio::test]
async fn generate_is_unbounded_without_a_limit() {
    let store = InMemoryItemStore::empty();
    let base = start_server(store.clone(), HttpOptions::default()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/items/generate"))
        .json(&json!({ "count": 1001 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(store.len().unwrap(), 1001);
}

#[tokio::test]
async fn generate_negative_count_is_a_no_op() {
    let store = InMemoryItemStore::empty();
    let base = start_server(store.clone(), HttpOptions::default()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/items/generate"))
        .json(&json!({ "count": -3 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Generated -3 items successfully");
    assert!(store.is_empty().unwrap());
}

#[tokio::test]
async fn blank_name_returns_400() {
    let base = start_empty().await;
    let client = reqwest::Client::new();

    let mut body = needle();
    body["name"] = json!("  ");
    let resp = client
        .post(format!("{base}/items"))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn analytics_endpoint() {
    let base = start_empty().await;
    let client = reqwest::Client::new();

    let empty: Value = client
        .get(format!("{base}/items/analytics"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(empty["totalItems"], 0);
    assert_eq!(empty["averagePrice"], 0.0);
    assert_eq!(empty["itemsByCategory"], json!({}));
    assert_eq!(empty["itemsByRarity"], json!({}));
    assert!(empty["highestLevelItem"].is_null());

    for price in [100, 200, 300] {
        let mut body = needle();
        body["price"] = json!(price);
        client
            .post(format!("{base}/items"))
            .json(&body)
            .send()
            .await
            .unwrap();
    }

    let analytics: Value = client
        .get(format!("{base}/items/analytics"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(analytics["totalItems"], 3);
    assert_eq!(analytics["averagePrice"], 200.0);
    assert_eq!(analytics["itemsByCategory"], json!({ "Weapon": 3 }));
    assert_eq!(analytics["itemsByRarity"], json!({ "Rare": 3 }));
    assert_eq!(analytics["highestLevelItem"]["id"], 1);
}

#[tokio::test]
async fn analytics_average_keeps_decimal_precision() {
    let base = start_empty().await;
    let client = reqwest::Client::new();

    for price in [0.1, 0.2] {
        let mut body = needle();
        body["price"] = json!(price);
        let resp = client
            .post(format!("{base}/items"))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
    }

    let analytics: Value = client
        .get(format!("{base}/items/analytics"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(analytics["averagePrice"], 0.15);
}

#[tokio::test]
async fn enumeration_endpoints() {
    let base = start_empty().await;
    let client = reqwest::Client::new();

    let categories: Vec<String> = client
        .get(format!("{base}/items/categories"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(categories.len(), 8);
    assert!(categories.contains(&"ValyrianSteel".to_string()));

    let rarities: Vec<String> = client
        .get(format!("{base}/items/rarities"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        rarities,
        vec!["Common", "Uncommon", "Rare", "Epic", "Legendary", "Mythic"]
    );
}

#[tokio::test]
async fn cors_headers_and_preflight() {
    let base = start_empty().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/items"))
        .header("origin", "http://example.test")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.headers()["access-control-allow-origin"], "*");

    let resp = client
        .request(reqwest::Method::OPTIONS, format!("{base}/items/3"))
        .header("origin", "http://example.test")
        .header("access-control-request-method", "PUT")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 204);
    let methods = resp.headers()["access-control-allow-methods"].to_str().unwrap();
    assert!(methods.contains("PUT"));
    assert!(methods.contains("DELETE"));
}

#[tokio::test]
async fn serves_static_ui() {
    let dir = std::env::temp_dir().join(format!("item-catalog-ui-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("index.html"), "<h1>catalog</h1>").unwrap();
    std::fs::write(dir.join("app.js"), "console.log('hi');").unwrap();

    let options = HttpOptions {
        static_dir: Some(dir.clone()),
    };
    let base = start_server(InMemoryItemStore::empty(), options).await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    assert!(resp.headers()["content-type"]
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    assert_eq!(resp.text().await.unwrap(), "<h1>catalog</h1>");

    let resp = client.get(format!("{base}/app.js")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let resp = client.get(format!("{base}/missing.css")).send().await.unwrap();
    assert_eq!(resp.status(), 404);

    std::fs::remove_dir_all(&dir).ok();
}
