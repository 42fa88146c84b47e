use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use shophunt_db::MemStore;

use crate::service::CatalogService;

/// Router shaped like the server mounts it: public routes at the root,
/// admin routes under `/admin` (without the cookie gate; that lives in
/// the binary).
fn app() -> (Router, Arc<MemStore>) {
    let store = Arc::new(MemStore::new());
    let service = Arc::new(CatalogService::new(store.clone(), store.clone()));
    let router = Router::new()
        .merge(super::router(service.clone()))
        .nest("/admin", super::admin_router(service));
    (router, store)
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    send(router, Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn send_json(
    router: &Router,
    method: &str,
    uri: &str,
    body: Value,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}

fn product_body(name: &str) -> Value {
    json!({
        "name": name,
        "description": format!("{name} description"),
        "category": "SARMs",
    })
}

async fn create_product(router: &Router, name: &str) -> Value {
    let (status, body) =
        send_json(router, "POST", "/admin/catalog/v1/products", product_body(name)).await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

#[tokio::test]
async fn public_product_list_is_sorted() {
    let (router, _store) = app();
    create_product(&router, "Stenabolic").await;
    create_product(&router, "Cardarine").await;

    let (status, body) = get(&router, "/catalog/v1/products").await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["product_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Cardarine", "Stenabolic"]);
}

#[tokio::test]
async fn search_endpoint_filters_case_insensitively() {
    let (router, _store) = app();
    create_product(&router, "RAD140 Testolone").await;
    create_product(&router, "MK-677 Ibutamoren").await;

    let (status, body) = get(&router, "/catalog/v1/products/search?q=rad140").await;
    assert_eq!(status, StatusCode::OK);
    let hits = body.as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["product_name"], "RAD140 Testolone");

    // Blank query yields an empty result, not the full set.
    let (_, body) = get(&router, "/catalog/v1/products/search?q=").await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn suppliers_are_scoped_to_the_product() {
    let (router, _store) = app();
    let rad = create_product(&router, "RAD140").await;
    let mk = create_product(&router, "MK-677").await;

    for (name, product) in [("Chemyo", &rad), ("Science.bio", &mk)] {
        let (status, _) = send_json(
            &router,
            "POST",
            "/admin/catalog/v1/suppliers",
            json!({
                "name": name,
                "store_link": "https://example.com",
                "country": "US",
                "product_id": product["id"],
            }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let uri = format!("/catalog/v1/products/{}/suppliers", rad["id"].as_str().unwrap());
    let (status, body) = get(&router, &uri).await;
    assert_eq!(status, StatusCode::OK);
    let suppliers = body.as_array().unwrap();
    assert_eq!(suppliers.len(), 1);
    assert_eq!(suppliers[0]["name"], "Chemyo");
}

#[tokio::test]
async fn categories_include_defaults_and_custom_entries() {
    let (router, _store) = app();
    let (status, _) = send_json(
        &router,
        "POST",
        "/admin/catalog/v1/products",
        json!({
            "name": "Alpha-GPC",
            "description": "Choline source",
            "category": "Other",
            "custom_category": "Nootropics",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = get(&router, "/catalog/v1/categories").await;
    assert_eq!(status, StatusCode::OK);
    let categories = body.as_array().unwrap();
    assert!(categories.iter().any(|c| c == "SARMs"));
    assert!(categories.iter().any(|c| c == "Nootropics"));
}

#[tokio::test]
async fn companies_list_is_static() {
    let (router, _store) = app();
    let (status, body) = get(&router, "/catalog/v1/companies").await;
    assert_eq!(status, StatusCode::OK);
    let companies = body.as_array().unwrap();
    assert!(!companies.is_empty());
    assert_eq!(companies[0]["name"], "Science.bio");
}

#[tokio::test]
async fn create_product_returns_created_row() {
    let (router, _store) = app();
    let created = create_product(&router, "YK11").await;
    assert_eq!(created["product_name"], "YK11");
    assert!(created["id"].as_str().is_some());
}

#[tokio::test]
async fn invalid_product_returns_field_errors() {
    let (router, _store) = app();
    let (status, body) = send_json(
        &router,
        "POST",
        "/admin/catalog/v1/products",
        json!({"name": "", "description": "", "category": "SARMs"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_FAILED");
    assert_eq!(body["error"]["fields"]["name"], "Product name is required");
    assert_eq!(
        body["error"]["fields"]["description"],
        "Description is required"
    );
}

#[tokio::test]
async fn update_missing_product_is_not_found() {
    let (router, _store) = app();
    let (status, body) = send_json(
        &router,
        "PUT",
        "/admin/catalog/v1/products/missing",
        product_body("X"),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn delete_product_acknowledges() {
    let (router, _store) = app();
    let created = create_product(&router, "YK11").await;

    let uri = format!("/admin/catalog/v1/products/{}", created["id"].as_str().unwrap());
    let (status, body) = send(
        &router,
        Request::delete(&uri).body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);

    let (_, body) = get(&router, "/catalog/v1/products").await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn remote_failure_maps_to_remote_error() {
    let (router, store) = app();
    store.fail_next("permission denied for table products");

    let (status, body) = send_json(
        &router,
        "POST",
        "/admin/catalog/v1/products",
        product_body("YK11"),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "REMOTE_ERROR");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("permission denied"));
}

#[tokio::test]
async fn picker_returns_id_name_pairs() {
    let (router, _store) = app();
    create_product(&router, "RAD140 Testolone").await;
    create_product(&router, "YK11 Myostine").await;

    let (status, body) = get(&router, "/admin/catalog/v1/products/picker?q=yk").await;
    assert_eq!(status, StatusCode::OK);
    let refs = body.as_array().unwrap();
    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0]["product_name"], "YK11 Myostine");
    assert!(refs[0].get("description").is_none());
}

#[tokio::test]
async fn admin_supplier_list_is_joined() {
    let (router, _store) = app();
    let rad = create_product(&router, "RAD140").await;
    send_json(
        &router,
        "POST",
        "/admin/catalog/v1/suppliers",
        json!({
            "name": "Chemyo",
            "store_link": "https://example.com",
            "country": "US",
            "product_id": rad["id"],
        }),
    )
    .await;

    let (status, body) = get(&router, "/admin/catalog/v1/suppliers").await;
    assert_eq!(status, StatusCode::OK);
    let suppliers = body.as_array().unwrap();
    assert_eq!(suppliers.len(), 1);
    assert_eq!(suppliers[0]["name"], "Chemyo");
    assert_eq!(suppliers[0]["product_name"], "RAD140");
}
