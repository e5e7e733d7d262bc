//! Tests that send requests through the full router, covering request parsing, the OpenAPI
//! document, and the static frontend.

use std::path::{Path, PathBuf};

use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use casebox::server::router::routes;
use casebox_test_utils::prelude::*;
use serde_json::json;
use tower::ServiceExt;

use crate::{util::json_body, TestContextExt};

fn app(test: &TestContext, frontend_dir: &Path) -> Router {
    routes(frontend_dir).with_state(test.into_app_state())
}

fn missing_frontend() -> PathBuf {
    std::env::temp_dir().join("casebox-missing-frontend")
}

fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Expect a full login round trip with the idToken field read from the JSON body
#[tokio::test]
async fn logs_in_with_json_body() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_inventory_tables()
        .with_starter_cases()
        .with_jwks_endpoint(1)
        .build()
        .await?;
    let id_token = test.auth().id_token("u1", Some("a@b.com"));

    let resp = app(&test, &missing_frontend())
        .oneshot(json_request(
            Method::POST,
            "/api/login",
            json!({ "idToken": id_token }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await, json!(false));
    assert_eq!(test.inventory().count_inventory_details().await?, 3);
    test.assert_mocks();

    Ok(())
}

/// Expect 400 for a login body that is not JSON
#[tokio::test]
async fn rejects_non_json_login_body() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .with_jwks_endpoint(0)
        .build()
        .await?;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/login")
        .header(CONTENT_TYPE, "text/plain")
        .body(Body::from("idToken=abc"))
        .unwrap();
    let resp = app(&test, &missing_frontend())
        .oneshot(request)
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    test.assert_mocks();

    Ok(())
}

/// Expect 400 for a login body whose idToken is not a string
#[tokio::test]
async fn rejects_non_string_login_token() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .with_jwks_endpoint(0)
        .build()
        .await?;

    let resp = app(&test, &missing_frontend())
        .oneshot(json_request(
            Method::POST,
            "/api/login",
            json!({ "idToken": 42 }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(test.user().count_users().await?, 0);
    test.assert_mocks();

    Ok(())
}

/// Expect 400 for an inventory request without a query string
#[tokio::test]
async fn rejects_inventory_without_token() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .with_jwks_endpoint(0)
        .build()
        .await?;

    let resp = app(&test, &missing_frontend())
        .oneshot(get_request("/api/inventory"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    test.assert_mocks();

    Ok(())
}

/// Expect idToken and caseName to be read from the query string
#[tokio::test]
async fn reads_items_query() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_inventory_tables()
        .with_starter_cases()
        .with_jwks_endpoint(1)
        .build()
        .await?;
    let bravo_case = test.inventory().find_case("Bravo Case").await?.unwrap();
    test.inventory()
        .insert_item(bravo_case.id, "AK-47 | Fire Serpent", "Covert")
        .await?;
    let id_token = test.auth().id_token("u1", None);

    let resp = app(&test, &missing_frontend())
        .oneshot(get_request(&format!(
            "/api/items?idToken={}&caseName=Bravo%20Case",
            id_token
        )))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body[0]["ItemName"], "AK-47 | Fire Serpent");
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    test.assert_mocks();

    Ok(())
}

/// Expect 400 with a false body for a delete request missing caseName
#[tokio::test]
async fn rejects_delete_without_case_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .with_jwks_endpoint(0)
        .build()
        .await?;

    let resp = app(&test, &missing_frontend())
        .oneshot(json_request(
            Method::DELETE,
            "/api/case",
            json!({ "idToken": "token" }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(resp).await, json!(false));
    test.assert_mocks();

    Ok(())
}

/// Expect 400 with a false body for a delete request that is not JSON
#[tokio::test]
async fn rejects_non_json_delete_body() -> Result<(), TestError> {
    let test = TestBuilder::new().with_inventory_tables().build().await?;

    let request = Request::builder()
        .method(Method::DELETE)
        .uri("/api/case")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let resp = app(&test, &missing_frontend())
        .oneshot(request)
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(resp).await, json!(false));

    Ok(())
}

/// Expect the OpenAPI document to list every API route
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = app(&test, &missing_frontend())
        .oneshot(get_request("/api/docs/openapi.json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let document = json_body(resp).await;
    for path in [
        "/api/login",
        "/api/getcase",
        "/api/inventory",
        "/api/case",
        "/api/items",
    ] {
        assert!(
            document["paths"].get(path).is_some(),
            "missing {} in OpenAPI paths",
            path
        );
    }

    Ok(())
}

/// Expect index.html at the root and assets under /main
#[tokio::test]
async fn serves_frontend() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let frontend_dir =
        std::env::temp_dir().join(format!("casebox-frontend-{}", std::process::id()));
    std::fs::create_dir_all(frontend_dir.join("images")).unwrap();
    std::fs::write(frontend_dir.join("index.html"), "<h1>Casebox</h1>").unwrap();
    std::fs::write(frontend_dir.join("images").join("case.txt"), "case image").unwrap();

    let index = app(&test, &frontend_dir)
        .oneshot(get_request("/"))
        .await
        .unwrap();
    let asset = app(&test, &frontend_dir)
        .oneshot(get_request("/main/images/case.txt"))
        .await
        .unwrap();
    let missing = app(&test, &frontend_dir)
        .oneshot(get_request("/main/images/missing.txt"))
        .await
        .unwrap();

    assert_eq!(index.status(), StatusCode::OK);
    assert_eq!(
        to_bytes(index.into_body(), usize::MAX).await.unwrap(),
        "<h1>Casebox</h1>"
    );
    assert_eq!(asset.status(), StatusCode::OK);
    assert_eq!(
        to_bytes(asset.into_body(), usize::MAX).await.unwrap(),
        "case image"
    );
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    std::fs::remove_dir_all(&frontend_dir).unwrap();

    Ok(())
}
