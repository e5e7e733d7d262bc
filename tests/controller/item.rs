//! Tests for the items endpoint.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use casebox::server::{
    controller::item::get_items,
    model::request::{ItemsQuery, RequestField},
};
use serde_json::json;

use super::*;

fn items_query(id_token: &str, case_name: &str) -> Result<Query<ItemsQuery>, QueryRejection> {
    Ok(Query(ItemsQuery {
        id_token: RequestField::Present(id_token.to_string()),
        case_name: RequestField::Present(case_name.to_string()),
    }))
}

/// Expect the case's items ordered by ID
#[tokio::test]
async fn returns_items_of_case() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_inventory_tables()
        .with_starter_cases()
        .with_jwks_endpoint(1)
        .build()
        .await?;
    let hydra_case = test.inventory().find_case("Hydra Case").await?.unwrap();
    let bravo_case = test.inventory().find_case("Bravo Case").await?.unwrap();
    let first = test
        .inventory()
        .insert_item(hydra_case.id, "M4A1-S | Briefing", "Mil-Spec")
        .await?;
    test.inventory()
        .insert_item(bravo_case.id, "Deagle | Golden Koi", "Covert")
        .await?;
    let second = test
        .inventory()
        .insert_item(hydra_case.id, "AWP | Oni Taiji", "Covert")
        .await?;
    let id_token = test.auth().id_token("u1", None);

    let result = get_items(
        State(test.into_app_state()),
        items_query(&id_token, "Hydra Case"),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        json_body(resp).await,
        json!([
            {
                "ItemName": first.item_name,
                "ImagePath": first.image_path,
                "Rarity": "Mil-Spec"
            },
            {
                "ItemName": second.item_name,
                "ImagePath": second.image_path,
                "Rarity": "Covert"
            }
        ])
    );
    test.assert_mocks();

    Ok(())
}

/// Expect 200 with an empty array for a case without items
#[tokio::test]
async fn returns_empty_array_for_case_without_items() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_inventory_tables()
        .with_starter_cases()
        .with_jwks_endpoint(1)
        .build()
        .await?;
    let id_token = test.auth().id_token("u1", None);

    let result = get_items(
        State(test.into_app_state()),
        items_query(&id_token, "Weapon Case"),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await, json!([]));

    Ok(())
}

/// Expect 400 without a key fetch when caseName is absent
#[tokio::test]
async fn rejects_missing_case_name() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_inventory_tables()
        .with_jwks_endpoint(0)
        .build()
        .await?;
    let id_token = test.auth().id_token("u1", None);

    let result = get_items(
        State(test.into_app_state()),
        Ok(Query(ItemsQuery {
            id_token: RequestField::Present(id_token),
            case_name: RequestField::Missing,
        })),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    test.assert_mocks();

    Ok(())
}

/// Expect 400 without a key fetch when idToken is absent
#[tokio::test]
async fn rejects_missing_token() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .with_case("Weapon Case")
        .with_jwks_endpoint(0)
        .build()
        .await?;

    let result = get_items(
        State(test.into_app_state()),
        Ok(Query(ItemsQuery {
            id_token: RequestField::Missing,
            case_name: RequestField::Present("Weapon Case".to_string()),
        })),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    test.assert_mocks();

    Ok(())
}

/// Expect 401 when the signing keys cannot be fetched
#[tokio::test]
async fn rejects_when_keys_unavailable() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_inventory_tables()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", casebox_test_utils::constant::TEST_JWK_PATH)
                .with_status(503)
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let id_token = test.auth().id_token("u1", None);

    let result = get_items(
        State(test.into_app_state()),
        items_query(&id_token, "Weapon Case"),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    test.assert_mocks();

    Ok(())
}
