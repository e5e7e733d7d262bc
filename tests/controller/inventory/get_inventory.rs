use axum::{http::StatusCode, response::IntoResponse};
use casebox::server::controller::inventory::get_inventory;
use serde_json::json;

use super::*;

/// Expect quantities summed across rows, ordered by case name, without empty cases
#[tokio::test]
async fn returns_summed_quantities() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_inventory_tables()
        .with_starter_cases()
        .with_jwks_endpoint(1)
        .build()
        .await?;
    let user = test.user().insert_user("u1", None).await?;
    let other_user = test.user().insert_user("u2", None).await?;
    let weapon_case = test.inventory().find_case("Weapon Case").await?.unwrap();
    let bravo_case = test.inventory().find_case("Bravo Case").await?.unwrap();
    let hydra_case = test.inventory().find_case("Hydra Case").await?.unwrap();
    for (case_id, quantity) in [
        (weapon_case.id, 1),
        (weapon_case.id, 1),
        (hydra_case.id, 2),
        (bravo_case.id, 0),
    ] {
        test.inventory()
            .insert_inventory_detail(user.id, case_id, quantity)
            .await?;
    }
    test.inventory()
        .insert_inventory_detail(other_user.id, bravo_case.id, 7)
        .await?;
    let id_token = test.auth().id_token("u1", None);

    let result = get_inventory(State(test.into_app_state()), token_query(&id_token)).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        json_body(resp).await,
        json!([
            {
                "CaseName": "Hydra Case",
                "ImagePath": hydra_case.image_path,
                "Quantity": 2
            },
            {
                "CaseName": "Weapon Case",
                "ImagePath": weapon_case.image_path,
                "Quantity": 2
            }
        ])
    );
    test.assert_mocks();

    Ok(())
}

/// Expect an empty array for a caller without inventory
#[tokio::test]
async fn returns_empty_array_without_inventory() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_inventory_tables()
        .with_jwks_endpoint(1)
        .build()
        .await?;
    let id_token = test.auth().id_token("u1", None);

    let result = get_inventory(State(test.into_app_state()), token_query(&id_token)).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await, json!([]));

    Ok(())
}

/// Expect 400 without a key fetch when idToken is absent
#[tokio::test]
async fn rejects_missing_token() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .with_jwks_endpoint(0)
        .build()
        .await?;

    let result = get_inventory(
        State(test.into_app_state()),
        Ok(Query(TokenQuery {
            id_token: RequestField::Missing,
        })),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    test.assert_mocks();

    Ok(())
}

/// Expect 401 for a token that fails verification
#[tokio::test]
async fn rejects_invalid_token() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .with_jwks_endpoint(0)
        .build()
        .await?;

    let result = get_inventory(State(test.into_app_state()), token_query("not-a-jwt")).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    test.assert_mocks();

    Ok(())
}
