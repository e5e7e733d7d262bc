use axum::{http::StatusCode, response::IntoResponse};
use casebox::server::controller::inventory::get_case;

use super::*;

/// Expect 200 with an empty body and a new Weapon Case row
#[tokio::test]
async fn grants_weapon_case() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_inventory_tables()
        .with_starter_cases()
        .with_user("u1", None)
        .with_jwks_endpoint(1)
        .build()
        .await?;
    let id_token = test.auth().id_token("u1", None);

    let result = get_case(State(test.into_app_state()), token_query(&id_token)).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert!(body.is_empty());

    let user = test.user().find_user("u1").await?.unwrap();
    let weapon_case = test.inventory().find_case("Weapon Case").await?.unwrap();
    let rows = test.inventory().get_inventory_details(user.id).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].case_id, weapon_case.id);
    assert_eq!(rows[0].quantity, 1);
    test.assert_mocks();

    Ok(())
}

/// Expect 200 and no rows for a caller that never logged in
#[tokio::test]
async fn skips_grant_for_unknown_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_inventory_tables()
        .with_starter_cases()
        .with_jwks_endpoint(1)
        .build()
        .await?;
    let id_token = test.auth().id_token("u1", None);

    let result = get_case(State(test.into_app_state()), token_query(&id_token)).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test.inventory().count_inventory_details().await?, 0);

    Ok(())
}

/// Expect 400 without a key fetch or grant when idToken is absent
#[tokio::test]
async fn rejects_missing_token() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .with_starter_cases()
        .with_user("u1", None)
        .with_jwks_endpoint(0)
        .build()
        .await?;

    let result = get_case(
        State(test.into_app_state()),
        Ok(Query(TokenQuery {
            id_token: RequestField::Missing,
        })),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(test.inventory().count_inventory_details().await?, 0);
    test.assert_mocks();

    Ok(())
}

/// Expect 401 and no grant for a token signed with an unpublished key
#[tokio::test]
async fn rejects_unknown_signing_key() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_inventory_tables()
        .with_starter_cases()
        .with_user("u1", None)
        .with_jwks_endpoint(1)
        .build()
        .await?;
    let claims = factory::mock_id_token_claims("u1", None);
    let id_token = test.auth().sign_id_token_with_key_id(&claims, "rotated-key");

    let result = get_case(State(test.into_app_state()), token_query(&id_token)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(test.inventory().count_inventory_details().await?, 0);

    Ok(())
}
