//! Tests for the inventory controller endpoints.

mod get_case;
mod get_inventory;

use axum::extract::{rejection::QueryRejection, Query, State};
use casebox::server::model::request::{RequestField, TokenQuery};

use super::*;

fn token_query(id_token: &str) -> Result<Query<TokenQuery>, QueryRejection> {
    Ok(Query(TokenQuery {
        id_token: RequestField::Present(id_token.to_string()),
    }))
}
