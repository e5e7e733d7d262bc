//! Request payloads for the API endpoints.
//!
//! Fields are read as [`RequestField`] rather than `String` so a missing field and a field of
//! the wrong JSON type can be told apart and reported as a 400 by the controller instead of
//! being rejected by the extractor.

use serde::{Deserialize, Deserializer};
use utoipa::{IntoParams, ToSchema};

use crate::server::error::request::RequestError;

/// A request field that must be a string
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RequestField {
    /// Field absent or `null`
    #[default]
    Missing,
    /// Field present with a non-string value
    Invalid,
    Present(String),
}

impl RequestField {
    /// Returns the value, failing when it is missing or not a string
    pub fn required(self, field: &'static str) -> Result<String, RequestError> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Missing => Err(RequestError::MissingField(field)),
            Self::Invalid => Err(RequestError::InvalidField(field)),
        }
    }

    /// Returns the value, or an empty string when missing; still fails for non-strings
    pub fn or_empty(self, field: &'static str) -> Result<String, RequestError> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Missing => Ok(String::new()),
            Self::Invalid => Err(RequestError::InvalidField(field)),
        }
    }
}

impl<'de> Deserialize<'de> for RequestField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(value) => Self::Present(value),
            serde_json::Value::Null => Self::Missing,
            _ => Self::Invalid,
        })
    }
}

/// Body of `POST /api/login`
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[serde(default, rename = "idToken")]
    #[schema(value_type = Option<String>)]
    pub id_token: RequestField,
}

/// Body of `DELETE /api/case`
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct DeleteCaseRequest {
    #[serde(default, rename = "idToken")]
    #[schema(value_type = String)]
    pub id_token: RequestField,
    #[serde(default, rename = "caseName")]
    #[schema(value_type = String)]
    pub case_name: RequestField,
}

/// Query of endpoints that only need the ID token
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TokenQuery {
    /// Firebase ID token of the caller
    #[serde(default, rename = "idToken")]
    #[param(value_type = String)]
    pub id_token: RequestField,
}

/// Query of `GET /api/items`
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ItemsQuery {
    /// Firebase ID token of the caller
    #[serde(default, rename = "idToken")]
    #[param(value_type = String)]
    pub id_token: RequestField,
    /// Name of the case to list items for
    #[serde(default, rename = "caseName")]
    #[param(value_type = String)]
    pub case_name: RequestField,
}
