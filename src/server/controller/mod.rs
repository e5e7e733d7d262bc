//! HTTP controller endpoints for the Casebox API.
//!
//! Controllers extract the request fields, verify the caller's ID token through the
//! [`TokenVerifier`](crate::server::identity::TokenVerifier) held in the application state,
//! call into the services, and map the result to a status code and JSON body. Request
//! payloads are checked before the verifier is called so malformed requests never cost a
//! key fetch.

pub mod auth;
pub mod inventory;
pub mod item;
pub mod util;
