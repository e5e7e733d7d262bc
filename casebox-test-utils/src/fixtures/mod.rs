//! Fixtures for database rows, signed ID tokens, and mock HTTP endpoints.
//!
//! - `auth` - ID token claims, signing, and the JWK endpoint
//! - `inventory` - cases, items, and inventory rows
//! - `user` - user rows

pub mod auth;
pub mod inventory;
pub mod user;
