//! Test utilities for Casebox.
//!
//! Tests are set up in two phases: a [`TestBuilder`] declares the tables, catalog fixtures
//! and mock endpoints a test needs, and `build()` returns a [`TestContext`] holding an
//! in-memory SQLite database, a mock JWK server, and a signing key for minting ID tokens.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::auth::factory, TestBuilder, TestContext, TestError};
}
