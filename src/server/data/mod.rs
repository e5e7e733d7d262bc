//! Data access layer repositories.
//!
//! One repository per table. Repositories are generic over [`sea_orm::ConnectionTrait`] so
//! services can run them against the pool or inside a transaction.

pub mod case;
pub mod inventory;
pub mod item;
pub mod user;
