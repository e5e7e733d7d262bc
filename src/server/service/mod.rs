//! Service layer for business logic.
//!
//! Services coordinate the repositories in [`crate::server::data`], own the transaction
//! boundaries of multi-statement operations, and turn database models into the DTOs
//! returned by the controllers.

pub mod auth;
pub mod inventory;
pub mod item;
