//! Server application core modules.
//!
//! This module contains the Casebox backend: HTTP routing, ID token verification, database
//! access, and the inventory logic behind the API. Startup wiring lives in [`startup`] and
//! the binary in `main.rs` only loads configuration and serves the router.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod identity;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
