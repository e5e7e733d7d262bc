//! Casebox: case inventory API backed by Firebase authentication and a relational store.

pub mod model;
pub mod server;
