//! Server models: application state, database model aliases, and request payloads.

pub mod app;
pub mod db;
pub mod request;
