//! userdesk — terminal client for a remote user directory (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod config;
pub mod constants;
pub mod coordinator;
pub mod detail;
pub mod directory;
pub mod env;
pub mod models;
pub mod output;
pub mod routes;
