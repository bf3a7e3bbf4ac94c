//! Service layer for business logic
//!
//! Shared by the HTTP handlers and the CLI.

mod link_service;
mod reachability;

pub use link_service::*;
pub use reachability::is_reachable;
