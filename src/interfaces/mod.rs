//! User-facing interfaces: the admin page and the CLI

pub mod admin_page;
#[cfg(feature = "cli")]
pub mod cli;
