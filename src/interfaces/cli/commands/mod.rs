//! CLI commands

mod config_gen;
mod links;
mod render;

pub use config_gen::config_generate;
pub use links::{add_link, edit_link, list_links, remove_link};
pub use render::{default_host, render_remote};
