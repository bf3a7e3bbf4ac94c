//! Command-line interface definitions using clap

use clap::{Parser, Subcommand};

/// linkboard - a small URL shortener with an admin list page
#[derive(Parser)]
#[command(name = "linkboard")]
#[command(version)]
#[command(about = "A small URL shortener with an admin list page", long_about = None)]
pub struct Cli {
    /// Configuration file (default: config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve,

    /// Render the admin list of a running server and print the page
    Render {
        /// Base URL of the server, e.g. http://127.0.0.1:8080
        #[arg(long)]
        server: String,

        /// Host shown in row labels and links (default: taken from --server)
        #[arg(long)]
        host: Option<String>,

        /// Write the page to a file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<String>,
    },

    /// List all short links
    List,

    /// Add a short link
    ///
    /// Usage: add [SMALL_URL] <ORIGIN_URL>
    /// - If only the origin is given, a random short path is generated
    Add {
        /// Positional args: [small_url] <origin_url>
        #[arg(required = true, num_args = 1..=2)]
        args: Vec<String>,
    },

    /// Change a short link
    Edit {
        /// Record id
        id: i64,

        /// New short path
        small_url: String,

        /// New origin URL
        origin_url: String,
    },

    /// Remove a short link
    Remove {
        /// Record id
        id: i64,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
