//! CLI interface module

pub mod commands;

use std::fmt;

use crate::cli::{Commands, ConfigCommands};
use crate::interfaces::admin_page::RenderError;
use crate::runtime::lifetime::startup::prepare_services;
use commands::{add_link, config_generate, edit_link, list_links, remove_link, render_remote};

#[derive(Debug)]
pub enum CliError {
    StorageError(String),
    ParseError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::StorageError(msg) => format!("Storage error: {}", msg),
            CliError::ParseError(msg) => format!("Parse error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::StorageError(msg) => {
                format!("{} {}", "Storage error:".red().bold(), msg.white())
            }
            CliError::ParseError(msg) => {
                format!("{} {}", "Parse error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<crate::errors::LinkboardError> for CliError {
    fn from(err: crate::errors::LinkboardError) -> Self {
        match err {
            crate::errors::LinkboardError::Validation(msg)
            | crate::errors::LinkboardError::NotFound(msg)
            | crate::errors::LinkboardError::Conflict(msg) => CliError::CommandError(msg),
            other => CliError::StorageError(other.to_string()),
        }
    }
}

impl From<RenderError> for CliError {
    fn from(err: RenderError) -> Self {
        CliError::CommandError(err.to_string())
    }
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(cmd: Commands) -> Result<(), CliError> {
    // 不需要存储的命令
    match cmd {
        Commands::Config {
            action: ConfigCommands::Generate { output_path, force },
        } => return config_generate(output_path, force),
        Commands::Render {
            server,
            host,
            output,
        } => return render_remote(&server, host, output).await,
        _ => {}
    }

    let startup = prepare_services()
        .await
        .map_err(|e| CliError::StorageError(format!("{:#}", e)))?;
    let service = startup.link_service;

    match cmd {
        Commands::List => list_links(&service).await,
        Commands::Add { args } => {
            let (small_url, origin_url) = split_add_args(args)?;
            add_link(&service, small_url, origin_url).await
        }
        Commands::Edit {
            id,
            small_url,
            origin_url,
        } => edit_link(&service, id, small_url, origin_url).await,
        Commands::Remove { id } => remove_link(&service, id).await,
        Commands::Serve | Commands::Render { .. } | Commands::Config { .. } => Err(
            CliError::CommandError("command is not handled by the CLI".to_string()),
        ),
    }
}

/// `[small_url] <origin_url>`
fn split_add_args(mut args: Vec<String>) -> Result<(Option<String>, String), CliError> {
    match args.len() {
        1 => Ok((None, args.remove(0))),
        2 => {
            let origin = args.remove(1);
            Ok((Some(args.remove(0)), origin))
        }
        n => Err(CliError::ParseError(format!(
            "expected [SMALL_URL] <ORIGIN_URL>, got {} arguments",
            n
        ))),
    }
}
