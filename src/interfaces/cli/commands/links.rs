//! Link management commands

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::services::{CreateLinkRequest, LinkService, UpdateLinkRequest};

pub async fn list_links(service: &LinkService) -> Result<(), CliError> {
    let links = service.list().await?;

    if links.is_empty() {
        println!("{} No short links found", "ℹ".bold().blue());
        return Ok(());
    }

    println!("{}", "Short link list:".bold().green());
    println!();
    for link in &links {
        println!(
            "  {} {} -> {} {}",
            format!("#{}", link.id).dimmed(),
            link.small_url.cyan(),
            link.origin_url.blue().underline(),
            format!("(updated: {})", link.updated_at.format("%Y-%m-%d %H:%M:%S UTC"))
                .dimmed()
                .yellow()
        );
    }
    println!();
    println!(
        "{} Total {} short links",
        "ℹ".bold().blue(),
        links.len().to_string().green()
    );
    Ok(())
}

pub async fn add_link(
    service: &LinkService,
    small_url: Option<String>,
    origin_url: String,
) -> Result<(), CliError> {
    let generated = small_url.as_deref().is_none_or(|s| s.trim().is_empty());
    let link = service
        .create_generated(CreateLinkRequest {
            small_url,
            origin_url,
        })
        .await?;

    if generated {
        println!(
            "{} Generated random path: {}",
            "ℹ".bold().blue(),
            link.small_url.magenta()
        );
    }
    println!(
        "{} Added short link #{}: {} -> {}",
        "✓".bold().green(),
        link.id,
        link.small_url.cyan(),
        link.origin_url.blue().underline()
    );
    Ok(())
}

pub async fn edit_link(
    service: &LinkService,
    id: i64,
    small_url: String,
    origin_url: String,
) -> Result<(), CliError> {
    let link = service
        .update(UpdateLinkRequest {
            id,
            small_url,
            origin_url,
        })
        .await?;

    println!(
        "{} Updated short link #{}: {} -> {}",
        "✓".bold().green(),
        link.id,
        link.small_url.cyan(),
        link.origin_url.blue().underline()
    );
    Ok(())
}

pub async fn remove_link(service: &LinkService, id: i64) -> Result<(), CliError> {
    service.delete(id).await?;
    println!("{} Removed short link #{}", "✓".bold().green(), id);
    Ok(())
}
