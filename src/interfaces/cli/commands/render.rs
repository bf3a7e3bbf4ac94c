//! Render the admin list of a running server

use colored::Colorize;
use url::Url;

use crate::interfaces::admin_page::{
    AdminListRenderer, RenderOutcome, ShellDocument, StderrDialog, UreqTransport,
};
use crate::interfaces::cli::CliError;

/// `host[:port]` of the server URL
pub fn default_host(server: &str) -> Result<String, CliError> {
    let url = Url::parse(server)
        .map_err(|e| CliError::ParseError(format!("invalid server URL '{}': {}", server, e)))?;
    let host = url
        .host_str()
        .ok_or_else(|| CliError::ParseError(format!("server URL '{}' has no host", server)))?;

    Ok(match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}

pub async fn render_remote(
    server: &str,
    host: Option<String>,
    output: Option<String>,
) -> Result<(), CliError> {
    let host = match host {
        Some(h) => h,
        None => default_host(server)?,
    };

    let renderer = AdminListRenderer::new(UreqTransport::new(server));
    let mut doc = ShellDocument::new();
    let mut dialog = StderrDialog::default();

    let outcome = {
        let mut handles = doc.handles(&host);
        // 告警直接输出到终端
        handles.dialog = &mut dialog;
        renderer.run(&mut handles).await
    };

    let html = doc.to_html();
    match output {
        Some(path) => {
            std::fs::write(&path, &html).map_err(|e| {
                CliError::CommandError(format!("failed to write {}: {}", path, e))
            })?;
            eprintln!("{} Page written to {}", "✓".bold().green(), path.blue());
        }
        None => println!("{}", html),
    }

    match outcome? {
        RenderOutcome::Rendered { rows } => {
            eprintln!("{} Rendered {} rows", "ℹ".bold().blue(), rows);
        }
        RenderOutcome::Alerted { status } => {
            eprintln!("{} Server answered {}", "⚠".bold().yellow(), status);
        }
    }
    Ok(())
}
