use clap::Parser;

use linkboard::cli::Cli;
use linkboard::config::{get_config, init_config_from};
use linkboard::runtime::modes::{Mode, detect_mode};
use linkboard::system::logging::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_config_from(cli.config.as_deref());

    match detect_mode(cli.command.as_ref()) {
        #[cfg(feature = "server")]
        Mode::Server => {
            let config = get_config();
            let _guard = init_logging(&config.logging)?;
            linkboard::runtime::modes::run_server().await
        }
        #[cfg(feature = "cli")]
        Mode::Cli => {
            let Some(command) = cli.command else {
                return Ok(());
            };
            // CLI 模式下只输出警告及以上日志
            let mut logging = get_config().logging.clone();
            logging.level = "warn".to_string();
            let _guard = init_logging(&logging)?;

            if let Err(e) = linkboard::runtime::modes::run_cli(command).await {
                eprintln!("{}", e.format_colored());
                std::process::exit(1);
            }
            Ok(())
        }
        Mode::Unknown => {
            eprintln!("No execution mode available: enable the `server` or `cli` feature");
            std::process::exit(1);
        }
    }
}
