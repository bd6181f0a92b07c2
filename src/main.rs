#![warn(clippy::perf)]
#![warn(clippy::unwrap_used)]

mod cli;
mod errors;
mod framework;
mod games;
mod utils;

use anyhow::Context as _;
use clap::Parser;
use tokio::io::BufReader;

use tracing::info;

use cli::{Cli, Command};
use framework::{AppData, Config, ConsoleMessenger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config =
        Config::load(cli.config.as_deref()).context("config file could not be loaded")?;

    if cli.logs_enabled() {
        framework::logging::init_tracing(config.logs.filter());
        info!("config loaded");
    }

    match cli.command() {
        Command::Config => {
            print!("{}", config.to_toml()?);
        }
        Command::Start => {
            info!("release {}", env!("CARGO_PKG_VERSION"));

            if let Some(flavor_text) = config.logs.flavor_text() {
                info!("{flavor_text}")
            }

            let data = AppData::new(config);
            let messenger = ConsoleMessenger::stdout(data.config());

            framework::event_handler::run(&data, &messenger, BufReader::new(tokio::io::stdin()))
                .await
                .context("event loop stopped")?;
        }
    }

    Ok(())
}
