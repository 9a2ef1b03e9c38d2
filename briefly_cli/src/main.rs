mod commands;
mod dependencies;
mod handler;
mod views;

use std::io::Write;

use anyhow::{Context, Result};
use briefly_core::helpers::config::ClientConfig;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use crate::commands::Command;
use crate::dependencies::AppDependencies;
use crate::handler::{App, Step};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    log::info!("Starting briefly...");

    let config = ClientConfig::from_env().context("reading configuration")?;
    let deps = AppDependencies::new(config)?;
    let mut app = App::new(deps.clone());

    println!("{}\n\nType `help` for commands.\n", views::render_home());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{}", app.view().prompt());
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match line.parse::<Command>() {
            Ok(command) => match app.handle(command).await {
                Step::Output(text) => println!("{}\n", text),
                Step::Quit => break,
            },
            Err(message) if message.is_empty() => {}
            Err(message) => println!("{}\n", message),
        }
    }

    deps.shutdown().await?;
    log::info!("Bye");
    Ok(())
}
