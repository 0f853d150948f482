//! # Menu Console
//!
//! Terminal front-end: reads one command per line from stdin and drives a
//! menu session.

use std::io::Write;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

mod config;
mod console;
mod state;
mod telemetry;

use config::{AppConfig, Cli};
use console::{Console, Flow};
use telemetry::TelemetryConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut telemetry = TelemetryConfig::from_env();
    telemetry.json_logs |= cli.json_logs;
    telemetry::init_telemetry(&telemetry);

    let config = AppConfig::from_env().with_cli(&cli);

    let mut stdout = std::io::stdout();
    if config.seed_menu {
        writeln!(stdout, "Loading menu...")?;
    }
    let session = state::start_session(&config).await?;

    let mut console = Console::new(session);
    console.greet(&mut stdout)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        write!(stdout, "menu> ")?;
        stdout.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if console.handle_line(&line, &mut stdout).await? == Flow::Quit {
            break;
        }
    }

    console.into_session().end();
    Ok(())
}
