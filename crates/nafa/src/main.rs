//! `nafa` - CLI for the journey and sensory-annotation service
//!
//! This binary runs the HTTP service and offers a few offline helpers for
//! inspecting the sample journey and the configuration.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::Context;
use clap::Parser;

use nafa::cli::{Cli, Command, ConfigCommand, JourneyCommand, ServeCommand};
use nafa::{api, init_logging, render, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;

    match cli.command {
        Command::Serve(serve_cmd) => handle_serve(config, serve_cmd).await,
        Command::Journey(journey_cmd) => handle_journey(&journey_cmd),
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
    }
}

async fn handle_serve(mut config: Config, cmd: ServeCommand) -> anyhow::Result<()> {
    if let Some(host) = cmd.host {
        config.server.host = host;
    }
    if let Some(port) = cmd.port {
        config.server.port = port;
    }
    config.validate()?;

    api::serve(&config, AppState::new())
        .await
        .with_context(|| format!("serving on {}", config.bind_addr()))
}

fn handle_journey(cmd: &JourneyCommand) -> anyhow::Result<()> {
    // A fresh state has an empty store, so the record carries no annotations.
    let state = AppState::new();
    let view = state.journeys();
    if cmd.json {
        let record = view.get_journey(&view.template().id)?;
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print!("{}", render::journey_plan(view.template()));
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Server]");
                println!("  Host:               {}", config.server.host);
                println!("  Port:               {}", config.server.port);
                println!("  Max body (bytes):   {}", config.server.max_body_bytes);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
