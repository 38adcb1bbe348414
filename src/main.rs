use std::process::ExitCode;

use clap::Parser;
use owo_colors::OwoColorize;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use ticket_analysis::cli::{Cli, Commands, ConfigAction};
use ticket_analysis::commands::{
    cmd_config_get, cmd_config_set, cmd_config_show, cmd_prompt, cmd_show, cmd_view,
};

/// Install the stderr log subscriber. `RUST_LOG` overrides `default`.
fn init_logging(default: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // The fullscreen viewer owns the terminal, so stay quiet unless asked
    let default_filter = match cli.command {
        Commands::View { .. } => "off",
        _ => "warn",
    };
    init_logging(default_filter);

    let result = match cli.command {
        Commands::View { id } => cmd_view(id).await,
        Commands::Show { id, json } => cmd_show(id, json).await,
        Commands::Prompt {
            subject,
            description,
            json,
        } => cmd_prompt(&subject, &description, json),
        Commands::Config { action } => match action {
            ConfigAction::Show { json } => cmd_config_show(json),
            ConfigAction::Set { key, value, json } => cmd_config_set(&key, &value, json),
            ConfigAction::Get { key, json } => cmd_config_get(&key, json),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
