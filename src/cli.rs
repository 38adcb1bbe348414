use clap::{Parser, Subcommand};

use crate::client::TicketId;

#[derive(Parser)]
#[command(name = "ticket-analysis")]
#[command(about = "View AI analysis of support tickets")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive analysis viewer for a ticket
    #[command(visible_alias = "v")]
    View {
        /// Ticket ID
        #[arg(value_parser = parse_ticket_id)]
        id: TicketId,
    },

    /// Fetch a ticket's analysis and print it
    #[command(visible_alias = "s")]
    Show {
        /// Ticket ID
        #[arg(value_parser = parse_ticket_id)]
        id: TicketId,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the prompt used to analyze a ticket
    Prompt {
        /// Ticket subject
        #[arg(long)]
        subject: String,

        /// Ticket description
        #[arg(long, default_value = "")]
        description: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set a configuration value
    Set {
        /// Configuration key (api.url, api.token, api.timeout)
        key: String,
        /// Value to set
        value: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Get a configuration value
    Get {
        /// Configuration key (api.url, api.token, api.timeout)
        key: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn parse_ticket_id(s: &str) -> Result<TicketId, String> {
    s.parse().map_err(|e: crate::error::AnalysisError| e.to_string())
}
