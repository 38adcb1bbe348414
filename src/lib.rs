pub mod analysis;
pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod tui;

pub use analysis::{
    AnalysisEnvelope, AnalysisFailure, AnalysisResult, AutomationSuggestion, CategorySuggestion,
    Feeling, Level, UrgencyLevel, UserSentiment,
};
pub use client::{AnalysisClient, HttpAnalysisClient, TicketId};
pub use config::Config;
pub use error::{AnalysisError, Result};
