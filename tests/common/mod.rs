#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::process::{Command, Output};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tempfile::TempDir;
use tokio::sync::Notify;

use ticket_analysis::analysis::{
    AnalysisResult, AutomationSuggestion, CategorySuggestion, Feeling, Level, UrgencyLevel,
    UserSentiment,
};
use ticket_analysis::{AnalysisClient, AnalysisEnvelope, AnalysisError, Result, TicketId};

/// What the mock answers for one ticket
#[derive(Debug, Clone)]
pub enum Scripted {
    Envelope(AnalysisEnvelope),
    /// Transport-level rejection carrying this message (may be empty)
    Reject(String),
}

/// In-memory analysis backend with per-ticket answers.
///
/// A ticket can be gated: its request then waits until [`MockClient::release`]
/// is called, which lets tests control the order responses arrive in.
#[derive(Default)]
pub struct MockClient {
    responses: Mutex<HashMap<TicketId, Scripted>>,
    gates: Mutex<HashMap<TicketId, Arc<Notify>>>,
    calls: AtomicUsize,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, ticket: u64, response: Scripted) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(TicketId(ticket), response);
        self
    }

    pub fn gated(self, ticket: u64) -> Self {
        self.gates
            .lock()
            .unwrap()
            .insert(TicketId(ticket), Arc::new(Notify::new()));
        self
    }

    pub fn release(&self, ticket: u64) {
        if let Some(gate) = self.gates.lock().unwrap().get(&TicketId(ticket)) {
            gate.notify_one();
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AnalysisClient for MockClient {
    async fn analyze_ticket(&self, ticket_id: TicketId) -> Result<AnalysisEnvelope> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let gate = self.gates.lock().unwrap().get(&ticket_id).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        let response = self.responses.lock().unwrap().get(&ticket_id).cloned();
        match response {
            Some(Scripted::Envelope(envelope)) => Ok(envelope),
            Some(Scripted::Reject(message)) => Err(AnalysisError::Other(message)),
            None => Err(AnalysisError::Other(format!("no response for {ticket_id}"))),
        }
    }
}

/// Decode an envelope from raw JSON
pub fn envelope(json: &str) -> AnalysisEnvelope {
    serde_json::from_str(json).expect("valid envelope json")
}

/// The refund ticket used across tests: a summary, no categories or
/// automations, and a frustrated, high-urgency sentiment.
pub fn refund_analysis() -> AnalysisResult {
    AnalysisResult {
        summary: "Refund not received".to_string(),
        possible_categories: vec![],
        possible_automations: vec![],
        user_sentiment: Some(UserSentiment {
            overall_feeling: Feeling::Frustrated,
            indicators: vec!["waited 3 weeks".to_string()],
            urgency_level: UrgencyLevel::High,
        }),
    }
}

/// An analysis with every section populated
pub fn full_analysis() -> AnalysisResult {
    AnalysisResult {
        summary: "Customer cannot log in after password reset.".to_string(),
        possible_categories: vec![
            CategorySuggestion {
                category: "Authentication".to_string(),
                confidence: Level::High,
                reason: "Mentions password reset and login failure".to_string(),
            },
            CategorySuggestion {
                category: "Account".to_string(),
                confidence: Level::Low,
                reason: "Could be an account lock".to_string(),
            },
        ],
        possible_automations: vec![AutomationSuggestion {
            automation: "Send reset link".to_string(),
            description: "Automatically email a fresh reset link".to_string(),
            feasibility: Level::Medium,
        }],
        user_sentiment: Some(UserSentiment {
            overall_feeling: Feeling::Negative,
            indicators: vec![],
            urgency_level: UrgencyLevel::Medium,
        }),
    }
}

/// Runs the binary against an isolated config file
pub struct AppTest {
    pub temp_dir: TempDir,
}

impl AppTest {
    pub fn new() -> Self {
        AppTest {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn config_path(&self) -> std::path::PathBuf {
        self.temp_dir.path().join("config.yaml")
    }

    pub fn write_config(&self, content: &str) {
        fs::write(self.config_path(), content).expect("Failed to write config");
    }

    pub fn read_config(&self) -> String {
        fs::read_to_string(self.config_path()).expect("Failed to read config")
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_ticket-analysis"))
            .args(args)
            .current_dir(self.temp_dir.path())
            .env("TICKET_ANALYSIS_CONFIG", self.config_path())
            .env_remove("TICKET_ANALYSIS_API_URL")
            .env_remove("TICKET_ANALYSIS_API_TOKEN")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1")
            .output()
            .expect("Failed to execute command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "Command {:?} failed.\nstdout: {}\nstderr: {}",
            args,
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Command {:?} unexpectedly succeeded.\nstdout: {}",
            args,
            String::from_utf8_lossy(&output.stdout)
        );
        String::from_utf8_lossy(&output.stderr).into_owned()
    }
}
