use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("invalid ticket id '{0}': expected a number")]
    InvalidTicketId(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("analysis failed: {0}")]
    AnalysisFailed(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("TUI error: {0}")]
    Tui(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
