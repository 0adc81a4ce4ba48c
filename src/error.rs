//! Error handling for the resume analyzer client

use thiserror::Error;

/// Message shown when the service response cannot be used.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to analyze resume";

#[derive(Error, Debug)]
pub enum ResumeAnalyzerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),

    #[error("Submission failed: {0}")]
    Submission(#[from] SubmissionError),
}

pub type Result<T> = std::result::Result<T, ResumeAnalyzerError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for ResumeAnalyzerError {
    fn from(err: anyhow::Error) -> Self {
        ResumeAnalyzerError::InvalidInput(err.to_string())
    }
}

/// The response body did not match the analysis report contract.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("response body is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("malformed analysis: {0}")]
    Malformed(String),

    #[error("keyword match has {keywords} keywords but {scores} scores")]
    KeywordScoreMismatch { keywords: usize, scores: usize },

    #[error("`{field}` is out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
}

/// Every way a submission can end in the `Failed` phase.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmissionError {
    #[error("submission is not eligible: select a resume file and enter a job description")]
    Validation,

    /// Network failure (`status` is `None`) or a non-2xx response.
    #[error("transport error (status {status:?}): {body}")]
    Transport { status: Option<u16>, body: String },

    /// 2xx response whose body reports `success: false`.
    #[error("service error: {0:?}")]
    Api(Option<String>),

    #[error("unexpected response shape: {0}")]
    Shape(#[from] ShapeError),
}

impl SubmissionError {
    /// The single message surfaced to the user when a submission fails.
    pub fn user_message(&self) -> String {
        match self {
            SubmissionError::Validation => {
                "Select a resume file and enter a job description".to_string()
            }
            SubmissionError::Transport { status: None, body } => {
                format!("Network error: {}", body)
            }
            SubmissionError::Transport { status: Some(code), body } => {
                match server_error_text(body) {
                    Some(message) => message,
                    None => format!("HTTP error! status: {}, body: {}", code, body),
                }
            }
            SubmissionError::Api(Some(message)) if !message.is_empty() => message.clone(),
            SubmissionError::Api(_) => GENERIC_FAILURE_MESSAGE.to_string(),
            SubmissionError::Shape(_) => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

/// Pull a server-supplied error string out of a JSON error body, if any.
fn server_error_text(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["error", "detail"]
        .iter()
        .find_map(|key| value.get(*key).and_then(|v| v.as_str()))
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}
