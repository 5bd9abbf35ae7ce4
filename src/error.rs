use std::fmt;
use serde_json::Error as JsonError;

#[derive(Debug)]
pub enum AnalysisError {
    InvalidUrl(String),
    Fetch { endpoint: String, status: u16 },
    Network(String),
    Parse(String),
}

impl AnalysisError {
    /// True for failures that happen before any request is sent.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidUrl(_))
    }
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUrl(input) => write!(f, "Invalid GitHub URL format: {}", input),
            Self::Fetch { endpoint, status } => {
                write!(f, "GitHub API error: {} returned status {}", endpoint, status)
            }
            Self::Network(msg) => write!(f, "Network error: {}", msg),
            Self::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for AnalysisError {}

impl From<JsonError> for AnalysisError {
    fn from(error: JsonError) -> Self {
        AnalysisError::Parse(format!("JSON deserialization error: {}", error))
    }
}
