use thiserror::Error;

/// Failures of the fetch-and-parse phase. Each one ends the run.
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("{}", network_message(.status, .message))]
    Network { status: Option<u16>, message: String },

    #[error("{0}")]
    Timeout(String),

    #[error("{0}")]
    Parse(String),
}

fn network_message(status: &Option<u16>, message: &str) -> String {
    match status {
        Some(code) => format!("{} ({})", message, code),
        None => message.to_string(),
    }
}

impl ScrapeError {
    pub fn parse(detail: impl Into<String>) -> Self {
        ScrapeError::Parse(detail.into())
    }

    /// Category label printed in front of the detail.
    pub fn label(&self) -> &'static str {
        match self {
            ScrapeError::Network { .. } => "HTTP request failed: ",
            ScrapeError::Timeout(_) => "Request timed out: ",
            ScrapeError::Parse(_) => "Failed to parse the page: ",
        }
    }
}

impl From<reqwest::Error> for ScrapeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ScrapeError::Timeout(err.to_string())
        } else {
            ScrapeError::Network {
                status: err.status().map(|s| s.as_u16()),
                message: err.to_string(),
            }
        }
    }
}
