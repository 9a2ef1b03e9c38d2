use crate::history::dto::SummaryRecord;

pub const INVALID_URL_MESSAGE: &str = "Please enter a valid YouTube URL";
pub const SUMMARIZE_FALLBACK_MESSAGE: &str = "Could not summarize video";
pub const CONNECTION_FAILED_MESSAGE: &str = "Failed to connect to server";

/// How a summarize submission ended. Exactly one per submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Rejected locally; no request was sent.
    ValidationError { message: String },
    AuthenticationRequired,
    QuotaExceeded,
    Success(SummaryRecord),
    RemoteFailure { message: String },
    TransportFailure,
}

/// What the view layer should do with an outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    NavigateToResults,
    RedirectToLogin,
    ShowUpgradePrompt,
    ShowError { title: String, message: String },
}

impl SubmitOutcome {
    pub fn effect(&self) -> Effect {
        match self {
            SubmitOutcome::ValidationError { message } => Effect::ShowError {
                title: "Invalid URL".to_string(),
                message: message.clone(),
            },
            SubmitOutcome::AuthenticationRequired => Effect::RedirectToLogin,
            SubmitOutcome::QuotaExceeded => Effect::ShowUpgradePrompt,
            SubmitOutcome::Success(_) => Effect::NavigateToResults,
            SubmitOutcome::RemoteFailure { message } => Effect::ShowError {
                title: "Summarization failed".to_string(),
                message: message.clone(),
            },
            SubmitOutcome::TransportFailure => Effect::ShowError {
                title: "Error".to_string(),
                message: CONNECTION_FAILED_MESSAGE.to_string(),
            },
        }
    }

    pub fn record(&self) -> Option<&SummaryRecord> {
        match self {
            SubmitOutcome::Success(record) => Some(record),
            _ => None,
        }
    }
}
