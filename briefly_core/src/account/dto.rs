pub const MIN_PASSWORD_LEN: usize = 8;
pub const SIGNUP_FALLBACK_MESSAGE: &str = "Could not create account";
pub const LOGIN_FALLBACK_MESSAGE: &str = "Could not log in";

/// Result of a signup or login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountOutcome {
    /// The server accepted the credentials. `authenticated` is the follow-up probe result.
    Accepted { authenticated: bool },
    /// Rejected locally; no request was sent.
    ValidationError { message: String },
    Rejected { message: String },
    TransportFailure,
}
