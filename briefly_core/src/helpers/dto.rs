use serde::{Deserialize, Serialize};
use std::fmt;

/// Remote calls made by the client. Paths are relative to the configured base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoints {
    AuthProbe,
    Logout,
    Signup,
    Login,
    Summarize,
    Usage,
}

#[derive(Debug, Serialize)]
pub struct SummarizeRequest<'a> {
    pub url: &'a str,
}

#[derive(Debug, Default, Deserialize)]
pub struct SummarizeResponse {
    pub summary: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UsageResponse {
    pub credits: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct CredentialsRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Default, Deserialize)]
pub struct DetailResponse {
    pub detail: Option<String>,
}

/// Status and raw body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl fmt::Display for Endpoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoints::AuthProbe => write!(f, "auth-probe"),
            Endpoints::Logout => write!(f, "logout"),
            Endpoints::Signup => write!(f, "signup"),
            Endpoints::Login => write!(f, "login"),
            Endpoints::Summarize => write!(f, "summarize"),
            Endpoints::Usage => write!(f, "usage"),
        }
    }
}
