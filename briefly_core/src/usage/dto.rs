/// Result of a credit balance query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageOutcome {
    Credits(u64),
    /// The session is gone; the caller invalidates it and redirects to login.
    AuthenticationRequired,
}

