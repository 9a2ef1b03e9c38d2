/// What the client currently knows about its session.
///
/// `Unknown` holds until the first probe settles and reads as not authenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthState {
    #[default]
    Unknown,
    Authenticated,
    Unauthenticated,
}

impl AuthState {
    pub fn is_authenticated(self) -> bool {
        self == AuthState::Authenticated
    }
}

impl From<bool> for AuthState {
    fn from(authenticated: bool) -> Self {
        if authenticated {
            AuthState::Authenticated
        } else {
            AuthState::Unauthenticated
        }
    }
}

/// Why a probe did not confirm the session. Only logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeFailure {
    Rejected(u16),
    Transport(String),
}
