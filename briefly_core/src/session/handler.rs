use std::sync::{Arc, Mutex};

use log::{debug, info, warn};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::dto::{AuthState, ProbeFailure};
use crate::helpers::dto::Endpoints;
use crate::services::handler::Services;

/// Authentication state for one running client.
///
/// Created once at start-up and handed to every component that needs it.
/// Clones share the same state. Updates are last-write-wins.
#[derive(Clone)]
pub struct Session {
    services: Services,
    state: Arc<watch::Sender<AuthState>>,
    initial_probe: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl Session {
    /// A session with no probe started; it stays `Unknown` until `check_auth` runs.
    pub fn new(services: Services) -> Self {
        let (state, _) = watch::channel(AuthState::Unknown);

        Self {
            services,
            state: Arc::new(state),
            initial_probe: Arc::new(Mutex::new(None)),
        }
    }

    /// Create the session and fire the initial probe in the background.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(services: Services) -> Self {
        let session = Self::new(services);
        let probe = session.clone();

        let handle = tokio::spawn(async move {
            probe.check_auth().await;
        });

        if let Ok(mut slot) = session.initial_probe.lock() {
            *slot = Some(handle);
        }

        session
    }

    pub fn state(&self) -> AuthState {
        *self.state.borrow()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state().is_authenticated()
    }

    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    /// Probe the service and record the result. Never fails: any
    /// rejection or transport error leaves the session unauthenticated.
    pub async fn check_auth(&self) -> bool {
        let authenticated = match self.probe().await {
            Ok(()) => {
                info!("✅ Session is authenticated");
                true
            }
            Err(ProbeFailure::Rejected(status)) => {
                info!("🔒 Auth probe rejected with status {}", status);
                false
            }
            Err(ProbeFailure::Transport(e)) => {
                warn!("⚠️ Auth probe could not reach the server: {}", e);
                false
            }
        };

        self.state.send_replace(AuthState::from(authenticated));
        authenticated
    }

    /// Tell the server we are leaving, then drop the local session whatever it said.
    pub async fn logout(&self) {
        match self.services.post(Endpoints::Logout).await {
            Ok(resp) if resp.is_success() => debug!("Logout acknowledged by server"),
            Ok(resp) => warn!("⚠️ Logout returned status {}, ignoring", resp.status),
            Err(e) => warn!("⚠️ Logout error: {}", e),
        }

        self.invalidate();
    }

    /// Mark the session as not authenticated without contacting the server.
    pub fn invalidate(&self) {
        self.state.send_replace(AuthState::Unauthenticated);
    }

    /// End this session context. A still-pending initial probe is aborted.
    pub fn shutdown(&self) {
        if let Ok(mut slot) = self.initial_probe.lock() {
            if let Some(handle) = slot.take() {
                handle.abort();
            }
        }
    }

    async fn probe(&self) -> Result<(), ProbeFailure> {
        match self.services.get(Endpoints::AuthProbe).await {
            Ok(resp) if resp.is_success() => Ok(()),
            Ok(resp) => Err(ProbeFailure::Rejected(resp.status)),
            Err(e) => Err(ProbeFailure::Transport(e.to_string())),
        }
    }
}
