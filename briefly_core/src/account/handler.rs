use log::{info, warn};

use super::dto::{
    AccountOutcome, LOGIN_FALLBACK_MESSAGE, MIN_PASSWORD_LEN, SIGNUP_FALLBACK_MESSAGE,
};
use crate::helpers::dto::{CredentialsRequest, DetailResponse, Endpoints};
use crate::services::handler::Services;
use crate::session::handler::Session;

fn validate_credentials(email: &str, password: &str) -> Result<(), String> {
    if email.trim().is_empty() || !email.contains('@') {
        return Err("Please enter a valid email address".to_string());
    }

    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        ));
    }

    Ok(())
}

/// Signup and login. A successful call sets the session cookie, after which
/// the session is re-probed.
#[derive(Clone)]
pub struct AccountService {
    services: Services,
    session: Session,
}

impl AccountService {
    pub fn new(services: Services, session: Session) -> Self {
        Self { services, session }
    }

    pub async fn signup(&self, email: &str, password: &str) -> AccountOutcome {
        self.submit(Endpoints::Signup, email, password, SIGNUP_FALLBACK_MESSAGE)
            .await
    }

    pub async fn login(&self, email: &str, password: &str) -> AccountOutcome {
        self.submit(Endpoints::Login, email, password, LOGIN_FALLBACK_MESSAGE)
            .await
    }

    async fn submit(
        &self,
        endpoint: Endpoints,
        email: &str,
        password: &str,
        fallback: &str,
    ) -> AccountOutcome {
        let email = email.trim();

        if let Err(message) = validate_credentials(email, password) {
            return AccountOutcome::ValidationError { message };
        }

        let request = CredentialsRequest { email, password };
        let response = match self.services.post_json(endpoint, &request).await {
            Ok(response) => response,
            Err(e) => {
                warn!("⚠️ {} request failed: {}", endpoint, e);
                return AccountOutcome::TransportFailure;
            }
        };

        if response.is_success() {
            info!("✅ {} accepted", endpoint);
            let authenticated = self.session.check_auth().await;
            return AccountOutcome::Accepted { authenticated };
        }

        let message = serde_json::from_str::<DetailResponse>(&response.body)
            .ok()
            .and_then(|data| data.detail)
            .filter(|detail| !detail.is_empty())
            .unwrap_or_else(|| fallback.to_string());

        AccountOutcome::Rejected { message }
    }
}
