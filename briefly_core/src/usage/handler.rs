use std::time::Duration;

use log::{info, warn};

use super::dto::UsageOutcome;
use crate::helpers::dto::{Endpoints, UsageResponse};
use crate::services::handler::Services;

/// One credit buys one hour of source video.
pub const SECONDS_PER_CREDIT: u64 = 60 * 60;

/// Credits a video of this length consumes; partial hours round up.
pub fn credits_for_duration(duration: Duration) -> u64 {
    let secs = duration.as_secs() + u64::from(duration.subsec_nanos() > 0);
    secs.div_ceil(SECONDS_PER_CREDIT)
}

pub fn resolve_usage(status: u16, body: &str) -> UsageOutcome {
    if status == 401 {
        return UsageOutcome::AuthenticationRequired;
    }

    if !(200..300).contains(&status) {
        warn!("⚠️ Usage query returned status {}, showing 0 credits", status);
        return UsageOutcome::Credits(0);
    }

    match serde_json::from_str::<UsageResponse>(body) {
        Ok(data) => UsageOutcome::Credits(data.credits.unwrap_or(0).max(0) as u64),
        Err(e) => {
            warn!("⚠️ Unreadable usage response, showing 0 credits: {}", e);
            UsageOutcome::Credits(0)
        }
    }
}

/// Fetches the credit balance. Nothing is cached; every call asks the server.
#[derive(Clone)]
pub struct UsageService {
    services: Services,
}

impl UsageService {
    pub fn new(services: Services) -> Self {
        Self { services }
    }

    pub async fn fetch_credits(&self) -> UsageOutcome {
        match self.services.get(Endpoints::Usage).await {
            Ok(response) => {
                let outcome = resolve_usage(response.status, &response.body);
                if let UsageOutcome::Credits(credits) = outcome {
                    info!("💳 Credits remaining: {}", credits);
                }
                outcome
            }
            Err(e) => {
                warn!("⚠️ Failed to check usage: {}", e);
                UsageOutcome::Credits(0)
            }
        }
    }
}
