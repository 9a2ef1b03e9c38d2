use chrono::{DateTime, Utc};
use log::{debug, error, info, warn};

use super::dto::{INVALID_URL_MESSAGE, SUMMARIZE_FALLBACK_MESSAGE, SubmitOutcome};
use crate::helpers::dto::{Endpoints, SummarizeRequest, SummarizeResponse};
use crate::helpers::utils::is_supported_video_url;
use crate::history::dto::SummaryRecord;
use crate::history::storage::HistoryStore;
use crate::services::handler::Services;
use crate::session::handler::Session;

/// Map a summarize response to its outcome.
///
/// 401 and 403 win before the body is looked at. A body that is not the
/// expected JSON counts as a transport failure.
pub fn resolve_response(url: &str, status: u16, body: &str, now: DateTime<Utc>) -> SubmitOutcome {
    match status {
        401 => return SubmitOutcome::AuthenticationRequired,
        403 => return SubmitOutcome::QuotaExceeded,
        _ => {}
    }

    let data: SummarizeResponse = match serde_json::from_str(body) {
        Ok(data) => data,
        Err(e) => {
            warn!("⚠️ Unreadable summarize response (status {}): {}", status, e);
            return SubmitOutcome::TransportFailure;
        }
    };

    let success = (200..300).contains(&status);

    match data.summary {
        Some(summary) if success && !summary.is_empty() => {
            SubmitOutcome::Success(SummaryRecord::new(summary, url, now))
        }
        _ => SubmitOutcome::RemoteFailure {
            message: data
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| SUMMARIZE_FALLBACK_MESSAGE.to_string()),
        },
    }
}

/// Submits videos for summarization and applies the side effects of each outcome.
///
/// Callers keep at most one submission in flight per control.
#[derive(Clone)]
pub struct SummarizeService {
    services: Services,
    session: Session,
    store: HistoryStore,
}

impl SummarizeService {
    pub fn new(services: Services, session: Session, store: HistoryStore) -> Self {
        Self {
            services,
            session,
            store,
        }
    }

    pub async fn submit(&self, url: &str) -> SubmitOutcome {
        let url = url.trim();

        if !is_supported_video_url(url) {
            debug!("Rejected unsupported video URL: {:?}", url);
            return SubmitOutcome::ValidationError {
                message: INVALID_URL_MESSAGE.to_string(),
            };
        }

        let response = match self
            .services
            .post_json(Endpoints::Summarize, &SummarizeRequest { url })
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("⚠️ Summarize request failed before a response: {}", e);
                return SubmitOutcome::TransportFailure;
            }
        };

        let outcome = resolve_response(url, response.status, &response.body, Utc::now());

        match &outcome {
            SubmitOutcome::AuthenticationRequired => {
                info!("🔒 Session expired during summarize, logging out");
                self.session.logout().await;
            }
            SubmitOutcome::QuotaExceeded => {
                info!("💳 Out of credits, upgrade required");
            }
            SubmitOutcome::Success(record) => {
                info!("✅ Summary ready for {} ({} chars)", url, record.char_count());
                if let Err(e) = self.store.set_current(record) {
                    error!("❌ Failed to store current summary: {}", e);
                }
            }
            _ => {}
        }

        outcome
    }
}
