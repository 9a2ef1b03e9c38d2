use log::{debug, error, info, warn};
use reqwest::{Client, RequestBuilder};
use serde::Serialize;

use crate::error::ClientResult;
use crate::helpers::config::ClientConfig;
use crate::helpers::dto::{Endpoints, RawResponse};

/// The one HTTP client every remote call goes through.
///
/// The cookie jar is shared by all clones, so the session cookie set by signup
/// or login is sent with every later request.
#[derive(Clone)]
pub struct Services {
    client: Client,
    config: ClientConfig,
}

impl Services {
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let client = Client::builder().cookie_store(true).build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub async fn get(&self, endpoint: Endpoints) -> ClientResult<RawResponse> {
        let url = self.config.endpoint_url(endpoint);
        debug!("🌐 GET {} ({})", url, endpoint);

        self.execute(endpoint, &url, self.client.get(&url)).await
    }

    pub async fn post(&self, endpoint: Endpoints) -> ClientResult<RawResponse> {
        let url = self.config.endpoint_url(endpoint);
        debug!("🌐 POST {} ({})", url, endpoint);

        self.execute(endpoint, &url, self.client.post(&url)).await
    }

    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        endpoint: Endpoints,
        body: &T,
    ) -> ClientResult<RawResponse> {
        let url = self.config.endpoint_url(endpoint);
        debug!("🌐 POST {} ({})", url, endpoint);

        self.execute(endpoint, &url, self.client.post(&url).json(body))
            .await
    }

    async fn execute(
        &self,
        endpoint: Endpoints,
        url: &str,
        request: RequestBuilder,
    ) -> ClientResult<RawResponse> {
        let response = request.send().await;

        match response {
            Ok(resp) => {
                let status = resp.status();
                debug!("📡 Server response status: {}", status);

                let body = resp.text().await.map_err(|e| {
                    error!("❌ Failed to read {} response body: {}", endpoint, e);
                    e
                })?;

                if status.is_success() {
                    info!("✅ {} call successful - Status: {}", endpoint, status);
                } else {
                    warn!("⚠️ {} call returned status {}", endpoint, status);
                    debug!("📡 Server error response body: {}", body);
                }

                Ok(RawResponse {
                    status: status.as_u16(),
                    body,
                })
            }
            Err(network_error) => {
                error!("❌ Network error during {} call: {}", endpoint, network_error);
                error!("❌ Failed to connect to: {}", url);

                if network_error.is_timeout() {
                    error!("⏰ Request timed out");
                } else if network_error.is_connect() {
                    error!("🔌 Connection failed - server may be down");
                }

                Err(network_error.into())
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{services_for, unreachable_services};
    use super::*;
    use crate::error::ClientError;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_returns_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/summarize"))
            .and(body_json(serde_json::json!({ "url": "https://youtu.be/abc" })))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .expect(1)
            .mount(&server)
            .await;

        let services = services_for(&server);
        let response = services
            .post_json(
                Endpoints::Summarize,
                &serde_json::json!({ "url": "https://youtu.be/abc" }),
            )
            .await
            .unwrap();

        assert_eq!(response.status, 500);
        assert_eq!(response.body, "boom");
        assert!(!response.is_success());
    }

    #[tokio::test]
    async fn test_session_cookie_is_sent_on_later_calls() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("set-cookie", "session=abc123; Path=/; HttpOnly"),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/usage"))
            .and(header("cookie", "session=abc123"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"credits":3}"#))
            .expect(1)
            .mount(&server)
            .await;

        let services = services_for(&server);
        services.post(Endpoints::Login).await.unwrap();
        let response = services.clone().get(Endpoints::Usage).await.unwrap();

        assert_eq!(response.status, 200);
    }

    #[tokio::test]
    async fn test_unreachable_server_is_http_error() {
        let services = unreachable_services();

        let result = services.get(Endpoints::Usage).await;
        assert!(matches!(result, Err(ClientError::Http(_))));
    }
}
