use crate::domain::model::{Signup, SubmissionReceipt};
use crate::domain::ports::{ConfigProvider, RegistrationGateway};
use crate::utils::error::Result;
use reqwest::Client;
use std::time::Duration;

/// Registration service client.
///
/// Waits out the configured submission delay, then POSTs the signup as JSON
/// and decodes whatever the service echoes back.
pub struct HttpGateway<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> HttpGateway<C> {
    pub fn new(config: C) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs()))
            .build()?;
        Ok(Self { config, client })
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> RegistrationGateway for HttpGateway<C> {
    async fn submit(&self, signup: &Signup) -> Result<SubmissionReceipt> {
        // 模擬處理延遲
        let delay = self.config.submit_delay_ms();
        if delay > 0 {
            tracing::debug!("Simulating submission delay of {}ms", delay);
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        let endpoint = self.config.registration_endpoint();
        tracing::debug!("Posting signup to: {}", endpoint);

        let response = self
            .client
            .post(endpoint)
            .json(signup)
            .send()
            .await?
            .error_for_status()?;

        tracing::debug!("Registration service responded: {}", response.status());

        let receipt: SubmissionReceipt = response.json().await?;
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::PortalError;
    use httpmock::prelude::*;

    struct MockConfig {
        endpoint: String,
    }

    impl ConfigProvider for MockConfig {
        fn registration_endpoint(&self) -> &str {
            &self.endpoint
        }

        fn submit_delay_ms(&self) -> u64 {
            0
        }

        fn request_timeout_secs(&self) -> u64 {
            5
        }
    }

    #[tokio::test]
    async fn test_submit_posts_signup_json_and_decodes_receipt() {
        let server = MockServer::start();

        let api_mock = server.mock(|when, then| {
            when.method(POST).path("/posts").json_body(serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "event": "Food Drive"
            }));
            then.status(201)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "id": 101,
                    "name": "Ada",
                    "email": "ada@example.com",
                    "event": "Food Drive"
                }));
        });

        let gateway = HttpGateway::new(MockConfig {
            endpoint: server.url("/posts"),
        })
        .unwrap();

        let signup = Signup::new("Ada", "ada@example.com", "Food Drive");
        let receipt = gateway.submit(&signup).await.unwrap();

        api_mock.assert();
        assert_eq!(receipt.id, Some(101));
        assert_eq!(
            receipt.fields.get("event").and_then(|v| v.as_str()),
            Some("Food Drive")
        );
    }

    #[tokio::test]
    async fn test_submit_surfaces_server_error() {
        let server = MockServer::start();

        let api_mock = server.mock(|when, then| {
            when.method(POST).path("/posts");
            then.status(500);
        });

        let gateway = HttpGateway::new(MockConfig {
            endpoint: server.url("/posts"),
        })
        .unwrap();

        let signup = Signup::new("Ada", "ada@example.com", "Food Drive");
        let err = gateway.submit(&signup).await.unwrap_err();

        api_mock.assert();
        assert!(matches!(err, PortalError::ApiError(_)));
    }
}
