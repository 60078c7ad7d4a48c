use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use super::Notifier;
use crate::error::NotifyError;
use crate::metrics::prometheus::record_notification;

/// LINE Notify client: form-encoded `message` with a bearer token.
pub struct LineNotifier {
    url: String,
    token: String,
    http_client: Client,
}

impl LineNotifier {
    pub fn new(url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            token: token.into(),
            http_client: Client::new(),
        }
    }

    async fn post(&self, message: &str) -> Result<(), NotifyError> {
        let response = self
            .http_client
            .post(&self.url)
            .bearer_auth(&self.token)
            .form(&[("message", message)])
            .send()
            .await?;

        // Only an exact 200 counts as delivered.
        let status = response.status();
        if status != StatusCode::OK {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read response text>".to_string());
            return Err(NotifyError::Rejected { status, body });
        }

        Ok(())
    }
}

#[async_trait]
impl Notifier for LineNotifier {
    async fn notify(&self, message: &str) -> Result<(), NotifyError> {
        let result = self.post(message).await;

        record_notification(match &result {
            Ok(()) => "sent",
            Err(err) => err.outcome(),
        });

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn posts_form_with_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/notify"))
            .and(header("authorization", "Bearer secret-token"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string("message=Namchiang%0A26500%2F26600%0A2050.5+%7C+36.2"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"status":200,"message":"ok"}"#))
            .expect(1)
            .mount(&server)
            .await;

        let notifier = LineNotifier::new(format!("{}/api/notify", server.uri()), "secret-token");
        notifier
            .notify("Namchiang\n26500/26600\n2050.5 | 36.2")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn non_200_carries_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(401).set_body_string(r#"{"status":401,"message":"Invalid access token"}"#),
            )
            .mount(&server)
            .await;

        let notifier = LineNotifier::new(server.uri(), "");
        let err = notifier.notify("hello").await.unwrap_err();
        assert_eq!(err.outcome(), "rejected");

        match err {
            NotifyError::Rejected { status, body } => {
                assert_eq!(status, StatusCode::UNAUTHORIZED);
                assert!(body.contains("Invalid access token"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn other_success_codes_are_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let notifier = LineNotifier::new(server.uri(), "secret-token");
        assert!(matches!(
            notifier.notify("hello").await,
            Err(NotifyError::Rejected { status, .. }) if status == StatusCode::NO_CONTENT
        ));
    }

    #[tokio::test]
    async fn unreachable_sink_is_request_error() {
        let server = MockServer::start().await;
        let url = server.uri();
        drop(server);

        let notifier = LineNotifier::new(url, "secret-token");
        let err = notifier.notify("hello").await.unwrap_err();

        assert!(matches!(err, NotifyError::Request(_)));
        assert_eq!(err.outcome(), "error");
    }
}
