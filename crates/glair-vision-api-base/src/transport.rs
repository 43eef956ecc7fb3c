//! Pluggable HTTP transport.
//!
//! Requests are always sent through a [`reqwest_middleware::ClientWithMiddleware`]. Applications
//! that need full control over the exchange implement [`HttpClient`]; it is installed as the
//! last middleware in the chain and answers every request itself.

use std::sync::Arc;

use async_trait::async_trait;
use http::Extensions;
use reqwest::{Request, Response};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware, Middleware, Next};

use crate::Error;

/// Capability that performs the actual network exchange for a request.
#[async_trait]
pub trait HttpClient: Send + Sync + 'static {
    /// Send `request` and return the response, or the reason no response was received.
    async fn execute(&self, request: Request) -> Result<Response, Error>;
}

#[async_trait]
impl HttpClient for reqwest::Client {
    async fn execute(&self, request: Request) -> Result<Response, Error> {
        Ok(reqwest::Client::execute(self, request).await?)
    }
}

#[async_trait]
impl HttpClient for ClientWithMiddleware {
    async fn execute(&self, request: Request) -> Result<Response, Error> {
        Ok(ClientWithMiddleware::execute(self, request).await?)
    }
}

/// Terminal middleware that hands every request to a [`HttpClient`] instead of the inner
/// `reqwest::Client`.
struct TransportMiddleware {
    transport: Arc<dyn HttpClient>,
}

#[async_trait]
impl Middleware for TransportMiddleware {
    async fn handle(
        &self,
        req: Request,
        _extensions: &mut Extensions,
        _next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        self.transport
            .execute(req)
            .await
            .map_err(|e| reqwest_middleware::Error::Middleware(e.into()))
    }
}

/// Default transport: a plain `reqwest::Client` without middleware.
pub fn default_client() -> ClientWithMiddleware {
    reqwest::Client::new().into()
}

/// Wrap a custom [`HttpClient`] into a client usable by the API configuration.
pub fn client_from_transport(transport: impl HttpClient) -> ClientWithMiddleware {
    ClientBuilder::new(reqwest::Client::new())
        .with(TransportMiddleware {
            transport: Arc::new(transport),
        })
        .build()
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct RecordingTransport {
        urls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl HttpClient for Arc<RecordingTransport> {
        async fn execute(&self, request: Request) -> Result<Response, Error> {
            self.urls
                .lock()
                .unwrap()
                .push(request.url().to_string());

            let response = http::Response::builder()
                .status(200)
                .body(r#"{"status":"SUCCESS"}"#)
                .unwrap();
            Ok(response.into())
        }
    }

    struct OfflineTransport;

    #[async_trait]
    impl HttpClient for OfflineTransport {
        async fn execute(&self, _request: Request) -> Result<Response, Error> {
            Err(Error::NotConnected("offline".to_string()))
        }
    }

    #[tokio::test]
    async fn test_custom_transport_answers_requests() {
        let transport = Arc::new(RecordingTransport::default());
        let client = client_from_transport(transport.clone());

        let response = client
            .post("https://api.vision.glair.ai/ocr/v1/ktp")
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), reqwest::StatusCode::OK);
        assert_eq!(
            response.text().await.unwrap(),
            r#"{"status":"SUCCESS"}"#.to_string()
        );
        assert_eq!(
            *transport.urls.lock().unwrap(),
            vec!["https://api.vision.glair.ai/ocr/v1/ktp".to_string()]
        );
    }

    #[tokio::test]
    async fn test_custom_transport_error_is_preserved() {
        let client = client_from_transport(OfflineTransport);

        let error = client
            .get("https://api.vision.glair.ai/face/v1/match")
            .send()
            .await
            .unwrap_err();

        assert!(matches!(Error::from(error), Error::NotConnected(msg) if msg == "offline"));
    }
}
