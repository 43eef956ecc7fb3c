//! Configuration types for API clients.

use std::{fmt, sync::Arc};

use reqwest_middleware::ClientWithMiddleware;

use crate::{
    logger::{LeveledLogger, Logger},
    transport::{self, HttpClient},
};

/// Default base URL of the GLAIR Vision API.
pub const DEFAULT_BASE_URL: &str = "https://api.vision.glair.ai";
/// Default GLAIR Vision API version.
pub const DEFAULT_API_VERSION: &str = "v1";

/// Configuration for an API client.
///
/// Holds the credentials, the API location and the transport and logger capabilities shared by
/// every request. It is meant to be set up once, then shared read-only, usually behind an
/// [`Arc`].
///
/// ```
/// # use glair_vision_api_base::Configuration;
/// let mut config = Configuration::new("username", "password", "api-key");
/// config
///     .with_base_url("http://localhost:8080")
///     .with_version("v2");
///
/// assert_eq!(
///     config.endpoint_url("face", "liveness"),
///     "http://localhost:8080/face/v2/liveness"
/// );
/// ```
#[derive(Clone)]
pub struct Configuration {
    /// Username used for basic authentication. Empty means not set.
    pub username: String,
    /// Password used for basic authentication. Empty means not set.
    pub password: String,
    /// API key sent in the `x-api-key` header. Empty means not set.
    pub api_key: String,

    /// Base URL of the API. Defaults to [`DEFAULT_BASE_URL`].
    pub base_url: String,
    /// API version segment. Defaults to [`DEFAULT_API_VERSION`].
    pub api_version: String,

    /// HTTP client with middleware support. Defaults to a plain `reqwest::Client`.
    pub client: ClientWithMiddleware,
    /// Logger for SDK diagnostics. Defaults to a [`LeveledLogger`] that logs nothing.
    pub logger: Arc<dyn Logger>,
}

impl Configuration {
    /// Create a configuration with the given credentials and default values for everything
    /// else.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            api_version: DEFAULT_API_VERSION.to_owned(),
            client: transport::default_client(),
            logger: Arc::new(LeveledLogger::default()),
        }
    }

    /// Full URL of `endpoint` within `service`: `{base_url}/{service}/{api_version}/{endpoint}`.
    ///
    /// Segments are joined as given: nothing is escaped and repeated slashes are kept.
    pub fn endpoint_url(&self, service: &str, endpoint: &str) -> String {
        [
            self.base_url.as_str(),
            service,
            self.api_version.as_str(),
            endpoint,
        ]
        .join("/")
    }

    /// Replace all three credentials.
    pub fn with_credentials(
        &mut self,
        username: impl Into<String>,
        password: impl Into<String>,
        api_key: impl Into<String>,
    ) -> &mut Self {
        self.username = username.into();
        self.password = password.into();
        self.api_key = api_key.into();
        self
    }

    /// Send requests through a reqwest client, with or without middleware.
    pub fn with_client(&mut self, client: impl Into<ClientWithMiddleware>) -> &mut Self {
        self.client = client.into();
        self
    }

    /// Send requests through a custom transport instead of the network stack.
    pub fn with_transport(&mut self, transport: impl HttpClient) -> &mut Self {
        self.client = transport::client_from_transport(transport);
        self
    }

    /// Set the base URL of the API.
    pub fn with_base_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.base_url = url.into();
        self
    }

    /// Set the API version segment.
    pub fn with_version(&mut self, version: impl Into<String>) -> &mut Self {
        self.api_version = version.into();
        self
    }

    /// Set the logger used for SDK diagnostics.
    pub fn with_logger(&mut self, logger: impl Logger + 'static) -> &mut Self {
        self.logger = Arc::new(logger);
        self
    }

    /// Basic auth credentials, if a username or password is set.
    pub fn basic_auth(&self) -> Option<(&str, &str)> {
        if self.username.is_empty() && self.password.is_empty() {
            return None;
        }
        Some((self.username.as_str(), self.password.as_str()))
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new("", "", "")
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("username", &self.username)
            .field("password", &redacted(&self.password))
            .field("api_key", &redacted(&self.api_key))
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .finish_non_exhaustive()
    }
}

fn redacted(value: &str) -> &'static str {
    if value.is_empty() {
        ""
    } else {
        "<redacted>"
    }
}

/// Setters usable on a configuration that may be absent.
///
/// Every method is a no-op on `None` and returns `None`, so a chain started on a missing
/// configuration stays missing instead of failing.
pub trait ConfigurationExt<'a>: Sized {
    /// See [`Configuration::with_credentials`].
    fn with_credentials(
        self,
        username: impl Into<String>,
        password: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Option<&'a mut Configuration>;
    /// See [`Configuration::with_client`].
    fn with_client(
        self,
        client: impl Into<ClientWithMiddleware>,
    ) -> Option<&'a mut Configuration>;
    /// See [`Configuration::with_transport`].
    fn with_transport(self, transport: impl HttpClient) -> Option<&'a mut Configuration>;
    /// See [`Configuration::with_base_url`].
    fn with_base_url(self, url: impl Into<String>) -> Option<&'a mut Configuration>;
    /// See [`Configuration::with_version`].
    fn with_version(self, version: impl Into<String>) -> Option<&'a mut Configuration>;
    /// See [`Configuration::with_logger`].
    fn with_logger(self, logger: impl Logger + 'static) -> Option<&'a mut Configuration>;
}

impl<'a> ConfigurationExt<'a> for Option<&'a mut Configuration> {
    fn with_credentials(
        self,
        username: impl Into<String>,
        password: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Option<&'a mut Configuration> {
        self.map(|c| c.with_credentials(username, password, api_key))
    }

    fn with_client(
        self,
        client: impl Into<ClientWithMiddleware>,
    ) -> Option<&'a mut Configuration> {
        self.map(|c| c.with_client(client))
    }

    fn with_transport(self, transport: impl HttpClient) -> Option<&'a mut Configuration> {
        self.map(|c| c.with_transport(transport))
    }

    fn with_base_url(self, url: impl Into<String>) -> Option<&'a mut Configuration> {
        self.map(|c| c.with_base_url(url))
    }

    fn with_version(self, version: impl Into<String>) -> Option<&'a mut Configuration> {
        self.map(|c| c.with_version(version))
    }

    fn with_logger(self, logger: impl Logger + 'static) -> Option<&'a mut Configuration> {
        self.map(|c| c.with_logger(logger))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    };

    use async_trait::async_trait;

    use super::*;
    use crate::{logger::LogLevel, Error};

    #[derive(Clone, Default)]
    struct CountingTransport {
        requests: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl HttpClient for CountingTransport {
        async fn execute(&self, _request: reqwest::Request) -> Result<reqwest::Response, Error> {
            self.requests.fetch_add(1, Ordering::SeqCst);
            let response = http::Response::builder().status(200).body("").unwrap();
            Ok(response.into())
        }
    }

    #[derive(Clone, Default)]
    struct RecordingLogger {
        messages: Arc<Mutex<Vec<String>>>,
    }

    impl Logger for RecordingLogger {
        fn log(&self, _level: LogLevel, message: &str) {
            self.messages.lock().unwrap().push(message.to_string());
        }
    }

    #[test]
    fn test_new_keeps_credentials_and_applies_defaults() {
        let config = Configuration::new("user", "pass", "key");

        assert_eq!(config.username, "user");
        assert_eq!(config.password, "pass");
        assert_eq!(config.api_key, "key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api_version, DEFAULT_API_VERSION);
    }

    #[test]
    fn test_endpoint_url_default() {
        let config = Configuration::new("u", "p", "k");

        assert_eq!(
            config.endpoint_url("ocr", "ktp"),
            "https://api.vision.glair.ai/ocr/v1/ktp"
        );
    }

    #[test]
    fn test_endpoint_url_after_setters() {
        let mut config = Configuration::new("u", "p", "k");
        config
            .with_base_url("http://localhost:8080")
            .with_version("v2");

        assert_eq!(
            config.endpoint_url("face", "liveness"),
            "http://localhost:8080/face/v2/liveness"
        );
    }

    #[test]
    fn test_endpoint_url_is_a_plain_join() {
        let mut config = Configuration::default();
        config.with_base_url("http://localhost/");

        assert_eq!(
            config.endpoint_url("ocr", "general-document"),
            "http://localhost//ocr/v1/general-document"
        );
        assert_eq!(config.endpoint_url("", ""), "http://localhost///v1/");
    }

    #[test]
    fn test_setters_are_idempotent() {
        let mut once = Configuration::default();
        once.with_credentials("a", "b", "c")
            .with_base_url("http://example.com")
            .with_version("v3");

        let mut twice = Configuration::default();
        twice
            .with_credentials("a", "b", "c")
            .with_credentials("a", "b", "c")
            .with_base_url("http://example.com")
            .with_base_url("http://example.com")
            .with_version("v3")
            .with_version("v3");

        assert_eq!(once.username, twice.username);
        assert_eq!(once.password, twice.password);
        assert_eq!(once.api_key, twice.api_key);
        assert_eq!(once.base_url, twice.base_url);
        assert_eq!(once.api_version, twice.api_version);
        assert_eq!(
            once.endpoint_url("ocr", "npwp"),
            twice.endpoint_url("ocr", "npwp")
        );
    }

    #[tokio::test]
    async fn test_transport_and_logger_setters_are_idempotent() {
        let transport = CountingTransport::default();
        let logger = RecordingLogger::default();

        let mut config = Configuration::default();
        config
            .with_transport(transport.clone())
            .with_transport(transport.clone())
            .with_logger(logger.clone())
            .with_logger(logger.clone());

        let response = config
            .client
            .post(config.endpoint_url("ocr", "ktp"))
            .send()
            .await
            .unwrap();
        config.logger.info("sent");

        assert_eq!(response.status(), reqwest::StatusCode::OK);
        assert_eq!(transport.requests.load(Ordering::SeqCst), 1);
        assert_eq!(*logger.messages.lock().unwrap(), vec!["sent".to_string()]);
    }

    #[test]
    fn test_setters_on_absent_configuration_return_none() {
        let absent: Option<&mut Configuration> = None;

        assert!(absent
            .with_credentials("u", "p", "k")
            .with_base_url("http://localhost")
            .with_version("v2")
            .with_client(reqwest::Client::new())
            .with_transport(reqwest::Client::new())
            .with_logger(LeveledLogger::new(LogLevel::Debug))
            .is_none());
    }

    #[test]
    fn test_setters_on_present_configuration_through_option() {
        let mut config = Configuration::default();

        Some(&mut config)
            .with_base_url("http://localhost:9000")
            .with_version("v9");

        assert_eq!(config.endpoint_url("ocr", "kk"), "http://localhost:9000/ocr/v9/kk");
    }

    #[test]
    fn test_basic_auth() {
        assert_eq!(Configuration::default().basic_auth(), None);
        assert_eq!(
            Configuration::new("user", "", "").basic_auth(),
            Some(("user", ""))
        );
        assert_eq!(
            Configuration::new("user", "pass", "key").basic_auth(),
            Some(("user", "pass"))
        );
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let debug = format!("{:?}", Configuration::new("user", "hunter2", "secret-key"));

        assert!(debug.contains("user"));
        assert!(!debug.contains("hunter2"));
        assert!(!debug.contains("secret-key"));
    }
}
