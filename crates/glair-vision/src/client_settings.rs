use glair_vision_api_base::{Configuration, DEFAULT_API_VERSION, DEFAULT_BASE_URL};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Serializable client settings, for applications that load their configuration from a file or
/// the environment.
///
/// Defaults to
///
/// ```
/// # use glair_vision::ClientSettings;
/// let settings = ClientSettings {
///     base_url: "https://api.vision.glair.ai".to_string(),
///     api_version: "v1".to_string(),
///     username: "".to_string(),
///     password: "".to_string(),
///     api_key: "".to_string(),
/// };
/// let default = ClientSettings::default();
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ClientSettings {
    /// Base URL of the API. Defaults to `https://api.vision.glair.ai`
    pub base_url: String,
    /// API version segment. Defaults to `v1`
    pub api_version: String,
    /// Username for basic authentication.
    pub username: String,
    /// Password for basic authentication.
    pub password: String,
    /// API key sent in the `x-api-key` header.
    pub api_key: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            api_version: DEFAULT_API_VERSION.into(),
            username: String::new(),
            password: String::new(),
            api_key: String::new(),
        }
    }
}

impl From<ClientSettings> for Configuration {
    fn from(settings: ClientSettings) -> Self {
        let mut configuration =
            Configuration::new(settings.username, settings.password, settings.api_key);
        configuration
            .with_base_url(settings.base_url)
            .with_version(settings.api_version);
        configuration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_use_defaults() {
        let settings: ClientSettings =
            serde_json::from_str(r#"{ "apiKey": "key", "username": "user" }"#).unwrap();

        assert_eq!(settings.api_key, "key");
        assert_eq!(settings.username, "user");
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.api_version, DEFAULT_API_VERSION);
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let result = serde_json::from_str::<ClientSettings>(r#"{ "apiUrl": "http://localhost" }"#);

        assert!(result.is_err());
    }

    #[test]
    fn test_into_configuration() {
        let settings = ClientSettings {
            base_url: "http://localhost:8080".to_string(),
            api_version: "v2".to_string(),
            username: "user".to_string(),
            password: "pass".to_string(),
            api_key: "key".to_string(),
        };

        let configuration = Configuration::from(settings);

        assert_eq!(configuration.basic_auth(), Some(("user", "pass")));
        assert_eq!(configuration.api_key, "key");
        assert_eq!(
            configuration.endpoint_url("face", "match"),
            "http://localhost:8080/face/v2/match"
        );
    }
}
