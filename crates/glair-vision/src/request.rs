//! Multipart request building shared by every API client.

use std::path::PathBuf;

use glair_vision_api_base::{Configuration, Error};
use mime_guess::Mime;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use tracing::debug;

/// An image to upload, either read from disk when the request is sent or already in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Image {
    /// Path to an image file.
    Path(PathBuf),
    /// Raw image bytes with the file name reported to the API.
    Bytes {
        /// File name of the upload, used to infer the content type.
        file_name: String,
        /// Image content.
        bytes: Vec<u8>,
    },
}

impl Image {
    /// Image read from `path` when the request is sent.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Image::Path(path.into())
    }

    /// Image already loaded in memory.
    pub fn from_bytes(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Image::Bytes {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }

    pub(crate) async fn into_part(self) -> Result<Part, Error> {
        let (file_name, bytes) = match self {
            Image::Path(path) => {
                let bytes = tokio::fs::read(&path).await?;
                let file_name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "image".to_string());
                (file_name, bytes)
            }
            Image::Bytes { file_name, bytes } => (file_name, bytes),
        };

        let mime = mime_for(&file_name);
        Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(mime.as_ref())
            .map_err(|e| Error::Other(e.to_string()))
    }
}

impl From<PathBuf> for Image {
    fn from(path: PathBuf) -> Self {
        Image::Path(path)
    }
}

impl From<&str> for Image {
    fn from(path: &str) -> Self {
        Image::Path(path.into())
    }
}

fn mime_for(file_name: &str) -> Mime {
    mime_guess::from_path(file_name).first_or_octet_stream()
}

/// A multipart request to a single API endpoint.
pub(crate) struct MultipartRequest<'a> {
    service: &'a str,
    endpoint: &'a str,
    form: Form,
    request_id: Option<String>,
}

impl<'a> MultipartRequest<'a> {
    pub(crate) fn new(service: &'a str, endpoint: &'a str) -> Self {
        Self {
            service,
            endpoint,
            form: Form::new(),
            request_id: None,
        }
    }

    pub(crate) async fn image(mut self, name: &'static str, image: Image) -> Result<Self, Error> {
        self.form = self.form.part(name, image.into_part().await?);
        Ok(self)
    }

    pub(crate) fn text(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.form = self.form.text(name, value.into());
        self
    }

    pub(crate) fn request_id(mut self, request_id: Option<String>) -> Self {
        self.request_id = request_id;
        self
    }

    /// Send the request and decode a successful JSON response into `T`.
    pub(crate) async fn send<T: DeserializeOwned>(
        self,
        configuration: &Configuration,
    ) -> Result<T, Error> {
        let url = configuration.endpoint_url(self.service, self.endpoint);
        let logger = &configuration.logger;

        debug!(
            method = "POST",
            url = %url,
            request_id = ?self.request_id,
            "GLAIR Vision request"
        );
        logger.debug(&format!("POST {url}"));

        let mut request = configuration
            .client
            .post(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .multipart(self.form);

        if let Some((username, password)) = configuration.basic_auth() {
            request = request.basic_auth(username, Some(password));
        }
        if !configuration.api_key.is_empty() {
            request = request.header("x-api-key", configuration.api_key.as_str());
        }
        if let Some(ref request_id) = self.request_id {
            request = request.header("x-request-id", request_id.as_str());
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                let e = Error::from(e);
                logger.error(&format!("POST {url} failed: {e}"));
                return Err(e);
            }
        };

        let status = response.status();
        let content = response.text().await?;
        debug!(status = %status, "GLAIR Vision response");

        if !status.is_success() {
            logger.error(&format!("POST {url} returned {status}: {content}"));
            return Err(Error::Response { status, content });
        }

        serde_json::from_str(&content).map_err(|e| {
            logger.error(&format!("POST {url} returned an unexpected body: {e}"));
            Error::InvalidResponse(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_for() {
        assert_eq!(mime_for("ktp.jpg").essence_str(), "image/jpeg");
        assert_eq!(mime_for("KTP.JPEG").essence_str(), "image/jpeg");
        assert_eq!(mime_for("scan.png").essence_str(), "image/png");
        assert_eq!(mime_for("selfie.gif").essence_str(), "image/gif");
        assert_eq!(mime_for("invoice.pdf").essence_str(), "application/pdf");
        assert_eq!(mime_for("image").essence_str(), "application/octet-stream");
    }

    #[tokio::test]
    async fn test_missing_file_is_a_file_error() {
        let image = Image::from_path("/definitely/not/here.jpg");

        let error = image.into_part().await.unwrap_err();

        assert_eq!(error.code(), glair_vision_api_base::ErrorCode::File);
    }

    #[tokio::test]
    async fn test_bytes_image_into_part() {
        let image = Image::from_bytes("face.jpeg", vec![0xff, 0xd8, 0xff]);

        assert!(image.into_part().await.is_ok());
    }
}
