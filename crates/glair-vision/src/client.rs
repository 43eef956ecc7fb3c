//! Client for the GLAIR Vision API

use std::sync::Arc;

use glair_vision_api_base::Configuration;

use crate::{
    face::{FaceBioApi, FaceBioApiClient, MockFaceBioApi},
    ocr::{MockOcrApi, OcrApi, OcrApiClient},
};

/// The main struct to interact with the GLAIR Vision API.
///
/// Every feature client shares the same [`Configuration`].
pub enum Client {
    /// Client calling the configured API.
    Real(ClientReal),
    /// Client answering from mocks, for use in tests.
    Mock(ClientMock),
}

#[allow(missing_docs)]
pub struct ClientReal {
    configuration: Arc<Configuration>,
    ocr: OcrApiClient,
    face_bio: FaceBioApiClient,
}

#[allow(missing_docs)]
pub struct ClientMock {
    pub ocr: MockOcrApi,
    pub face_bio: MockFaceBioApi,
}

impl Client {
    /// Create a client using `configuration` for every request.
    pub fn new(configuration: Configuration) -> Self {
        let configuration = Arc::new(configuration);

        Self::Real(ClientReal {
            ocr: OcrApiClient::new(configuration.clone()),
            face_bio: FaceBioApiClient::new(configuration.clone()),
            configuration,
        })
    }

    /// Create a client backed by mocks, configured through `func`.
    pub fn new_mocked(func: impl FnOnce(&mut ClientMock)) -> Self {
        let mut mock = ClientMock {
            ocr: MockOcrApi::new(),
            face_bio: MockFaceBioApi::new(),
        };
        func(&mut mock);
        Self::Mock(mock)
    }

    /// Configuration shared by the feature clients. Mocked clients have none.
    pub fn configuration(&self) -> Option<&Configuration> {
        match self {
            Client::Real(real) => Some(&real.configuration),
            Client::Mock(_) => None,
        }
    }

    /// Get access to the OCR API
    pub fn ocr(&self) -> &dyn OcrApi {
        match self {
            Client::Real(real) => &real.ocr,
            Client::Mock(mock) => &mock.ocr,
        }
    }

    /// Get access to the face biometrics API
    pub fn face_bio(&self) -> &dyn FaceBioApi {
        match self {
            Client::Real(real) => &real.face_bio,
            Client::Mock(mock) => &mock.face_bio,
        }
    }
}

impl From<Configuration> for Client {
    fn from(configuration: Configuration) -> Self {
        Client::new(configuration)
    }
}

#[cfg(test)]
mod tests {
    use glair_vision_api_base::Error;

    use super::*;
    use crate::{
        face::{PassiveLivenessInput, PassiveLivenessResult},
        ocr::{KtpData, OcrField, OcrInput, OcrResult},
        request::Image,
    };

    #[test]
    fn test_real_client_shares_configuration() {
        let mut configuration = Configuration::new("user", "pass", "key");
        configuration.with_base_url("http://localhost:8080");

        let client = Client::new(configuration);

        assert_eq!(
            client.configuration().unwrap().endpoint_url("ocr", "ktp"),
            "http://localhost:8080/ocr/v1/ktp"
        );
    }

    #[tokio::test]
    async fn test_mocked_ocr() {
        let client = Client::new_mocked(|mock| {
            mock.ocr.expect_ktp().once().returning(|_| {
                Ok(OcrResult {
                    status: "SUCCESS".to_string(),
                    reason: String::new(),
                    read: Some(KtpData {
                        nik: Some(OcrField {
                            value: "3171234567890123".to_string(),
                            ..Default::default()
                        }),
                        ..Default::default()
                    }),
                    extra: Default::default(),
                })
            });
        });

        let result = client
            .ocr()
            .ktp(OcrInput::new(Image::from_bytes("ktp.jpg", vec![1, 2, 3])))
            .await
            .unwrap();

        assert!(client.configuration().is_none());
        assert_eq!(result.read.unwrap().nik.unwrap().value, "3171234567890123");
    }

    #[tokio::test]
    async fn test_mocked_face_bio_error() {
        let client = Client::new_mocked(|mock| {
            mock.face_bio
                .expect_passive_liveness()
                .returning(|_| Err(Error::NotConnected("offline".to_string())));
        });

        let result: Result<PassiveLivenessResult, Error> = client
            .face_bio()
            .passive_liveness(PassiveLivenessInput {
                image: Image::from_path("face.jpeg"),
                request_id: None,
            })
            .await;

        assert_eq!(
            result.unwrap_err().code(),
            glair_vision_api_base::ErrorCode::Network
        );
    }
}
