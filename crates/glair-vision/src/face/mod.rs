//! Face biometrics endpoints.

use std::sync::Arc;

use async_trait::async_trait;
use glair_vision_api_base::{Configuration, Error};
use mockall::automock;

use crate::request::{Image, MultipartRequest};

mod models;

pub use models::{
    ActiveLivenessResult, FaceMatchingData, FaceMatchingResult, GestureCode, LivenessData,
    PassiveLivenessResult,
};

const SERVICE: &str = "face";

/// Input of a face matching request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceMatchingInput {
    /// Reference face, e.g. the photo on an identity card.
    pub stored_image: Image,
    /// Face captured from the subject.
    pub captured_image: Image,
    /// Caller supplied identifier, sent as `x-request-id`.
    pub request_id: Option<String>,
}

/// Input of a passive liveness request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassiveLivenessInput {
    /// Face image.
    pub image: Image,
    /// Caller supplied identifier, sent as `x-request-id`.
    pub request_id: Option<String>,
}

/// Input of an active liveness request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveLivenessInput {
    /// Face image with the requested gesture.
    pub image: Image,
    /// Gesture the subject was asked to perform.
    pub gesture_code: GestureCode,
    /// Caller supplied identifier, sent as `x-request-id`.
    pub request_id: Option<String>,
}

/// Face biometrics operations of the GLAIR Vision API.
#[automock]
#[async_trait]
pub trait FaceBioApi: Send + Sync {
    /// POST /face/{version}/match
    async fn face_matching(&self, input: FaceMatchingInput) -> Result<FaceMatchingResult, Error>;

    /// POST /face/{version}/passive-liveness
    async fn passive_liveness(
        &self,
        input: PassiveLivenessInput,
    ) -> Result<PassiveLivenessResult, Error>;

    /// POST /face/{version}/active-liveness
    async fn active_liveness(
        &self,
        input: ActiveLivenessInput,
    ) -> Result<ActiveLivenessResult, Error>;
}

/// [`FaceBioApi`] implementation calling the configured API.
pub struct FaceBioApiClient {
    configuration: Arc<Configuration>,
}

impl FaceBioApiClient {
    /// Create a client sharing `configuration`.
    pub fn new(configuration: Arc<Configuration>) -> Self {
        Self { configuration }
    }
}

#[async_trait]
impl FaceBioApi for FaceBioApiClient {
    async fn face_matching(&self, input: FaceMatchingInput) -> Result<FaceMatchingResult, Error> {
        MultipartRequest::new(SERVICE, "match")
            .image("stored_image", input.stored_image)
            .await?
            .image("captured_image", input.captured_image)
            .await?
            .request_id(input.request_id)
            .send(&self.configuration)
            .await
    }

    async fn passive_liveness(
        &self,
        input: PassiveLivenessInput,
    ) -> Result<PassiveLivenessResult, Error> {
        MultipartRequest::new(SERVICE, "passive-liveness")
            .image("image", input.image)
            .await?
            .request_id(input.request_id)
            .send(&self.configuration)
            .await
    }

    async fn active_liveness(
        &self,
        input: ActiveLivenessInput,
    ) -> Result<ActiveLivenessResult, Error> {
        MultipartRequest::new(SERVICE, "active-liveness")
            .image("image", input.image)
            .await?
            .text("gesture-code", input.gesture_code.as_str())
            .request_id(input.request_id)
            .send(&self.configuration)
            .await
    }
}
