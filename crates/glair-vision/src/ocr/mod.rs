//! Document OCR endpoints.

use std::sync::Arc;

use async_trait::async_trait;
use glair_vision_api_base::{Configuration, Error};
use mockall::automock;
use serde::de::DeserializeOwned;

use crate::request::{Image, MultipartRequest};

mod models;

pub use models::{
    BpkbData, GeneralDocumentData, InvoiceData, KkData, KkMember, KtpData, LineItem, NpwpData,
    OcrField, OcrResult, PassportData, PlateData, ReceiptData, StnkData,
};

const SERVICE: &str = "ocr";

/// Input of a single page OCR request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OcrInput {
    /// Document image.
    pub image: Image,
    /// Caller supplied identifier, sent as `x-request-id`.
    pub request_id: Option<String>,
}

impl OcrInput {
    /// Input for `image` without a request id.
    pub fn new(image: impl Into<Image>) -> Self {
        Self {
            image: image.into(),
            request_id: None,
        }
    }
}

/// Input of a BPKB request, which can target a specific page of the book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BpkbInput {
    /// Image of a BPKB page.
    pub image: Image,
    /// Page number of the scanned page. The API detects it when absent.
    pub page: Option<u8>,
    /// Caller supplied identifier, sent as `x-request-id`.
    pub request_id: Option<String>,
}

/// OCR operations of the GLAIR Vision API.
#[automock]
#[async_trait]
pub trait OcrApi: Send + Sync {
    /// POST /ocr/{version}/ktp
    async fn ktp(&self, input: OcrInput) -> Result<OcrResult<KtpData>, Error>;

    /// POST /ocr/{version}/npwp
    async fn npwp(&self, input: OcrInput) -> Result<OcrResult<NpwpData>, Error>;

    /// POST /ocr/{version}/kk
    async fn kk(&self, input: OcrInput) -> Result<OcrResult<KkData>, Error>;

    /// POST /ocr/{version}/stnk
    async fn stnk(&self, input: OcrInput) -> Result<OcrResult<StnkData>, Error>;

    /// POST /ocr/{version}/bpkb
    async fn bpkb(&self, input: BpkbInput) -> Result<OcrResult<BpkbData>, Error>;

    /// POST /ocr/{version}/passport
    async fn passport(&self, input: OcrInput) -> Result<OcrResult<PassportData>, Error>;

    /// POST /ocr/{version}/plate
    async fn license_plate(&self, input: OcrInput) -> Result<OcrResult<PlateData>, Error>;

    /// POST /ocr/{version}/general-document
    async fn general_document(
        &self,
        input: OcrInput,
    ) -> Result<OcrResult<GeneralDocumentData>, Error>;

    /// POST /ocr/{version}/invoice
    async fn invoice(&self, input: OcrInput) -> Result<OcrResult<InvoiceData>, Error>;

    /// POST /ocr/{version}/receipt
    async fn receipt(&self, input: OcrInput) -> Result<OcrResult<ReceiptData>, Error>;
}

/// [`OcrApi`] implementation calling the configured API.
pub struct OcrApiClient {
    configuration: Arc<Configuration>,
}

impl OcrApiClient {
    /// Create a client sharing `configuration`.
    pub fn new(configuration: Arc<Configuration>) -> Self {
        Self { configuration }
    }

    async fn read<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        input: OcrInput,
    ) -> Result<OcrResult<T>, Error> {
        MultipartRequest::new(SERVICE, endpoint)
            .image("image", input.image)
            .await?
            .request_id(input.request_id)
            .send(&self.configuration)
            .await
    }
}

#[async_trait]
impl OcrApi for OcrApiClient {
    async fn ktp(&self, input: OcrInput) -> Result<OcrResult<KtpData>, Error> {
        self.read("ktp", input).await
    }

    async fn npwp(&self, input: OcrInput) -> Result<OcrResult<NpwpData>, Error> {
        self.read("npwp", input).await
    }

    async fn kk(&self, input: OcrInput) -> Result<OcrResult<KkData>, Error> {
        self.read("kk", input).await
    }

    async fn stnk(&self, input: OcrInput) -> Result<OcrResult<StnkData>, Error> {
        self.read("stnk", input).await
    }

    async fn bpkb(&self, input: BpkbInput) -> Result<OcrResult<BpkbData>, Error> {
        let mut request = MultipartRequest::new(SERVICE, "bpkb")
            .image("image", input.image)
            .await?
            .request_id(input.request_id);

        if let Some(page) = input.page {
            request = request.text("page", page.to_string());
        }

        request.send(&self.configuration).await
    }

    async fn passport(&self, input: OcrInput) -> Result<OcrResult<PassportData>, Error> {
        self.read("passport", input).await
    }

    async fn license_plate(&self, input: OcrInput) -> Result<OcrResult<PlateData>, Error> {
        self.read("plate", input).await
    }

    async fn general_document(
        &self,
        input: OcrInput,
    ) -> Result<OcrResult<GeneralDocumentData>, Error> {
        self.read("general-document", input).await
    }

    async fn invoice(&self, input: OcrInput) -> Result<OcrResult<InvoiceData>, Error> {
        self.read("invoice", input).await
    }

    async fn receipt(&self, input: OcrInput) -> Result<OcrResult<ReceiptData>, Error> {
        self.read("receipt", input).await
    }
}
