//! Client library for the GLAIR Vision API.
//!
//! Wraps the document OCR and face biometrics endpoints behind typed requests and responses.
//!
//! ```no_run
//! use glair_vision::{
//!     Client, Configuration,
//!     ocr::OcrInput,
//! };
//!
//! # async fn run() -> Result<(), glair_vision::Error> {
//! let client = Client::new(Configuration::new("username", "password", "api-key"));
//!
//! let ktp = client.ocr().ktp(OcrInput::new("./ktp.jpg")).await?;
//! println!("{:?}", ktp.read.and_then(|read| read.nik));
//! # Ok(())
//! # }
//! ```

mod client;
mod client_settings;
pub mod face;
pub mod ocr;
mod request;

pub use client::{Client, ClientMock, ClientReal};
pub use client_settings::ClientSettings;
pub use glair_vision_api_base::{
    Configuration, ConfigurationExt, DEFAULT_API_VERSION, DEFAULT_BASE_URL, Error, ErrorCode,
    HttpClient, LeveledLogger, LogLevel, Logger,
};
pub use request::Image;
