//! Base types and utilities for GLAIR Vision API clients.
//!
//! This crate provides common functionality shared by the GLAIR Vision client crates:
//! - Request configuration and endpoint URL building
//! - The pluggable HTTP transport and logger capabilities
//! - Error handling types

mod configuration;
mod error;
mod logger;
mod transport;

pub use configuration::{
    Configuration, ConfigurationExt, DEFAULT_API_VERSION, DEFAULT_BASE_URL,
};
pub use error::{Error, ErrorCode};
pub use logger::{LeveledLogger, LogLevel, Logger};
pub use transport::{HttpClient, client_from_transport, default_client};
