//! urlqr turns a URL string into a QR-code PNG.
//!
//! The pipeline is validate → encode → render → serialize: raw input goes
//! through the URL normalizer ([`validate_url`]), the normalized URL is
//! encoded into a module matrix behind the [`MatrixEncoder`] port, the
//! matrix is rendered to a raster with configurable box and border sizes,
//! and the raster is serialized to PNG bytes. Everything runs synchronously
//! per invocation with no shared state.

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{LocalStorage, QrcodeMatrixEncoder};
pub use crate::config::CliConfig;
pub use crate::core::generate::Generator;
pub use crate::domain::model::{EncodeOptions, ErrorCorrection, GeneratedCode, NormalizedUrl};
pub use crate::domain::ports::{MatrixEncoder, Storage};
pub use crate::utils::error::{QrError, Result};
pub use crate::utils::validation::validate_url;
