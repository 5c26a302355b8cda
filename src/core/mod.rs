pub mod generate;
pub mod render;

pub use crate::domain::model::{EncodeOptions, ErrorCorrection, GeneratedCode, NormalizedUrl};
pub use crate::domain::ports::{MatrixEncoder, Storage};
pub use crate::utils::error::Result;
