use crate::domain::model::{ErrorCorrection, ModuleMatrix};
use crate::utils::error::Result;

/// Narrow seam in front of the QR matrix library: payload and
/// error-correction level in, module matrix out, version auto-fitted.
/// Any conformant matrix library can sit behind this without touching
/// validation or rendering.
pub trait MatrixEncoder {
    fn encode(&self, payload: &str, level: ErrorCorrection) -> Result<ModuleMatrix>;
}

pub trait Storage {
    /// Writes `data` under `path` relative to the storage root and returns
    /// the full path of the written file.
    fn write_file(&self, path: &str, data: &[u8]) -> Result<String>;
}
