//! Concrete implementations behind the domain ports: the `qrcode`-crate
//! matrix encoder and local-filesystem storage.

use crate::domain::model::{ErrorCorrection, ModuleMatrix};
use crate::domain::ports::{MatrixEncoder, Storage};
use crate::utils::error::{QrError, Result};
use qrcode::{Color, EcLevel, QrCode, Version};
use std::fs;
use std::path::Path;

/// Matrix encoder backed by the `qrcode` crate. The crate auto-fits the
/// smallest version that holds the payload at the requested level; any
/// library failure (payload too large, etc.) surfaces as
/// [`QrError::Encoding`] with the underlying message. One attempt, no retry.
#[derive(Debug, Clone, Copy, Default)]
pub struct QrcodeMatrixEncoder;

impl MatrixEncoder for QrcodeMatrixEncoder {
    fn encode(&self, payload: &str, level: ErrorCorrection) -> Result<ModuleMatrix> {
        let ec_level = match level {
            ErrorCorrection::L => EcLevel::L,
            ErrorCorrection::M => EcLevel::M,
            ErrorCorrection::Q => EcLevel::Q,
            ErrorCorrection::H => EcLevel::H,
        };

        let code =
            QrCode::with_error_correction_level(payload, ec_level).map_err(|e| {
                QrError::Encoding {
                    message: e.to_string(),
                }
            })?;

        let version = match code.version() {
            Version::Normal(v) => v,
            Version::Micro(v) => v,
        };
        let width = code.width();
        let modules: Vec<bool> = code
            .to_colors()
            .into_iter()
            .map(|color| color == Color::Dark)
            .collect();

        Ok(ModuleMatrix::new(width, modules, version))
    }
}

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<String> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&full_path, data)?;
        Ok(full_path.to_string_lossy().into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_smallest_payload_is_version_one() {
        let matrix = QrcodeMatrixEncoder
            .encode("A", ErrorCorrection::L)
            .unwrap();
        assert_eq!(matrix.version(), 1);
        assert_eq!(matrix.width(), 21);
    }

    #[test]
    fn test_encode_grows_with_error_correction() {
        let url = "http://example.com/some/longer/path?with=query";
        let low = QrcodeMatrixEncoder.encode(url, ErrorCorrection::L).unwrap();
        let high = QrcodeMatrixEncoder.encode(url, ErrorCorrection::H).unwrap();
        assert!(high.width() >= low.width());
    }

    #[test]
    fn test_encode_is_deterministic() {
        let a = QrcodeMatrixEncoder
            .encode("http://example.com", ErrorCorrection::M)
            .unwrap();
        let b = QrcodeMatrixEncoder
            .encode("http://example.com", ErrorCorrection::M)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_oversized_payload_is_an_encoding_error() {
        // Version 40 at level H holds at most 1273 bytes in byte mode.
        let payload = "a".repeat(3000);
        let err = QrcodeMatrixEncoder
            .encode(&payload, ErrorCorrection::H)
            .unwrap_err();
        assert!(matches!(err, QrError::Encoding { .. }));
    }
}
