use crate::utils::error::QrError;
use image::{ImageBuffer, Luma};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A URL that passed validation. Always carries an explicit `http://` or
/// `https://` scheme; the stored string is exactly what validation produced,
/// with no further canonicalization. Constructed only by
/// [`crate::utils::validation::validate_url`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedUrl {
    url: String,
    authority: String,
}

impl NormalizedUrl {
    pub(crate) fn new(url: String, authority: String) -> Self {
        Self { url, authority }
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// Host plus `:port` when an explicit port is present.
    pub fn authority(&self) -> &str {
        &self.authority
    }

    /// Download filename derived from the authority, dots replaced by
    /// underscores: `https://example.com/path` -> `qr_code_example_com.png`.
    pub fn download_filename(&self) -> String {
        format!("qr_code_{}.png", self.authority.replace('.', "_"))
    }
}

impl fmt::Display for NormalizedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// QR error-correction level, trading recoverable damage against matrix size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCorrection {
    /// ~7% recoverable
    L,
    /// ~15% recoverable
    M,
    /// ~25% recoverable
    Q,
    /// ~30% recoverable
    H,
}

impl ErrorCorrection {
    pub fn recovery_percent(&self) -> u8 {
        match self {
            ErrorCorrection::L => 7,
            ErrorCorrection::M => 15,
            ErrorCorrection::Q => 25,
            ErrorCorrection::H => 30,
        }
    }
}

impl fmt::Display for ErrorCorrection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCorrection::L => "L",
            ErrorCorrection::M => "M",
            ErrorCorrection::Q => "Q",
            ErrorCorrection::H => "H",
        };
        f.write_str(s)
    }
}

impl FromStr for ErrorCorrection {
    type Err = QrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "L" | "l" => Ok(ErrorCorrection::L),
            "M" | "m" => Ok(ErrorCorrection::M),
            "Q" | "q" => Ok(ErrorCorrection::Q),
            "H" | "h" => Ok(ErrorCorrection::H),
            other => Err(QrError::InvalidOption {
                field: "ec-level".to_string(),
                value: other.to_string(),
                reason: "expected one of L, M, Q, H".to_string(),
            }),
        }
    }
}

/// Rendering parameters. Version selection is always auto-fit: the encoder
/// picks the smallest matrix version that holds the payload at the chosen
/// error-correction level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodeOptions {
    pub ec_level: ErrorCorrection,
    /// Pixel scale per module, >= 1.
    pub box_size: u32,
    /// Quiet-zone width in modules.
    pub border_size: u32,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            ec_level: ErrorCorrection::M,
            box_size: 10,
            border_size: 4,
        }
    }
}

/// Square grid of dark/light modules produced by a matrix encoder,
/// row-major, without the quiet zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMatrix {
    width: usize,
    modules: Vec<bool>,
    version: i16,
}

impl ModuleMatrix {
    pub fn new(width: usize, modules: Vec<bool>, version: i16) -> Self {
        debug_assert_eq!(modules.len(), width * width);
        Self {
            width,
            modules,
            version,
        }
    }

    /// Modules per side.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Auto-fitted QR version (1..=40).
    pub fn version(&self) -> i16 {
        self.version
    }

    /// Whether the module at the given coordinates is dark. Coordinates
    /// outside the matrix are light, so callers can sample straight through
    /// the quiet zone.
    pub fn is_dark(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.width as i32 {
            return false;
        }
        self.modules[y as usize * self.width + x as usize]
    }
}

/// Opaque raster produced by the renderer; consumed only to make PNG bytes.
#[derive(Debug, Clone)]
pub struct QrImage {
    buffer: ImageBuffer<Luma<u8>, Vec<u8>>,
}

impl QrImage {
    pub(crate) fn new(buffer: ImageBuffer<Luma<u8>, Vec<u8>>) -> Self {
        Self { buffer }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.buffer.dimensions()
    }

    pub(crate) fn inner(&self) -> &ImageBuffer<Luma<u8>, Vec<u8>> {
        &self.buffer
    }
}

/// Everything the caller needs to present and download the result.
#[derive(Debug, Clone)]
pub struct GeneratedCode {
    pub url: NormalizedUrl,
    pub options: EncodeOptions,
    pub matrix: ModuleMatrix,
    pub png: Vec<u8>,
    pub filename: String,
    /// Side length of the raster in pixels.
    pub pixel_side: u32,
}
