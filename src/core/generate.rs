use crate::core::render;
use crate::domain::model::{EncodeOptions, GeneratedCode};
use crate::domain::ports::MatrixEncoder;
use crate::utils::error::Result;
use crate::utils::validation;

/// Runs the full pipeline: validate the raw input, encode the matrix,
/// render the raster, serialize to PNG. Synchronous, one attempt per
/// stage, no partial results.
pub struct Generator<E: MatrixEncoder> {
    encoder: E,
}

impl<E: MatrixEncoder> Generator<E> {
    pub fn new(encoder: E) -> Self {
        Self { encoder }
    }

    pub fn run(&self, raw_input: &str, options: &EncodeOptions) -> Result<GeneratedCode> {
        tracing::debug!("Validating input: {:?}", raw_input);
        let url = validation::validate_url(raw_input)?;
        tracing::debug!("Normalized URL: {}", url);

        let matrix = self.encoder.encode(url.as_str(), options.ec_level)?;
        tracing::debug!(
            "Encoded matrix: version {}, {} modules per side",
            matrix.version(),
            matrix.width()
        );

        let image = render::render(&matrix, options);
        let (pixel_side, _) = image.dimensions();
        let png = render::to_png_bytes(&image)?;
        tracing::debug!("Serialized PNG: {} bytes, {}x{} px", png.len(), pixel_side, pixel_side);

        let filename = url.download_filename();
        Ok(GeneratedCode {
            url,
            options: *options,
            matrix,
            png,
            filename,
            pixel_side,
        })
    }
}
