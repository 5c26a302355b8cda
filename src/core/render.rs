use crate::domain::model::{EncodeOptions, ModuleMatrix, QrImage};
use crate::utils::error::Result;
use image::{ImageBuffer, ImageFormat, Luma};
use std::io::Cursor;

/// Renders a module matrix to a grayscale raster. Each module becomes a
/// `box_size x box_size` pixel block; a quiet zone of `border_size` modules
/// surrounds the matrix. Dark modules are black, everything else white.
///
/// The side length is `(matrix.width() + 2 * border_size) * box_size`
/// pixels, a deterministic function of the inputs.
pub fn render(matrix: &ModuleMatrix, options: &EncodeOptions) -> QrImage {
    let modules_per_side = matrix.width() as u32 + 2 * options.border_size;
    let side = modules_per_side * options.box_size;
    let mut img = ImageBuffer::new(side, side);

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let module_x = (x / options.box_size) as i32 - options.border_size as i32;
        let module_y = (y / options.box_size) as i32 - options.border_size as i32;
        *pixel = if matrix.is_dark(module_x, module_y) {
            Luma([0u8])
        } else {
            Luma([255u8])
        };
    }

    QrImage::new(img)
}

/// PNG-encodes the raster in memory. A failure here is an internal fault,
/// not a user-input problem.
pub fn to_png_bytes(image: &QrImage) -> Result<Vec<u8>> {
    let mut bytes: Vec<u8> = Vec::new();
    image
        .inner()
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Renders the matrix as block characters for a terminal preview, one
/// module per doubled character cell, with a `border` module quiet zone.
pub fn to_terminal_string(matrix: &ModuleMatrix, border: u32) -> String {
    let border = border as i32;
    let width = matrix.width() as i32;
    let mut out = String::new();
    for y in -border..width + border {
        for x in -border..width + border {
            let c = if matrix.is_dark(x, y) { '█' } else { ' ' };
            out.push(c);
            out.push(c);
        }
        out.push('\n');
    }
    out
}
