//! Image encoding: `DynamicImage` → in-memory PNG bytes for the OCR engine.
//!
//! PNG is chosen over JPEG because it is lossless — compression artefacts
//! on rendered text blur stroke edges and measurably degrade recognition
//! accuracy at any DPI. The bytes never touch disk; Tesseract reads them
//! straight from memory.

use image::DynamicImage;
use std::io::Cursor;
use tracing::debug;

/// Encode a rasterised page as PNG bytes.
pub fn encode_page(img: &DynamicImage) -> Result<Vec<u8>, image::ImageError> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)?;
    debug!("Encoded page image → {} PNG bytes", buf.len());
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn encode_small_image() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(10, 10, Rgba([255, 0, 0, 255])));
        let bytes = encode_page(&img).expect("encode should succeed");
        // PNG signature
        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
        // Round-trips through the image loader
        let decoded = image::load_from_memory(&bytes).expect("valid PNG");
        assert_eq!(decoded.width(), 10);
        assert_eq!(decoded.height(), 10);
    }
}
