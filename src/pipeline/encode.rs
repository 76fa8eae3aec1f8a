//! Image encoding: rendered page → base64 `data:` URL.
//!
//! The bitmap is flattened onto an opaque white background first: PDF pages
//! have no intrinsic background, and regions the page never paints come out
//! of the rasteriser fully transparent. Compositing over white reproduces
//! what a paper printout (or any PDF viewer) shows; skipping it would turn
//! those regions black in JPEG output, which has no alpha channel.

use crate::config::{PreviewConfig, PreviewFormat};
use crate::error::PreviewError;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat, RgbImage, Rgba};
use std::io::Cursor;
use tracing::debug;

/// Composite the rendered page over opaque white, discarding alpha.
pub fn flatten_onto_white(img: &DynamicImage) -> RgbImage {
    let rgba = img.to_rgba8();
    let mut out = RgbImage::new(rgba.width(), rgba.height());

    for (x, y, &Rgba([r, g, b, a])) in rgba.enumerate_pixels() {
        let a = u16::from(a);
        // Source-over blend against white (255).
        let blend = |c: u8| -> u8 { ((u16::from(c) * a + 255 * (255 - a)) / 255) as u8 };
        out.put_pixel(x, y, image::Rgb([blend(r), blend(g), blend(b)]));
    }

    out
}

/// Encode the flattened page and wrap it as a `data:<mime>;base64,…` URL.
pub fn encode_page(img: &DynamicImage, config: &PreviewConfig) -> Result<String, PreviewError> {
    let flat = flatten_onto_white(img);

    let mut buf = Vec::new();
    match config.format {
        PreviewFormat::Jpeg => {
            let encoder = JpegEncoder::new_with_quality(Cursor::new(&mut buf), config.jpeg_quality);
            flat.write_with_encoder(encoder)
                .map_err(|e| PreviewError::EncodeFailed {
                    detail: e.to_string(),
                })?;
        }
        PreviewFormat::Png => {
            flat.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
                .map_err(|e| PreviewError::EncodeFailed {
                    detail: e.to_string(),
                })?;
        }
    }

    let b64 = STANDARD.encode(&buf);
    debug!(
        "Encoded {}x{} page → {} bytes base64 ({:?})",
        flat.width(),
        flat.height(),
        b64.len(),
        config.format
    );

    Ok(format!("data:{};base64,{}", config.format.mime_type(), b64))
}
