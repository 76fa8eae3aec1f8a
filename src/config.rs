//! Configuration for the PDF preview pipeline.
//!
//! All preview behaviour is controlled through [`PreviewConfig`], built via
//! its [`PreviewConfigBuilder`]. The defaults reproduce the fixed contract
//! (1.5× zoom, JPEG at quality 92) so most callers never touch the builder.

use crate::error::PreviewError;
use crate::renderer::SharedRenderer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default zoom factor applied to the page's native dimensions.
pub const DEFAULT_SCALE: f32 = 1.5;

/// Default JPEG quality (out of 100).
pub const DEFAULT_JPEG_QUALITY: u8 = 92;

/// Configuration for a single preview call.
///
/// # Example
/// ```rust
/// use anteroom::PreviewConfig;
///
/// let config = PreviewConfig::builder()
///     .scale(2.0)
///     .jpeg_quality(85)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct PreviewConfig {
    /// Zoom factor for rendering. Range: 0.1–8.0. Default: 1.5.
    ///
    /// 1.5× of the page's native point size gives a preview that is sharp on
    /// ordinary displays without producing multi-megabyte payloads. Raise it
    /// for zoomed-in inspection; a hard cap of 8× keeps a single A0 page
    /// from exhausting memory.
    pub scale: f32,

    /// JPEG quality, 1–100. Default: 92. Ignored for PNG output.
    ///
    /// 92 is visually lossless for rendered document pages while cutting the
    /// payload to a fraction of the raw bitmap.
    pub jpeg_quality: u8,

    /// Output image format for the data URL. Default: JPEG.
    pub format: PreviewFormat,

    /// Renderer override. When `None`, the pdfium-backed renderer is used.
    ///
    /// Tests inject a fake here so the pipeline runs without a pdfium binary.
    pub renderer: Option<SharedRenderer>,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            format: PreviewFormat::default(),
            renderer: None,
        }
    }
}

impl fmt::Debug for PreviewConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviewConfig")
            .field("scale", &self.scale)
            .field("jpeg_quality", &self.jpeg_quality)
            .field("format", &self.format)
            .field("renderer", &self.renderer.as_ref().map(|_| "<dyn PageRenderer>"))
            .finish()
    }
}

impl PreviewConfig {
    /// Create a new builder for `PreviewConfig`.
    pub fn builder() -> PreviewConfigBuilder {
        PreviewConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`PreviewConfig`].
#[derive(Debug)]
pub struct PreviewConfigBuilder {
    config: PreviewConfig,
}

impl PreviewConfigBuilder {
    pub fn scale(mut self, scale: f32) -> Self {
        self.config.scale = scale.clamp(0.1, 8.0);
        self
    }

    pub fn jpeg_quality(mut self, quality: u8) -> Self {
        self.config.jpeg_quality = quality.clamp(1, 100);
        self
    }

    pub fn format(mut self, format: PreviewFormat) -> Self {
        self.config.format = format;
        self
    }

    pub fn renderer(mut self, renderer: SharedRenderer) -> Self {
        self.config.renderer = Some(renderer);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<PreviewConfig, PreviewError> {
        let c = &self.config;
        if !c.scale.is_finite() || c.scale <= 0.0 {
            return Err(PreviewError::InvalidConfig(format!(
                "Scale must be a positive number, got {}",
                c.scale
            )));
        }
        if c.jpeg_quality == 0 || c.jpeg_quality > 100 {
            return Err(PreviewError::InvalidConfig(format!(
                "JPEG quality must be 1–100, got {}",
                c.jpeg_quality
            )));
        }
        Ok(self.config)
    }
}

/// Encoding of the preview payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PreviewFormat {
    /// JPEG at [`PreviewConfig::jpeg_quality`]. Smallest payload. (default)
    #[default]
    Jpeg,
    /// Lossless PNG. Larger payload, exact pixels.
    Png,
}

impl PreviewFormat {
    /// The MIME type used in the `data:` URL prefix.
    pub fn mime_type(self) -> &'static str {
        match self {
            PreviewFormat::Jpeg => "image/jpeg",
            PreviewFormat::Png => "image/png",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_contract() {
        let c = PreviewConfig::default();
        assert_eq!(c.scale, 1.5);
        assert_eq!(c.jpeg_quality, 92);
        assert_eq!(c.format, PreviewFormat::Jpeg);
        assert!(c.renderer.is_none());
    }

    #[test]
    fn builder_clamps_scale() {
        let c = PreviewConfig::builder().scale(100.0).build().unwrap();
        assert_eq!(c.scale, 8.0);
        let c = PreviewConfig::builder().scale(0.0).build().unwrap();
        assert_eq!(c.scale, 0.1);
    }

    #[test]
    fn builder_clamps_quality() {
        let c = PreviewConfig::builder().jpeg_quality(0).build().unwrap();
        assert_eq!(c.jpeg_quality, 1);
        let c = PreviewConfig::builder().jpeg_quality(255).build().unwrap();
        assert_eq!(c.jpeg_quality, 100);
    }

    #[test]
    fn mime_types() {
        assert_eq!(PreviewFormat::Jpeg.mime_type(), "image/jpeg");
        assert_eq!(PreviewFormat::Png.mime_type(), "image/png");
    }
}
