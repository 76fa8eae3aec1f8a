//! The page-renderer capability trait.
//!
//! The preview pipeline never talks to pdfium directly; it talks to a
//! [`PageRenderer`]. The production implementation
//! ([`crate::pipeline::render::PdfiumRenderer`]) wraps the pdfium C++
//! library, and tests inject a fake that returns a synthetic bitmap.
//! Decoding and rasterisation are the only stages that depend on a native
//! library, so putting the seam exactly there keeps every other stage
//! (file gating, white-flattening, encoding, the data-URL contract)
//! testable on machines without a pdfium binary.
//!
//! Implementations must be `Send + Sync`: the pipeline moves the renderer
//! into `tokio::task::spawn_blocking`, since PDF rasterisation is CPU-bound.

use crate::error::PreviewError;
use image::DynamicImage;
use std::sync::Arc;

/// What the pipeline asks a renderer for: one page of one document.
#[derive(Debug, Clone, Copy)]
pub struct RenderRequest {
    /// 1-based page number.
    pub page: usize,
    /// Zoom factor applied to the page's native dimensions.
    pub scale: f32,
}

/// A rasterised page plus the document's total page count.
///
/// The page count rides along because every renderer already knows it after
/// decoding, and the preview contract returns it to the caller.
pub struct RenderedPage {
    /// The rasterised page. May carry an alpha channel; the encode stage
    /// flattens it onto opaque white.
    pub image: DynamicImage,
    /// Total pages in the source document.
    pub page_count: usize,
}

/// Decode a document from bytes and rasterise a single page.
///
/// # Errors
///
/// Implementations report:
/// * [`PreviewError::PasswordProtected`] — the document requires a password
/// * [`PreviewError::CorruptDocument`] — the bytes do not parse
/// * [`PreviewError::PageOutOfRange`] — `request.page` is outside `[1, total]`
/// * [`PreviewError::RenderFailed`] — rasterisation itself failed
pub trait PageRenderer: Send + Sync {
    fn render(&self, bytes: &[u8], request: RenderRequest) -> Result<RenderedPage, PreviewError>;
}

/// Convenience alias matching the type stored in [`crate::config::PreviewConfig`].
pub type SharedRenderer = Arc<dyn PageRenderer>;
