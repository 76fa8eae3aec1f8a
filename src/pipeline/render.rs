//! The pdfium-backed [`PageRenderer`].
//!
//! ## Threading
//!
//! The `pdfium-render` crate wraps the pdfium C++ library, which uses
//! thread-local state internally and is not safe to call from async
//! contexts. [`crate::preview`] therefore calls this renderer inside
//! `tokio::task::spawn_blocking`; nothing in this module is async.
//!
//! ## Binding
//!
//! `Pdfium::default()` binds to a pdfium shared library found via
//! `PDFIUM_LIB_PATH` or the platform default search path. The library
//! itself ships character maps and embedded-font handling, so no further
//! auxiliary resources are needed at render time.

use crate::error::PreviewError;
use crate::renderer::{PageRenderer, RenderRequest, RenderedPage};
use pdfium_render::prelude::*;
use tracing::debug;

/// Production renderer backed by pdfium.
///
/// Stateless: each [`render`](PageRenderer::render) call creates its own
/// pdfium binding and document, so nothing is shared or cached across calls.
#[derive(Debug, Default)]
pub struct PdfiumRenderer;

/// Map a pdfium load failure to the matching [`PreviewError`].
///
/// pdfium does not expose a dedicated encrypted-document error type, so
/// password protection is detected from the error's debug representation.
fn classify_load_error(err: PdfiumError) -> PreviewError {
    classify_load_detail(format!("{:?}", err))
}

fn classify_load_detail(detail: String) -> PreviewError {
    if detail.contains("Password") || detail.contains("password") {
        PreviewError::PasswordProtected
    } else {
        PreviewError::CorruptDocument { detail }
    }
}

impl PageRenderer for PdfiumRenderer {
    fn render(&self, bytes: &[u8], request: RenderRequest) -> Result<RenderedPage, PreviewError> {
        let pdfium = Pdfium::default();

        // No password is ever supplied: protected documents are rejected,
        // not prompted for.
        let document = pdfium
            .load_pdf_from_byte_slice(bytes, None)
            .map_err(classify_load_error)?;

        let pages = document.pages();
        let page_count = pages.len() as usize;
        debug!("PDF decoded: {} pages", page_count);

        if request.page < 1 || request.page > page_count {
            return Err(PreviewError::PageOutOfRange {
                page: request.page,
                total: page_count,
            });
        }

        let page = pages
            .get((request.page - 1) as u16)
            .map_err(|e| PreviewError::RenderFailed {
                page: request.page,
                detail: format!("{:?}", e),
            })?;

        // Surface sized for the zoom factor of the page's native dimensions.
        let target_width = (page.width().value * request.scale).round() as i32;
        let target_height = (page.height().value * request.scale).round() as i32;

        let render_config = PdfRenderConfig::new()
            .set_target_width(target_width)
            .set_maximum_height(target_height);

        let bitmap =
            page.render_with_config(&render_config)
                .map_err(|e| PreviewError::RenderFailed {
                    page: request.page,
                    detail: format!("{:?}", e),
                })?;

        let image = bitmap.as_image();
        debug!(
            "Rendered page {} → {}x{} px at {}x",
            request.page,
            image.width(),
            image.height(),
            request.scale
        );

        Ok(RenderedPage { image, page_count })
    }
}

/// Decode the document and return its page count without rendering.
pub fn count_pages(bytes: &[u8]) -> Result<usize, PreviewError> {
    let pdfium = Pdfium::default();

    let document = pdfium
        .load_pdf_from_byte_slice(bytes, None)
        .map_err(classify_load_error)?;

    Ok(document.pages().len() as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_load_failures_are_password_protected() {
        let err = classify_load_detail("PdfiumLibraryInternalError(PasswordError)".into());
        assert!(matches!(err, PreviewError::PasswordProtected));
    }

    #[test]
    fn other_load_failures_are_corrupt_with_detail() {
        match classify_load_detail("DataFormatError".into()) {
            PreviewError::CorruptDocument { detail } => {
                assert!(detail.contains("DataFormatError"));
            }
            other => panic!("expected CorruptDocument, got: {other}"),
        }
    }
}
