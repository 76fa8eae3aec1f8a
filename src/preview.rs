//! Preview entry points: one page of one PDF, as a `data:` URL.
//!
//! A preview call is strictly sequential — gate the input, read the bytes,
//! decode and rasterise, encode — with no caching, retry, or cancellation.
//! Each call owns its own buffers and releases them on return. The only
//! suspension points are the file read and the blocking render task,
//! awaited one after the other.

use crate::config::PreviewConfig;
use crate::error::PreviewError;
use crate::pipeline::{encode, input, render};
use crate::renderer::{PageRenderer, RenderRequest, SharedRenderer};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// The result of a preview call.
///
/// `data_url` is a self-describing `data:<mime>;base64,…` string suitable
/// for direct use as an image source; `page_count` is the total number of
/// pages in the source document (not the rendered page's number).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preview {
    pub data_url: String,
    pub page_count: usize,
}

/// Render a preview of one page of a PDF file.
///
/// This is the primary entry point for the library.
///
/// # Arguments
/// * `path` — local path to a `.pdf` file
/// * `page` — 1-based page number (pass 1 for the first page)
/// * `config` — preview configuration
///
/// # Errors
/// Every failure is terminal for the call:
/// - [`PreviewError::InvalidFileType`] — raised before any I/O
/// - [`PreviewError::FileNotFound`] / [`PreviewError::EmptyOrInvalid`]
/// - [`PreviewError::PasswordProtected`] / [`PreviewError::CorruptDocument`]
/// - [`PreviewError::PageOutOfRange`] — message reports the page count
/// - [`PreviewError::RenderFailed`] / [`PreviewError::EncodeFailed`]
pub async fn preview(
    path: impl AsRef<Path>,
    page: usize,
    config: &PreviewConfig,
) -> Result<Preview, PreviewError> {
    let start = Instant::now();
    let path = path.as_ref();

    // ── Step 1: gate on file type, before touching the disk ─────────────
    input::check_file_type(path)?;

    // ── Step 2: read the whole file, reject empty/non-PDF bytes ─────────
    let bytes = input::read_document(path).await?;

    // ── Steps 3–8: decode, rasterise, encode ────────────────────────────
    let result = render_and_encode(bytes, page, config).await?;

    info!(
        "Previewed page {}/{} of {} in {}ms",
        page,
        result.page_count,
        path.display(),
        start.elapsed().as_millis()
    );
    Ok(result)
}

/// Render a preview from PDF bytes already in memory.
///
/// Skips the path-based checks of [`preview`]; the empty/magic check still
/// applies. This is the entry point when the document comes from an upload
/// buffer rather than a file on disk.
pub async fn preview_bytes(
    bytes: impl Into<Vec<u8>>,
    page: usize,
    config: &PreviewConfig,
) -> Result<Preview, PreviewError> {
    let bytes = bytes.into();

    input::check_bytes(&bytes).map_err(|_| PreviewError::EmptyOrInvalid { path: None })?;

    render_and_encode(bytes, page, config).await
}

/// Synchronous wrapper around [`preview`].
///
/// Creates a temporary tokio runtime internally.
pub fn preview_sync(
    path: impl AsRef<Path>,
    page: usize,
    config: &PreviewConfig,
) -> Result<Preview, PreviewError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| PreviewError::Internal(format!("Failed to create tokio runtime: {}", e)))?
        .block_on(preview(path, page, config))
}

/// Count the pages of a PDF file without rendering anything.
pub async fn page_count(path: impl AsRef<Path>) -> Result<usize, PreviewError> {
    let path = path.as_ref();

    input::check_file_type(path)?;
    let bytes = input::read_document(path).await?;

    tokio::task::spawn_blocking(move || render::count_pages(&bytes))
        .await
        .map_err(|e| PreviewError::Internal(format!("Count task panicked: {}", e)))?
}

// ── Internal helpers ─────────────────────────────────────────────────────

/// Rasterise `page` and encode the result, off the async executor.
///
/// pdfium is CPU-bound and not async-safe, so the render (and the encode,
/// which is pure CPU as well) run inside `spawn_blocking`.
async fn render_and_encode(
    bytes: Vec<u8>,
    page: usize,
    config: &PreviewConfig,
) -> Result<Preview, PreviewError> {
    let renderer = resolve_renderer(config);
    let request = RenderRequest {
        page,
        scale: config.scale,
    };
    let config = config.clone();

    tokio::task::spawn_blocking(move || {
        let rendered = renderer.render(&bytes, request)?;
        debug!(
            "Rendered page {}/{} ({}x{} px)",
            request.page,
            rendered.page_count,
            rendered.image.width(),
            rendered.image.height()
        );

        let data_url = encode::encode_page(&rendered.image, &config)?;
        Ok(Preview {
            data_url,
            page_count: rendered.page_count,
        })
    })
    .await
    .map_err(|e| PreviewError::Internal(format!("Render task panicked: {}", e)))?
}

/// The configured renderer, or the pdfium default.
fn resolve_renderer(config: &PreviewConfig) -> SharedRenderer {
    match config.renderer {
        Some(ref r) => Arc::clone(r),
        None => Arc::new(render::PdfiumRenderer) as Arc<dyn PageRenderer>,
    }
}
