//! Error types for the anteroom library.
//!
//! The preview utility has exactly one class of failure: a fatal,
//! per-call error. There is no retry, no partial success, and no
//! recovery — every [`PreviewError`] terminates the call that produced it
//! (a preview either exists or it does not).
//!
//! Login-form *validation* failures are deliberately not errors. They are
//! ordinary values ([`crate::login::FieldError`]) surfaced next to the
//! offending field, because a short password is user input to correct, not
//! a fault in the program.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the PDF preview pipeline.
#[derive(Debug, Error)]
pub enum PreviewError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// The path does not carry a `.pdf` extension. Raised before any I/O.
    #[error("Invalid file type: '{}' is not a PDF\nOnly .pdf files can be previewed.", path.display())]
    InvalidFileType { path: PathBuf },

    /// Input file was not found at the given path.
    #[error("PDF file not found: '{}'\nCheck the path exists and is readable.", path.display())]
    FileNotFound { path: PathBuf },

    /// The bytes are empty or do not start with the `%PDF` magic.
    /// `path` is `None` when the bytes came from an in-memory buffer.
    #[error("Empty or invalid PDF {}", pdf_source(path))]
    EmptyOrInvalid { path: Option<PathBuf> },

    // ── Document errors ───────────────────────────────────────────────────
    /// The document requires a password; no password prompt is offered.
    #[error("PDF is password-protected and cannot be previewed")]
    PasswordProtected,

    /// The document could not be parsed at all.
    #[error("PDF is corrupt or unreadable: {detail}")]
    CorruptDocument { detail: String },

    /// The requested 1-based page number is outside `[1, total]`.
    /// The message reports the actual page count.
    #[error("Invalid page number {page}: document has {total} pages")]
    PageOutOfRange { page: usize, total: usize },

    /// pdfium returned an error while rasterising the page.
    #[error("Rendering failed for page {page}: {detail}")]
    RenderFailed { page: usize, detail: String },

    // ── Output errors ─────────────────────────────────────────────────────
    /// The rendered surface could not be encoded as an image.
    #[error("Image encoding failed: {detail}")]
    EncodeFailed { detail: String },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

fn pdf_source(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!("file: '{}'", p.display()),
        None => "data".to_string(),
    }
}
