//! Pipeline stages for PDF page preview.
//!
//! Each submodule implements exactly one transformation step. Keeping
//! stages separate makes each independently testable and lets us swap the
//! rendering backend without touching the others.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ render ──▶ encode
//! (path)    (pdfium)   (white-flatten, JPEG/PNG, base64 data URL)
//! ```
//!
//! 1. [`input`]  — gate on file type, read the bytes, reject empty or
//!    non-PDF content
//! 2. [`render`] — decode and rasterise the requested page; runs in
//!    `spawn_blocking` because pdfium is not async-safe
//! 3. [`encode`] — flatten transparency onto white, compress, and wrap as a
//!    self-describing `data:` URL

pub mod encode;
pub mod input;
pub mod render;
