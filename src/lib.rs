//! # anteroom
//!
//! The entry slice of a client application: a login-flow state machine and
//! a PDF page preview utility.
//!
//! ## Why this crate?
//!
//! Login screens and upload previews are rewritten for every app, and the
//! rewrites share the same two bugs: view-mode booleans that let two forms
//! be open at once, and PDF previews that render transparent regions as
//! black. `anteroom` packages both pieces as host-agnostic logic — the
//! login flow reports outcomes through a callback trait instead of touching
//! a router, and the preview returns a self-contained `data:` URL any image
//! widget can display.
//!
//! The two pieces are independent; use either without the other.
//!
//! ## Preview pipeline
//!
//! ```text
//! PDF path
//!  │
//!  ├─ 1. Input   gate on .pdf, read bytes, reject empty/non-PDF
//!  ├─ 2. Render  rasterise one page via pdfium (CPU-bound, spawn_blocking)
//!  └─ 3. Encode  flatten onto white → JPEG q92 → base64 data URL
//! ```
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use anteroom::{preview, PreviewConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let result = preview("upload.pdf", 1, &PreviewConfig::default()).await?;
//!     println!("{} pages; first page: {}…", result.page_count, &result.data_url[..40]);
//!     Ok(())
//! }
//! ```
//!
//! ```rust
//! use anteroom::login::{LoginFlow, MockAccount, NoopLoginEvents};
//! use std::sync::Arc;
//!
//! let account = MockAccount {
//!     name: "Ada Lovelace".into(),
//!     email: "ada@example.com".into(),
//!     two_factor_enabled: true,
//! };
//! let mut flow = LoginFlow::new(account, Arc::new(NoopLoginEvents));
//! flow.submit_credentials("ada@example.com", "secret1").unwrap();
//! ```
//!
//! ## Feature flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `anteroom` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! anteroom = { version = "0.2", default-features = false }
//! ```
//!
//! ## The pdfium dependency
//!
//! Rendering binds to a pdfium shared library at run time, located via the
//! `PDFIUM_LIB_PATH` environment variable or the platform default search
//! path. Everything except the render stage itself — input gating, the
//! state machine, encoding — runs without it (see
//! [`PreviewConfig::builder`]'s renderer override).

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod login;
pub mod pipeline;
pub mod preview;
pub mod renderer;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{PreviewConfig, PreviewConfigBuilder, PreviewFormat};
pub use error::PreviewError;
pub use login::{LoginEvents, LoginFlow, MockAccount, NoopLoginEvents, Profile};
pub use preview::{page_count, preview, preview_bytes, preview_sync, Preview};
pub use renderer::{PageRenderer, RenderRequest, RenderedPage, SharedRenderer};
