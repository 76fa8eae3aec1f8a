//! Input gating: accept only readable, non-empty PDF files.
//!
//! The extension check runs before any I/O so a wrong file type is rejected
//! without touching the disk — a caller handing us `slides.pptx` gets the
//! same answer whether or not the file exists. The `%PDF` magic check runs
//! after the read so a renamed text file is caught before pdfium ever sees
//! the bytes.

use crate::error::PreviewError;
use std::path::Path;
use tracing::debug;

/// `%PDF` — the first four bytes of every well-formed PDF.
const PDF_MAGIC: &[u8; 4] = b"%PDF";

/// Reject paths that do not carry a `.pdf` extension (case-insensitive).
///
/// Runs before any I/O.
pub fn check_file_type(path: &Path) -> Result<(), PreviewError> {
    let is_pdf = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));

    if !is_pdf {
        return Err(PreviewError::InvalidFileType {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Read the whole file into memory, then verify it is a plausible PDF.
pub async fn read_document(path: &Path) -> Result<Vec<u8>, PreviewError> {
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PreviewError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            PreviewError::Internal(format!("Failed to read '{}': {}", path.display(), e))
        }
    })?;

    check_bytes(&bytes).map_err(|_| PreviewError::EmptyOrInvalid {
        path: Some(path.to_path_buf()),
    })?;

    debug!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(bytes)
}

/// Verify a byte buffer is non-empty and starts with the PDF magic.
///
/// Used by both the file path above and [`crate::preview::preview_bytes`],
/// which has no path to report — hence the unit error.
pub fn check_bytes(bytes: &[u8]) -> Result<(), ()> {
    if bytes.len() < PDF_MAGIC.len() || &bytes[..PDF_MAGIC.len()] != PDF_MAGIC {
        return Err(());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn accepts_pdf_extension_any_case() {
        assert!(check_file_type(Path::new("doc.pdf")).is_ok());
        assert!(check_file_type(Path::new("doc.PDF")).is_ok());
        assert!(check_file_type(Path::new("/tmp/nested/doc.Pdf")).is_ok());
    }

    #[test]
    fn rejects_other_extensions_without_io() {
        // The file does not exist; the check must fail on type, not absence.
        let err = check_file_type(Path::new("/no/such/slides.pptx")).unwrap_err();
        assert!(matches!(err, PreviewError::InvalidFileType { .. }));

        let err = check_file_type(Path::new("report")).unwrap_err();
        assert!(matches!(err, PreviewError::InvalidFileType { .. }));
    }

    #[test]
    fn magic_check() {
        assert!(check_bytes(b"%PDF-1.7 ...").is_ok());
        assert!(check_bytes(b"").is_err());
        assert!(check_bytes(b"%PD").is_err());
        assert!(check_bytes(b"hello world").is_err());
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let err = read_document(&PathBuf::from("/definitely/not/here.pdf"))
            .await
            .unwrap_err();
        assert!(matches!(err, PreviewError::FileNotFound { .. }));
    }

    #[tokio::test]
    async fn empty_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.pdf");
        std::fs::write(&path, b"").unwrap();

        let err = read_document(&path).await.unwrap_err();
        assert!(matches!(err, PreviewError::EmptyOrInvalid { .. }));
    }

    #[tokio::test]
    async fn renamed_text_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fake.pdf");
        std::fs::write(&path, b"just some text").unwrap();

        let err = read_document(&path).await.unwrap_err();
        assert!(matches!(err, PreviewError::EmptyOrInvalid { .. }));
    }
}
