//! Input validation: check the user-supplied path before pdfium sees it.
//!
//! pdfium's error for a non-PDF file is an opaque load failure, so we
//! validate the `%PDF` magic bytes up front and give callers a meaningful
//! error instead. The existence check also runs here even though the CLI
//! pre-flights it, so library callers get [`ExtractError::FileNotFound`]
//! rather than a pdfium load error.

use crate::error::ExtractError;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Validate that `path` names an existing, readable PDF file.
///
/// Returns the path as a `PathBuf` on success.
pub fn resolve_input(path_str: &str) -> Result<PathBuf, ExtractError> {
    let path = PathBuf::from(path_str);

    if !path.exists() {
        return Err(ExtractError::FileNotFound { path });
    }

    // Check read permission by attempting to open
    match std::fs::File::open(&path) {
        Ok(mut f) => {
            let mut magic = [0u8; 4];
            if f.read_exact(&mut magic).is_err() || &magic != b"%PDF" {
                return Err(ExtractError::NotAPdf { path, magic });
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            return Err(ExtractError::PermissionDenied { path });
        }
        Err(_) => {
            return Err(ExtractError::FileNotFound { path });
        }
    }

    debug!("Resolved input PDF: {}", path.display());
    Ok(path)
}

/// Check the `%PDF` magic on an in-memory buffer.
///
/// Used by [`crate::extract_from_bytes`] before the bytes are written to a
/// managed temp file.
pub fn validate_magic(bytes: &[u8], path: &Path) -> Result<(), ExtractError> {
    let mut magic = [0u8; 4];
    let n = bytes.len().min(4);
    magic[..n].copy_from_slice(&bytes[..n]);
    if &magic != b"%PDF" {
        return Err(ExtractError::NotAPdf {
            path: path.to_path_buf(),
            magic,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_is_not_found() {
        let err = resolve_input("/definitely/not/a/real/file.pdf").unwrap_err();
        assert!(matches!(err, ExtractError::FileNotFound { .. }));
    }

    #[test]
    fn non_pdf_magic_is_rejected() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"hello world").unwrap();
        let err = resolve_input(f.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, ExtractError::NotAPdf { .. }));
    }

    #[test]
    fn truncated_file_is_rejected() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"%P").unwrap();
        let err = resolve_input(f.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, ExtractError::NotAPdf { .. }));
    }

    #[test]
    fn pdf_magic_is_accepted() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"%PDF-1.7\n...").unwrap();
        let path = resolve_input(f.path().to_str().unwrap()).unwrap();
        assert_eq!(path, f.path());
    }

    #[test]
    fn magic_check_on_bytes() {
        let p = Path::new("buf.pdf");
        assert!(validate_magic(b"%PDF-1.4", p).is_ok());
        assert!(validate_magic(b"GIF89a", p).is_err());
        assert!(validate_magic(b"", p).is_err());
    }
}
