//! File IO helpers used by the dispatcher and the binary's startup load.
//!
//! Synchronous and whole-file: documents are read in one call and written
//! back in one call.

use core_state::EditorState;
use core_text::Document;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("no file name")]
    NoFilename,
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl IoError {
    /// The underlying system error text, without the path.
    pub fn reason(&self) -> String {
        match self {
            IoError::NoFilename => "no file name".to_string(),
            IoError::Read { source, .. } | IoError::Write { source, .. } => source.to_string(),
        }
    }
}

/// Load `path` into a new document.
pub fn read_document(path: &Path) -> Result<Document, IoError> {
    let bytes = std::fs::read(path).map_err(|source| IoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(target: "io", path = %path.display(), bytes = bytes.len(), "file_read");
    Ok(Document::from_bytes(&bytes))
}

/// Serialize the document to its associated file, creating or truncating it.
/// Returns the number of bytes written and clears the dirty flag on success.
pub fn write_file(state: &mut EditorState) -> Result<usize, IoError> {
    let path = state.file_name.clone().ok_or(IoError::NoFilename)?;
    let bytes = state.document.to_text();
    std::fs::write(&path, &bytes).map_err(|source| IoError::Write {
        path: path.clone(),
        source,
    })?;
    state.dirty = false;
    tracing::debug!(target: "io", path = %path.display(), bytes = bytes.len(), "file_written");
    Ok(bytes.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_without_name_fails_and_keeps_dirty() {
        let mut st = EditorState::new(Document::from_lines(["x"]));
        st.mark_dirty();
        assert!(matches!(write_file(&mut st), Err(IoError::NoFilename)));
        assert!(st.dirty);
    }

    #[test]
    fn write_then_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let doc = Document::from_lines(["ab\tc", "", "xyz"]);
        let mut st = EditorState::new(doc).with_file_name(&path);
        st.mark_dirty();
        assert_eq!(write_file(&mut st).unwrap(), 10);
        assert!(!st.dirty);
        assert_eq!(std::fs::read(&path).unwrap(), b"ab\tc\n\nxyz\n");
        assert_eq!(read_document(&path).unwrap(), st.document);
    }

    #[test]
    fn read_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let err = read_document(&path).unwrap_err();
        assert!(matches!(err, IoError::Read { .. }));
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut st = EditorState::new(Document::from_lines(["x"]))
            .with_file_name(dir.path().join("no/such/dir/f.txt"));
        st.mark_dirty();
        let err = write_file(&mut st).unwrap_err();
        assert!(matches!(err, IoError::Write { .. }));
        assert!(!err.reason().is_empty());
        assert!(st.dirty);
    }
}
