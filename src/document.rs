//! Loading documents from text and files.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::decode::{decode, DecodeError};
use crate::model::Screen;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Failed to read document '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Document is not valid JSON: {0}")]
    Syntax(#[from] serde_json::Error),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Parses JSON text and decodes it.
pub fn decode_str(text: &str) -> Result<Screen, DocumentError> {
    let raw: serde_json::Value = serde_json::from_str(text)?;
    Ok(decode(&raw)?)
}

/// Reads, parses and decodes the document at `path`.
pub fn load(path: &Path) -> Result<Screen, DocumentError> {
    let text = fs::read_to_string(path).map_err(|e| DocumentError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    let screen = decode_str(&text)?;
    tracing::info!(
        path = %path.display(),
        components = screen.components.len(),
        "Loaded document"
    );
    Ok(screen)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_errors_are_distinct_from_decode_errors() {
        assert!(matches!(
            decode_str("{ \"components\": [").unwrap_err(),
            DocumentError::Syntax(_)
        ));
        assert!(matches!(
            decode_str("{}").unwrap_err(),
            DocumentError::Decode(DecodeError::MissingField { .. })
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load(Path::new("/nonexistent/sdui/screen.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/sdui/screen.json"));
    }
}
