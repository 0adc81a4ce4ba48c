//! The resume document selected by the user

use crate::error::{Result, ResumeAnalyzerError};
use crate::input::file_detector::FileType;
use log::{info, warn};
use std::path::Path;
use tokio::fs;

/// Size the upload form advertises. Larger files are still sent.
pub const ADVISORY_SIZE_LIMIT: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ResumeFile {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Read a resume from disk, deriving the content type from its extension.
    pub async fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ResumeAnalyzerError::InvalidInput(
                format!("File does not exist: {}", path.display())
            ));
        }

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .ok_or_else(|| ResumeAnalyzerError::InvalidInput(
                format!("Not a file: {}", path.display())
            ))?;

        let bytes = fs::read(path).await?;
        let file_type = FileType::from_path(path);

        if file_type != FileType::Pdf {
            warn!("{} is not a PDF; the service may reject it", file_name);
        }
        if bytes.len() > ADVISORY_SIZE_LIMIT {
            warn!("{} is {} bytes, above the advised 10MB limit", file_name, bytes.len());
        }

        info!("Loaded resume {} ({} bytes)", file_name, bytes.len());
        Ok(Self::new(file_name, file_type.content_type(), bytes))
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_from_path_keeps_name_and_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("jane_doe.pdf");
        std::fs::write(&path, b"%PDF-1.4 fake").unwrap();

        let file = ResumeFile::from_path(&path).await.unwrap();
        assert_eq!(file.file_name, "jane_doe.pdf");
        assert_eq!(file.content_type, "application/pdf");
        assert_eq!(file.bytes, b"%PDF-1.4 fake");
        assert_eq!(file.size(), 13);
    }

    #[tokio::test]
    async fn test_missing_file_is_invalid_input() {
        let result = ResumeFile::from_path(Path::new("does/not/exist.pdf")).await;
        assert!(matches!(result, Err(ResumeAnalyzerError::InvalidInput(_))));
    }
}
