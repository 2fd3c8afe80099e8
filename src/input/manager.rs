//! Input manager for handling different file types

use crate::error::{CvAnalyzerError, Result};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{MarkdownExtractor, PlainTextExtractor, TextExtractor};
use log::{debug, info};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;

pub struct InputManager {
    cache: HashMap<PathBuf, String>,
    enable_cache: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    /// Read a resume or job description as plain text.
    ///
    /// Only text and Markdown files are read. Binary document formats are
    /// refused before the file is opened.
    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        // Type comes from the extension alone
        let file_type = Self::detect_file_type(path)?;
        if file_type == FileType::Binary {
            return Err(CvAnalyzerError::UnsupportedFormat(format!(
                "{} is a binary document; extract its text first",
                path.display()
            )));
        }

        let metadata = fs::metadata(path).await.map_err(|_| {
            CvAnalyzerError::InvalidInput(format!("File does not exist: {}", path.display()))
        })?;
        if !metadata.is_file() {
            return Err(CvAnalyzerError::InvalidInput(format!(
                "Not a regular file: {}",
                path.display()
            )));
        }

        // Same file reached through different relative paths shares one entry
        let key = fs::canonicalize(path).await?;
        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(&key) {
                debug!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        let text = match file_type {
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
            FileType::Binary | FileType::Unknown => {
                return Err(CvAnalyzerError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };
        debug!(
            "Extracted {} characters from {} ({} bytes on disk)",
            text.chars().count(),
            path.display(),
            metadata.len()
        );

        if self.enable_cache {
            self.cache.insert(key, text.clone());
        }

        Ok(text)
    }

    fn detect_file_type(path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                CvAnalyzerError::InvalidInput(format!("File has no extension: {}", path.display()))
            })?;

        Ok(FileType::from_extension(extension))
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_binary_refused_without_reading() {
        let mut manager = InputManager::new();

        // the file does not exist, the extension alone decides
        let result = manager.extract_text(Path::new("missing/resume.docx")).await;
        assert!(matches!(result, Err(CvAnalyzerError::UnsupportedFormat(_))));
    }

    #[tokio::test]
    async fn test_directory_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let folder = dir.path().join("notes.md");
        std::fs::create_dir(&folder).unwrap();

        let mut manager = InputManager::new();
        let result = manager.extract_text(&folder).await;
        assert!(matches!(result, Err(CvAnalyzerError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_cache_keyed_by_real_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cv.txt");
        std::fs::write(&path, "Jane Doe").unwrap();
        let indirect = dir.path().join(".").join("cv.txt");

        let mut manager = InputManager::new();
        manager.extract_text(&path).await.unwrap();
        let text = manager.extract_text(&indirect).await.unwrap();

        assert_eq!(text, "Jane Doe");
        assert_eq!(manager.cache_size(), 1);
    }
}
