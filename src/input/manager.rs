//! Input manager for resumes and job descriptions

use crate::error::{AtsScorerError, Result};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};
use crate::model::ResumeData;
use log::{debug, info};
use std::collections::HashMap;
use std::path::Path;

pub struct InputManager {
    cache: HashMap<String, String>,
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

    /// Read and parse a JSON resume document
    pub async fn load_resume(&mut self, path: &Path) -> Result<ResumeData> {
        let file_type = self.detect_file_type(path)?;
        if file_type != FileType::Json {
            return Err(AtsScorerError::UnsupportedFormat(format!(
                "Resumes must be JSON documents: {}",
                path.display()
            )));
        }

        let json = self.read_cached(path, file_type).await?;
        let resume = ResumeData::from_json(&json).map_err(|e| {
            AtsScorerError::InvalidInput(format!("Invalid resume JSON in {}: {}", path.display(), e))
        })?;

        debug!(
            "Loaded resume with {} experience, {} education and {} project entries",
            resume.experience.len(),
            resume.education.len(),
            resume.projects.len()
        );
        Ok(resume)
    }

    /// Extract plain text from a job description document
    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let file_type = self.detect_file_type(path)?;
        if !file_type.is_document() {
            return Err(AtsScorerError::UnsupportedFormat(format!(
                "Unsupported file type for: {}",
                path.display()
            )));
        }
        self.read_cached(path, file_type).await
    }

    async fn read_cached(&mut self, path: &Path, file_type: FileType) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(&path_str) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        if !path.exists() {
            return Err(AtsScorerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let text = match file_type {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            }
            FileType::Text | FileType::Json => {
                info!("Reading file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
            FileType::Unknown => {
                return Err(AtsScorerError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        if self.enable_cache {
            self.cache.insert(path_str, text.clone());
        }

        Ok(text)
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| AtsScorerError::InvalidInput(format!("File has no extension: {}", path.display())))?;

        Ok(FileType::from_extension(extension))
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
