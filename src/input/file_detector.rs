//! File type detection

#[derive(Debug, Clone, PartialEq)]
pub enum FileType {
    Text,
    Markdown,
    /// Recognised but not readable: binary formats need text extracted upstream
    Binary,
    Unknown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "txt" | "text" => FileType::Text,
            "md" | "markdown" => FileType::Markdown,
            "pdf" | "doc" | "docx" | "odt" | "rtf" => FileType::Binary,
            _ => FileType::Unknown,
        }
    }
}
