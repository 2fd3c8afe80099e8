//! Text extraction from text-based file formats

use crate::error::Result;
use pulldown_cmark::{Event, Parser, Tag};
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Decode bytes as UTF-8, replacing invalid sequences instead of failing.
///
/// Uploads that are not really text still come out as some string; the
/// engine's normalizer deals with whatever survives.
pub fn decode_lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;
        Ok(decode_lossy(&bytes))
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;
        Ok(self.markdown_to_text(&decode_lossy(&bytes)))
    }
}

impl MarkdownExtractor {
    /// Drop markup, keeping one line per heading, paragraph and list item
    pub fn markdown_to_text(&self, markdown: &str) -> String {
        let mut text = String::new();

        for event in Parser::new(markdown) {
            match event {
                Event::Text(content) | Event::Code(content) => text.push_str(&content),
                Event::SoftBreak | Event::HardBreak => text.push('\n'),
                Event::End(Tag::Paragraph)
                | Event::End(Tag::Heading(..))
                | Event::End(Tag::Item)
                | Event::End(Tag::CodeBlock(_)) => text.push('\n'),
                _ => {}
            }
        }

        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_markup_removed() {
        let markdown = "# Jane Doe\n\n**Senior** engineer at `Acme`.\n\n## Skills\n\n- Rust\n- Python\n";
        let text = MarkdownExtractor.markdown_to_text(markdown);

        assert_eq!(text, "Jane Doe\nSenior engineer at Acme.\nSkills\nRust\nPython");
    }

    #[test]
    fn test_lossy_decoding() {
        let text = decode_lossy(&[b'o', b'k', 0xff, 0xfe, b'!']);

        assert!(text.starts_with("ok"));
        assert!(text.ends_with('!'));
    }
}
