//! Output formatting module

use anyhow::{Context, Result};
use seiki_core::Token;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Trait for output formatters
pub trait OutputFormatter<T>: Send + Sync {
    /// Format and output a single item
    fn format_item(&mut self, item: &T) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one document per line
    Text,
    /// JSON array of documents
    Json,
}

/// Result for one input document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    /// Input the document was read from
    pub source: String,
    #[serde(flatten)]
    pub content: Content,
}

/// What was produced for a document
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Content {
    /// Normalized text
    Text { text: String },
    /// Analyzer tokens
    Tokens { tokens: Vec<Token> },
}

/// Writer for `path`, or stdout
pub fn open_writer(path: Option<&Path>) -> Result<Box<dyn Write + Send + Sync>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

/// Formatter for documents in the requested format
pub fn document_formatter<W>(format: OutputFormat, writer: W) -> Box<dyn OutputFormatter<Document>>
where
    W: Write + Send + Sync + 'static,
{
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seiki_core::PartOfSpeech;

    #[test]
    fn test_document_serialization() {
        let document = Document {
            source: "a.txt".to_string(),
            content: Content::Text {
                text: "本文".to_string(),
            },
        };
        let value = serde_json::to_value(&document).unwrap();
        assert_eq!(value["source"], "a.txt");
        assert_eq!(value["text"], "本文");

        let document = Document {
            source: "<stdin>".to_string(),
            content: Content::Tokens {
                tokens: vec![Token::new("猫", PartOfSpeech::Noun, "名詞", "猫")],
            },
        };
        let value = serde_json::to_value(&document).unwrap();
        assert_eq!(value["tokens"][0]["part_of_speech"], "NOUN");
        assert!(value.get("text").is_none());
    }

    #[test]
    fn test_open_writer_creates_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        {
            let mut writer = open_writer(Some(&path)).unwrap();
            writer.write_all("出力".as_bytes()).unwrap();
        }
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "出力");
    }

    #[test]
    fn test_open_writer_bad_path() {
        let err = open_writer(Some(Path::new("/nonexistent/dir/out.txt")))
            .err()
            .unwrap();
        assert!(err.to_string().contains("Failed to create output file"));
    }
}
