//! Plain text output formatter

use super::{Content, Document, OutputFormatter};
use anyhow::Result;
use std::io::{self, Write};

/// Plain text formatter - one line per document
///
/// Normalized text is already free of line breaks; token lists are joined
/// with single spaces.
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter<Document> for TextFormatter<W> {
    fn format_item(&mut self, document: &Document) -> Result<()> {
        match &document.content {
            Content::Text { text } => writeln!(self.writer, "{text}")?,
            Content::Tokens { tokens } => {
                let surfaces: Vec<&str> = tokens.iter().map(|t| t.surface.as_str()).collect();
                writeln!(self.writer, "{}", surfaces.join(" "))?;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
