//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;

/// JSON formatter - outputs items as one pretty-printed JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    items: Vec<serde_json::Value>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            items: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync, T: Serialize> OutputFormatter<T> for JsonFormatter<W> {
    fn format_item(&mut self, item: &T) -> Result<()> {
        self.items.push(serde_json::to_value(item)?);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.items)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{Content, Document};
    use seiki_core::Article;

    #[test]
    fn test_documents_as_array() {
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer);
            formatter
                .format_item(&Document {
                    source: "a.txt".to_string(),
                    content: Content::Text {
                        text: "AI".to_string(),
                    },
                })
                .unwrap();
            OutputFormatter::<Document>::finish(&mut formatter).unwrap();
        }

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value[0]["source"], "a.txt");
        assert_eq!(value[0]["text"], "AI");
    }

    #[test]
    fn test_articles() {
        let article: Article = serde_json::from_str(
            r#"{"year": 2012, "month": 6, "category": 1, "id": 7, "title": "見出し"}"#,
        )
        .unwrap();

        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer);
            formatter.format_item(&article).unwrap();
            OutputFormatter::<Article>::finish(&mut formatter).unwrap();
        }

        let parsed: Vec<Article> = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed, vec![article]);
    }

    #[test]
    fn test_empty_output() {
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer);
            OutputFormatter::<Document>::finish(&mut formatter).unwrap();
        }
        assert_eq!(String::from_utf8(buffer).unwrap(), "[]\n");
    }
}
