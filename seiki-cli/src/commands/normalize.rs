//! Normalize command implementation

use super::{InputArgs, InputRunner, NormalizationArgs, RunContext};
use crate::input::{resolve_patterns, FileReader};
use crate::output::{
    document_formatter, open_writer, Content, Document, JsonFormatter, OutputFormatter,
};
use anyhow::{Context, Result};
use clap::Args;
use seiki_core::Article;

/// Arguments for the normalize command
#[derive(Debug, Args)]
pub struct NormalizeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub normalization: NormalizationArgs,

    /// Read each input as a JSON array of article records (output is always JSON)
    #[arg(long)]
    pub articles: bool,
}

impl NormalizeArgs {
    /// Execute the normalize command
    pub fn execute(&self, context: &RunContext) -> Result<()> {
        log::info!("Starting normalization");

        let normalizer = self.normalization.normalizer(&context.config.normalization)?;
        let sources = resolve_patterns(&self.input.input)?;
        log::info!("Normalizing {} input(s)", sources.len());

        let runner = InputRunner::new(&self.input, context, sources.len())?;

        if self.articles {
            let batches = runner.run(&sources, |source| {
                let content = FileReader::read_source(source)?;
                let articles: Vec<Article> = serde_json::from_str(&content)
                    .with_context(|| format!("Invalid article records in {}", source))?;
                log::debug!("{}: {} articles", source, articles.len());
                Ok(articles
                    .iter()
                    .map(|article| article.normalized(&normalizer))
                    .collect::<Vec<_>>())
            })?;

            let writer = open_writer(self.input.output.as_deref())?;
            let mut formatter = JsonFormatter::new(writer);
            for article in batches.iter().flatten() {
                formatter.format_item(article)?;
            }
            OutputFormatter::<Article>::finish(&mut formatter)?;
        } else {
            let documents = runner.run(&sources, |source| {
                let text = FileReader::read_source(source)?;
                Ok(Document {
                    source: source.to_string(),
                    content: Content::Text {
                        text: normalizer.normalize(&text).into_string(),
                    },
                })
            })?;

            let writer = open_writer(self.input.output.as_deref())?;
            let mut formatter = document_formatter(self.input.format, writer);
            for document in &documents {
                formatter.format_item(document)?;
            }
            formatter.finish()?;
        }

        log::info!("Normalization complete");
        Ok(())
    }
}
