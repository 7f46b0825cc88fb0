//! News article records

use crate::pipeline::Normalizer;
use serde::{Deserialize, Serialize};

/// One news article as produced by the upstream crawler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Publication year
    pub year: u16,
    /// Publication month
    pub month: u8,
    /// Category id assigned by the source site
    pub category: u32,
    /// Article id (last path segment of its URL)
    pub id: u64,
    /// Whether the summary lines form a sequence rather than parallel points
    #[serde(default)]
    pub is_series: Option<bool>,
    /// Headline
    #[serde(default)]
    pub title: String,
    /// Short summary, sentences separated by the delimiter
    #[serde(default)]
    pub summary: String,
    /// Body text
    #[serde(default)]
    pub content: String,
}

impl Article {
    /// Copy of this article with title, summary and content normalized
    pub fn normalized(&self, normalizer: &Normalizer) -> Article {
        Article {
            title: normalizer.normalize(&self.title).into_string(),
            summary: normalizer.normalize(&self.summary).into_string(),
            content: normalizer.normalize(&self.content).into_string(),
            ..self.clone()
        }
    }
}
