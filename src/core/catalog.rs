//! Note catalog: the static collection of snippets the user assembles from

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// One typed fragment of a note's body
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Title { text: String },
    Header { text: String },
    Paragraph { text: String },
    List { items: Vec<String> },
    /// Any tag this version does not understand; flattens to nothing
    #[serde(other)]
    Unknown,
}

/// A structured document inside a note; only the first one is flattened
#[derive(Debug, Clone, Deserialize)]
pub struct ContentDocument {
    pub body: Vec<ContentBlock>,
}

/// A catalog entry with a title, category, and structured content
///
/// The title is the unique key within the catalog and is used as the
/// identity of a selected section.
#[derive(Debug, Clone, Deserialize)]
pub struct Note {
    pub title: String,
    pub category: String,
    #[serde(rename = "contentList", default)]
    pub content_list: Vec<ContentDocument>,
}

/// The full note catalog, loaded once and read-only thereafter
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    pub notes: Vec<Note>,
}

/// Catalog shipped with the application
const EMBEDDED_CATALOG: &str = include_str!("../../assets/notes.json");

impl Catalog {
    /// Parse the catalog that ships embedded in the binary
    pub fn embedded() -> Result<Self> {
        serde_json::from_str(EMBEDDED_CATALOG).context("Failed to parse embedded catalog")
    }

    /// Load a catalog from a JSON file on disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
        let catalog: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse catalog: {}", path.display()))?;
        tracing::info!(
            "Loaded catalog with {} notes from {}",
            catalog.notes.len(),
            path.display()
        );
        Ok(catalog)
    }
}
