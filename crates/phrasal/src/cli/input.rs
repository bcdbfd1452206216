use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use phrasal_core::Document;

/// Loads a JSON document from a path, or from stdin when `source` is `-`.
pub fn read_document(source: &str) -> Result<Document> {
    let raw = if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read document from stdin")?;
        buf
    } else {
        std::fs::read_to_string(Path::new(source))
            .with_context(|| format!("failed to read {source}"))?
    };

    let document: Document =
        serde_json::from_str(&raw).with_context(|| format!("{source} is not a valid document"))?;
    tracing::debug!(
        "Loaded document with {} paragraphs, {} tokens",
        document.paragraphs().len(),
        document.len()
    );
    Ok(document)
}
