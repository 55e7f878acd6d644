//! Content file loading.

use std::path::Path;

use tracing::info;

use crate::config::ContentFormat;
use crate::domain::portfolio::ContentDocument;
use crate::ports::ContentError;

/// Reads a content document from a JSON or YAML file, chosen by extension.
pub fn load_document_file(path: &Path) -> Result<ContentDocument, ContentError> {
    let shown = path.display().to_string();
    let format = ContentFormat::from_path(path)
        .map_err(|e| ContentError::io(shown.clone(), e.to_string()))?;
    let raw = std::fs::read_to_string(path)
        .map_err(|e| ContentError::io(shown.clone(), e.to_string()))?;

    let document: ContentDocument = match format {
        ContentFormat::Json => serde_json::from_str(&raw)
            .map_err(|e| ContentError::malformed(format!("{}: {}", shown, e)))?,
        ContentFormat::Yaml => serde_yaml::from_str(&raw)
            .map_err(|e| ContentError::malformed(format!("{}: {}", shown, e)))?,
    };

    info!(
        path = %shown,
        projects = document.projects.len(),
        "Loaded content document from file"
    );
    Ok(document)
}
