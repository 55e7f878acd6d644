//! Content document configuration

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::error::ValidationError;

/// Where the served content document comes from.
///
/// With no `path`, the built-in default document is served.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentConfig {
    /// JSON or YAML file replacing the built-in document
    pub path: Option<PathBuf>,
}

/// Supported content file formats, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFormat {
    Json,
    Yaml,
}

impl ContentFormat {
    /// Detects the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, ValidationError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Ok(ContentFormat::Json),
            "yaml" | "yml" => Ok(ContentFormat::Yaml),
            _ => Err(ValidationError::UnsupportedContentFormat(
                path.display().to_string(),
            )),
        }
    }
}

impl ContentConfig {
    /// Validate content configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(path) = &self.path {
            ContentFormat::from_path(path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_path_is_valid() {
        assert!(ContentConfig::default().validate().is_ok());
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(
            ContentFormat::from_path(Path::new("site.json")),
            Ok(ContentFormat::Json)
        );
        assert_eq!(
            ContentFormat::from_path(Path::new("site.YML")),
            Ok(ContentFormat::Yaml)
        );
        assert_eq!(
            ContentFormat::from_path(Path::new("content/site.yaml")),
            Ok(ContentFormat::Yaml)
        );
    }

    #[test]
    fn test_unsupported_extension_rejected() {
        let config = ContentConfig {
            path: Some(PathBuf::from("site.toml")),
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::UnsupportedContentFormat("site.toml".to_string()))
        );
    }
}
