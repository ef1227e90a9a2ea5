use std::path::Path;

use crate::error::{Error, Result};

/// The file formats load/save can dispatch to, keyed by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Yaml,
    Json,
}

impl Format {
    /// Derive the format from a path's extension (case-insensitive).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Format> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");
        Format::from_extension(ext)
    }

    /// Map an extension (with or without the leading dot) to a format.
    pub fn from_extension(ext: &str) -> Result<Format> {
        let ext = ext.trim_start_matches('.').to_ascii_lowercase();
        match ext.as_str() {
            "toml" | "tml" => Ok(Format::Toml),
            "yaml" | "yml" => Ok(Format::Yaml),
            "json" => Ok(Format::Json),
            _ => Err(Error::UnsupportedFormat(ext)),
        }
    }

    /// Whether the format has a comment syntax. JSON does not, so the
    /// comments flag is ignored when saving JSON.
    pub fn supports_comments(self) -> bool {
        !matches!(self, Format::Json)
    }
}
