use std::fs;
use std::path::Path;

use log::debug;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::document::{self, Node};
use crate::emit;
use crate::error::{Error, Result};
use crate::format::Format;
use crate::schema::FieldMeta;

/// How [`ConfigModel::save_with`] treats existing files and comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveOptions {
    /// Replace an existing file. When off, saving over an existing path
    /// fails with [`Error::AlreadyExists`] and leaves the file untouched.
    pub overwrite: bool,
    /// Attach field comments. Only YAML and TOML have comment syntax;
    /// JSON ignores this flag.
    pub comments: bool,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self {
            overwrite: true,
            comments: true,
        }
    }
}

/// File-based load/save for a serde model, with the format picked from the
/// file extension and per-field comments in YAML and TOML output.
///
/// Implementors provide [`fields`](ConfigModel::fields) when they want
/// comments; everything else comes for free.
pub trait ConfigModel: Serialize + DeserializeOwned {
    /// Static field metadata, in struct declaration order. Models that keep
    /// the default empty table serialize without comments.
    fn fields() -> &'static [FieldMeta] {
        &[]
    }

    /// Load a model from a file, picking the format by extension.
    fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::NotFound(path.to_path_buf()));
        }
        let format = Format::from_path(path)?;
        debug!("loading {} as {:?}", path.display(), format);
        match format {
            Format::Toml => Self::load_toml(path),
            Format::Yaml => Self::load_yaml(path),
            Format::Json => Self::load_json(path),
        }
    }

    fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        Ok(serde_json::from_str(&read(path.as_ref())?)?)
    }

    fn load_yaml(path: impl AsRef<Path>) -> Result<Self> {
        Ok(serde_yaml::from_str(&read(path.as_ref())?)?)
    }

    fn load_toml(path: impl AsRef<Path>) -> Result<Self> {
        Ok(toml::from_str(&read(path.as_ref())?)?)
    }

    /// Save with the defaults: overwrite enabled, comments enabled.
    fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.save_with(path, SaveOptions::default())
    }

    /// Save, picking the format by extension.
    fn save_with(&self, path: impl AsRef<Path>, options: SaveOptions) -> Result<()> {
        let path = path.as_ref();
        overwrite_guard(path, options.overwrite)?;
        let format = Format::from_path(path)?;
        debug!("saving {} as {:?}", path.display(), format);
        match format {
            Format::Toml => self.save_toml(path, options),
            Format::Yaml => self.save_yaml(path, options),
            Format::Json => self.save_json(path, options),
        }
    }

    fn save_json(&self, path: impl AsRef<Path>, options: SaveOptions) -> Result<()> {
        let path = path.as_ref();
        overwrite_guard(path, options.overwrite)?;
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    fn save_yaml(&self, path: impl AsRef<Path>, options: SaveOptions) -> Result<()> {
        let path = path.as_ref();
        overwrite_guard(path, options.overwrite)?;
        let text = if options.comments {
            let doc = document::project(self, Self::fields())?;
            emit::yaml::to_string(&doc)?
        } else {
            serde_yaml::to_string(self)?
        };
        fs::write(path, text)?;
        Ok(())
    }

    fn save_toml(&self, path: impl AsRef<Path>, options: SaveOptions) -> Result<()> {
        let path = path.as_ref();
        overwrite_guard(path, options.overwrite)?;
        let Node::Mapping(entries) = document::project(self, Self::fields())? else {
            return Err(Error::NotAMapping);
        };
        let text = emit::toml::to_string(&entries, options.comments)?;
        fs::write(path, text)?;
        Ok(())
    }
}

fn overwrite_guard(path: &Path, overwrite: bool) -> Result<()> {
    if !overwrite && path.exists() {
        return Err(Error::AlreadyExists(path.to_path_buf()));
    }
    Ok(())
}

fn read(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }
    Ok(fs::read_to_string(path)?)
}
