//! Console settings: environment base URL and media upload policy.
//!
//! The original console exposed these through a global constants object;
//! here they are explicit data passed into the editor core, so the
//! lifecycle manager and the upload bridge stay independently testable.

use std::future::Future;
use std::path::{Path, PathBuf};

use miette::Result;
use miette::miette;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Console-wide settings consumed by the editor core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Base URL of the management environment, e.g. `https://x/env1`.
    pub env_base_url: String,
    /// Media upload policy for the documentation editor.
    #[serde(default)]
    pub upload_media: UploadMediaSettings,
}

/// Whether in-editor media upload is offered, and how large a file may be.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadMediaSettings {
    #[serde(default)]
    pub enabled: bool,
    /// Upper bound on a single uploaded file, in octets.
    #[serde(default = "default_max_size")]
    pub max_size_in_octets: u64,
}

fn default_max_size() -> u64 {
    1_000_000
}

impl Default for UploadMediaSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            max_size_in_octets: default_max_size(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            env_base_url: "http://localhost:8083".to_owned(),
            upload_media: UploadMediaSettings::default(),
        }
    }
}

impl Settings {
    /// Loads the settings from the provided loader.
    pub async fn load(loader: &impl Loader) -> Result<Self> {
        loader
            .load()
            .await
            .map_err(|_| miette!("Failed to load settings"))
    }

    /// Saves the settings using the provided saver.
    pub async fn save(&self, saver: &impl Saver) -> Result<()> {
        saver.save(self).await.map_err(|_| miette!("Failed to save settings"))
    }
}

/// The trait for loading settings data.
pub trait Loader {
    /// Loads the settings data.
    fn load(
        &self,
    ) -> impl Future<
        Output = core::result::Result<Settings, Box<dyn std::error::Error + Send + Sync + 'static>>,
    > + Send;
}

/// The trait for saving settings data.
pub trait Saver {
    /// Saves the settings data.
    fn save(
        &self,
        settings: &Settings,
    ) -> impl Future<
        Output = core::result::Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>,
    > + Send;
}

/// An implementation of [`Loader`] and [`Saver`] backed by a file.
///
/// [`Settings`] data is serialized and deserialized according to the file
/// extension. Supports `.json` and `.toml`.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a new [`FileStore`] reading and writing the given path.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn unsupported(&self) -> ConfigError {
        ConfigError::UnsupportedFormat {
            path: self.path.display().to_string(),
        }
    }
}

impl Loader for FileStore {
    async fn load(
        &self,
    ) -> core::result::Result<Settings, Box<dyn std::error::Error + Send + Sync + 'static>> {
        match self.path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(serde_json::from_str(&std::fs::read_to_string(&self.path)?)?),
            Some("toml") => Ok(toml::from_str(&std::fs::read_to_string(&self.path)?)?),
            _ => Err(self.unsupported().into()),
        }
    }
}

impl Saver for FileStore {
    async fn save(
        &self,
        settings: &Settings,
    ) -> core::result::Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
        match self.path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(std::fs::write(
                &self.path,
                serde_json::to_string_pretty(settings)?,
            )?),
            Some("toml") => Ok(std::fs::write(
                &self.path,
                toml::to_string_pretty(settings).map_err(ConfigError::from)?,
            )?),
            _ => Err(self.unsupported().into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn roundtrips_through_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("settings.json"));

        let settings = Settings {
            env_base_url: "https://x/env1".to_owned(),
            upload_media: UploadMediaSettings {
                enabled: true,
                max_size_in_octets: 2048,
            },
        };
        settings.save(&store).await.unwrap();

        let loaded = Settings::load(&store).await.unwrap();
        assert_eq!(loaded, settings);
    }

    #[tokio::test]
    async fn rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("settings.ini"));

        assert!(Settings::load(&store).await.is_err());
        assert!(Settings::default().save(&store).await.is_err());
    }

    #[test]
    fn upload_media_defaults_are_conservative() {
        let defaults = UploadMediaSettings::default();
        assert!(!defaults.enabled);
        assert_eq!(defaults.max_size_in_octets, 1_000_000);
    }

    #[test]
    fn partial_json_fills_upload_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"env_base_url": "https://x/env1"}"#).unwrap();
        assert_eq!(settings.env_base_url, "https://x/env1");
        assert_eq!(settings.upload_media, UploadMediaSettings::default());
    }
}
