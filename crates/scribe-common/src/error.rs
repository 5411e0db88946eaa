//! Error types for the configuration layer.

use miette::Diagnostic;

/// Errors raised while loading or saving [`Settings`](crate::Settings).
#[derive(thiserror::Error, Debug, Diagnostic)]
#[non_exhaustive]
pub enum ConfigError {
    /// IO error reading or writing the backing store
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML deserialization error
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),

    /// TOML serialization error
    #[error(transparent)]
    TomlSer(#[from] toml::ser::Error),

    /// The store path has an extension we don't know how to handle
    #[error("unsupported settings format: {path}")]
    #[diagnostic(help("supported extensions are .json and .toml"))]
    UnsupportedFormat { path: String },
}
