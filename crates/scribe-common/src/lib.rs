//! scribe-common: shared configuration and context types for the scribe
//! editor core.
//!
//! This crate carries:
//! - `Settings` - console-wide configuration (environment base URL, media
//!   upload policy) with async `Loader`/`Saver` storage traits
//! - `RouteContext` - the navigational context a bind happens under
//! - `ConfigError` - errors from the settings store

pub mod config;
pub mod context;
pub mod error;

pub use config::{FileStore, Loader, Saver, Settings, UploadMediaSettings};
pub use context::RouteContext;
pub use error::ConfigError;
