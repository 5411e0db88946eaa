//! scribe-editor: lifecycle management for the embeddable markdown editor.
//!
//! The host hands this crate a page, a configuration overlay, and the
//! navigational context; the crate keeps exactly one live editor instance
//! bound to the host surface, always reflecting the latest of those
//! inputs. Any change to them tears the instance down and mounts a fresh
//! one with a recomputed configuration - live rich editors are rebuilt,
//! never patched.
//!
//! The editing surface itself is behind the [`EditorEmbed`]/
//! [`EditorInstance`] traits so the lifecycle logic stays independent of
//! any concrete editor library. Media upload flows through
//! `scribe-media`'s [`UploadBridge`](scribe_media::UploadBridge), wired in
//! as the instance's blob-upload hook whenever upload is enabled.

pub mod config;
pub mod document;
pub mod error;
pub mod host;
pub mod surface;
pub mod toolbar;

pub use config::{DEFAULT_HEIGHT, EditorConfig, EditorOptions, PreviewMode};
pub use document::Page;
pub use error::EditorError;
pub use host::EditorHost;
pub use surface::{ContentChangeListener, EditorEmbed, EditorHooks, EditorInstance};
pub use toolbar::{BASE_TOOLBAR, IMAGE_TOOL_INDEX, ToolbarItem, toolbar_items};
