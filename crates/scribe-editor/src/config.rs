//! Per-bind editor configuration.

use serde::{Deserialize, Serialize};

use scribe_common::{RouteContext, Settings};
use scribe_media::MediaDestination;

use crate::document::Page;
use crate::toolbar::{self, ToolbarItem};

/// How the markdown preview is laid out next to the source pane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewMode {
    #[default]
    Vertical,
    Tabbed,
}

/// Default height of the mounted surface.
pub const DEFAULT_HEIGHT: &str = "500px";

/// Host-supplied configuration overlay.
///
/// Every field is optional; anything unspecified falls back to the
/// computed default ([`Settings`] for the upload policy, the base toolbar,
/// vertical preview).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    pub upload_enabled: Option<bool>,
    pub size_limit_bytes: Option<u64>,
    pub toolbar: Option<Vec<ToolbarItem>>,
    pub preview_mode: Option<PreviewMode>,
    pub height: Option<String>,
}

/// Fully resolved configuration for one editor instance.
///
/// Recomputed from scratch on every bind; two binds with identical inputs
/// produce equal configurations. The toolbar never contains the image tool
/// unless `upload_enabled` is true.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    pub toolbar_items: Vec<ToolbarItem>,
    pub upload_enabled: bool,
    pub initial_content: String,
    pub upload_destination: MediaDestination,
    pub size_limit_bytes: u64,
    pub preview_mode: PreviewMode,
    pub height: String,
}

impl EditorConfig {
    pub fn compute(
        page: Option<&Page>,
        options: &EditorOptions,
        ctx: &RouteContext,
        settings: &Settings,
    ) -> Self {
        let initial_content = page.map(|p| p.content.clone()).unwrap_or_default();
        let upload_enabled = options
            .upload_enabled
            .unwrap_or(settings.upload_media.enabled);
        let size_limit_bytes = options
            .size_limit_bytes
            .unwrap_or(settings.upload_media.max_size_in_octets);

        Self {
            toolbar_items: toolbar::toolbar_items(upload_enabled, options.toolbar.as_deref()),
            upload_enabled,
            initial_content,
            upload_destination: MediaDestination::from_context(ctx),
            size_limit_bytes,
            preview_mode: options.preview_mode.unwrap_or_default(),
            height: options
                .height
                .clone()
                .unwrap_or_else(|| DEFAULT_HEIGHT.to_owned()),
        }
    }
}
