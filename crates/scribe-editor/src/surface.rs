//! The seam between the lifecycle manager and the embedded editor library.

use std::sync::Arc;

use scribe_media::{BlobUploadHook, UploadLease};

use crate::config::EditorConfig;
use crate::error::EditorError;

/// Listener invoked with the full markdown text after every edit.
pub type ContentChangeListener = Arc<dyn Fn(&str) + Send + Sync>;

/// Callbacks and extension points handed to the embedded editor at
/// construction.
pub struct EditorHooks {
    /// Invoked on every content change, in edit order.
    pub on_change: ContentChangeListener,
    /// Blob-upload extension point; present iff upload is enabled.
    pub upload: Option<Arc<dyn BlobUploadHook>>,
    /// Lease the instance attaches to completions it mints. Revoked when
    /// the instance is disposed, so in-flight uploads cannot touch a
    /// replaced surface.
    pub lease: UploadLease,
}

/// The embedded editor library: constructs live instances bound to the
/// host surface.
pub trait EditorEmbed {
    type Instance: EditorInstance;

    /// Mounts a fresh instance onto the host surface.
    fn mount(
        &mut self,
        config: &EditorConfig,
        hooks: EditorHooks,
    ) -> Result<Self::Instance, EditorError>;
}

/// A live editing surface.
pub trait EditorInstance {
    /// Current markdown text of the surface.
    fn markdown(&self) -> String;

    /// Tears the surface down: detaches listeners and releases the host
    /// anchor. Called exactly once, before a replacement is mounted or on
    /// host teardown.
    fn remove(&mut self);
}
