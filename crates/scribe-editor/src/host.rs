//! The editor lifecycle manager.
//!
//! Owns the single live instance bound to the host surface. Every bind
//! disposes the previous instance and mounts a fresh one with a recomputed
//! configuration: incremental reconfiguration of a live rich editor is
//! unreliable, so the manager always rebuilds.

use std::sync::{Arc, Mutex, PoisonError};

use scribe_common::{RouteContext, Settings};
use scribe_media::{BlobUploadHook, MediaTransport, UploadBridge, UploadLease, UploadPolicy};

use crate::config::{EditorConfig, EditorOptions};
use crate::document::Page;
use crate::error::EditorError;
use crate::surface::{ContentChangeListener, EditorEmbed, EditorHooks, EditorInstance};

struct BoundEditor<I> {
    instance: I,
    lease: UploadLease,
    config: EditorConfig,
}

/// Maintains the invariant "at most one live editor instance per host
/// surface, always reflecting the latest configuration and page".
pub struct EditorHost<E: EditorEmbed, T: MediaTransport> {
    embed: E,
    transport: Arc<T>,
    settings: Settings,
    page: Arc<Mutex<Page>>,
    on_change: Option<ContentChangeListener>,
    current: Option<BoundEditor<E::Instance>>,
}

impl<E: EditorEmbed, T: MediaTransport> EditorHost<E, T> {
    pub fn new(embed: E, transport: Arc<T>, settings: Settings) -> Self {
        Self {
            embed,
            transport,
            settings,
            page: Arc::new(Mutex::new(Page::default())),
            on_change: None,
            current: None,
        }
    }

    /// Registers the host application's outbound content-changed listener.
    pub fn set_change_listener(&mut self, listener: ContentChangeListener) {
        self.on_change = Some(listener);
    }

    /// Binds a page to the surface, replacing any live instance.
    ///
    /// An absent page binds as empty content. The previous instance is
    /// disposed before the new one is mounted, unconditionally: a failed
    /// mount leaves the surface empty, never doubled.
    pub fn bind(
        &mut self,
        page: Option<Page>,
        options: &EditorOptions,
        ctx: &RouteContext,
    ) -> Result<(), EditorError> {
        let page = page.unwrap_or_default();
        let config = EditorConfig::compute(Some(&page), options, ctx, &self.settings);

        self.dispose();

        self.page = Arc::new(Mutex::new(page));
        let lease = UploadLease::new();

        let upload = config.upload_enabled.then(|| {
            Arc::new(UploadBridge::new(
                config.upload_destination.clone(),
                UploadPolicy::new(config.size_limit_bytes),
                Arc::clone(&self.transport),
            )) as Arc<dyn BlobUploadHook>
        });

        // Single writer for page content while the instance is live.
        // Writes happen in edit order; the host listener sees the same
        // order.
        let page_handle = Arc::clone(&self.page);
        let forward = self.on_change.clone();
        let on_change: ContentChangeListener = Arc::new(move |markdown: &str| {
            let mut page = page_handle.lock().unwrap_or_else(PoisonError::into_inner);
            page.content = markdown.to_owned();
            drop(page);
            if let Some(listener) = &forward {
                listener(markdown);
            }
        });

        let hooks = EditorHooks {
            on_change,
            upload,
            lease: lease.clone(),
        };

        tracing::debug!(
            "mounting editor surface (upload: {}, destination: {})",
            config.upload_enabled,
            config.upload_destination
        );
        let instance = self.embed.mount(&config, hooks)?;
        self.current = Some(BoundEditor {
            instance,
            lease,
            config,
        });
        Ok(())
    }

    /// Disposes the live instance, if any. Idempotent; also revokes the
    /// instance's upload lease so late-arriving completions are discarded.
    pub fn dispose(&mut self) {
        if let Some(mut bound) = self.current.take() {
            tracing::debug!("disposing editor surface");
            bound.lease.revoke();
            bound.instance.remove();
        }
    }

    /// The configuration of the live instance, if one is bound.
    pub fn config(&self) -> Option<&EditorConfig> {
        self.current.as_ref().map(|bound| &bound.config)
    }

    /// Current page content, as last written back by the change listener.
    pub fn content(&self) -> String {
        self.page
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .content
            .clone()
    }

    /// Shared handle to the bound page.
    ///
    /// The change listener is the single writer while an instance is live;
    /// any other writer's edits would be silently overwritten on the next
    /// change notification.
    pub fn page(&self) -> Arc<Mutex<Page>> {
        Arc::clone(&self.page)
    }
}

impl<E: EditorEmbed, T: MediaTransport> Drop for EditorHost<E, T> {
    fn drop(&mut self) {
        self.dispose();
    }
}
