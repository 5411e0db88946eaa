//! Single-use completion handle for the upload hook.
//!
//! The embedded editor's extension contract is a synchronous return plus a
//! later callback. Modelling the callback as a oneshot pair makes the
//! exactly-once half of that contract consume-on-resolve, and the lease
//! lets a rebuilt surface drop completions that arrive for its
//! predecessor.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::oneshot;

/// Final state of one upload request, delivered exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// The file is stored; insert a reference to it.
    Accepted {
        reference_url: String,
        display_name: Option<String>,
    },
    /// The file was not uploaded; surface the reason instead.
    Rejected { reason: String },
}

/// Liveness flag tying completions to one editor instance.
///
/// Revoked when the instance is disposed. A completion resolved under a
/// revoked lease is discarded rather than delivered, so an in-flight
/// upload can never mutate a replaced surface.
#[derive(Debug, Clone, Default)]
pub struct UploadLease {
    revoked: Arc<AtomicBool>,
}

impl UploadLease {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn revoke(&self) {
        self.revoked.store(true, Ordering::SeqCst);
    }

    pub fn is_live(&self) -> bool {
        !self.revoked.load(Ordering::SeqCst)
    }
}

/// Sending half: resolves the upload with its final outcome.
#[derive(Debug)]
pub struct UploadCompletion {
    tx: oneshot::Sender<UploadOutcome>,
    lease: UploadLease,
}

/// Receiving half: what the editor waits on before inserting the media
/// reference.
#[derive(Debug)]
pub struct PendingUpload {
    rx: oneshot::Receiver<UploadOutcome>,
}

impl UploadCompletion {
    /// Creates a linked completion/pending pair under the given lease.
    pub fn channel(lease: UploadLease) -> (UploadCompletion, PendingUpload) {
        let (tx, rx) = oneshot::channel();
        (UploadCompletion { tx, lease }, PendingUpload { rx })
    }

    /// Delivers the outcome. Consumes the handle, so a second resolution
    /// is unrepresentable. Resolutions on a disposed surface are dropped.
    pub fn resolve(self, outcome: UploadOutcome) {
        if !self.lease.is_live() {
            tracing::debug!("discarding upload outcome for disposed editor surface");
            return;
        }
        // Receiver gone means the editor stopped waiting; nothing to do.
        let _ = self.tx.send(outcome);
    }
}

impl PendingUpload {
    /// Waits for the outcome. `None` when the completion was discarded.
    pub async fn resolved(self) -> Option<UploadOutcome> {
        self.rx.await.ok()
    }

    /// Non-blocking check, for outcomes resolved synchronously (validation
    /// rejections).
    pub fn try_resolved(&mut self) -> Option<UploadOutcome> {
        self.rx.try_recv().ok()
    }
}
