//! The editor's blob-upload extension point.

use std::sync::Arc;

use crate::blob::MediaBlob;
use crate::completion::{UploadCompletion, UploadOutcome};
use crate::destination::MediaDestination;
use crate::policy::UploadPolicy;
use crate::transport::MediaTransport;

/// Synchronous return value of the upload hook.
///
/// The insertion data is only known once the asynchronous upload resolves,
/// so the hook always defers: the editor waits on the completion instead of
/// inserting immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum HookDirective {
    /// Do not insert yet; the completion carries the final state.
    Defer,
}

/// The extension seam the editor invokes on in-editor media insertion.
pub trait BlobUploadHook: Send + Sync {
    fn handle_upload(&self, blob: MediaBlob, complete: UploadCompletion) -> HookDirective;
}

/// Bridges the editor's synchronous hook contract to the asynchronous
/// upload.
///
/// Per request, strictly in order: size gate (synchronous, may resolve a
/// rejection with zero I/O), one network submission, one resolution of the
/// completion. Every path resolves the completion exactly once; a hook
/// left unresolved would stall the editor's insertion UI indefinitely.
///
/// Concurrent invocations are independent: no shared mutable state, no
/// cross-request ordering. Upload tasks are spawned onto the ambient tokio
/// runtime, so the hook must be invoked from within one.
#[derive(Debug, Clone)]
pub struct UploadBridge<T: MediaTransport> {
    destination: MediaDestination,
    policy: UploadPolicy,
    transport: Arc<T>,
}

impl<T: MediaTransport> UploadBridge<T> {
    pub fn new(destination: MediaDestination, policy: UploadPolicy, transport: Arc<T>) -> Self {
        Self {
            destination,
            policy,
            transport,
        }
    }

    pub fn destination(&self) -> &MediaDestination {
        &self.destination
    }
}

impl<T: MediaTransport> BlobUploadHook for UploadBridge<T> {
    fn handle_upload(&self, blob: MediaBlob, complete: UploadCompletion) -> HookDirective {
        if let Err(reason) = self.policy.check(&blob) {
            complete.resolve(UploadOutcome::Rejected { reason });
            return HookDirective::Defer;
        }

        let destination = self.destination.clone();
        let transport = Arc::clone(&self.transport);
        tokio::spawn(async move {
            let display_name = blob.name.clone();
            match transport.upload(destination.clone(), blob).await {
                Ok(path) => complete.resolve(UploadOutcome::Accepted {
                    reference_url: destination.resource_url(&path),
                    display_name,
                }),
                Err(err) => {
                    tracing::warn!("media upload to {} failed: {}", destination, err);
                    complete.resolve(UploadOutcome::Rejected {
                        reason: err.to_string(),
                    });
                }
            }
        });

        HookDirective::Defer
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use scribe_common::RouteContext;

    use super::*;
    use crate::completion::UploadLease;
    use crate::transport::TransportError;

    struct RecordingTransport {
        calls: AtomicUsize,
        fail: bool,
    }

    impl RecordingTransport {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                fail,
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl MediaTransport for RecordingTransport {
        async fn upload(
            &self,
            _destination: MediaDestination,
            _blob: MediaBlob,
        ) -> Result<String, TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(TransportError::Status {
                    status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                })
            } else {
                Ok("stored/abc123".to_owned())
            }
        }
    }

    fn bridge(
        fail: bool,
        size_limit_bytes: u64,
    ) -> (UploadBridge<RecordingTransport>, Arc<RecordingTransport>) {
        let transport = RecordingTransport::new(fail);
        let destination =
            MediaDestination::from_context(&RouteContext::api("https://x/env1", "api-42"));
        (
            UploadBridge::new(
                destination,
                UploadPolicy::new(size_limit_bytes),
                Arc::clone(&transport),
            ),
            transport,
        )
    }

    #[test]
    fn oversized_blob_rejected_synchronously_without_io() {
        let (bridge, transport) = bridge(false, 1000);
        let (complete, mut pending) = UploadCompletion::channel(UploadLease::new());

        let HookDirective::Defer =
            bridge.handle_upload(MediaBlob::new(vec![0u8; 1001]), complete);

        match pending.try_resolved() {
            Some(UploadOutcome::Rejected { reason }) => {
                assert_eq!(reason, "file too big, limited to 1000 bytes");
            }
            other => panic!("expected synchronous rejection, got {other:?}"),
        }
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn blob_within_limit_uploads_and_resolves_accepted() {
        let (bridge, transport) = bridge(false, 1000);
        let (complete, pending) = UploadCompletion::channel(UploadLease::new());

        let HookDirective::Defer =
            bridge.handle_upload(MediaBlob::named(vec![0u8; 1000], "pic.png"), complete);

        match pending.resolved().await {
            Some(UploadOutcome::Accepted {
                reference_url,
                display_name,
            }) => {
                assert!(reference_url.starts_with(bridge.destination().as_str()));
                assert_eq!(
                    reference_url,
                    "https://x/env1/apis/api-42/media/stored/abc123"
                );
                assert_eq!(display_name.as_deref(), Some("pic.png"));
            }
            other => panic!("expected acceptance, got {other:?}"),
        }
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn transport_failure_resolves_rejected() {
        let (bridge, transport) = bridge(true, 1000);
        let (complete, pending) = UploadCompletion::channel(UploadLease::new());

        let HookDirective::Defer = bridge.handle_upload(MediaBlob::new(vec![0u8; 10]), complete);

        match pending.resolved().await {
            Some(UploadOutcome::Rejected { reason }) => {
                assert!(reason.contains("500"));
            }
            other => panic!("expected rejection, got {other:?}"),
        }
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn concurrent_uploads_resolve_independently() {
        let (bridge, transport) = bridge(false, 1000);

        let (complete_a, pending_a) = UploadCompletion::channel(UploadLease::new());
        let (complete_b, pending_b) = UploadCompletion::channel(UploadLease::new());

        let HookDirective::Defer =
            bridge.handle_upload(MediaBlob::named(vec![0u8; 1], "a.png"), complete_a);
        let HookDirective::Defer =
            bridge.handle_upload(MediaBlob::named(vec![0u8; 2], "b.png"), complete_b);

        let outcome_a = pending_a.resolved().await;
        let outcome_b = pending_b.resolved().await;

        for (outcome, name) in [(outcome_a, "a.png"), (outcome_b, "b.png")] {
            match outcome {
                Some(UploadOutcome::Accepted { display_name, .. }) => {
                    assert_eq!(display_name.as_deref(), Some(name));
                }
                other => panic!("expected acceptance, got {other:?}"),
            }
        }
        assert_eq!(transport.calls(), 2);
    }

    #[tokio::test]
    async fn revoked_lease_suppresses_delivery() {
        let (bridge, transport) = bridge(false, 1000);
        let lease = UploadLease::new();
        let (complete, pending) = UploadCompletion::channel(lease.clone());

        let HookDirective::Defer = bridge.handle_upload(MediaBlob::new(vec![0u8; 10]), complete);
        lease.revoke();

        assert_eq!(pending.resolved().await, None);
        assert_eq!(transport.calls(), 1);
    }
}
