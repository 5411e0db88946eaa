//! scribe-media: the media upload bridge for the embedded markdown editor.
//!
//! The embedded editor asks, through a single extension point, for a
//! locally-selected file to become a network-addressable resource. This
//! crate implements that bridge:
//!
//! - [`MediaDestination`] - the context-dependent namespace uploads land in
//! - [`UploadPolicy`] - the size gate applied before any I/O
//! - [`UploadCompletion`]/[`PendingUpload`] - a single-use handle bridging
//!   the editor's synchronous hook contract to the asynchronous upload
//! - [`MediaTransport`]/[`HttpTransport`] - the endpoint seam and its
//!   reqwest implementation
//! - [`UploadBridge`] - the hook itself: validate, submit, resolve exactly
//!   once on every path

pub mod blob;
pub mod bridge;
pub mod completion;
pub mod destination;
pub mod policy;
pub mod transport;

pub use blob::MediaBlob;
pub use bridge::{BlobUploadHook, HookDirective, UploadBridge};
pub use completion::{PendingUpload, UploadCompletion, UploadLease, UploadOutcome};
pub use destination::MediaDestination;
pub use policy::UploadPolicy;
pub use transport::{HttpTransport, MediaTransport, TransportError};
