//! Transport seam for the upload endpoint.

use std::future::Future;

use miette::Diagnostic;

use crate::blob::MediaBlob;
use crate::destination::MediaDestination;

/// Errors from the upload transport.
#[derive(thiserror::Error, Debug, Diagnostic)]
#[non_exhaustive]
pub enum TransportError {
    /// Connection-level failure talking to the media endpoint
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The endpoint answered outside the 2xx range
    #[error("media endpoint returned {status}")]
    Status { status: reqwest::StatusCode },
}

/// One-shot submission of a blob to the media endpoint.
///
/// Returns the relative path of the stored file, which the caller joins
/// onto the destination for the final reference URL. Futures are `Send` so
/// an upload can run as a spawned task.
pub trait MediaTransport: Send + Sync + 'static {
    fn upload(
        &self,
        destination: MediaDestination,
        blob: MediaBlob,
    ) -> impl Future<Output = Result<String, TransportError>> + Send;
}

/// reqwest-backed transport.
///
/// Submits the payload as one multipart field named `file`. The request
/// content type is left to the client: the multipart boundary is
/// payload-dependent and must not be pinned. Credentials are whatever the
/// supplied client carries; authentication is not this crate's concern.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl MediaTransport for HttpTransport {
    async fn upload(
        &self,
        destination: MediaDestination,
        blob: MediaBlob,
    ) -> Result<String, TransportError> {
        let mut part = reqwest::multipart::Part::stream(reqwest::Body::from(blob.data));
        if let Some(name) = blob.name {
            part = part.file_name(name);
        }
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(destination.upload_url())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status { status });
        }

        Ok(response.text().await?.trim().to_owned())
    }
}
