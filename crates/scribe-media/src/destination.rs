//! Destination namespace computation.

use std::fmt;

use scribe_common::RouteContext;

/// The URL prefix under which uploaded media is stored.
///
/// A pure function of the navigational context: scoped to an API when the
/// route carries one, portal-wide otherwise. Recomputed on every bind,
/// never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaDestination(String);

impl MediaDestination {
    pub fn from_context(ctx: &RouteContext) -> Self {
        let base = ctx.env_base_url.trim_end_matches('/');
        match &ctx.api_id {
            Some(api_id) => Self(format!("{base}/apis/{api_id}/media/")),
            None => Self(format!("{base}/portal/media/")),
        }
    }

    /// Endpoint the multipart upload is POSTed to.
    pub fn upload_url(&self) -> String {
        format!("{}upload", self.0)
    }

    /// Final reference URL for a stored file, built from the relative path
    /// the endpoint returned. Always starts with the destination itself.
    pub fn resource_url(&self, relative_path: &str) -> String {
        format!("{}{}", self.0, relative_path.trim_start_matches('/'))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MediaDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
