//! Navigational context for an editor bind.

use serde::{Deserialize, Serialize};

/// Route-derived context supplied by the host on every bind.
///
/// `api_id` is present when the console sits inside a specific API's
/// documentation section; it selects the per-API media namespace over the
/// portal-wide one. The context is plain data: nothing here is cached
/// between binds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteContext {
    pub env_base_url: String,
    #[serde(default)]
    pub api_id: Option<String>,
}

impl RouteContext {
    /// Context for a portal-wide (no API) route.
    pub fn portal(env_base_url: impl Into<String>) -> Self {
        Self {
            env_base_url: env_base_url.into(),
            api_id: None,
        }
    }

    /// Context for a route scoped to one API.
    pub fn api(env_base_url: impl Into<String>, api_id: impl Into<String>) -> Self {
        Self {
            env_base_url: env_base_url.into(),
            api_id: Some(api_id.into()),
        }
    }
}
