//! The page being edited.

use serde::{Deserialize, Deserializer, Serialize};

/// A documentation page: opaque identity plus mutable markdown content.
///
/// The editor core only ever touches `content`; `id` exists for the host's
/// persistence calls and passes through untouched. Deserialization is
/// deliberately lenient about the content field: a page whose stored
/// content is not a string opens as empty instead of refusing to open.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "content_or_empty")]
    pub content: String,
}

impl Page {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: None,
            content: content.into(),
        }
    }
}

fn content_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        _ => String::new(),
    })
}
