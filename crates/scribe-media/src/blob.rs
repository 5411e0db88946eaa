//! Binary payload handed to the upload hook.

use bytes::Bytes;

/// A locally-selected file the user wants inserted into the document.
///
/// Ephemeral: exists only for the duration of one upload call.
#[derive(Debug, Clone)]
pub struct MediaBlob {
    pub data: Bytes,
    /// Display name from the file picker, when one was provided.
    pub name: Option<String>,
}

impl MediaBlob {
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self {
            data: data.into(),
            name: None,
        }
    }

    pub fn named(data: impl Into<Bytes>, name: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            name: Some(name.into()),
        }
    }

    pub fn size_bytes(&self) -> u64 {
        self.data.len() as u64
    }
}
