//! Size policy for uploaded media.

use crate::blob::MediaBlob;

/// Size gate applied to every candidate blob, before any I/O.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadPolicy {
    pub size_limit_bytes: u64,
}

impl UploadPolicy {
    pub fn new(size_limit_bytes: u64) -> Self {
        Self { size_limit_bytes }
    }

    /// Checks a candidate blob, returning the user-facing rejection reason
    /// when it exceeds the limit.
    pub fn check(&self, blob: &MediaBlob) -> Result<(), String> {
        if blob.size_bytes() > self.size_limit_bytes {
            Err(format!(
                "file too big, limited to {} bytes",
                self.size_limit_bytes
            ))
        } else {
            Ok(())
        }
    }
}
