// SPDX-License-Identifier: MPL-2.0
//! Display-only view of the selected image.

use super::ImageFile;
use bytes::Bytes;

/// What the form shows for the selected file. Shares the file's buffer, so
/// holding a preview costs no extra copy of the image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    media_type: String,
    bytes: Bytes,
}

impl Preview {
    #[must_use]
    pub fn of(file: &ImageFile) -> Self {
        Self {
            media_type: file.media_type().to_string(),
            bytes: file.shared_bytes(),
        }
    }

    #[must_use]
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Buffer handed to the image widget.
    #[must_use]
    pub fn shared_bytes(&self) -> Bytes {
        self.bytes.clone()
    }
}
