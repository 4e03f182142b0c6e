// SPDX-License-Identifier: MPL-2.0
//! Candidate upload files and their declared media type.

use bytes::Bytes;
use std::path::Path;

/// Media type used when the extension is not a known image format.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Image extensions offered by the open dialog, paired with their media type.
pub const IMAGE_MEDIA_TYPES: &[(&str, &str)] = &[
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("jfif", "image/jpeg"),
    ("apng", "image/apng"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("bmp", "image/bmp"),
    ("ico", "image/x-icon"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
    ("svg", "image/svg+xml"),
    ("avif", "image/avif"),
    ("heic", "image/heic"),
    ("heif", "image/heif"),
    ("jxl", "image/jxl"),
];

/// Returns the extensions accepted by the file dialog filter.
#[must_use]
pub fn image_extensions() -> Vec<&'static str> {
    IMAGE_MEDIA_TYPES.iter().map(|(ext, _)| *ext).collect()
}

/// Guesses the declared media type of a file from its extension.
///
/// Unknown or missing extensions yield [`OCTET_STREAM`].
#[must_use]
pub fn media_type_for_path<P: AsRef<Path>>(path: P) -> &'static str {
    let Some(extension) = path
        .as_ref()
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_lowercase)
    else {
        return OCTET_STREAM;
    };

    IMAGE_MEDIA_TYPES
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map_or(OCTET_STREAM, |(_, media_type)| *media_type)
}

/// A file picked by the user: its name, declared media type and contents.
///
/// The media type is whatever the source declared; it is not sniffed from
/// the bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    name: String,
    media_type: String,
    bytes: Bytes,
}

impl ImageFile {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        media_type: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Builds a file from a path and already-read contents, deriving the
    /// name and media type from the path.
    #[must_use]
    pub fn from_path_and_bytes(path: &Path, bytes: Vec<u8>) -> Self {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("image")
            .to_string();
        Self::new(name, media_type_for_path(path), bytes)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The contents as a reference-counted buffer; cloning does not copy.
    #[must_use]
    pub fn shared_bytes(&self) -> Bytes {
        self.bytes.clone()
    }

    /// Returns true if the declared media type begins with `image/`.
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.media_type.starts_with("image/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn media_type_detects_common_formats() {
        assert_eq!(media_type_for_path("photo.jpg"), "image/jpeg");
        assert_eq!(media_type_for_path("photo.JPEG"), "image/jpeg");
        assert_eq!(media_type_for_path("screen.png"), "image/png");
        assert_eq!(media_type_for_path("vector.svg"), "image/svg+xml");
    }

    #[test]
    fn camera_and_newer_formats_are_images() {
        assert_eq!(media_type_for_path("IMG_0001.HEIC"), "image/heic");
        assert_eq!(media_type_for_path("burst.heif"), "image/heif");
        assert_eq!(media_type_for_path("scan.jfif"), "image/jpeg");
        assert_eq!(media_type_for_path("art.jxl"), "image/jxl");
        assert_eq!(media_type_for_path("loop.apng"), "image/apng");

        let file = ImageFile::from_path_and_bytes(Path::new("IMG_0001.heic"), vec![0]);
        assert!(file.is_image());
    }

    #[test]
    fn media_type_falls_back_to_octet_stream() {
        assert_eq!(media_type_for_path("notes.txt"), OCTET_STREAM);
        assert_eq!(media_type_for_path("README"), OCTET_STREAM);
        assert_eq!(media_type_for_path("clip.mp4"), OCTET_STREAM);
    }

    #[test]
    fn from_path_uses_file_name_and_extension() {
        let path = PathBuf::from("/tmp/shots/cat.webp");
        let file = ImageFile::from_path_and_bytes(&path, vec![1, 2, 3]);
        assert_eq!(file.name(), "cat.webp");
        assert_eq!(file.media_type(), "image/webp");
        assert_eq!(file.bytes(), &[1, 2, 3]);
        assert!(file.is_image());
    }

    #[test]
    fn shared_bytes_reuse_the_buffer() {
        let file = ImageFile::new("a.png", "image/png", vec![1, 2, 3]);
        let shared = file.shared_bytes();
        assert_eq!(shared.as_ptr(), file.bytes().as_ptr());
    }

    #[test]
    fn non_image_media_type_is_not_image() {
        let file = ImageFile::new("doc.pdf", "application/pdf", vec![0]);
        assert!(!file.is_image());
        // Prefix match only; "image" without slash does not count.
        let odd = ImageFile::new("x", "imagex/png", vec![0]);
        assert!(!odd.is_image());
    }

    #[test]
    fn dialog_extensions_cover_media_table() {
        let exts = image_extensions();
        assert!(exts.contains(&"png"));
        assert!(exts.contains(&"jpeg"));
        assert_eq!(exts.len(), IMAGE_MEDIA_TYPES.len());
    }
}
