// SPDX-License-Identifier: MPL-2.0
//! File intake: the native open dialog and async reads from disk.

use crate::domain::upload::{image_extensions, ImageFile};
use crate::error::Result;
use std::path::PathBuf;

/// Opens the native file dialog filtered to image extensions.
///
/// Resolves to `None` when the user cancels.
pub async fn pick_image(title: String, filter_label: String) -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title(&title)
        .add_filter(&filter_label, &image_extensions())
        .pick_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

/// Reads a file and wraps it with its name and declared media type.
///
/// The media type is not checked here; the submission controller decides
/// whether to accept the file.
pub async fn read_image_file(path: PathBuf) -> Result<ImageFile> {
    let bytes = tokio::fs::read(&path).await?;
    Ok(ImageFile::from_path_and_bytes(&path, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[tokio::test]
    async fn read_image_file_keeps_name_and_type() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("shot.JPG");
        std::fs::write(&path, [0xff, 0xd8, 0xff]).expect("write image");

        let file = read_image_file(path).await.expect("read");

        assert_eq!(file.name(), "shot.JPG");
        assert_eq!(file.media_type(), "image/jpeg");
        assert_eq!(file.bytes(), &[0xff, 0xd8, 0xff]);
    }

    #[tokio::test]
    async fn read_non_image_still_returns_file() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "hello").expect("write text");

        let file = read_image_file(path).await.expect("read");

        assert!(!file.is_image());
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let dir = tempdir().expect("temp dir");
        let result = read_image_file(dir.path().join("nope.png")).await;
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
