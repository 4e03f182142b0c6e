// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::port::Delivery;
use crate::domain::upload::ImageFile;
use crate::error::Error;
use crate::ui::uploader;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Uploader(uploader::Message),
    /// Result from the open file dialog.
    OpenFileDialogResult(Option<PathBuf>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// Result from reading a chosen or dropped file.
    FileLoaded(Result<ImageFile, Error>),
    /// Outcome of the webhook request started by the form.
    Delivered(Delivery),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional image path to preselect on startup.
    pub file_path: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_HOOK_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
