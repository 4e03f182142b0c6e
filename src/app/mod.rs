// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the upload form.
//!
//! The `App` struct wires together the form, localization and preferences,
//! and translates form events into side effects: the native file dialog,
//! file reads, the webhook request and config persistence.

mod message;
pub mod paths;
mod persistence;
mod subscription;

pub use message::{Flags, Message};

use crate::application::port::WebhookTransport;
use crate::config;
use crate::i18n::fluent::I18n;
use crate::infrastructure::{file, ReqwestTransport};
use crate::ui::theming::ThemeMode;
use crate::ui::uploader;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    uploader: uploader::State,
    transport: ReqwestTransport,
    /// i18n key of the notice shown above the form, if any.
    notice_key: Option<String>,
    /// Localized text for `notice_key`, refreshed on language change.
    notice_text: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("busy", &self.uploader.controller().is_busy())
            .field("notice_key", &self.notice_key)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 820;
pub const WINDOW_DEFAULT_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 420;

/// Notice shown when a chosen or dropped file cannot be read.
const FILE_READ_ERROR_KEY: &str = "notice-file-read-error";

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            theme_mode: ThemeMode::System,
            uploader: uploader::State::new(),
            transport: ReqwestTransport::new(),
            notice_key: None,
            notice_text: None,
        }
    }
}

impl App {
    /// Initializes application state and optionally starts reading the image
    /// passed on the command line.
    ///
    /// `flags.config_dir` is registered for later saves and used for the
    /// initial load.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, config_warning) =
            config::load_with_override(flags.config_dir.as_ref().map(PathBuf::from));
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            ..Self::default()
        };
        app.set_notice(config_warning);

        let task = match flags.file_path {
            Some(path) => load_file_task(PathBuf::from(path)),
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        match self.uploader.controller().selected_file() {
            Some(file) => self
                .i18n
                .tr_with_args("window-title-with-file", &[("name", file.name())]),
            None => self.i18n.tr("window-title"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Uploader(message) => {
                let event = self.uploader.update(message);
                self.handle_uploader_event(event)
            }
            Message::OpenFileDialogResult(Some(path)) | Message::FileDropped(path) => {
                load_file_task(path)
            }
            Message::OpenFileDialogResult(None) => Task::none(),
            Message::FileLoaded(Ok(file)) => {
                let accepted = self.uploader.accept_file(file);
                if accepted && self.notice_key.as_deref() == Some(FILE_READ_ERROR_KEY) {
                    self.set_notice(None);
                }
                Task::none()
            }
            Message::FileLoaded(Err(error)) => {
                tracing::warn!(%error, "failed to read image file");
                self.set_notice(Some(FILE_READ_ERROR_KEY.to_string()));
                Task::none()
            }
            Message::Delivered(delivery) => {
                self.uploader.finish(delivery);
                Task::none()
            }
        }
    }

    fn handle_uploader_event(&mut self, event: uploader::Event) -> Task<Message> {
        match event {
            uploader::Event::None => Task::none(),
            uploader::Event::OpenFileDialog => {
                let title = self.i18n.tr("dialog-title");
                let filter_label = self.i18n.tr("dialog-filter-images");
                Task::perform(
                    file::pick_image(title, filter_label),
                    Message::OpenFileDialogResult,
                )
            }
            uploader::Event::Submit(request) => {
                let transport = self.transport.clone();
                Task::perform(
                    async move { transport.send(request).await },
                    Message::Delivered,
                )
            }
            uploader::Event::ThemeChanged(mode) => {
                self.theme_mode = mode;
                persistence::persist_preferences(mode, self.i18n.current_locale());
                Task::none()
            }
            uploader::Event::LanguageChanged(locale) => {
                persistence::apply_language_change(&mut self.i18n, self.theme_mode, locale);
                self.refresh_notice();
                Task::none()
            }
            uploader::Event::DismissNotice => {
                self.set_notice(None);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        uploader::view(
            &self.uploader,
            uploader::ViewContext {
                i18n: &self.i18n,
                theme_mode: self.theme_mode,
                notice: self.notice_text.as_deref(),
            },
        )
        .map(Message::Uploader)
    }

    fn set_notice(&mut self, key: Option<String>) {
        self.notice_key = key;
        self.refresh_notice();
    }

    fn refresh_notice(&mut self) {
        self.notice_text = self.notice_key.as_deref().map(|key| self.i18n.tr(key));
    }
}

fn load_file_task(path: PathBuf) -> Task<Message> {
    Task::perform(file::read_image_file(path), Message::FileLoaded)
}
