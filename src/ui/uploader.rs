// SPDX-License-Identifier: MPL-2.0
//! Upload form: endpoint, caption, image picker, preview and submit button.
//!
//! The form state wraps a [`SubmissionController`]; everything that leaves
//! the process (file dialog, HTTP request, settings) is reported to the
//! parent as an [`Event`].

use crate::application::port::{Delivery, UploadRequest};
use crate::application::submission::SubmissionController;
use crate::domain::upload::{ImageFile, SubmissionResult};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{
        button, container, image, pick_list, scrollable, text, text_input, Column, Row, Space,
        Text,
    },
    Element, Length,
};
use unic_langid::LanguageIdentifier;

/// Form state. The image handle is built from the controller's preview
/// when a file is accepted, so the widget decodes once per selection.
#[derive(Debug, Clone, Default)]
pub struct State {
    controller: SubmissionController,
    preview_handle: Option<image::Handle>,
}

/// Contextual data needed to render the form.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
    /// Already-localized notice shown above the form.
    pub notice: Option<&'a str>,
}

#[derive(Debug, Clone)]
pub enum Message {
    EndpointChanged(String),
    CaptionChanged(String),
    OpenFileDialog,
    SubmitPressed,
    ThemeSelected(ThemeMode),
    LanguageSelected(LanguageIdentifier),
    DismissNotice,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    OpenFileDialog,
    Submit(UploadRequest),
    ThemeChanged(ThemeMode),
    LanguageChanged(LanguageIdentifier),
    DismissNotice,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn controller(&self) -> &SubmissionController {
        &self.controller
    }

    #[must_use]
    pub fn has_preview(&self) -> bool {
        self.preview_handle.is_some()
    }

    /// Offers a freshly read file to the form. Returns whether it was
    /// accepted.
    pub fn accept_file(&mut self, file: ImageFile) -> bool {
        let accepted = self.controller.select_file(file);
        if accepted {
            self.preview_handle = self
                .controller
                .preview()
                .map(|preview| image::Handle::from_bytes(preview.shared_bytes()));
        }
        accepted
    }

    /// Applies the outcome of an in-flight submission.
    pub fn finish(&mut self, delivery: Delivery) {
        self.controller.finish_submit(delivery);
        if self.controller.preview().is_none() {
            self.preview_handle = None;
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::EndpointChanged(value) => {
                self.controller.set_endpoint(value);
                Event::None
            }
            Message::CaptionChanged(value) => {
                self.controller.set_caption(value);
                Event::None
            }
            Message::OpenFileDialog => Event::OpenFileDialog,
            Message::SubmitPressed => match self.controller.begin_submit() {
                Ok(request) => Event::Submit(request),
                Err(_) => Event::None,
            },
            Message::ThemeSelected(mode) => Event::ThemeChanged(mode),
            Message::LanguageSelected(locale) => Event::LanguageChanged(locale),
            Message::DismissNotice => Event::DismissNotice,
        }
    }
}

/// Wrapper for ThemeMode to implement Display for pick_list.
#[derive(Debug, Clone, PartialEq)]
struct ThemeChoice {
    mode: ThemeMode,
    label: String,
}

impl std::fmt::Display for ThemeChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label)
    }
}

#[derive(Debug, Clone, PartialEq)]
struct LanguageChoice {
    locale: LanguageIdentifier,
    label: String,
}

impl std::fmt::Display for LanguageChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label)
    }
}

/// Render the upload form.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let controller = &state.controller;

    let mut card = Column::new()
        .spacing(spacing::LG)
        .width(Length::Fill)
        .push(build_header(&ctx));

    if let Some(notice) = ctx.notice {
        card = card.push(build_notice(ctx.i18n, notice));
    }

    card = card
        .push(build_field(
            ctx.i18n.tr("endpoint-label"),
            text_input(&ctx.i18n.tr("endpoint-placeholder"), controller.endpoint())
                .on_input(Message::EndpointChanged)
                .on_submit(Message::SubmitPressed)
                .padding(spacing::SM)
                .size(typography::BODY_LG)
                .into(),
        ))
        .push(build_field(
            ctx.i18n.tr("caption-label"),
            text_input(&ctx.i18n.tr("caption-placeholder"), controller.caption())
                .on_input(Message::CaptionChanged)
                .padding(spacing::SM)
                .size(typography::BODY_LG)
                .into(),
        ))
        .push(build_field(
            ctx.i18n.tr("upload-label"),
            build_upload_area(state, ctx.i18n),
        ));

    if let Some(handle) = &state.preview_handle {
        card = card.push(build_preview(ctx.i18n, handle));
    }

    card = card.push(build_submit_button(state, ctx.i18n));

    if let Some(result) = controller.last_result() {
        card = card.push(build_alert(ctx.i18n, result));
    }

    let card = container(card)
        .padding(spacing::XL)
        .max_width(sizing::CARD_MAX_WIDTH)
        .style(styles::container::card);

    scrollable(
        container(card)
            .width(Length::Fill)
            .padding(spacing::LG)
            .align_x(Horizontal::Center),
    )
    .into()
}

fn build_header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let theme_options: Vec<ThemeChoice> = ThemeMode::ALL
        .iter()
        .map(|&mode| ThemeChoice {
            mode,
            label: i18n.tr(mode.i18n_key()),
        })
        .collect();
    let selected_theme = theme_options
        .iter()
        .find(|choice| choice.mode == ctx.theme_mode)
        .cloned();
    let theme_picker = pick_list(theme_options, selected_theme, |choice| {
        Message::ThemeSelected(choice.mode)
    })
    .placeholder(i18n.tr("theme-label"))
    .text_size(typography::CAPTION)
    .padding(spacing::XXS);

    let language_options: Vec<LanguageChoice> = i18n
        .available_locales()
        .iter()
        .map(|locale| LanguageChoice {
            locale: locale.clone(),
            label: i18n.tr(&format!("language-name-{locale}")),
        })
        .collect();
    let selected_language = language_options
        .iter()
        .find(|choice| &choice.locale == i18n.current_locale())
        .cloned();
    let language_picker = pick_list(language_options, selected_language, |choice| {
        Message::LanguageSelected(choice.locale)
    })
    .placeholder(i18n.tr("language-label"))
    .text_size(typography::CAPTION)
    .padding(spacing::XXS);

    let pickers = Row::new()
        .spacing(spacing::XS)
        .push(Space::new().width(Length::Fill))
        .push(theme_picker)
        .push(language_picker);

    let title = Text::new(i18n.tr("uploader-title")).size(typography::TITLE_LG);
    let subtitle = Text::new(i18n.tr("uploader-subtitle")).size(typography::BODY);

    Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(pickers)
        .push(title)
        .push(subtitle)
        .into()
}

fn build_notice<'a>(i18n: &I18n, notice: &'a str) -> Element<'a, Message> {
    let dismiss = button(text(i18n.tr("notice-dismiss")).size(typography::CAPTION))
        .style(styles::button::link)
        .on_press(Message::DismissNotice);

    container(
        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(Text::new(notice).size(typography::BODY).width(Length::Fill))
            .push(dismiss),
    )
    .padding(spacing::SM)
    .width(Length::Fill)
    .style(styles::container::notice)
    .into()
}

fn build_field<'a>(label: String, input: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(label).size(typography::BODY))
        .push(input)
        .into()
}

fn build_upload_area<'a>(state: &'a State, i18n: &I18n) -> Element<'a, Message> {
    let headline = match state.controller.selected_file() {
        Some(file) => i18n.tr_with_args("upload-selected-file", &[("name", file.name())]),
        None => i18n.tr("upload-placeholder"),
    };

    let content = Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(Text::new(headline).size(typography::BODY_LG))
        .push(Text::new(i18n.tr("upload-drop-hint")).size(typography::CAPTION));

    let trigger = button(
        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::button::upload_area)
    .on_press(Message::OpenFileDialog);

    container(trigger)
        .width(Length::Fill)
        .height(sizing::UPLOAD_AREA_HEIGHT)
        .style(styles::container::upload_area)
        .into()
}

fn build_preview<'a>(i18n: &I18n, handle: &image::Handle) -> Element<'a, Message> {
    let picture = image(handle.clone())
        .width(Length::Fill)
        .height(sizing::PREVIEW_MAX_HEIGHT);

    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(i18n.tr("preview-label")).size(typography::BODY))
        .push(
            container(picture)
                .padding(spacing::XXS)
                .width(Length::Fill)
                .style(styles::container::preview_frame),
        )
        .into()
}

fn build_submit_button<'a>(state: &'a State, i18n: &I18n) -> Element<'a, Message> {
    let controller = &state.controller;
    let label = if controller.is_busy() {
        i18n.tr("submit-button-busy")
    } else {
        i18n.tr("submit-button")
    };

    button(
        container(Text::new(label).size(typography::BODY_LG))
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .height(sizing::BUTTON_HEIGHT)
    .padding(spacing::SM)
    .style(styles::button::submit)
    .on_press_maybe(controller.can_submit().then_some(Message::SubmitPressed))
    .into()
}

fn build_alert<'a>(i18n: &I18n, result: &SubmissionResult) -> Element<'a, Message> {
    let (message, style): (String, fn(&iced::Theme) -> container::Style) = match result {
        SubmissionResult::Success => (i18n.tr("submit-success"), styles::container::alert_success),
        SubmissionResult::Failure(message) => (message.clone(), styles::container::alert_error),
    };

    container(Text::new(message).size(typography::BODY))
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(style)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::{ResponseStatus, TransportError};
    use crate::config::Config;

    const ENDPOINT: &str = "https://discord.com/api/webhooks/1/abc";

    fn png() -> ImageFile {
        ImageFile::new("cat.png", "image/png", vec![1, 2, 3])
    }

    fn ready_state() -> State {
        let mut state = State::new();
        state.update(Message::EndpointChanged(ENDPOINT.into()));
        assert!(state.accept_file(png()));
        state
    }

    fn i18n() -> I18n {
        I18n::new(Some("en-US".into()), &Config::default())
    }

    #[test]
    fn accepted_file_gets_a_preview() {
        let mut state = State::new();
        assert!(state.accept_file(png()));
        assert!(state.has_preview());
        assert_eq!(
            state.controller().selected_file().map(ImageFile::name),
            Some("cat.png")
        );
    }

    fn assert_preview_in_sync(state: &State) {
        assert_eq!(state.has_preview(), state.controller().preview().is_some());
    }

    #[test]
    fn displayed_preview_follows_controller_preview() {
        let mut state = State::new();
        assert_preview_in_sync(&state);

        state.update(Message::EndpointChanged(ENDPOINT.into()));
        state.accept_file(png());
        assert!(state.has_preview());
        assert_preview_in_sync(&state);

        state.accept_file(ImageFile::new("notes.txt", "text/plain", vec![1]));
        assert_preview_in_sync(&state);

        let _ = state.update(Message::SubmitPressed);
        state.finish(Ok(ResponseStatus::new(500)));
        assert!(state.has_preview());
        assert_preview_in_sync(&state);

        let _ = state.update(Message::SubmitPressed);
        state.finish(Ok(ResponseStatus::new(200)));
        assert!(!state.has_preview());
        assert_preview_in_sync(&state);
    }

    #[test]
    fn rejected_file_keeps_previous_selection() {
        let mut state = ready_state();
        let before = state.preview_handle.as_ref().map(image::Handle::id);
        let pdf = ImageFile::new("doc.pdf", "application/pdf", vec![0]);

        assert!(before.is_some());
        assert!(!state.accept_file(pdf));
        assert_eq!(state.preview_handle.as_ref().map(image::Handle::id), before);
        assert_eq!(
            state.controller().selected_file().map(ImageFile::name),
            Some("cat.png")
        );
    }

    #[test]
    fn submit_pressed_emits_request_when_ready() {
        let mut state = ready_state();
        state.update(Message::CaptionChanged("hello".into()));

        match state.update(Message::SubmitPressed) {
            Event::Submit(request) => {
                assert_eq!(request.endpoint(), ENDPOINT);
                assert_eq!(request.caption(), Some("hello"));
            }
            other => panic!("expected submit event, got {other:?}"),
        }
        assert!(state.controller().is_busy());
    }

    #[test]
    fn submit_pressed_while_busy_is_ignored() {
        let mut state = ready_state();
        let _ = state.update(Message::SubmitPressed);

        assert!(matches!(state.update(Message::SubmitPressed), Event::None));
        assert!(state.controller().is_busy());
    }

    #[test]
    fn submit_pressed_without_file_reports_missing_input() {
        let mut state = State::new();
        state.update(Message::EndpointChanged(ENDPOINT.into()));

        assert!(matches!(state.update(Message::SubmitPressed), Event::None));
        assert_eq!(
            state.controller().last_result(),
            Some(&SubmissionResult::Failure(
                "Please provide both image and webhook URL".into()
            ))
        );
    }

    #[test]
    fn successful_delivery_clears_preview() {
        let mut state = ready_state();
        let _ = state.update(Message::SubmitPressed);

        state.finish(Ok(ResponseStatus::new(204)));

        assert!(!state.has_preview());
        assert_eq!(
            state.controller().last_result(),
            Some(&SubmissionResult::Success)
        );
    }

    #[test]
    fn failed_delivery_keeps_preview() {
        let mut state = ready_state();
        let _ = state.update(Message::SubmitPressed);

        state.finish(Err(TransportError("connection refused".into())));

        assert!(state.has_preview());
        assert!(!state.controller().is_busy());
    }

    #[test]
    fn pickers_and_dialog_become_events() {
        let mut state = State::new();
        assert!(matches!(
            state.update(Message::OpenFileDialog),
            Event::OpenFileDialog
        ));
        assert!(matches!(
            state.update(Message::ThemeSelected(ThemeMode::Dark)),
            Event::ThemeChanged(ThemeMode::Dark)
        ));
        let fr: LanguageIdentifier = "fr".parse().unwrap();
        assert!(matches!(
            state.update(Message::LanguageSelected(fr.clone())),
            Event::LanguageChanged(locale) if locale == fr
        ));
        assert!(matches!(
            state.update(Message::DismissNotice),
            Event::DismissNotice
        ));
    }

    #[test]
    fn view_renders_every_state() {
        let i18n = i18n();
        let mut state = ready_state();
        let _ = view(
            &state,
            ViewContext {
                i18n: &i18n,
                theme_mode: ThemeMode::Light,
                notice: Some("notice"),
            },
        );

        let _ = state.update(Message::SubmitPressed);
        let _ = view(
            &state,
            ViewContext {
                i18n: &i18n,
                theme_mode: ThemeMode::Dark,
                notice: None,
            },
        );

        state.finish(Ok(ResponseStatus::new(500)));
        let _ = view(
            &state,
            ViewContext {
                i18n: &i18n,
                theme_mode: ThemeMode::System,
                notice: None,
            },
        );
    }
}
