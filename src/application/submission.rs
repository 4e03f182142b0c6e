// SPDX-License-Identifier: MPL-2.0
//! Submission controller: the upload form state and its validate/send/reset
//! flow.
//!
//! The controller owns everything the form shows: the selected file and its
//! preview, the caption, the endpoint, a busy flag and the last result. A
//! submission goes Idle → Busy → Idle with exactly one outbound request in
//! between.
//!
//! The Iced update loop cannot hold `&mut self` across an await, so a
//! submission is split into [`SubmissionController::begin_submit`] (validate,
//! mark busy, build the request) and [`SubmissionController::finish_submit`]
//! (apply the outcome, clear busy). [`SubmissionController::submit`] chains
//! both around a transport for headless callers.

use crate::application::port::{Delivery, UploadRequest, WebhookTransport};
use crate::domain::upload::{ImageFile, Preview, SubmissionResult};

// =============================================================================
// SubmitError
// =============================================================================

/// Why a submission did not succeed. `Display` is the user-visible message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// File or endpoint missing at submit time.
    #[error("Please provide both image and webhook URL")]
    MissingInput,
    /// The webhook answered with a non-2xx status. The status is kept for
    /// logging only.
    #[error("Failed to send image. Check your webhook URL.")]
    Rejected { status: u16 },
    /// No response was obtained.
    #[error("Error sending image: {0}")]
    Transport(String),
}

/// Reason [`SubmissionController::begin_submit`] did not start a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refusal {
    /// A request is already in flight; nothing changed.
    Busy,
    /// File or endpoint missing; `last_result` now holds the failure.
    MissingInput,
}

// =============================================================================
// SubmissionController
// =============================================================================

/// Transient upload form state for one window.
#[derive(Debug, Clone, Default)]
pub struct SubmissionController {
    selected_file: Option<ImageFile>,
    preview: Option<Preview>,
    caption: String,
    endpoint: String,
    busy: bool,
    last_result: Option<SubmissionResult>,
}

impl SubmissionController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Offers a candidate file. Non-image media types are ignored and leave
    /// the form untouched. Returns whether the file was accepted.
    pub fn select_file(&mut self, file: ImageFile) -> bool {
        if !file.is_image() {
            tracing::debug!(
                name = file.name(),
                media_type = file.media_type(),
                "ignoring non-image file"
            );
            return false;
        }

        tracing::info!(
            name = file.name(),
            media_type = file.media_type(),
            size = file.bytes().len(),
            "image selected"
        );
        self.preview = Some(Preview::of(&file));
        self.selected_file = Some(file);
        self.last_result = None;
        true
    }

    pub fn set_caption(&mut self, caption: impl Into<String>) {
        self.caption = caption.into();
    }

    pub fn set_endpoint(&mut self, endpoint: impl Into<String>) {
        self.endpoint = endpoint.into();
    }

    #[must_use]
    pub fn selected_file(&self) -> Option<&ImageFile> {
        self.selected_file.as_ref()
    }

    /// Display-only view of the selected file. Present iff a file is.
    #[must_use]
    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    #[must_use]
    pub fn caption(&self) -> &str {
        &self.caption
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    #[must_use]
    pub fn last_result(&self) -> Option<&SubmissionResult> {
        self.last_result.as_ref()
    }

    /// Whether the submit trigger should be enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.busy && self.selected_file.is_some() && !self.endpoint.is_empty()
    }

    /// Validates preconditions and, if they hold, marks the form busy and
    /// returns the request to send.
    pub fn begin_submit(&mut self) -> Result<UploadRequest, Refusal> {
        if self.busy {
            tracing::debug!("submit ignored, upload already in flight");
            return Err(Refusal::Busy);
        }

        let file = match &self.selected_file {
            Some(file) if !self.endpoint.is_empty() => file.clone(),
            _ => {
                self.last_result = Some(SubmissionResult::Failure(
                    SubmitError::MissingInput.to_string(),
                ));
                return Err(Refusal::MissingInput);
            }
        };

        self.busy = true;
        self.last_result = None;

        let request = UploadRequest::new(self.endpoint.clone(), file, &self.caption);
        tracing::info!(
            host = %endpoint_host(request.endpoint()),
            parts = ?request.part_names(),
            "sending image to webhook"
        );
        Ok(request)
    }

    /// Applies the outcome of the request started by
    /// [`begin_submit`](Self::begin_submit) and clears the busy flag.
    pub fn finish_submit(&mut self, delivery: Delivery) {
        if !self.busy {
            tracing::warn!("delivery received with no upload in flight, ignoring");
            return;
        }

        let result = match delivery {
            Ok(status) if status.is_success() => {
                tracing::info!(status = status.code(), "webhook accepted upload");
                self.selected_file = None;
                self.preview = None;
                self.caption.clear();
                SubmissionResult::Success
            }
            Ok(status) => {
                let error = SubmitError::Rejected {
                    status: status.code(),
                };
                tracing::warn!(status = status.code(), "webhook rejected upload");
                SubmissionResult::Failure(error.to_string())
            }
            Err(err) => {
                tracing::warn!(error = %err, "webhook request failed");
                SubmissionResult::Failure(SubmitError::Transport(err.0).to_string())
            }
        };

        self.last_result = Some(result);
        self.busy = false;
    }

    /// Runs a full submission against `transport`.
    ///
    /// Returns `false` without touching the network when the submission was
    /// refused.
    pub async fn submit<T: WebhookTransport>(&mut self, transport: &T) -> bool {
        let request = match self.begin_submit() {
            Ok(request) => request,
            Err(_) => return false,
        };
        let delivery = transport.send(request).await;
        self.finish_submit(delivery);
        true
    }
}

/// Host part of an endpoint for logs; webhook paths often embed secrets.
fn endpoint_host(endpoint: &str) -> String {
    url::Url::parse(endpoint)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .unwrap_or_else(|| "<invalid url>".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::{ResponseStatus, TransportError, CONTENT_PART};
    use crate::test_utils::RecordingTransport;

    const ENDPOINT: &str = "https://discord.com/api/webhooks/1/abc";

    fn png() -> ImageFile {
        ImageFile::new("cat.png", "image/png", vec![0x89, b'P', b'N', b'G'])
    }

    fn ready_form() -> SubmissionController {
        let mut form = SubmissionController::new();
        assert!(form.select_file(png()));
        form.set_endpoint(ENDPOINT);
        form.set_caption("look at this");
        form
    }

    #[test]
    fn new_form_is_empty() {
        let form = SubmissionController::new();
        assert!(form.selected_file().is_none());
        assert!(form.preview().is_none());
        assert!(form.caption().is_empty());
        assert!(form.endpoint().is_empty());
        assert!(!form.is_busy());
        assert!(form.last_result().is_none());
        assert!(!form.can_submit());
    }

    #[test]
    fn non_image_file_is_ignored() {
        let mut form = SubmissionController::new();
        form.select_file(png());
        let before_preview = form.preview().cloned();

        let accepted = form.select_file(ImageFile::new("notes.txt", "text/plain", vec![1]));

        assert!(!accepted);
        assert_eq!(form.selected_file().map(ImageFile::name), Some("cat.png"));
        assert_eq!(form.preview().cloned(), before_preview);
    }

    #[test]
    fn selecting_image_sets_preview_and_clears_result() {
        let mut form = SubmissionController::new();
        form.begin_submit().unwrap_err();
        assert!(form.last_result().is_some());

        assert!(form.select_file(png()));

        let preview = form.preview().expect("preview set");
        assert_eq!(preview.media_type(), "image/png");
        assert_eq!(preview.bytes(), png().bytes());
        assert!(!preview.bytes().is_empty());
        assert!(form.last_result().is_none());
    }

    #[test]
    fn caption_and_endpoint_edits_keep_last_result() {
        let mut form = SubmissionController::new();
        form.begin_submit().unwrap_err();
        form.set_caption("x");
        form.set_endpoint("y");
        assert!(form.last_result().is_some());
    }

    #[test]
    fn submit_without_file_fails_precondition() {
        let mut form = SubmissionController::new();
        form.set_endpoint(ENDPOINT);

        assert_eq!(form.begin_submit(), Err(Refusal::MissingInput));
        assert_eq!(
            form.last_result(),
            Some(&SubmissionResult::Failure(
                "Please provide both image and webhook URL".into()
            ))
        );
        assert!(!form.is_busy());
    }

    #[test]
    fn submit_without_endpoint_fails_precondition() {
        let mut form = SubmissionController::new();
        form.select_file(png());

        assert_eq!(form.begin_submit(), Err(Refusal::MissingInput));
        assert_eq!(
            form.last_result().and_then(SubmissionResult::message),
            Some("Please provide both image and webhook URL")
        );
    }

    #[test]
    fn can_submit_tracks_inputs_and_busy() {
        let mut form = SubmissionController::new();
        assert!(!form.can_submit());
        form.select_file(png());
        assert!(!form.can_submit());
        form.set_endpoint(ENDPOINT);
        assert!(form.can_submit());
        form.begin_submit().expect("starts");
        assert!(!form.can_submit());
        form.finish_submit(Ok(ResponseStatus::new(500)));
        assert!(form.can_submit());
    }

    #[test]
    fn begin_submit_marks_busy_and_clears_result() {
        let mut form = ready_form();
        form.set_endpoint("");
        form.begin_submit().unwrap_err();
        form.set_endpoint(ENDPOINT);

        let request = form.begin_submit().expect("request built");

        assert!(form.is_busy());
        assert!(form.last_result().is_none());
        assert_eq!(request.endpoint(), ENDPOINT);
        assert_eq!(request.file().name(), "cat.png");
        assert_eq!(request.caption(), Some("look at this"));
    }

    #[test]
    fn second_submit_while_busy_is_a_no_op() {
        let mut form = ready_form();
        form.begin_submit().expect("first submit starts");

        assert_eq!(form.begin_submit(), Err(Refusal::Busy));
        assert!(form.is_busy());
        assert!(form.last_result().is_none());
    }

    #[test]
    fn success_resets_file_preview_and_caption() {
        let mut form = ready_form();
        form.begin_submit().expect("starts");

        form.finish_submit(Ok(ResponseStatus::new(204)));

        assert_eq!(form.last_result(), Some(&SubmissionResult::Success));
        assert!(form.selected_file().is_none());
        assert!(form.preview().is_none());
        assert!(form.caption().is_empty());
        assert_eq!(form.endpoint(), ENDPOINT);
        assert!(!form.is_busy());
    }

    #[test]
    fn rejection_keeps_inputs() {
        let mut form = ready_form();
        form.begin_submit().expect("starts");

        form.finish_submit(Ok(ResponseStatus::new(500)));

        assert_eq!(
            form.last_result(),
            Some(&SubmissionResult::Failure(
                "Failed to send image. Check your webhook URL.".into()
            ))
        );
        assert!(form.selected_file().is_some());
        assert!(form.preview().is_some());
        assert_eq!(form.caption(), "look at this");
        assert!(!form.is_busy());
    }

    #[test]
    fn transport_failure_includes_description() {
        let mut form = ready_form();
        form.begin_submit().expect("starts");

        form.finish_submit(Err(TransportError("dns error: failed to lookup".into())));

        assert_eq!(
            form.last_result().and_then(SubmissionResult::message),
            Some("Error sending image: dns error: failed to lookup")
        );
        assert!(form.selected_file().is_some());
        assert_eq!(form.caption(), "look at this");
        assert!(!form.is_busy());
    }

    #[test]
    fn stray_delivery_is_ignored() {
        let mut form = ready_form();
        form.finish_submit(Ok(ResponseStatus::new(200)));
        assert!(form.last_result().is_none());
        assert!(form.selected_file().is_some());
    }

    #[tokio::test]
    async fn submit_sends_once_and_applies_success() {
        let transport = RecordingTransport::replying(Ok(ResponseStatus::new(200)));
        let mut form = ready_form();

        assert!(form.submit(&transport).await);

        let sent = transport.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].part_names(), vec!["file", CONTENT_PART]);
        assert_eq!(form.last_result(), Some(&SubmissionResult::Success));
        assert!(!form.is_busy());
    }

    #[tokio::test]
    async fn submit_without_inputs_makes_no_call() {
        let transport = RecordingTransport::replying(Ok(ResponseStatus::new(200)));
        let mut form = SubmissionController::new();
        form.set_endpoint(ENDPOINT);

        assert!(!form.submit(&transport).await);
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn empty_caption_sends_only_file_part() {
        let transport = RecordingTransport::replying(Ok(ResponseStatus::new(200)));
        let mut form = ready_form();
        form.set_caption("");

        form.submit(&transport).await;

        assert_eq!(transport.requests()[0].part_names(), vec!["file"]);
    }

    #[test]
    fn endpoint_host_hides_path() {
        assert_eq!(endpoint_host(ENDPOINT), "discord.com");
        assert_eq!(endpoint_host("not a url"), "<invalid url>");
    }

    #[test]
    fn submit_error_messages_match_contract() {
        assert_eq!(
            SubmitError::MissingInput.to_string(),
            "Please provide both image and webhook URL"
        );
        assert_eq!(
            SubmitError::Rejected { status: 404 }.to_string(),
            "Failed to send image. Check your webhook URL."
        );
        assert_eq!(
            SubmitError::Transport("boom".into()).to_string(),
            "Error sending image: boom"
        );
    }
}
