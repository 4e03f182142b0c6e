// SPDX-License-Identifier: MPL-2.0
//! `reqwest` adapter for the [`WebhookTransport`] port.
//!
//! Sends one `multipart/form-data` POST per request. Redirects follow the
//! client default; no timeout is set and the response body is never read.

use crate::application::port::{
    Delivery, ResponseStatus, TransportError, UploadRequest, WebhookTransport, CONTENT_PART,
    FILE_PART,
};
use reqwest::multipart::{Form, Part};

/// User agent sent with every upload.
pub const USER_AGENT: &str = concat!("IcedHook/", env!("CARGO_PKG_VERSION"));

/// Webhook transport backed by `reqwest`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport;

impl ReqwestTransport {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl WebhookTransport for ReqwestTransport {
    async fn send(&self, request: UploadRequest) -> Delivery {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(describe)?;

        let form = build_form(&request).map_err(describe)?;

        let response = client
            .post(request.endpoint())
            .multipart(form)
            .send()
            .await
            .map_err(describe)?;

        Ok(ResponseStatus::new(response.status().as_u16()))
    }
}

/// Builds the multipart body: a `file` part, then `content` when a caption
/// is present.
pub fn build_form(request: &UploadRequest) -> Result<Form, reqwest::Error> {
    let file = request.file();
    let length = file.bytes().len() as u64;
    let file_part = Part::stream_with_length(file.shared_bytes(), length)
        .file_name(file.name().to_string())
        .mime_str(file.media_type())?;

    let mut form = Form::new().part(FILE_PART, file_part);
    if let Some(caption) = request.caption() {
        form = form.text(CONTENT_PART, caption.to_string());
    }
    Ok(form)
}

/// Flattens a `reqwest` error and its causes into one line.
///
/// The URL is stripped since webhook URLs carry their token in the path.
fn describe(err: reqwest::Error) -> TransportError {
    let err = err.without_url();
    let mut description = err.to_string();
    let mut source = std::error::Error::source(&err);
    while let Some(cause) = source {
        description.push_str(": ");
        description.push_str(&cause.to_string());
        source = cause.source();
    }
    TransportError(description)
}
