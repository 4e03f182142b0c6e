// SPDX-License-Identifier: MPL-2.0
//! Webhook transport port definition.
//!
//! This module defines the [`WebhookTransport`] trait used by the submission
//! controller to deliver one multipart upload, plus the request and response
//! types that cross the boundary.
//!
//! # Design Notes
//!
//! - Only the status class of the response matters; bodies are never read
//! - No timeout and no retry at this layer
//! - Implementations must be cheap to clone into an async task

use crate::domain::upload::ImageFile;
use std::future::Future;

/// Name of the multipart part carrying the image bytes.
pub const FILE_PART: &str = "file";

/// Name of the multipart part carrying the caption text.
pub const CONTENT_PART: &str = "content";

// =============================================================================
// UploadRequest
// =============================================================================

/// One outbound upload: where to send it and which parts to include.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    endpoint: String,
    file: ImageFile,
    caption: Option<String>,
}

impl UploadRequest {
    /// Builds a request. An empty caption produces no `content` part.
    #[must_use]
    pub fn new(endpoint: impl Into<String>, file: ImageFile, caption: &str) -> Self {
        Self {
            endpoint: endpoint.into(),
            file,
            caption: (!caption.is_empty()).then(|| caption.to_string()),
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[must_use]
    pub fn file(&self) -> &ImageFile {
        &self.file
    }

    #[must_use]
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    /// Names of the multipart parts, in body order.
    #[must_use]
    pub fn part_names(&self) -> Vec<&'static str> {
        let mut names = vec![FILE_PART];
        if self.caption.is_some() {
            names.push(CONTENT_PART);
        }
        names
    }
}

// =============================================================================
// ResponseStatus / TransportError
// =============================================================================

/// HTTP status code returned by the webhook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseStatus(u16);

impl ResponseStatus {
    #[must_use]
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    #[must_use]
    pub const fn code(self) -> u16 {
        self.0
    }

    /// True for the 2xx class.
    #[must_use]
    pub const fn is_success(self) -> bool {
        self.0 >= 200 && self.0 < 300
    }
}

/// No response was obtained (DNS, connection, malformed URL, TLS...).
///
/// Carries the underlying failure's description.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// What a transport returns for one send.
pub type Delivery = Result<ResponseStatus, TransportError>;

// =============================================================================
// WebhookTransport
// =============================================================================

/// Delivers an [`UploadRequest`] as a single `multipart/form-data` POST.
pub trait WebhookTransport: Send + Sync {
    /// Sends the request and resolves once a response status or a transport
    /// failure is known.
    fn send(&self, request: UploadRequest) -> impl Future<Output = Delivery> + Send;
}
