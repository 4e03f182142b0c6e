// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) implemented by the infrastructure layer.
//!
//! - [`webhook`]: [`WebhookTransport`] for delivering uploads

pub mod webhook;

pub use webhook::{
    Delivery, ResponseStatus, TransportError, UploadRequest, WebhookTransport, CONTENT_PART,
    FILE_PART,
};
