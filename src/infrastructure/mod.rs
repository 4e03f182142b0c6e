// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`, plus the system I/O the UI needs.
//!
//! # Available Adapters
//!
//! - [`http`]: Webhook delivery via `reqwest` (implements [`WebhookTransport`])
//! - [`file`]: Native file dialog and async file reads
//!
//! [`WebhookTransport`]: crate::application::port::WebhookTransport

pub mod file;
pub mod http;

pub use http::ReqwestTransport;
