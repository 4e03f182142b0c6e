// SPDX-License-Identifier: MPL-2.0
//! `iced_hook` sends an image, with an optional caption, to a chat webhook
//! from a small Iced window.
//!
//! The form logic lives in [`application::submission`] and talks to the
//! network through the [`application::port::WebhookTransport`] port; the
//! `reqwest` adapter is in [`infrastructure`].

#![doc(html_root_url = "https://docs.rs/iced_hook/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;

#[cfg(test)]
mod test_utils;
