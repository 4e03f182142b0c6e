// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Elm-style "state down, messages up": the [`uploader`] form keeps its own
//! state and reports [`uploader::Event`]s that the application turns into
//! side effects (dialogs, HTTP, persistence).
//!
//! - [`uploader`] - The webhook upload form
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod styles;
pub mod theming;
pub mod uploader;
