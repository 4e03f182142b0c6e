// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with no framework dependencies (only `bytes`
//! for shared file buffers).
//!
//! # Modules
//!
//! - [`upload`]: Upload types ([`ImageFile`](upload::ImageFile),
//!   [`SubmissionResult`](upload::SubmissionResult))

pub mod upload;
