// SPDX-License-Identifier: MPL-2.0
//! Upload domain types.
//!
//! Plain data for the files a user picks, their preview, and the annotation
//! a submission attempt leaves on the form. No transport or presentation
//! dependencies.

pub mod image_file;
pub mod outcome;
pub mod preview;

pub use image_file::{image_extensions, media_type_for_path, ImageFile, OCTET_STREAM};
pub use outcome::SubmissionResult;
pub use preview::Preview;
