//! Classifier service communication and file handling.
//!
//! # Services
//!
//! - [`gallery`] - Known subjects from `/classes`, with a built-in fallback
//! - [`image`] - Upload validation and data URL reading
//! - [`classify`] - Image submission to `/classify_image`

pub mod gallery;
pub mod image;
pub mod classify;

pub use gallery::*;
pub use image::*;
pub use classify::*;
