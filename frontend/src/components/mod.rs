//! UI Components for the face classifier application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`SubjectGallery`] - Known subjects, loaded at startup
//! - [`UploadSection`] - Image picker with drag & drop, preview and classify
//! - [`ResultsPanel`] - Empty, loading, error and per-face result display

mod hero;
mod gallery;
mod upload;
mod results;
mod footer;

pub use hero::*;
pub use gallery::*;
pub use upload::*;
pub use results::*;
pub use footer::*;
