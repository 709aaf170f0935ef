//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Gallery Types** - Known subjects shown before any upload
//! - **Upload Types** - The single active image
//! - **Result Types** - Per-face predictions and display tiers
//! - **UI Types** - Mutually exclusive display modes
//! - **Error Types** - Frontend error handling

use std::fmt;

use crate::config::{
    CONFIDENCE_HIGH, CONFIDENCE_MEDIUM, PROBABILITY_HIGH, PROBABILITY_MEDIUM,
};

// =============================================================================
// Gallery Types
// =============================================================================

/// A person the classifier can recognize.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Subject {
    /// Slug derived from the name (`jane_doe`)
    pub id: String,
    /// Display name
    pub name: String,
    /// Portrait path relative to the page
    pub image_url: String,
}

impl Subject {
    /// Build a subject from a display name.
    ///
    /// Only the first space of the lowercased name becomes an underscore,
    /// and the portrait is named after the first word.
    pub fn from_name(name: &str) -> Self {
        let lower = name.to_lowercase();
        let first = lower.split(' ').next().unwrap_or_default();

        Self {
            id: lower.replacen(' ', "_", 1),
            name: name.to_string(),
            image_url: format!("./images/{}.jpg", first),
        }
    }
}

// =============================================================================
// Upload Types
// =============================================================================

/// The image the user picked, already validated.
///
/// Generic over the blob handle so the state machine can be driven
/// without a browser; in the app `F` is `web_sys::File`.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedImage<F> {
    pub file: F,
    pub mime_type: String,
    pub size_bytes: u64,
}

// =============================================================================
// Result Types
// =============================================================================

/// One of the three best candidates for a face.
#[derive(Clone, Debug, PartialEq)]
pub struct TopMatch {
    pub name: String,
    /// Percentage in `[0, 100]`
    pub probability_percent: f64,
}

impl TopMatch {
    pub fn tier(&self) -> Tier {
        Tier::for_probability(self.probability_percent)
    }
}

/// Prediction for a single detected face.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassificationResult {
    /// 1-based position in the server's result order
    pub face_index: usize,
    pub predicted_name: String,
    /// Percentage in `[0, 100]`
    pub confidence_percent: f64,
    pub top_matches: Vec<TopMatch>,
}

impl ClassificationResult {
    pub fn tier(&self) -> Tier {
        Tier::for_confidence(self.confidence_percent)
    }
}

/// Everything a successful classification produced.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceReport {
    /// Face count as reported by the service
    pub faces_detected: u32,
    pub results: Vec<ClassificationResult>,
}

/// Display-only bucketing of a percentage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    High,
    Medium,
    Low,
}

impl Tier {
    /// Tier of a prediction confidence (80 / 60 cut-offs).
    pub fn for_confidence(percent: f64) -> Self {
        Self::bucket(percent, CONFIDENCE_HIGH, CONFIDENCE_MEDIUM)
    }

    /// Tier of a top match probability (50 / 25 cut-offs).
    pub fn for_probability(percent: f64) -> Self {
        Self::bucket(percent, PROBABILITY_HIGH, PROBABILITY_MEDIUM)
    }

    fn bucket(percent: f64, high: f64, medium: f64) -> Self {
        if percent >= high {
            Tier::High
        } else if percent >= medium {
            Tier::Medium
        } else {
            Tier::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::High => "high",
            Tier::Medium => "medium",
            Tier::Low => "low",
        }
    }

    /// CSS class for the confidence badge.
    pub fn confidence_class(&self) -> &'static str {
        match self {
            Tier::High => "confidence-high",
            Tier::Medium => "confidence-medium",
            Tier::Low => "confidence-low",
        }
    }

    /// CSS class for a probability bar.
    pub fn bar_class(&self) -> &'static str {
        match self {
            Tier::High => "probability-bar-high",
            Tier::Medium => "probability-bar-medium",
            Tier::Low => "probability-bar-low",
        }
    }
}

// =============================================================================
// UI Types
// =============================================================================

/// What the results area currently shows. Exactly one at a time.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum UiState {
    /// Nothing selected yet
    #[default]
    Empty,
    /// An image is previewed and ready to classify
    Previewing,
    /// A classification request is in flight
    Loading,
    /// Predictions for every detected face
    Results(FaceReport),
    /// User-facing error text
    Error(String),
}

impl UiState {
    /// DOM id of the section this state makes visible.
    pub fn section_id(&self) -> &'static str {
        match self {
            UiState::Empty | UiState::Previewing => "emptyState",
            UiState::Loading => "loadingState",
            UiState::Results(_) => "resultsSection",
            UiState::Error(_) => "errorMessage",
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading)
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Each variant carries the exact text shown to the user.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Rejected upload (wrong type, too large).
    Validation(String),
    /// The browser could not read the file.
    FileRead(String),
    /// The classifier answered but reported a failure.
    Service(String),
    /// Transport failure or unreadable response.
    Network(String),
}

impl AppError {
    /// Text shown in the error panel.
    pub fn message(&self) -> &str {
        match self {
            AppError::Validation(msg)
            | AppError::FileRead(msg)
            | AppError::Service(msg)
            | AppError::Network(msg) => msg,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::FileRead(msg) => write!(f, "File read error: {}", msg),
            AppError::Service(msg) => write!(f, "Service error: {}", msg),
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_slug_replaces_first_space_only() {
        let subject = Subject::from_name("Jane Doe");
        assert_eq!(subject.id, "jane_doe");
        assert_eq!(subject.image_url, "./images/jane.jpg");

        let subject = Subject::from_name("Mary Jane Watson");
        assert_eq!(subject.id, "mary_jane watson");
        assert_eq!(subject.image_url, "./images/mary.jpg");
        assert_eq!(subject.name, "Mary Jane Watson");
    }

    #[test]
    fn single_word_subject() {
        let subject = Subject::from_name("Zendaya");
        assert_eq!(subject.id, "zendaya");
        assert_eq!(subject.image_url, "./images/zendaya.jpg");
    }

    #[test]
    fn confidence_tiers() {
        assert_eq!(Tier::for_confidence(80.0), Tier::High);
        assert_eq!(Tier::for_confidence(79.9), Tier::Medium);
        assert_eq!(Tier::for_confidence(60.0), Tier::Medium);
        assert_eq!(Tier::for_confidence(59.99), Tier::Low);
        assert_eq!(Tier::for_confidence(0.0).confidence_class(), "confidence-low");
    }

    #[test]
    fn probability_tiers() {
        assert_eq!(Tier::for_probability(50.0), Tier::High);
        assert_eq!(Tier::for_probability(49.0), Tier::Medium);
        assert_eq!(Tier::for_probability(25.0), Tier::Medium);
        assert_eq!(Tier::for_probability(24.5).bar_class(), "probability-bar-low");
    }

    #[test]
    fn error_message_is_unprefixed() {
        let err = AppError::Service("bad image".into());
        assert_eq!(err.message(), "bad image");
        assert_eq!(err.to_string(), "Service error: bad image");
    }
}
