//! Application configuration.
//!
//! Centralized configuration for the face classifier frontend.
//! Everything is compiled in: the client has no environment, no config
//! file and no persisted state.

/// Classifier service base URL.
///
/// Serves both the subject list and the classification endpoint.
pub const API_URL: &str = "https://celeb-face-rec-backend.onrender.com";

/// Path of the known-subjects endpoint (GET).
pub const CLASSES_PATH: &str = "/classes";

/// Path of the classification endpoint (POST, form encoded).
pub const CLASSIFY_PATH: &str = "/classify_image";

/// Form field carrying the image data URL.
pub const IMAGE_FIELD: &str = "image_data";

/// Maximum accepted image size (in bytes).
///
/// 10 MiB limit, checked before anything is read.
pub const MAX_IMAGE_SIZE: u64 = 10 * 1024 * 1024;

/// MIME prefix an upload must carry to be accepted.
pub const ACCEPTED_MIME_PREFIX: &str = "image/";

/// Avatar shown when a subject portrait fails to load.
pub const DEFAULT_AVATAR: &str = "./images/default-avatar.png";

/// Confidence (percent) at or above which a prediction is tagged "high".
pub const CONFIDENCE_HIGH: f64 = 80.0;
/// Confidence (percent) at or above which a prediction is tagged "medium".
pub const CONFIDENCE_MEDIUM: f64 = 60.0;

/// Probability (percent) at or above which a top match bar is "high".
pub const PROBABILITY_HIGH: f64 = 50.0;
/// Probability (percent) at or above which a top match bar is "medium".
pub const PROBABILITY_MEDIUM: f64 = 25.0;

// User-facing messages

pub const MSG_INVALID_TYPE: &str = "Please upload a valid image file (JPG, PNG, GIF)";
pub const MSG_TOO_LARGE: &str = "Image size must be less than 10MB";
pub const MSG_READ_FAILED: &str = "Failed to read image file";
pub const MSG_NO_FACES: &str = "No faces detected in the image";
pub const MSG_PROCESS_FAILED: &str = "Failed to process image";
pub const MSG_NETWORK: &str = "Network error. Please check your connection and try again.";
