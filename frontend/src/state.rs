//! Application state and its transitions.
//!
//! [`AppState`] is owned by the page (inside a single `RwSignal`) and is
//! the only place the selected image, the gallery and the display mode
//! live. Transitions never touch the DOM; components read the state and
//! render it.

use crate::services::image::{validate_image, ImageSource};
use crate::types::{AppError, AppResult, FaceReport, SelectedImage, Subject, UiState};

/// Everything the client knows during a page session.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState<F = web_sys::File> {
    /// `None` until the gallery load finishes
    pub subjects: Option<Vec<Subject>>,
    /// The single active upload
    pub selected: Option<SelectedImage<F>>,
    /// Data URL of the previewed image
    pub preview_url: Option<String>,
    pub ui: UiState,
    /// A classify request is outstanding; gates the trigger
    pub classifying: bool,
    pub show_clear_all: bool,
}

impl<F> Default for AppState<F> {
    fn default() -> Self {
        Self {
            subjects: None,
            selected: None,
            preview_url: None,
            ui: UiState::Empty,
            classifying: false,
            show_clear_all: false,
        }
    }
}

impl<F: ImageSource + Clone + PartialEq> AppState<F> {
    pub fn set_subjects(&mut self, subjects: Vec<Subject>) {
        self.subjects = Some(subjects);
    }

    /// Handle a file from the picker or a drop.
    ///
    /// Returns the file to read for preview when it was accepted. A missing
    /// file is a no-op; a rejected one shows an error and keeps whatever
    /// was selected before.
    pub fn accept_image(&mut self, file: Option<F>) -> Option<F> {
        let file = file?;

        match validate_image(file) {
            Ok(selected) => {
                log::info!(
                    "🖼️ Image selected ({}, {} bytes)",
                    selected.mime_type,
                    selected.size_bytes
                );
                let file = selected.file.clone();
                self.selected = Some(selected);
                self.preview_url = None;
                Some(file)
            }
            Err(e) => {
                log::warn!("{}", e);
                self.fail(e);
                None
            }
        }
    }

    /// The preview read of `file` finished.
    ///
    /// Ignored unless `file` is still the selected image, so a slow read
    /// never previews a file that was removed or replaced meanwhile.
    pub fn show_preview(&mut self, file: &F, data_url: String) {
        if self.selected.as_ref().map(|s| &s.file) != Some(file) {
            return;
        }
        self.preview_url = Some(data_url);
        self.ui = UiState::Previewing;
    }

    /// Switch to the error display. The selected image is kept.
    pub fn fail(&mut self, error: AppError) {
        self.ui = UiState::Error(error.message().to_string());
    }

    /// Enter the loading state and hand out the file to upload.
    ///
    /// Returns `None` when nothing is selected or a request is already
    /// outstanding.
    pub fn begin_classification(&mut self) -> Option<F> {
        if self.classifying {
            return None;
        }
        let file = self.selected.as_ref()?.file.clone();

        self.classifying = true;
        self.ui = UiState::Loading;
        Some(file)
    }

    /// Apply the outcome of a classify request and release the trigger.
    pub fn finish_classification(&mut self, outcome: AppResult<FaceReport>) {
        self.classifying = false;

        match outcome {
            Ok(report) => {
                log::info!("✅ {} face(s) classified", report.results.len());
                self.ui = UiState::Results(report);
                self.show_clear_all = true;
            }
            Err(e) => {
                log::error!("❌ Classification failed: {}", e);
                self.fail(e);
            }
        }
    }

    /// Drop the current image and go back to the drop target.
    pub fn remove_image(&mut self) {
        self.selected = None;
        self.preview_url = None;
        self.ui = UiState::Empty;
        self.show_clear_all = false;
    }

    /// Same as [`remove_image`](Self::remove_image), then re-asserts the
    /// empty display.
    pub fn clear_all(&mut self) {
        self.remove_image();
        self.ui = UiState::Empty;
    }

    pub fn has_image(&self) -> bool {
        self.selected.is_some()
    }

    /// Whether the classify button can fire.
    pub fn can_classify(&self) -> bool {
        self.selected.is_some() && !self.classifying
    }
}
