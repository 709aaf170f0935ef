//! Celebface - Frontend Rust/Leptos Application
//!
//! A WebAssembly client that uploads a photo to the face classifier
//! service and shows who it recognized.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ClassifierPage (owns the AppState signal)                   │
//! │  ├── Hero (title, description)                              │
//! │  ├── SubjectGallery (known subjects)                        │
//! │  ├── UploadSection (drop zone, preview, classify)           │
//! │  └── ResultsPanel (empty / loading / error / results)       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (Subject, ClassificationResult, UiState, etc.)
//! - [`state`] - Application state and transitions
//! - [`components`] - UI components (Gallery, Upload, Results, etc.)
//! - [`services`] - Classifier communication and file reading

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Gallery
    Subject,
    // Upload
    SelectedImage,
    // Results
    ClassificationResult, TopMatch, FaceReport, Tier,
    // UI
    UiState,
    // Errors
    AppError, AppResult,
};

// State
pub use state::AppState;

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Celebrity Face Recognition"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=ClassifierPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn ClassifierPage() -> impl IntoView {
    // Single owner of all application state
    let state: RwSignal<AppState> = create_rw_signal(AppState::default());

    // A file dropped outside the drop zone must not navigate away
    _ = window_event_listener(ev::dragover, |ev| ev.prevent_default());
    _ = window_event_listener(ev::drop, |ev| ev.prevent_default());

    // Load the gallery ONCE at page startup
    spawn_local(async move {
        let subjects = load_subjects(API_URL).await;
        state.update(|s| s.set_subjects(subjects));
    });

    let subjects = Signal::derive(move || state.with(|s| s.subjects.clone()));

    view! {
        <div class="container">
            <Hero/>

            <SubjectGallery subjects=subjects/>

            <div class="workspace">
                <UploadSection state=state/>
                <ResultsPanel state=state/>
            </div>
        </div>

        <Footer/>
    }
}
