//! Results area: empty, loading, error or one card per detected face.

use leptos::*;

use crate::{AppState, ClassificationResult, TopMatch, UiState};

#[component]
pub fn ResultsPanel(state: RwSignal<AppState>) -> impl IntoView {
    let ui = create_memo(move |_| state.with(|s| s.ui.clone()));

    let on_clear_all = move |_| {
        log::info!("🧹 Clearing everything");
        state.update(|s| s.clear_all());
    };

    view! {
        <section class="results-panel">
            {move || match ui.get() {
                UiState::Empty => view! {
                    <div class="empty-state" id="emptyState">
                        <div class="empty-icon">"🎭"</div>
                        <p>"Upload a photo to find out who is in it"</p>
                    </div>
                }.into_view(),
                UiState::Previewing => view! {
                    <div class="empty-state" id="emptyState">
                        <div class="empty-icon">"🎭"</div>
                        <p>"Image ready. Press Classify to identify the faces"</p>
                    </div>
                }.into_view(),
                UiState::Loading => view! {
                    <div class="loading-state" id="loadingState">
                        <div class="spinner"></div>
                        <p>"Analyzing faces..."</p>
                    </div>
                }.into_view(),
                UiState::Error(message) => view! {
                    <div class="error-message" id="errorMessage">
                        <span class="error-icon">"⚠️"</span>
                        <p id="errorText">{message}</p>
                    </div>
                }.into_view(),
                UiState::Results(report) => {
                    let total = report.faces_detected;
                    view! {
                        <div class="results-section" id="resultsSection">
                            {report
                                .results
                                .into_iter()
                                .map(|result| view! { <ResultCard result=result total_faces=total/> })
                                .collect_view()}
                        </div>
                    }.into_view()
                }
            }}

            <button
                class="btn btn-secondary"
                id="clearAllBtn"
                class:hidden=move || !state.with(|s| s.show_clear_all)
                on:click=on_clear_all
            >
                "Clear All"
            </button>
        </section>
    }
}

/// Card for a single face.
#[component]
pub fn ResultCard(result: ClassificationResult, total_faces: u32) -> impl IntoView {
    let badge_class = format!("confidence-badge {}", result.tier().confidence_class());

    view! {
        <div class="result-card glass-effect">
            <div class="result-header">
                <h3 class="result-title">
                    <span class="face-indicator">{result.face_index}</span>
                    {format!("Face {} of {}", result.face_index, total_faces)}
                </h3>
                <span class=badge_class>
                    {format!("{}% confident", result.confidence_percent)}
                </span>
            </div>

            <div class="predicted-celebrity">
                <p class="predicted-label">"Identified as:"</p>
                <p class="predicted-name">{result.predicted_name}</p>
            </div>

            <div class="probability-section">
                <p class="probability-title">"Top Matches:"</p>
                <div class="probability-list">
                    {result
                        .top_matches
                        .into_iter()
                        .map(|top| view! { <ProbabilityBar top=top/> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

/// One top match with a bar as wide as its probability.
#[component]
pub fn ProbabilityBar(top: TopMatch) -> impl IntoView {
    let bar_class = format!("probability-bar {}", top.tier().bar_class());
    let width = format!("width: {}%", top.probability_percent);

    view! {
        <div class="probability-item">
            <span class="probability-name">{top.name}</span>
            <div class="probability-bar-container">
                <div class=bar_class style=width></div>
                <span class="probability-value">{format!("{}%", top.probability_percent)}</span>
            </div>
        </div>
    }
}
