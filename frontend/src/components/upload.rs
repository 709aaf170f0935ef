//! Image upload component with drag & drop support.
//!
//! Handles file selection, preview, and triggering classification.

use leptos::*;
use web_sys::{Event, FileList, HtmlInputElement};

use crate::services::{classify_image, read_as_data_url};
use crate::{AppState, API_URL};

#[component]
pub fn UploadSection(state: RwSignal<AppState>) -> impl IntoView {
    let file_input = create_node_ref::<html::Input>();
    let (dragging, set_dragging) = create_signal(false);

    // Clearing the image also clears the picker so the same file can be re-picked
    create_effect(move |_| {
        if !state.with(AppState::has_image) {
            if let Some(input) = file_input.get() {
                input.set_value("");
            }
        }
    });

    // Both the picker and a drop end up here
    let handle_files = move |files: Option<FileList>| {
        let file = files.and_then(|list| list.get(0));
        let Some(file) = state.try_update(|s| s.accept_image(file)).flatten() else {
            return;
        };

        spawn_local(async move {
            match read_as_data_url(&file).await {
                Ok(data_url) => state.update(|s| s.show_preview(&file, data_url)),
                Err(e) => {
                    log::error!("❌ Preview failed: {}", e);
                    state.update(|s| s.fail(e));
                }
            }
        });
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        handle_files(input.files());
    };

    let trigger_file_input = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_classify = move |_| {
        let Some(file) = state.try_update(|s| s.begin_classification()).flatten() else {
            return;
        };
        log::info!("🔍 Classifying {}...", file.name());

        spawn_local(async move {
            let outcome = classify_image(&file, API_URL).await;
            state.update(|s| s.finish_classification(outcome));
        });
    };

    let on_remove = move |_| {
        log::info!("🗑️ Image removed");
        state.update(|s| s.remove_image());
    };

    let has_preview = move || state.with(|s| s.preview_url.is_some());

    view! {
        <section class="upload-section">
            <div
                class="drop-zone"
                id="dropZone"
                class:hidden=has_preview
                class:dragover=move || dragging.get()
                on:click=trigger_file_input
                on:dragover=move |ev| {
                    ev.prevent_default();
                    set_dragging.set(true);
                }
                on:dragleave=move |_| set_dragging.set(false)
                on:drop=move |ev| {
                    ev.prevent_default();
                    set_dragging.set(false);
                    handle_files(ev.data_transfer().and_then(|dt| dt.files()));
                }
            >
                <div class="upload-icon">"📷"</div>
                <div class="upload-text">"Drop an image here"</div>
                <div class="upload-hint">"or click to browse (JPG, PNG, GIF, up to 10MB)"</div>
            </div>

            <input
                type="file"
                id="fileInput"
                accept="image/*"
                style="display:none"
                node_ref=file_input
                on:change=on_file_change
            />

            <div class="image-preview" id="imagePreview" class:hidden=move || !has_preview()>
                <img
                    id="previewImg"
                    alt="Selected image"
                    src=move || state.with(|s| s.preview_url.clone().unwrap_or_default())
                />
                <button class="btn btn-secondary" id="removeImage" on:click=on_remove>
                    "Remove"
                </button>
                <button
                    class="btn btn-primary"
                    id="classifyBtn"
                    on:click=on_classify
                    disabled=move || !state.with(AppState::can_classify)
                >
                    {move || if state.with(|s| s.classifying) { "Classifying..." } else { "Classify Image" }}
                </button>
            </div>
        </section>
    }
}
