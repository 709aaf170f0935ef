//! Grid of the subjects the classifier knows about.

use leptos::*;
use web_sys::HtmlImageElement;

use crate::{Subject, DEFAULT_AVATAR};

#[component]
pub fn SubjectGallery(subjects: Signal<Option<Vec<Subject>>>) -> impl IntoView {
    view! {
        <section class="celebrity-section">
            <h2 class="section-title">"Who can I recognize?"</h2>
            <div class="celebrity-grid" id="celebrityGrid">
                <For
                    each=move || subjects.get().unwrap_or_default()
                    key=|subject| subject.id.clone()
                    children=move |subject| view! { <SubjectCard subject=subject/> }
                />
            </div>
        </section>
    }
}

#[component]
fn SubjectCard(subject: Subject) -> impl IntoView {
    view! {
        <div class="celebrity-card" data-celebrity=subject.id.clone()>
            <div class="celebrity-avatar">
                <img
                    src=subject.image_url.clone()
                    alt=subject.name.clone()
                    on:error=move |ev| {
                        // Swap in the default avatar once; a missing default must not loop.
                        let img: HtmlImageElement = event_target(&ev);
                        if !img.src().ends_with(DEFAULT_AVATAR.trim_start_matches('.')) {
                            img.set_src(DEFAULT_AVATAR);
                        }
                    }
                />
            </div>
            <p class="celebrity-name">{subject.name}</p>
        </div>
    }
}
