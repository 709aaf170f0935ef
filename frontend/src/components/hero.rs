//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Celebrity Face Recognition"</h1>
            <p class="subtitle">
                "Upload a photo and find out which celebrities are in it. "
                "Every detected face gets its best guess and top 3 matches."
            </p>
        </div>
    }
}
