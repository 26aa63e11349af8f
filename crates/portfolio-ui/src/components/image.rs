//! Project screenshot

use leptos::prelude::*;

/// Screenshot filling its positioned parent
#[component]
pub fn ProjectImage(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(into)] class: String,
) -> impl IntoView {
    view! {
        <img
            src=src
            alt=alt
            class=format!("absolute inset-0 h-full w-full {class}")
            loading="lazy"
            decoding="async"
        />
    }
}
