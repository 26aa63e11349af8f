//! Tag badges

use leptos::prelude::*;

use crate::models::Surface;

/// One badge per tag, in the order given
#[component]
pub fn TagList(
    tags: Vec<String>,
    surface: Surface,
    #[prop(into)] class: String,
) -> impl IntoView {
    let badge_class = surface.badge_class();

    view! {
        <div class=class>
            {tags
                .into_iter()
                .map(|tag| view! { <span class=badge_class>{tag}</span> })
                .collect::<Vec<_>>()}
        </div>
    }
}
