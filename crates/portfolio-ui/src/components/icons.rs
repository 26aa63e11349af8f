//! Inline SVG icons for action buttons

use leptos::prelude::*;

use crate::models::LinkKind;

/// Box-with-arrow icon for demo links
#[component]
pub fn ExternalLinkIcon() -> impl IntoView {
    view! {
        <svg
            class="mr-2 h-4 w-4"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d="M15 3h6v6" />
            <path d="M10 14 21 3" />
            <path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6" />
        </svg>
    }
}

/// GitHub mark for repository links
#[component]
pub fn GithubIcon() -> impl IntoView {
    view! {
        <svg
            class="mr-2 h-4 w-4"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4" />
            <path d="M9 18c-4.51 2-5-2-7-2" />
        </svg>
    }
}

/// Icon matching the link destination
#[component]
pub fn LinkIcon(kind: LinkKind) -> impl IntoView {
    match kind {
        LinkKind::Demo => view! { <ExternalLinkIcon /> }.into_any(),
        LinkKind::Repository => view! { <GithubIcon /> }.into_any(),
    }
}
