//! Main application component
//!
//! A minimal host page for the projects section. A full portfolio composes
//! `ProjectsSection` into its own layout and links to it by anchor.

use leptos::prelude::*;

use crate::components::ProjectsSection;
use crate::config::SectionConfig;

/// Root component mounted by Trunk
#[component]
pub fn App() -> impl IntoView {
    let config = SectionConfig::default();
    let anchor = config.anchor_href();

    view! {
        <div class="app-container">
            <header class="app-header">
                <nav class="app-nav">
                    <a href=anchor>{config.heading.clone()}</a>
                </nav>
            </header>
            <main class="app-main">
                <ProjectsSection config=config />
            </main>
        </div>
    }
}
