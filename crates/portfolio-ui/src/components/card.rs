//! Card for the "other projects" grid

use leptos::prelude::*;

use super::action::ActionLinks;
use super::badge::TagList;
use super::image::ProjectImage;
use crate::animation::{RevealPhase, item_style};
use crate::config::RevealConfig;
use crate::models::{Project, Surface};

/// Longest card description before it is cut
pub const CARD_SUMMARY_CHARS: usize = 160;

/// Compact card; links only show in the overlay while hovered
#[component]
pub fn ProjectCard(
    project: Project,
    index: usize,
    phase: ReadSignal<RevealPhase>,
    reveal: RevealConfig,
    #[prop(into)] placeholder: String,
) -> impl IntoView {
    let src = project.image_src(&placeholder).to_string();
    let summary = project.summary(CARD_SUMMARY_CHARS).into_owned();
    let links = project.action_links();

    view! {
        <div class="project-card" style=move || item_style(phase.get(), index, &reveal)>
            <div class="group relative bg-background rounded-xl overflow-hidden shadow-lg hover:shadow-xl transition-all duration-300 h-full flex flex-col">
                <div class="relative h-48 overflow-hidden">
                    <ProjectImage
                        src=src
                        alt=project.title.clone()
                        class="object-cover transition-transform duration-500 group-hover:scale-105"
                    />
                    <ActionLinks
                        links=links
                        surface=Surface::Card
                        class="absolute inset-0 bg-black/60 opacity-0 group-hover:opacity-100 transition-opacity duration-300 flex items-center justify-center gap-4"
                    />
                </div>
                <div class="p-6 flex-1 flex flex-col">
                    <h4 class="text-xl font-bold mb-2">{project.title.clone()}</h4>
                    <p class="text-muted-foreground text-sm mb-4 flex-1" title=project.description.clone()>
                        {summary}
                    </p>
                    <TagList tags=project.tags.clone() surface=Surface::Card class="flex flex-wrap gap-2" />
                </div>
            </div>
        </div>
    }
}
