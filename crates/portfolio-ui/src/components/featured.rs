//! Featured project row

use leptos::prelude::*;

use super::action::ActionLinks;
use super::badge::TagList;
use super::image::ProjectImage;
use crate::animation::{RevealPhase, item_style};
use crate::config::RevealConfig;
use crate::layout::FeatureLayout;
use crate::models::{Project, Surface};

/// Two-column showcase row; `layout` decides which side the image sits on
#[component]
pub fn FeaturedProject(
    project: Project,
    layout: FeatureLayout,
    index: usize,
    phase: ReadSignal<RevealPhase>,
    reveal: RevealConfig,
    #[prop(into)] placeholder: String,
) -> impl IntoView {
    let src = project.image_src(&placeholder).to_string();
    let links = project.action_links();
    let image_side = if layout.image_on_left() { "left" } else { "right" };

    view! {
        <div
            class=layout.row_class()
            data-image-side=image_side
            style=move || item_style(phase.get(), index, &reveal)
        >
            <div class=layout.text_class()>
                <h3 class="text-2xl font-bold">{project.title.clone()}</h3>
                <p class="text-muted-foreground">{project.description.clone()}</p>
                <TagList tags=project.tags.clone() surface=Surface::Featured class="flex flex-wrap gap-2 pt-2" />
                <ActionLinks links=links surface=Surface::Featured class="flex gap-4 pt-4" />
            </div>
            <div class=layout.image_class()>
                <ProjectImage
                    src=src
                    alt=project.title.clone()
                    class="object-cover transition-transform duration-500 hover:scale-105"
                />
            </div>
        </div>
    }
}
