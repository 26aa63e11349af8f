//! The projects section

use leptos::html::Div;
use leptos::prelude::*;

use super::card::ProjectCard;
use super::featured::FeaturedProject;
use crate::animation::{container_style, use_reveal};
use crate::config::SectionConfig;
use crate::layout::Showcase;
use crate::models::{Project, catalog};

/// Heading, accent bar and intro paragraph
#[component]
pub fn SectionHeader(#[prop(into)] heading: String, #[prop(into)] intro: String) -> impl IntoView {
    view! {
        <div class="text-center max-w-3xl mx-auto mb-16">
            <h2 class="text-3xl font-bold tracking-tight mb-4">{heading}</h2>
            <div class="w-20 h-1.5 bg-primary rounded-full mx-auto mb-6"></div>
            <p class="text-muted-foreground text-lg">{intro}</p>
        </div>
    }
}

/// Portfolio projects section, anchored at `config.anchor_id`
///
/// Featured entries render as alternating rows, the rest as a card grid.
/// Both groups reveal together when the featured list scrolls into view.
#[component]
pub fn ProjectsSection(
    #[prop(default = SectionConfig::default())] config: SectionConfig,
    #[prop(default = catalog::projects())] projects: Vec<Project>,
) -> impl IntoView {
    let showcase = Showcase::from_projects(&projects);
    let container_ref = NodeRef::<Div>::new();
    let phase = use_reveal(container_ref, &config.reveal);

    let featured_reveal = config.reveal.clone();
    let grid_reveal = config.reveal.clone();
    let placeholder = config.placeholder_image.clone();

    let featured_rows = showcase
        .featured_rows()
        .map(|(index, layout, project)| {
            view! {
                <FeaturedProject
                    project=project.clone()
                    layout=layout
                    index=index
                    phase=phase
                    reveal=config.reveal.clone()
                    placeholder=placeholder.clone()
                />
            }
        })
        .collect::<Vec<_>>();

    let other_heading = (!showcase.other.is_empty()).then(|| {
        let heading = config.other_heading.clone();
        view! { <h3 class="text-2xl font-bold text-center mb-10">{heading}</h3> }
    });

    let cards = showcase
        .other
        .iter()
        .enumerate()
        .map(|(index, project)| {
            view! {
                <ProjectCard
                    project=project.clone()
                    index=index
                    phase=phase
                    reveal=config.reveal.clone()
                    placeholder=placeholder.clone()
                />
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id=config.anchor_id.clone() class="py-20 md:py-32 bg-muted/30">
            <div class="container px-4 md:px-6">
                <SectionHeader heading=config.heading.clone() intro=config.intro.clone() />

                <div
                    node_ref=container_ref
                    class="space-y-20"
                    data-reveal="featured"
                    style=move || container_style(phase.get(), &featured_reveal)
                >
                    {featured_rows}
                </div>

                <div class="mt-20">
                    {other_heading}
                    <div
                        class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6"
                        data-reveal="other"
                        style=move || container_style(phase.get(), &grid_reveal)
                    >
                        {cards}
                    </div>
                </div>
            </div>
        </section>
    }
}
