//! External link buttons

use leptos::prelude::*;

use super::icons::LinkIcon;
use crate::models::link::{LINK_REL, LINK_TARGET};
use crate::models::{ActionLink, Surface};

/// A single external link styled as a button
#[component]
pub fn ActionButton(link: ActionLink, surface: Surface) -> impl IntoView {
    let kind = link.kind;

    view! {
        <a
            class=kind.button_class(surface)
            href=link.href
            target=LINK_TARGET
            rel=LINK_REL
        >
            <LinkIcon kind=kind />
            {kind.label(surface)}
        </a>
    }
}

/// Row of action buttons; links that are absent were already dropped
#[component]
pub fn ActionLinks(
    links: Vec<ActionLink>,
    surface: Surface,
    #[prop(into)] class: String,
) -> impl IntoView {
    view! {
        <div class=class>
            {links
                .into_iter()
                .map(|link| view! { <ActionButton link=link surface=surface /> })
                .collect::<Vec<_>>()}
        </div>
    }
}
