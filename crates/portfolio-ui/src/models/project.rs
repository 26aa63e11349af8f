//! Project model for the projects section

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::link::{ActionLink, LinkKind};

/// A single portfolio entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub repo_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl Project {
    /// Creates a new, non-featured project with only a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            image: None,
            tags: Vec::new(),
            demo_url: None,
            repo_url: None,
            featured: false,
        }
    }

    /// Builder pattern: set description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder pattern: set image path
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Builder pattern: set tags, keeping their order
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Builder pattern: set demo link
    #[must_use]
    pub fn with_demo_url(mut self, url: impl Into<String>) -> Self {
        self.demo_url = Some(url.into());
        self
    }

    /// Builder pattern: set repository link
    #[must_use]
    pub fn with_repo_url(mut self, url: impl Into<String>) -> Self {
        self.repo_url = Some(url.into());
        self
    }

    /// Builder pattern: mark as featured
    #[must_use]
    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    /// Image path, or `placeholder` when none is set
    #[must_use]
    pub fn image_src<'a>(&'a self, placeholder: &'a str) -> &'a str {
        self.image
            .as_deref()
            .map(str::trim)
            .filter(|src| !src.is_empty())
            .unwrap_or(placeholder)
    }

    /// Description cut to at most `max_chars` characters on a word boundary
    ///
    /// A trailing ellipsis marks a cut; short descriptions are borrowed as-is.
    #[must_use]
    pub fn summary(&self, max_chars: usize) -> Cow<'_, str> {
        let text = self.description.trim();
        if text.chars().count() <= max_chars {
            return Cow::Borrowed(text);
        }

        let cut = text
            .char_indices()
            .nth(max_chars)
            .map_or(text.len(), |(byte, _)| byte);
        let head = text.get(..cut).unwrap_or(text);
        let ends_on_word = text
            .get(cut..)
            .is_some_and(|rest| rest.starts_with(char::is_whitespace));
        let head = if ends_on_word {
            head
        } else {
            head.rfind(char::is_whitespace)
                .and_then(|space| head.get(..space))
                .unwrap_or(head)
        };
        let head = head.trim_end_matches(|c: char| c.is_whitespace() || c == ',' || c == '.');

        Cow::Owned(format!("{head}…"))
    }

    /// Links to render, demo first; absent URLs are skipped
    #[must_use]
    pub fn action_links(&self) -> Vec<ActionLink> {
        [
            ActionLink::from_url(LinkKind::Demo, self.demo_url.as_deref()),
            ActionLink::from_url(LinkKind::Repository, self.repo_url.as_deref()),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}
