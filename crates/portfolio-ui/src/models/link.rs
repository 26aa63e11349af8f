//! Action links rendered as buttons on each project

/// `target` for every external link
pub const LINK_TARGET: &str = "_blank";

/// `rel` for every external link; keeps the opened page from reaching back
pub const LINK_REL: &str = "noopener noreferrer";

/// Which destination a link points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    /// Deployed demo of the project
    Demo,
    /// Source repository
    Repository,
}

/// Where a project is being rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Surface {
    /// Large alternating row in the featured showcase
    #[default]
    Featured,
    /// Card in the "other projects" grid
    Card,
}

impl LinkKind {
    /// Button text for the given surface
    #[must_use]
    pub const fn label(self, surface: Surface) -> &'static str {
        match (self, surface) {
            (Self::Demo, Surface::Featured) => "Live Demo",
            (Self::Demo, Surface::Card) => "Demo",
            (Self::Repository, Surface::Featured) => "View Code",
            (Self::Repository, Surface::Card) => "Code",
        }
    }

    /// Button styling for the given surface
    #[must_use]
    pub const fn button_class(self, surface: Surface) -> &'static str {
        match (self, surface) {
            (Self::Demo, Surface::Featured) => "btn btn-primary btn-sm",
            (Self::Repository, Surface::Featured) => "btn btn-outline btn-sm",
            (Self::Demo, Surface::Card) => "btn btn-secondary btn-sm rounded-full",
            (Self::Repository, Surface::Card) => "btn btn-outline btn-sm rounded-full",
        }
    }
}

impl Surface {
    /// Badge styling for tags on this surface
    #[must_use]
    pub const fn badge_class(self) -> &'static str {
        match self {
            Self::Featured => "badge badge-secondary",
            Self::Card => "badge badge-outline text-xs",
        }
    }
}

/// A link that will be rendered as a button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionLink {
    pub kind: LinkKind,
    pub href: String,
}

impl ActionLink {
    /// Build a link from an optional URL; blank URLs produce nothing
    #[must_use]
    pub fn from_url(kind: LinkKind, url: Option<&str>) -> Option<Self> {
        url.map(str::trim)
            .filter(|href| !href.is_empty())
            .map(|href| Self {
                kind,
                href: href.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_per_surface() {
        assert_eq!(LinkKind::Demo.label(Surface::Featured), "Live Demo");
        assert_eq!(LinkKind::Demo.label(Surface::Card), "Demo");
        assert_eq!(LinkKind::Repository.label(Surface::Featured), "View Code");
        assert_eq!(LinkKind::Repository.label(Surface::Card), "Code");
    }

    #[test]
    fn test_card_buttons_are_rounded() {
        assert!(LinkKind::Demo.button_class(Surface::Card).contains("rounded-full"));
        assert!(!LinkKind::Demo.button_class(Surface::Featured).contains("rounded-full"));
    }

    #[test]
    fn test_from_url_present() {
        let link = ActionLink::from_url(LinkKind::Demo, Some("https://example.com"));
        assert_eq!(
            link,
            Some(ActionLink {
                kind: LinkKind::Demo,
                href: "https://example.com".to_string(),
            })
        );
    }

    #[test]
    fn test_from_url_missing_or_blank() {
        assert_eq!(ActionLink::from_url(LinkKind::Demo, None), None);
        assert_eq!(ActionLink::from_url(LinkKind::Repository, Some("   ")), None);
    }

    #[test]
    fn test_safe_link_attributes() {
        assert_eq!(LINK_TARGET, "_blank");
        assert!(LINK_REL.contains("noopener"));
        assert!(LINK_REL.contains("noreferrer"));
    }
}
