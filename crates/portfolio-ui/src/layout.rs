//! Showcase layout
//!
//! Splits the catalog into the featured showcase and the "other projects"
//! grid, and picks the alternating row layout for featured entries. All of
//! it is plain data so the rendering rules can be tested without a DOM.

use crate::models::Project;

/// Column arrangement for one featured row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureLayout {
    /// Text on the left, image on the right
    ImageRight,
    /// Image on the left, text on the right
    ImageLeft,
}

impl FeatureLayout {
    /// Layout for the featured entry at zero-based `index`
    #[must_use]
    pub const fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Self::ImageRight
        } else {
            Self::ImageLeft
        }
    }

    /// Grid container classes; the wider column always holds the text
    #[must_use]
    pub const fn row_class(self) -> &'static str {
        match self {
            Self::ImageRight => "grid grid-cols-1 md:grid-cols-[3fr_2fr] gap-10 items-center",
            Self::ImageLeft => {
                "grid grid-cols-1 md:grid-cols-[2fr_3fr] md:flex-row-reverse gap-10 items-center"
            }
        }
    }

    /// Classes for the text column
    #[must_use]
    pub const fn text_class(self) -> &'static str {
        match self {
            Self::ImageRight => "space-y-4",
            Self::ImageLeft => "space-y-4 md:order-2",
        }
    }

    /// Classes for the image column
    #[must_use]
    pub const fn image_class(self) -> &'static str {
        match self {
            Self::ImageRight => {
                "relative h-[300px] md:h-[400px] rounded-xl overflow-hidden shadow-xl"
            }
            Self::ImageLeft => {
                "relative h-[300px] md:h-[400px] rounded-xl overflow-hidden shadow-xl md:order-1"
            }
        }
    }

    /// Whether the image is rendered in the left column
    #[must_use]
    pub const fn image_on_left(self) -> bool {
        matches!(self, Self::ImageLeft)
    }
}

/// Catalog split by the `featured` flag, original order preserved
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Showcase {
    pub featured: Vec<Project>,
    pub other: Vec<Project>,
}

impl Showcase {
    /// Partition `projects` into the two render branches
    #[must_use]
    pub fn from_projects(projects: &[Project]) -> Self {
        let (featured, other): (Vec<Project>, Vec<Project>) =
            projects.iter().cloned().partition(|p| p.featured);
        Self { featured, other }
    }

    /// Featured entries with their position and row layout
    pub fn featured_rows(&self) -> impl Iterator<Item = (usize, FeatureLayout, &Project)> {
        self.featured
            .iter()
            .enumerate()
            .map(|(index, project)| (index, FeatureLayout::for_index(index), project))
    }

    /// Total entries across both branches
    #[must_use]
    pub fn len(&self) -> usize {
        self.featured.len().saturating_add(self.other.len())
    }

    /// True when neither branch has entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.featured.is_empty() && self.other.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Project> {
        vec![
            Project::new("a").featured(),
            Project::new("b"),
            Project::new("c").featured(),
            Project::new("d"),
            Project::new("e").featured(),
        ]
    }

    #[test]
    fn test_layout_alternates_by_parity() {
        assert_eq!(FeatureLayout::for_index(0), FeatureLayout::ImageRight);
        assert_eq!(FeatureLayout::for_index(1), FeatureLayout::ImageLeft);
        assert_eq!(FeatureLayout::for_index(2), FeatureLayout::ImageRight);
        assert_eq!(FeatureLayout::for_index(7), FeatureLayout::ImageLeft);
    }

    #[test]
    fn test_layout_classes() {
        assert!(FeatureLayout::ImageRight.row_class().contains("md:grid-cols-[3fr_2fr]"));
        assert!(FeatureLayout::ImageLeft.row_class().contains("md:grid-cols-[2fr_3fr]"));
        assert!(FeatureLayout::ImageLeft.text_class().contains("md:order-2"));
        assert!(FeatureLayout::ImageLeft.image_class().contains("md:order-1"));
        assert!(!FeatureLayout::ImageRight.text_class().contains("order"));
        assert!(!FeatureLayout::ImageRight.image_class().contains("order"));
    }

    #[test]
    fn test_partition_preserves_order() {
        let showcase = Showcase::from_projects(&sample());
        let featured: Vec<&str> = showcase.featured.iter().map(|p| p.title.as_str()).collect();
        let other: Vec<&str> = showcase.other.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(featured, vec!["a", "c", "e"]);
        assert_eq!(other, vec!["b", "d"]);
        assert_eq!(showcase.len(), 5);
    }

    #[test]
    fn test_featured_rows_index_within_featured_group() {
        let showcase = Showcase::from_projects(&sample());
        let rows: Vec<(usize, FeatureLayout, &str)> = showcase
            .featured_rows()
            .map(|(index, layout, p)| (index, layout, p.title.as_str()))
            .collect();
        assert_eq!(
            rows,
            vec![
                (0, FeatureLayout::ImageRight, "a"),
                (1, FeatureLayout::ImageLeft, "c"),
                (2, FeatureLayout::ImageRight, "e"),
            ]
        );
    }

    #[test]
    fn test_empty_showcase() {
        let showcase = Showcase::from_projects(&[]);
        assert!(showcase.is_empty());
        assert_eq!(showcase.featured_rows().count(), 0);
    }
}
