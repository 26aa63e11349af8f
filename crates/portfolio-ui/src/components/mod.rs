//! Leptos UI components for the projects section

pub mod action;
pub mod badge;
pub mod card;
pub mod featured;
pub mod icons;
pub mod image;
pub mod section;

pub use action::{ActionButton, ActionLinks};
pub use badge::TagList;
pub use card::ProjectCard;
pub use featured::FeaturedProject;
pub use icons::{ExternalLinkIcon, GithubIcon, LinkIcon};
pub use image::ProjectImage;
pub use section::{ProjectsSection, SectionHeader};
