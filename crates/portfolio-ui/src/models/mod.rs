//! Data models for the projects section

pub mod catalog;
pub mod link;
pub mod project;

pub use link::{ActionLink, LinkKind, Surface};
pub use project::Project;
