//! Behavioral tests for the projects section
//!
//! This module provides BDD-style tests using given-when-then naming convention.
//! Tests focus on what ends up rendered rather than implementation details.


use crate::{App, ProjectsSection, config, error, layout, models};

#[test]
fn test_module_structure() {
    // Verify that all modules are accessible
    let _app = App;
    let _section = ProjectsSection;
    let showcase = layout::Showcase::from_projects(&models::catalog::projects());
    assert_eq!(showcase.len(), 3);
    assert!(config::RevealConfig::default().validate().is_ok());
}

#[test]
fn test_error_types() {
    let err = error::UiError::ObserverUnavailable("no api".to_string());
    assert!(err.to_string().contains("intersection observer unavailable"));
}
