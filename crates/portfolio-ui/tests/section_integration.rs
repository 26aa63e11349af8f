//! Integration tests for the projects section view models
//!
//! These run against the public API the section renders from, so the
//! rendering rules are checked without a DOM.

use portfolio_ui::config::{PLACEHOLDER_IMAGE, SectionConfig};
use portfolio_ui::layout::{FeatureLayout, Showcase};
use portfolio_ui::models::catalog::projects;
use portfolio_ui::models::{LinkKind, Project, Surface};

#[test]
fn test_sample_catalog_scenario() {
    let showcase = Showcase::from_projects(&projects());

    let featured: Vec<&str> = showcase.featured.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(featured, ["Redesign Nubank", "HDI - Disease Tracker API"]);

    let tool = showcase.other.first().ok_or("missing other project");
    assert_eq!(tool.map(|p| p.title.as_str()), Ok("HDI - Disease Tracker"));

    let tool_links = tool.map(Project::action_links).unwrap_or_default();
    assert!(!tool_links.iter().any(|link| link.kind == LinkKind::Demo));
}

#[test]
fn test_every_rendered_link_matches_a_defined_url() {
    for project in projects() {
        let links = project.action_links();
        let has_demo = links.iter().any(|l| l.kind == LinkKind::Demo);
        let has_repo = links.iter().any(|l| l.kind == LinkKind::Repository);
        assert_eq!(has_demo, project.demo_url.is_some(), "{}", project.title);
        assert_eq!(has_repo, project.repo_url.is_some(), "{}", project.title);
    }
}

#[test]
fn test_layout_for_many_featured_projects() {
    let many: Vec<Project> = (0..6)
        .map(|i| Project::new(format!("p{i}")).featured())
        .collect();
    let showcase = Showcase::from_projects(&many);

    let sides: Vec<bool> = showcase
        .featured_rows()
        .map(|(_, layout, _)| layout.image_on_left())
        .collect();
    assert_eq!(sides, [false, true, false, true, false, true]);
    assert_eq!(
        showcase.featured_rows().last().map(|(_, l, _)| l),
        Some(FeatureLayout::ImageLeft)
    );
}

#[test]
fn test_projects_from_json_override() -> Result<(), Box<dyn std::error::Error>> {
    let json = r#"[
        { "title": "Featured", "tags": ["Rust"], "demoUrl": "https://demo.example", "featured": true },
        { "title": "Plain" }
    ]"#;
    let custom: Vec<Project> = serde_json::from_str(json)?;
    let showcase = Showcase::from_projects(&custom);

    assert_eq!(showcase.featured.len(), 1);
    assert_eq!(showcase.other.len(), 1);

    let plain = showcase.other.first().ok_or("missing plain project")?;
    assert!(plain.action_links().is_empty());
    assert_eq!(plain.image_src(PLACEHOLDER_IMAGE), PLACEHOLDER_IMAGE);
    Ok(())
}

#[test]
fn test_section_config_defaults_match_anchor() {
    let config = SectionConfig::default();
    assert_eq!(config.anchor_id, "projects");
    assert_eq!(LinkKind::Demo.label(Surface::Featured), "Live Demo");
}
