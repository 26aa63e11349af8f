//! Section configuration
//!
//! Everything here is compile-time data with `Default` impls. Both structs
//! deserialize with `#[serde(default)]` so a host page can pass a partial
//! JSON override without restating every field.

use serde::{Deserialize, Serialize};

use crate::error::{Result, UiError};

/// Image shown when a project has no image path
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Anchor id the parent page links to
pub const SECTION_ANCHOR: &str = "projects";

/// Timing and geometry for the scroll-triggered reveal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Vertical offset of a hidden child, in pixels
    pub offset_px: u32,
    /// Length of a single child transition
    pub duration_ms: u32,
    /// Extra delay added per successive child
    pub stagger_ms: u32,
    /// `rootMargin` handed to the observer; negative shrinks the viewport
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            offset_px: 30,
            duration_ms: 500,
            stagger_ms: 200,
            root_margin: "-100px".to_string(),
        }
    }
}

impl RevealConfig {
    /// Check that the values can drive a transition
    ///
    /// # Errors
    ///
    /// Returns `UiError::InvalidConfig` if the duration is zero or the root
    /// margin is blank.
    pub fn validate(&self) -> Result<()> {
        if self.duration_ms == 0 {
            return Err(UiError::InvalidConfig("duration_ms must be positive".to_string()));
        }
        if self.root_margin.trim().is_empty() {
            return Err(UiError::InvalidConfig("root_margin must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Copy and wiring for the projects section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionConfig {
    pub anchor_id: String,
    pub heading: String,
    pub intro: String,
    pub other_heading: String,
    pub placeholder_image: String,
    pub reveal: RevealConfig,
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self {
            anchor_id: SECTION_ANCHOR.to_string(),
            heading: "Projetos".to_string(),
            intro: "Uma seleção do meu trabalho recente abrangendo análise de dados e \
                    desenvolvimento frontend. Cada projeto demonstra minha abordagem para \
                    resolver problemas complexos."
                .to_string(),
            other_heading: "Other Projects".to_string(),
            placeholder_image: PLACEHOLDER_IMAGE.to_string(),
            reveal: RevealConfig::default(),
        }
    }
}

impl SectionConfig {
    /// In-page link target for the section, e.g. `#projects`
    #[must_use]
    pub fn anchor_href(&self) -> String {
        format!("#{}", self.anchor_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_defaults() {
        let config = RevealConfig::default();
        assert_eq!(config.offset_px, 30);
        assert_eq!(config.duration_ms, 500);
        assert_eq!(config.stagger_ms, 200);
        assert_eq!(config.root_margin, "-100px");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_reveal_rejects_zero_duration() {
        let config = RevealConfig {
            duration_ms: 0,
            ..RevealConfig::default()
        };
        assert!(matches!(config.validate(), Err(UiError::InvalidConfig(_))));
    }

    #[test]
    fn test_reveal_rejects_blank_margin() {
        let config = RevealConfig {
            root_margin: "  ".to_string(),
            ..RevealConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_section_defaults() {
        let config = SectionConfig::default();
        assert_eq!(config.anchor_id, "projects");
        assert_eq!(config.heading, "Projetos");
        assert_eq!(config.other_heading, "Other Projects");
        assert_eq!(config.placeholder_image, PLACEHOLDER_IMAGE);
        assert!(config.intro.contains("problemas complexos"));
    }

    #[test]
    fn test_anchor_href_follows_id() -> std::result::Result<(), Box<dyn std::error::Error>> {
        assert_eq!(SectionConfig::default().anchor_href(), "#projects");

        let config: SectionConfig = serde_json::from_str(r#"{ "anchor_id": "work" }"#)?;
        assert_eq!(config.anchor_href(), "#work");
        Ok(())
    }

    #[test]
    fn test_partial_override_keeps_defaults() -> std::result::Result<(), Box<dyn std::error::Error>>
    {
        let json = r#"{ "heading": "Projects", "reveal": { "stagger_ms": 100 } }"#;
        let config: SectionConfig = serde_json::from_str(json)?;

        assert_eq!(config.heading, "Projects");
        assert_eq!(config.anchor_id, "projects");
        assert_eq!(config.reveal.stagger_ms, 100);
        assert_eq!(config.reveal.duration_ms, 500);
        Ok(())
    }
}
