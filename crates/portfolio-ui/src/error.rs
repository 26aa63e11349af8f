//! Error types for the projects section
//!
//! Browser calls that can fail return these instead of panicking. Nothing in
//! the section is allowed to leave content hidden because of an error, so
//! callers usually log the error and fall back to a fully visible render.

/// Errors that can occur while wiring up the section
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UiError {
    /// No `window` object (not running in a browser)
    #[error("window is not available")]
    WindowNotAvailable,

    /// The browser does not expose `IntersectionObserver`
    #[error("intersection observer unavailable: {0}")]
    ObserverUnavailable(String),

    /// Creating or attaching the observer failed
    #[error("intersection observer failed: {0}")]
    ObserverFailed(String),

    /// A configuration value is out of range
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type alias for section operations
pub type Result<T> = std::result::Result<T, UiError>;
