//! Leptos 0.7 CSR projects section for a personal portfolio site
//!
//! This crate renders the "Projects" section of a portfolio page: a fixed
//! catalog of project entries split into a featured showcase and a grid of
//! smaller cards, revealed with a staggered fade/slide once the section
//! scrolls into view.
//!
//! ## Architecture
//! - Pure CSR (Client-Side Rendering) with Leptos 0.7
//! - WASM compilation target (wasm32-unknown-unknown)
//! - `IntersectionObserver`-driven one-shot reveal animation
//! - View-model functions kept pure so they test without a DOM
//!
//! ## Module Structure
//! - `app`: Host page that mounts the section
//! - `config`: Section copy, anchor id and animation timings
//! - `models`: Project records, action links and the built-in catalog
//! - `layout`: Featured/other partition and alternating row layout
//! - `animation`: Reveal latch, transition styles and viewport observer
//! - `components`: Leptos components that render the section
//! - `error`: Error types and handling

#![forbid(unsafe_code)]

pub mod animation;
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod layout;
pub mod models;

// Re-export main App component for convenience - Trunk will auto-mount it
pub use app::App;
pub use components::ProjectsSection;

#[cfg(test)]
mod tests;
