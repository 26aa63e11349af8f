//! Scroll-triggered reveal animation
//!
//! `reveal` holds the pure state and style computation; `observer` hooks it
//! up to the browser.

pub mod observer;
pub mod reveal;

pub use observer::{RevealHandle, use_reveal};
pub use reveal::{RevealLatch, RevealPhase, container_style, item_style, stagger_delay_ms};
