//! Staggered reveal state and transition styles
//!
//! A container starts hidden and flips to visible once, the first time it is
//! seen in the viewport. Children transition in one after another, each
//! delayed by `stagger_ms` more than the previous one.

use crate::config::RevealConfig;

/// Visual state of a revealable element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPhase {
    /// Transparent and pushed down by `offset_px`
    #[default]
    Hidden,
    /// Opaque at its natural position
    Visible,
}

impl RevealPhase {
    #[must_use]
    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }

    /// CSS opacity for this phase
    #[must_use]
    pub const fn opacity(self) -> u8 {
        match self {
            Self::Hidden => 0,
            Self::Visible => 1,
        }
    }
}

/// One-shot latch from `Hidden` to `Visible`
///
/// Once visible it stays visible; scrolling back out never hides it again.
#[derive(Debug, Clone, Copy, Default)]
pub struct RevealLatch {
    phase: RevealPhase,
}

impl RevealLatch {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: RevealPhase::Hidden,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// Feed an intersection result; returns `true` only on the transition
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if intersecting && !self.phase.is_visible() {
            self.phase = RevealPhase::Visible;
            true
        } else {
            false
        }
    }
}

/// Delay before child `index` starts its transition
#[must_use]
pub fn stagger_delay_ms(index: usize, config: &RevealConfig) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(config.stagger_ms)
}

/// Inline style for the animated container
#[must_use]
pub fn container_style(phase: RevealPhase, config: &RevealConfig) -> String {
    format!(
        "opacity: {}; transition: opacity {}ms ease-out;",
        phase.opacity(),
        config.duration_ms
    )
}

/// Inline style for the child at `index` inside an animated container
///
/// The stagger delay only applies on the way in.
#[must_use]
pub fn item_style(phase: RevealPhase, index: usize, config: &RevealConfig) -> String {
    let (offset, delay) = match phase {
        RevealPhase::Hidden => (config.offset_px, 0),
        RevealPhase::Visible => (0, stagger_delay_ms(index, config)),
    };
    format!(
        "opacity: {opacity}; transform: translateY({offset}px); \
         transition: opacity {duration}ms ease-out {delay}ms, \
         transform {duration}ms ease-out {delay}ms;",
        opacity = phase.opacity(),
        duration = config.duration_ms,
    )
}
