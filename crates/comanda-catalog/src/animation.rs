// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Entrance and scroll-reveal animation timing.
//
// The UI never mutates element styles directly. It renders CSS classes and
// `animation-delay` values computed here and lets the stylesheet animate.

use std::collections::BTreeSet;
use std::time::Duration;

/// Gap between consecutive menu cards in the staggered entrance.
pub const CARD_STAGGER: Duration = Duration::from_millis(50);

/// Gap between consecutive floating shapes on the landing hero.
pub const SHAPE_STAGGER: Duration = Duration::from_millis(500);

/// Class carried by elements that fade in once scrolled into view.
pub const SCROLL_CLASS: &str = "animate-on-scroll";

/// Class added once an element has been revealed.
pub const REVEALED_CLASS: &str = "animated";

/// CSS `animation-delay` value for the `index`-th element with gap `step`.
pub fn stagger_delay(index: usize, step: Duration) -> String {
    let secs = step.as_secs_f64() * index as f64;
    format!("{}s", trim_float(secs))
}

/// Delay for the `index`-th card in the menu grid.
pub fn card_delay(index: usize) -> String {
    stagger_delay(index, CARD_STAGGER)
}

/// Delay for the `index`-th floating shape.
pub fn shape_delay(index: usize) -> String {
    stagger_delay(index, SHAPE_STAGGER)
}

// Round away float noise (0.15000000000000002) and drop trailing zeros.
fn trim_float(value: f64) -> String {
    let rounded = format!("{value:.3}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() {
        "0".to_owned()
    } else {
        trimmed.to_owned()
    }
}

/// Vertical extent of the scroll container, in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub top: f64,
    pub bottom: f64,
}

impl Viewport {
    /// Viewport of a window `height` pixels tall.
    pub fn window(height: f64) -> Self {
        Self {
            top: 0.0,
            bottom: height,
        }
    }

    /// Whether an element spanning `top..bottom` overlaps the viewport.
    ///
    /// Touching edges do not count.
    pub fn intersects(&self, top: f64, bottom: f64) -> bool {
        top < self.bottom && bottom > self.top
    }
}

/// Tracks which scroll-animated sections have been revealed.
///
/// Sections are identified by a caller-chosen index. Reveal is one-way:
/// scrolling a section back out of view does not hide it again.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollReveal {
    revealed: BTreeSet<usize>,
}

impl ScrollReveal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a section's current bounds. Returns `true` if it was newly revealed.
    pub fn observe(&mut self, section: usize, top: f64, bottom: f64, viewport: Viewport) -> bool {
        viewport.intersects(top, bottom) && self.revealed.insert(section)
    }

    pub fn is_revealed(&self, section: usize) -> bool {
        self.revealed.contains(&section)
    }

    /// Class list for a section.
    pub fn class_for(&self, section: usize) -> String {
        if self.is_revealed(section) {
            format!("{SCROLL_CLASS} {REVEALED_CLASS}")
        } else {
            SCROLL_CLASS.to_owned()
        }
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_delays_step_by_fifty_ms() {
        assert_eq!(card_delay(0), "0s");
        assert_eq!(card_delay(1), "0.05s");
        assert_eq!(card_delay(3), "0.15s");
        assert_eq!(card_delay(20), "1s");
    }

    #[test]
    fn shape_delays_step_by_half_second() {
        assert_eq!(shape_delay(0), "0s");
        assert_eq!(shape_delay(1), "0.5s");
        assert_eq!(shape_delay(3), "1.5s");
    }

    #[test]
    fn intersection_requires_overlap() {
        let vp = Viewport::window(800.0);
        assert!(vp.intersects(100.0, 300.0));
        assert!(vp.intersects(-50.0, 10.0));
        assert!(vp.intersects(790.0, 1200.0));
        assert!(!vp.intersects(800.0, 1000.0));
        assert!(!vp.intersects(-300.0, 0.0));
        assert!(!vp.intersects(1200.0, 1500.0));
    }

    #[test]
    fn reveal_is_sticky() {
        let vp = Viewport::window(600.0);
        let mut reveal = ScrollReveal::new();

        assert!(!reveal.observe(2, 900.0, 1100.0, vp));
        assert_eq!(reveal.class_for(2), "animate-on-scroll");

        assert!(reveal.observe(2, 400.0, 600.0, vp));
        assert!(!reveal.observe(2, 100.0, 300.0, vp));
        assert!(!reveal.observe(2, -900.0, -700.0, vp));
        assert!(reveal.is_revealed(2));
        assert_eq!(reveal.class_for(2), "animate-on-scroll animated");
        assert_eq!(reveal.revealed_count(), 1);
    }

    #[test]
    fn offset_container_viewport() {
        let vp = Viewport {
            top: 64.0,
            bottom: 664.0,
        };
        assert!(!vp.intersects(0.0, 64.0));
        assert!(vp.intersects(0.0, 65.0));
    }
}
