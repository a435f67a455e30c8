//! One-shot section reveal
//!
//! A section is revealed the first time enough of it scrolls into view,
//! and stays revealed afterwards.

use ahash::AHashSet;
use tracing::debug;

use crate::layout::{SectionBounds, ViewportMetrics};
use crate::registry::SectionId;

#[derive(Debug)]
pub struct RevealTracker {
    threshold: f32,
    revealed: AHashSet<SectionId>,
}

impl RevealTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            revealed: AHashSet::new(),
        }
    }

    /// Reveal newly visible sections; returns true if any were revealed
    pub fn update(&mut self, metrics: &ViewportMetrics, measured: &[(SectionId, SectionBounds)]) -> bool {
        let mut changed = false;

        for (id, bounds) in measured {
            if self.revealed.contains(id) {
                continue;
            }
            let ratio = bounds.visible_ratio(metrics.scroll_y, metrics.bottom());
            if ratio > 0.0 && ratio >= self.threshold {
                debug!("Revealing section {} at {:.2} visibility", id, ratio);
                self.revealed.insert(id.clone());
                changed = true;
            }
        }

        changed
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    pub fn revealed(&self) -> &AHashSet<SectionId> {
        &self.revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<(SectionId, SectionBounds)> {
        vec![
            (SectionId::new("home"), SectionBounds::new(0.0, 800.0)),
            (SectionId::new("skills"), SectionBounds::new(800.0, 1000.0)),
        ]
    }

    #[test]
    fn test_reveals_past_threshold() {
        let mut reveal = RevealTracker::new(0.1);

        assert!(reveal.update(&ViewportMetrics::new(0.0, 800.0, 1800.0), &page()));
        assert!(reveal.is_revealed("home"));
        assert!(!reveal.is_revealed("skills"));

        // 50px of skills: 5% visible
        assert!(!reveal.update(&ViewportMetrics::new(50.0, 800.0, 1800.0), &page()));
        // 100px of skills: 10% visible
        assert!(reveal.update(&ViewportMetrics::new(100.0, 800.0, 1800.0), &page()));
        assert!(reveal.is_revealed("skills"));
    }

    #[test]
    fn test_reveal_is_sticky() {
        let mut reveal = RevealTracker::new(0.1);
        reveal.update(&ViewportMetrics::new(0.0, 800.0, 1800.0), &page());

        // Home scrolls fully out of view while skills is revealed
        assert!(reveal.update(&ViewportMetrics::new(1000.0, 800.0, 1800.0), &page()));
        assert!(reveal.is_revealed("home"));
        assert_eq!(reveal.revealed().len(), 2);

        assert!(!reveal.update(&ViewportMetrics::new(0.0, 800.0, 1800.0), &page()));
    }
}
