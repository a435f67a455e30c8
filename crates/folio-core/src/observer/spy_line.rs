//! Spy-line strategy
//!
//! The focal point is the scroll offset plus the header height. The
//! section whose measured interval contains it is the candidate. The top
//! of the page always selects the first section, and an end-of-document
//! override covers a last section too short to ever reach the spy-line.

use tracing::debug;

use crate::config::NavConfig;
use crate::layout::{SectionBounds, ViewportMetrics};
use crate::registry::{SectionId, SectionRegistry};

pub(super) struct SpyLine {
    header_offset: f32,
    bottom_epsilon: f32,
    bottom_min_scroll: f32,
}

impl SpyLine {
    pub(super) fn new(config: &NavConfig) -> Self {
        Self {
            header_offset: config.header_offset,
            bottom_epsilon: config.bottom_epsilon,
            bottom_min_scroll: config.bottom_min_scroll,
        }
    }

    fn at_document_end(&self, metrics: &ViewportMetrics) -> bool {
        metrics.scroll_y > self.bottom_min_scroll
            && metrics.bottom() >= metrics.document_height - self.bottom_epsilon
    }

    pub(super) fn candidate(
        &self,
        registry: &SectionRegistry,
        metrics: &ViewportMetrics,
        measured: &[(SectionId, SectionBounds)],
    ) -> Option<SectionId> {
        // A first section shorter than the header never reaches the spy-line
        if metrics.scroll_y <= 0.0 {
            return Some(registry.first().id.clone());
        }

        if self.at_document_end(metrics) {
            debug!("End of document reached at scroll {}", metrics.scroll_y);
            return Some(registry.last().id.clone());
        }

        let focal = metrics.scroll_y + self.header_offset;

        if let Some((id, _)) = measured.iter().find(|(_, bounds)| bounds.contains(focal)) {
            return Some(id.clone());
        }

        let (first_top, last_bottom) = measured.iter().fold(
            (f32::INFINITY, f32::NEG_INFINITY),
            |(top, bottom), (_, bounds)| (top.min(bounds.top), bottom.max(bounds.bottom())),
        );

        if measured.is_empty() {
            None
        } else if focal < first_top {
            Some(registry.first().id.clone())
        } else if focal >= last_bottom {
            measured.last().map(|(id, _)| id.clone())
        } else {
            // Gap between sections: keep whatever is active
            None
        }
    }
}
