//! Viewport observer
//!
//! Turns scroll, resize and intersection signals into at most one
//! candidate section per animation frame. Scroll and layout events only
//! mark the observer dirty; the actual layout measurement happens in
//! [`ViewportObserver::sample`], which the host calls once per frame.

mod membership;
mod spy_line;

use std::sync::Arc;
use tracing::{debug, trace};

use crate::config::{NavConfig, ObserverStrategy};
use crate::layout::{self, DocumentLayout, SectionBounds, ViewportMetrics};
use crate::registry::{SectionId, SectionRegistry};

use membership::MembershipBand;
use spy_line::SpyLine;

/// One visibility-membership report from the host
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry {
    pub section_id: SectionId,
    pub intersecting: bool,
    pub intersection_ratio: f32,
}

impl IntersectionEntry {
    pub fn entering(id: impl Into<SectionId>, intersection_ratio: f32) -> Self {
        Self {
            section_id: id.into(),
            intersecting: true,
            intersection_ratio,
        }
    }

    pub fn leaving(id: impl Into<SectionId>) -> Self {
        Self {
            section_id: id.into(),
            intersecting: false,
            intersection_ratio: 0.0,
        }
    }
}

/// Result of one frame's measurement
#[derive(Debug, Clone)]
pub struct ObserverSample {
    /// Section under the focal point this frame, if any
    pub candidate: Option<SectionId>,
    pub metrics: ViewportMetrics,
    /// Bounds of every mounted section, in document order
    pub measured: Vec<(SectionId, SectionBounds)>,
}

enum Strategy {
    SpyLine(SpyLine),
    Membership(MembershipBand),
}

/// Frame-gated viewport observer running a single strategy
pub struct ViewportObserver {
    registry: Arc<SectionRegistry>,
    strategy: Strategy,
    dirty: bool,
    last_frame: Option<u64>,
}

impl ViewportObserver {
    pub fn new(registry: Arc<SectionRegistry>, config: &NavConfig) -> Self {
        let strategy = match config.strategy {
            ObserverStrategy::SpyLine => Strategy::SpyLine(SpyLine::new(config)),
            ObserverStrategy::Membership => Strategy::Membership(MembershipBand::default()),
        };

        Self {
            registry,
            strategy,
            dirty: true,
            last_frame: None,
        }
    }

    pub fn strategy(&self) -> ObserverStrategy {
        match self.strategy {
            Strategy::SpyLine(_) => ObserverStrategy::SpyLine,
            Strategy::Membership(_) => ObserverStrategy::Membership,
        }
    }

    /// Scroll, resize or layout shift: measure again on the next frame
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Queue host-reported membership changes for the next frame
    pub fn on_intersection(&mut self, entries: impl IntoIterator<Item = IntersectionEntry>) {
        match &mut self.strategy {
            Strategy::Membership(band) => {
                band.queue(entries);
                self.dirty = true;
            }
            Strategy::SpyLine(_) => {
                debug!("Ignoring intersection entries: observer runs the spy-line strategy");
            }
        }
    }

    /// Measure the layout for `frame`
    ///
    /// Returns `None` without touching the layout when this frame was
    /// already sampled or nothing changed since the last sample.
    pub fn sample(&mut self, frame: u64, layout: &dyn DocumentLayout) -> Option<ObserverSample> {
        if self.last_frame == Some(frame) {
            trace!("Frame {} already sampled", frame);
            return None;
        }
        if !self.dirty && self.last_frame.is_some() {
            return None;
        }

        self.last_frame = Some(frame);
        self.dirty = false;

        let metrics = layout.viewport();
        let measured: Vec<(SectionId, SectionBounds)> = self
            .registry
            .sections()
            .filter_map(|section| {
                layout::measure(layout, &section.id).map(|bounds| (section.id.clone(), bounds))
            })
            .collect();

        let candidate = match &mut self.strategy {
            Strategy::SpyLine(spy) => spy.candidate(&self.registry, &metrics, &measured),
            Strategy::Membership(band) => band.candidate(&self.registry, &metrics, &measured),
        };

        trace!(
            "Frame {} sampled at scroll {}: {} sections measured, candidate {:?}",
            frame,
            metrics.scroll_y,
            measured.len(),
            candidate
        );

        Some(ObserverSample { candidate, metrics, measured })
    }
}
