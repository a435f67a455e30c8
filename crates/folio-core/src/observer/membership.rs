//! Membership-threshold strategy
//!
//! Only the vertical midline of the viewport counts as "inside" (root
//! margins of -50% top and bottom). A section becomes the candidate when
//! it transitions into that band; simultaneous transitions resolve to the
//! last one reported.

use ahash::AHashSet;
use tracing::debug;

use super::IntersectionEntry;
use crate::layout::{SectionBounds, ViewportMetrics};
use crate::registry::{SectionId, SectionRegistry};

#[derive(Default)]
pub(super) struct MembershipBand {
    inside: AHashSet<SectionId>,
    queued: Vec<IntersectionEntry>,
}

impl MembershipBand {
    pub(super) fn queue(&mut self, entries: impl IntoIterator<Item = IntersectionEntry>) {
        self.queued.extend(entries);
    }

    pub(super) fn candidate(
        &mut self,
        registry: &SectionRegistry,
        metrics: &ViewportMetrics,
        measured: &[(SectionId, SectionBounds)],
    ) -> Option<SectionId> {
        if self.queued.is_empty() {
            self.derive_from_layout(metrics, measured)
        } else {
            self.apply_queued(registry)
        }
    }

    /// Host-reported entries, applied in delivery order
    fn apply_queued(&mut self, registry: &SectionRegistry) -> Option<SectionId> {
        let mut candidate = None;

        for entry in self.queued.drain(..) {
            if !registry.contains(entry.section_id.as_str()) {
                debug!("Intersection entry for unregistered section {}", entry.section_id);
                continue;
            }
            if entry.intersecting {
                self.inside.insert(entry.section_id.clone());
                candidate = Some(entry.section_id);
            } else {
                self.inside.remove(&entry.section_id);
            }
        }

        candidate
    }

    /// Band membership computed from measured bounds, diffed against the previous frame
    fn derive_from_layout(
        &mut self,
        metrics: &ViewportMetrics,
        measured: &[(SectionId, SectionBounds)],
    ) -> Option<SectionId> {
        let midline = metrics.midline();
        let mut inside = AHashSet::with_capacity(self.inside.len());
        let mut candidate = None;

        for (id, bounds) in measured {
            if bounds.contains(midline) {
                if !self.inside.contains(id) {
                    candidate = Some(id.clone());
                }
                inside.insert(id.clone());
            }
        }

        self.inside = inside;
        candidate
    }
}
