//! Layout measurement seam between the host page and the observer

use ahash::AHashMap;

use crate::registry::SectionId;

/// Scroll and size of the page viewport at one instant
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportMetrics {
    /// Vertical scroll offset in pixels
    pub scroll_y: f32,
    pub viewport_height: f32,
    /// Total scrollable height of the document
    pub document_height: f32,
}

impl ViewportMetrics {
    pub fn new(scroll_y: f32, viewport_height: f32, document_height: f32) -> Self {
        Self { scroll_y, viewport_height, document_height }
    }

    /// Bottom edge of the viewport in document coordinates
    pub fn bottom(&self) -> f32 {
        self.scroll_y + self.viewport_height
    }

    /// Vertical midline of the viewport in document coordinates
    pub fn midline(&self) -> f32 {
        self.scroll_y + self.viewport_height / 2.0
    }
}

/// Vertical extent of a section in document coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f32,
    pub height: f32,
}

impl SectionBounds {
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Half-open containment: `[top, top + height)`
    pub fn contains(&self, y: f32) -> bool {
        self.height > 0.0 && y >= self.top && y < self.bottom()
    }

    /// Fraction of this section lying inside `[view_top, view_bottom)`
    pub fn visible_ratio(&self, view_top: f32, view_bottom: f32) -> f32 {
        if self.height <= 0.0 {
            return 0.0;
        }
        let overlap = self.bottom().min(view_bottom) - self.top.max(view_top);
        (overlap / self.height).clamp(0.0, 1.0)
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.top.is_finite() && self.height.is_finite()
    }
}

/// Live layout measurement provided by the host page
///
/// Bounds must come from a fresh layout measurement in document
/// coordinates, not from offsets cached by ancestor containers.
pub trait DocumentLayout {
    /// Current scroll position and sizes
    fn viewport(&self) -> ViewportMetrics;

    /// Bounds of a section's element, `None` if it is not mounted
    fn section_bounds(&self, id: &SectionId) -> Option<SectionBounds>;
}

/// Measure a section, discarding non-finite geometry
pub(crate) fn measure(layout: &dyn DocumentLayout, id: &SectionId) -> Option<SectionBounds> {
    layout.section_bounds(id).filter(SectionBounds::is_finite)
}

/// A plain-data layout captured once per frame
#[derive(Debug, Clone, Default)]
pub struct LayoutSnapshot {
    pub metrics: ViewportMetrics,
    bounds: AHashMap<SectionId, SectionBounds>,
}

impl LayoutSnapshot {
    pub fn new(metrics: ViewportMetrics) -> Self {
        Self {
            metrics,
            bounds: AHashMap::new(),
        }
    }

    /// Record a section's measured bounds
    pub fn with_section(mut self, id: impl Into<SectionId>, top: f32, height: f32) -> Self {
        self.set_section(id, SectionBounds::new(top, height));
        self
    }

    pub fn set_section(&mut self, id: impl Into<SectionId>, bounds: SectionBounds) {
        self.bounds.insert(id.into(), bounds);
    }

    pub fn remove_section(&mut self, id: &str) {
        self.bounds.remove(id);
    }
}

impl DocumentLayout for LayoutSnapshot {
    fn viewport(&self) -> ViewportMetrics {
        self.metrics
    }

    fn section_bounds(&self, id: &SectionId) -> Option<SectionBounds> {
        self.bounds.get(id).copied()
    }
}
