//! Indicator geometry tracker
//!
//! Maps the active section to the rectangle of its navigation button.
//! The button table is owned here and only changes when the render
//! surface reports a mount, unmount or layout swap.

use ahash::AHashMap;
use serde::{Serialize, Deserialize};
use tracing::trace;

use crate::registry::SectionId;

/// Horizontal geometry of one nav button, relative to the nav container
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ButtonRect {
    pub left: f32,
    pub width: f32,
}

impl ButtonRect {
    pub fn new(left: f32, width: f32) -> Self {
        Self { left, width }
    }

    fn is_usable(&self) -> bool {
        self.left.is_finite() && self.width.is_finite() && self.width > 0.0
    }

    fn same_bits(&self, other: &ButtonRect) -> bool {
        self.left.to_bits() == other.left.to_bits() && self.width.to_bits() == other.width.to_bits()
    }
}

/// Target rectangle for the animated pill
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRect {
    pub left: f32,
    pub width: f32,
    pub visible: bool,
}

impl IndicatorRect {
    /// No button to highlight; `left` and `width` carry no meaning
    pub const HIDDEN: IndicatorRect = IndicatorRect {
        left: 0.0,
        width: 0.0,
        visible: false,
    };

    /// Bitwise equality, so that `NaN` never compares as a change
    pub fn same_bits(&self, other: &IndicatorRect) -> bool {
        self.visible == other.visible
            && self.left.to_bits() == other.left.to_bits()
            && self.width.to_bits() == other.width.to_bits()
    }
}

impl Default for IndicatorRect {
    fn default() -> Self {
        Self::HIDDEN
    }
}

impl From<ButtonRect> for IndicatorRect {
    fn from(rect: ButtonRect) -> Self {
        Self {
            left: rect.left,
            width: rect.width,
            visible: true,
        }
    }
}

/// Owns the button lookup table and the current indicator rectangle
#[derive(Debug, Default)]
pub struct IndicatorTracker {
    buttons: AHashMap<SectionId, ButtonRect>,
    current: IndicatorRect,
}

impl IndicatorTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a button's geometry; returns true if the table changed
    pub fn report_button(&mut self, id: SectionId, rect: ButtonRect) -> bool {
        if !rect.is_usable() {
            return self.buttons.remove(&id).is_some();
        }

        match self.buttons.get(&id) {
            Some(existing) if existing.same_bits(&rect) => false,
            _ => {
                self.buttons.insert(id, rect);
                true
            }
        }
    }

    /// Drop a button that is no longer rendered
    pub fn forget_button(&mut self, id: &str) -> bool {
        self.buttons.remove(id).is_some()
    }

    /// Drop every button, e.g. when desktop and mobile layouts swap
    pub fn clear_buttons(&mut self) {
        self.buttons.clear();
    }

    #[cfg(test)]
    fn has_button(&self, id: &str) -> bool {
        self.buttons.contains_key(id)
    }

    /// Rectangle for `active` under the current button layout
    pub fn compute(&self, active: &SectionId) -> IndicatorRect {
        self.buttons
            .get(active)
            .copied()
            .map(IndicatorRect::from)
            .unwrap_or(IndicatorRect::HIDDEN)
    }

    /// Recompute and store; returns true only if the rectangle changed bitwise
    pub fn recompute(&mut self, active: &SectionId) -> bool {
        let next = self.compute(active);
        if next.same_bits(&self.current) {
            return false;
        }

        trace!("Indicator for {} -> {:?}", active, next);
        self.current = next;
        true
    }

    pub fn current(&self) -> IndicatorRect {
        self.current
    }
}
