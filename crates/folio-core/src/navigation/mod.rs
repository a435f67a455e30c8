//! Navigation engine: wiring of observer, resolver and indicator tracker

use serde::{Serialize, Deserialize};

mod engine;
mod subscriber;

pub use engine::NavigationEngine;
pub use subscriber::NavigationSubscriber;

use crate::events::NavLayout;
use crate::indicator::IndicatorRect;
use crate::registry::SectionId;

/// Read-only state pushed to the render surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavSnapshot {
    /// Section whose nav label is styled as selected
    pub active: SectionId,
    /// Target rectangle for the animated pill
    pub indicator: IndicatorRect,
    /// Page scrolled past the header threshold
    pub scrolled: bool,
    /// Mobile dropdown open
    pub menu_open: bool,
    pub layout: NavLayout,
    /// Sections revealed so far, in document order
    pub revealed: Vec<SectionId>,
}
