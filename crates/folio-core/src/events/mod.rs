//! Inbound events from the layout host and the render surface

use serde::{Serialize, Deserialize};

use crate::indicator::ButtonRect;
use crate::observer::IntersectionEntry;
use crate::registry::SectionId;

/// Which navigation layout the render surface is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum NavLayout {
    /// Horizontal bar of buttons
    #[default]
    Desktop,
    /// Collapsible dropdown list
    Mobile,
}

impl NavLayout {
    /// Pick the layout for a viewport width
    pub fn for_width(width: f32, breakpoint: f32) -> Self {
        if width < breakpoint {
            NavLayout::Mobile
        } else {
            NavLayout::Desktop
        }
    }
}

/// Everything the engine can be told
#[derive(Debug, Clone)]
pub enum NavEvent {
    /// Page scrolled to a new vertical offset
    Scroll { y: f32 },
    /// Viewport resized
    Resize { width: f32, height: f32 },
    /// Fonts loaded or content reflowed
    LayoutChanged,
    /// Host-reported section membership changes
    Intersection(Vec<IntersectionEntry>),
    /// User clicked a nav button
    NavigationClick(SectionId),
    /// User clicked the logo
    HomeClick,
    /// Mobile menu opened or closed
    MenuToggled,
    /// A nav button was laid out
    ButtonMounted { id: SectionId, rect: ButtonRect },
    /// A nav button is no longer rendered
    ButtonUnmounted(SectionId),
    /// The render surface switched between desktop and mobile layouts
    LayoutSwapped(NavLayout),
}
