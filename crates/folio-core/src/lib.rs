//! Viewport-synchronized navigation for a single-page site
//!
//! This crate decides which page section is active at any scroll
//! position and where the navigation indicator should sit. It is
//! host-agnostic: the page reports scroll, resize and layout through
//! [`DocumentLayout`] and the engine's inputs, and reads back pushed
//! [`NavSnapshot`]s.
//!
//! Data flows one way, from the [`ViewportObserver`] through the
//! [`ActiveSectionResolver`] to the [`IndicatorTracker`]. Navigation
//! clicks enter the resolver directly.

pub mod config;
pub mod error;
pub mod events;
pub mod indicator;
pub mod layout;
pub mod navigation;
pub mod observer;
pub mod registry;
pub mod resolver;
pub mod reveal;

// Re-export commonly used types
pub use config::{NavConfig, ObserverStrategy};
pub use error::NavError;
pub use events::{NavEvent, NavLayout};
pub use indicator::{ButtonRect, IndicatorRect, IndicatorTracker};
pub use layout::{DocumentLayout, LayoutSnapshot, SectionBounds, ViewportMetrics};
pub use navigation::{NavSnapshot, NavigationEngine, NavigationSubscriber};
pub use observer::{IntersectionEntry, ObserverSample, ViewportObserver};
pub use registry::{Section, SectionId, SectionRegistry};
pub use resolver::ActiveSectionResolver;
