//! User interface components for the portfolio page
//!
//! The navigation bar is the render surface of the navigation engine:
//! it paints the nav buttons, reports their geometry, and animates the
//! indicator pill toward the rectangle the engine pushes.

pub mod nav_bar;
pub mod theme;

pub use nav_bar::{NavBar, NavBarConfig, NavBarResponse};
pub use theme::{Theme, apply_theme};
