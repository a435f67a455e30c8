//! Navigation subscriber trait

use super::NavSnapshot;

/// Trait for components that need to respond to navigation changes
pub trait NavigationSubscriber: Send + Sync {
    /// Called after any input that changed the snapshot
    fn on_navigation_change(&self, snapshot: &NavSnapshot);
}
