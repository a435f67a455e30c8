//! Active-section resolver
//!
//! A Moore machine whose whole output is its single state variable, the
//! active section id. Transitions come from observer candidates, user
//! navigation clicks, and initialization to the first registry section.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::registry::{SectionId, SectionRegistry};

/// Owns the active section state
pub struct ActiveSectionResolver {
    registry: Arc<SectionRegistry>,
    active: SectionId,
    /// Set by a click; the next observer tick is discarded
    pinned: bool,
    /// Tick of the last observer adoption
    observed_tick: Option<u64>,
}

impl ActiveSectionResolver {
    pub fn new(registry: Arc<SectionRegistry>) -> Self {
        let active = registry.first().id.clone();
        Self {
            registry,
            active,
            pinned: false,
            observed_tick: None,
        }
    }

    pub fn active(&self) -> &SectionId {
        &self.active
    }

    /// Apply an observer candidate for `tick`; returns true if the state changed
    ///
    /// Candidates are adopted immediately. The first tick after a click is
    /// discarded whole, since its measurement predates the click, and at
    /// most one candidate is adopted per tick.
    pub fn observe(&mut self, candidate: Option<&SectionId>, tick: u64) -> bool {
        if std::mem::take(&mut self.pinned) {
            debug!("Dropping observer tick {} after navigation click", tick);
            return false;
        }

        let Some(candidate) = candidate else {
            return false;
        };
        if self.observed_tick == Some(tick) {
            return false;
        }
        if candidate == &self.active || !self.registry.contains(candidate.as_str()) {
            return false;
        }

        debug!("Active section {} -> {} (observer, tick {})", self.active, candidate, tick);
        self.active = candidate.clone();
        self.observed_tick = Some(tick);
        true
    }

    /// Apply a user navigation click; returns true if the state changed
    ///
    /// Takes effect synchronously. Until the next observer tick has been
    /// consumed, no observer sample can override it.
    pub fn click(&mut self, id: &str) -> bool {
        let Some(section) = self.registry.get(id) else {
            warn!("Ignoring navigation click on unknown section {}", id);
            return false;
        };

        self.pinned = true;

        if section.id == self.active {
            return false;
        }

        debug!("Active section {} -> {} (click)", self.active, section.id);
        self.active = section.id.clone();
        true
    }
}
