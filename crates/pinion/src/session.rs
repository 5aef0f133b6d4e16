//! Placement state for the interactive view.
//!
//! [`PlacementLog`] is a plain, append-only record of which components the
//! user has placed, in order. It is owned by the caller and handed to the
//! composition planner on every recomputation; the scene is always a full
//! re-derivation from this log, never an incremental patch, so the log is
//! the single source of truth for the canvas.
//!
//! The log stores names only. Name resolution against the catalog happens
//! at composition time, which is where an unregistered name is reported.

use serde::Serialize;

/// The 0-based horizontal slot index assigned to a placed component.
///
/// The i-th component placed always receives slot i; slots are never
/// reused or compacted.
pub type PlacementSlot = usize;

/// An append-only ordered sequence of placed component names.
///
/// # Examples
///
/// ```
/// # use pinion::session::PlacementLog;
/// let mut log = PlacementLog::new();
/// let slot = log.place("Raspberry Pi");
/// assert_eq!(slot, 0);
/// assert_eq!(log.place("Arduino"), 1);
/// assert_eq!(log.placements(), ["Raspberry Pi", "Arduino"]);
///
/// log.reset();
/// assert!(log.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlacementLog {
    placed: Vec<String>,
}

impl PlacementLog {
    /// Creates an empty placement log
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a component name and returns the slot it was assigned.
    ///
    /// This is the only mutating user action the engine reacts to.
    pub fn place(&mut self, name: impl Into<String>) -> PlacementSlot {
        self.placed.push(name.into());
        self.placed.len() - 1
    }

    /// Returns the placed component names in placement order
    pub fn placements(&self) -> &[String] {
        &self.placed
    }

    /// Returns the number of placements
    pub fn len(&self) -> usize {
        self.placed.len()
    }

    /// Returns true if nothing has been placed
    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }

    /// Clears the log. This is the session-reset operation; slots restart
    /// from zero afterwards.
    pub fn reset(&mut self) {
        self.placed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_assigns_sequential_slots() {
        let mut log = PlacementLog::new();
        assert_eq!(log.place("A"), 0);
        assert_eq!(log.place("B"), 1);
        assert_eq!(log.place("A"), 2);
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn test_placements_preserve_order_including_duplicates() {
        let mut log = PlacementLog::new();
        log.place("B");
        log.place("A");
        log.place("B");
        assert_eq!(log.placements(), ["B", "A", "B"]);
    }

    #[test]
    fn test_reset_clears_and_restarts_slots() {
        let mut log = PlacementLog::new();
        log.place("A");
        log.place("B");
        log.reset();
        assert!(log.is_empty());
        assert_eq!(log.place("C"), 0);
    }
}
