//! Linear undo/redo history of full canvas snapshots.
//!
//! Each committed gesture records a [`Snapshot`] of every item on the surface.
//! Undo and redo move a cursor through the log and replay the snapshot under
//! it by clearing the surface and recreating each descriptor in draw order.

use crate::draw::{ShapeDescriptor, Surface};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Depth used when no configuration overrides it.
pub const DEFAULT_MAX_DEPTH: usize = 20;

/// Immutable list of shape descriptors in draw order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    shapes: Vec<ShapeDescriptor>,
}

impl Snapshot {
    pub fn new(shapes: Vec<ShapeDescriptor>) -> Self {
        Self { shapes }
    }

    /// Captures every item currently on `surface`.
    pub fn capture(surface: &dyn Surface) -> Self {
        let shapes = surface
            .find_all()
            .into_iter()
            .filter_map(|id| surface.item(id).cloned())
            .collect();
        Self { shapes }
    }

    pub fn shapes(&self) -> &[ShapeDescriptor] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Clears `surface` and redraws every descriptor in order.
    pub fn replay(&self, surface: &mut dyn Surface) {
        surface.clear();
        for shape in &self.shapes {
            surface.create_item(shape.clone());
        }
    }
}

/// Bounded undo/redo log.
///
/// Invariant: `current < entries.len()` whenever the log is non-empty.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<Snapshot>,
    current: usize,
    max_depth: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl History {
    /// Creates an empty log. A depth of zero is raised to one.
    pub fn new(max_depth: usize) -> Self {
        if max_depth == 0 {
            warn!("History depth 0 is not usable, keeping one snapshot");
        }
        Self {
            entries: VecDeque::new(),
            current: 0,
            max_depth: max_depth.max(1),
        }
    }

    /// Creates a log whose first entry is the current state of `surface`.
    pub fn with_initial(max_depth: usize, surface: &dyn Surface) -> Self {
        let mut history = Self::new(max_depth);
        history.snapshot(surface);
        history
    }

    /// Records the current contents of `surface`.
    pub fn snapshot(&mut self, surface: &dyn Surface) {
        self.record(Snapshot::capture(surface));
    }

    /// Appends a snapshot, dropping the redo tail and evicting past the depth cap.
    pub fn record(&mut self, snapshot: Snapshot) {
        if !self.entries.is_empty() && self.current + 1 < self.entries.len() {
            let dropped = self.entries.len() - self.current - 1;
            debug!("Discarding {dropped} redo snapshot(s)");
            self.entries.truncate(self.current + 1);
        }

        self.entries.push_back(snapshot);
        if self.entries.len() > self.max_depth {
            self.entries.pop_front();
            debug!("History full, evicted oldest snapshot");
        }
        self.current = self.entries.len() - 1;
    }

    /// Steps back one snapshot and replays it.
    ///
    /// Returns `false` without touching `surface` when already at the oldest entry.
    pub fn undo(&mut self, surface: &mut dyn Surface) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.current -= 1;
        self.restore(surface);
        true
    }

    /// Steps forward one snapshot and replays it.
    ///
    /// Returns `false` without touching `surface` when already at the newest entry.
    pub fn redo(&mut self, surface: &mut dyn Surface) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.current += 1;
        self.restore(surface);
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.entries.is_empty() && self.current > 0
    }

    pub fn can_redo(&self) -> bool {
        self.current + 1 < self.entries.len()
    }

    /// Number of retained snapshots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of the cursor, `None` while the log is empty.
    pub fn index(&self) -> Option<usize> {
        (!self.entries.is_empty()).then_some(self.current)
    }

    /// Snapshot under the cursor.
    pub fn current(&self) -> Option<&Snapshot> {
        self.entries.get(self.current)
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Drops every entry and starts over from the current state of `surface`.
    pub fn reset(&mut self, surface: &dyn Surface) {
        self.entries.clear();
        self.current = 0;
        self.snapshot(surface);
    }

    /// Replays the snapshot under the cursor, dropping edits made since.
    ///
    /// Returns `false` when nothing has been recorded yet.
    pub fn revert(&self, surface: &mut dyn Surface) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        self.restore(surface);
        true
    }

    fn restore(&self, surface: &mut dyn Surface) {
        if let Some(snapshot) = self.entries.get(self.current) {
            debug!(
                "Restoring snapshot {}/{} ({} items)",
                self.current + 1,
                self.entries.len(),
                snapshot.len()
            );
            snapshot.replay(surface);
        }
    }
}
