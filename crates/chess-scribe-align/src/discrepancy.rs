//! Memory of per-square classification errors.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use chess_scribe_core::{PieceLabel, Square};

/// A remembered, previously unresolved per-square mismatch.
///
/// Created when a frame cannot be explained by any legal move. Later frames
/// showing the identical mismatch on the identical square are not counted as
/// fresh evidence, so a stuck misclassification (a hand occluding one square
/// for seconds of video) cannot keep re-triggering rejection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiscrepancyRecord {
    pub square: Square,
    /// Label of the canonical position at the time of the mismatch.
    pub expected: PieceLabel,
    /// Label the classifier reported instead.
    pub observed: PieceLabel,
}

/// Discrepancies accumulated over one reconstruction run.
///
/// Records never expire within a run.
#[derive(Clone, Debug, Default)]
pub struct DiscrepancyLog {
    records: HashSet<DiscrepancyRecord>,
}

impl DiscrepancyLog {
    pub fn contains(&self, record: &DiscrepancyRecord) -> bool {
        self.records.contains(record)
    }

    /// Remember a mismatch. Returns `false` if it was already known.
    pub fn insert(&mut self, record: DiscrepancyRecord) -> bool {
        self.records.insert(record)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiscrepancyRecord> {
        self.records.iter()
    }
}
