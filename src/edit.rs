//! Multiplicative edits applied to registered connections.

use crate::Nnc;

/// A parsed edit record.
///
/// Rescales the transmissibility of every registered connection matching the
/// unordered cell pair `{cell1, cell2}` by `mult`. Orientation is irrelevant:
/// an edit phrased `(3, 5)` hits a connection stored as `(5, 3)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EditNnc {
    /// Linearized index of the first cell.
    pub cell1: usize,
    /// Linearized index of the second cell.
    pub cell2: usize,
    /// Multiplier applied to the transmissibility of matching connections.
    pub mult: f64,
}

impl EditNnc {
    pub fn new(cell1: usize, cell2: usize, mult: f64) -> Self {
        Self { cell1, cell2, mult }
    }
}

impl Nnc {
    /// Rescales every connection matching the unordered pair `{cell1, cell2}`
    /// by `mult` and returns the number of records hit.
    ///
    /// Duplicate records for the pair are all rescaled independently; they
    /// are never merged. An edit for a pair with no registered connection
    /// changes nothing and returns 0 — it does not create a record. Applying
    /// the same edit again compounds multiplicatively.
    pub fn apply_edit(&mut self, cell1: usize, cell2: usize, mult: f64) -> usize {
        let pair = (cell1.min(cell2), cell1.max(cell2));
        let mut matched = 0;
        for nnc in self.data.iter_mut().filter(|nnc| nnc.pair() == pair) {
            log::trace!(
                "Scaling NNC {} -> {} by {mult}: {} -> {}",
                nnc.cell1,
                nnc.cell2,
                nnc.trans,
                nnc.trans * mult
            );
            nnc.trans *= mult;
            matched += 1;
        }
        matched
    }

    /// Applies a stream of parsed edit records in order.
    ///
    /// Edits whose pair has no registered connection are skipped with a
    /// warning. Returns the total number of records rescaled across the
    /// whole stream.
    pub fn apply_edits(&mut self, edits: impl IntoIterator<Item = EditNnc>) -> usize {
        let mut total = 0;
        for edit in edits {
            let matched = self.apply_edit(edit.cell1, edit.cell2, edit.mult);
            if matched == 0 {
                log::warn!(
                    "No NNC defined for cells {} and {}, edit ignored",
                    edit.cell1,
                    edit.cell2
                );
            }
            total += matched;
        }
        total
    }
}
